//! Parameterized SOQL queries and convenience helpers over a Salesforce-style SOAP client.
//!
//! ```rust
//! use forcekit::{Template, args};
//! let template = Template::new("SELECT Id FROM Contact WHERE LastName = :name");
//! let query = template.build(Some(&args! { "name" => "O'Hara" })).unwrap();
//! assert_eq!(query, r"SELECT Id FROM Contact WHERE LastName = 'O\'Hara'");
//! ```
pub use forcekit_core::*;
