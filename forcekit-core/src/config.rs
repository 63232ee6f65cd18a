use crate::{Error, Result};
use anyhow::Context;
use std::{collections::BTreeMap, env};
use url::Url;
use urlencoding::decode;

/// Settings needed to open a session with the remote SOAP API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Path or URL of the WSDL document.
    pub wsdl: String,
    /// Login endpoint overriding the one declared in the WSDL.
    pub endpoint: Option<String>,
    pub username: String,
    pub password: String,
    /// Security token appended to the password at login.
    pub token: String,
    /// Log the SOAP traffic.
    pub log: bool,
    /// Transport options laid over [`ClientConfig::default_soap_options`].
    pub soap_options: BTreeMap<String, String>,
}

impl ClientConfig {
    pub const SCHEME: &'static str = "salesforce";
    pub const ENV_WSDL: &'static str = "SALESFORCE_WSDL";
    pub const ENV_TOKEN: &'static str = "SALESFORCE_TOKEN";

    pub fn new(
        wsdl: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            wsdl: wsdl.into(),
            endpoint: None,
            username: username.into(),
            password: password.into(),
            token: token.into(),
            log: false,
            soap_options: Default::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    pub fn with_soap_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.soap_options.insert(key.into(), value.into());
        self
    }

    pub fn default_soap_options() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("trace".into(), "1".into()),
            ("features".into(), "single_element_arrays".into()),
        ])
    }

    /// Default transport options with the configured ones taking precedence.
    pub fn soap_options(&self) -> BTreeMap<String, String> {
        let mut result = Self::default_soap_options();
        result.extend(
            self.soap_options
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        result
    }

    /// The password sent at login: the password followed by the security token.
    pub fn password_with_token(&self) -> String {
        format!("{}{}", self.password, self.token)
    }

    /// Parse `salesforce://<username>:<password>@<host>[/path]?wsdl=...&token=...[&log=true][&<option>=<value>...]`.
    ///
    /// `wsdl` and `token` fall back to the `SALESFORCE_WSDL` and `SALESFORCE_TOKEN`
    /// environment variables. Every other query parameter becomes a transport option.
    pub fn from_url(url: &str) -> Result<Self> {
        let context = || format!("While reading the client configuration from `{}`", url);
        let result = (|| -> Result<Self> {
            let prefix = format!("{}://", Self::SCHEME);
            if !url.starts_with(&prefix) {
                return Err(Error::msg(format!(
                    "Client configuration url must start with `{}`",
                    prefix
                )));
            }
            let url = Url::parse(url)?;
            let mut params: BTreeMap<String, String> = url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            let mut take_param = |key: &str, env_var: Option<&str>| {
                params
                    .remove(key)
                    .or_else(|| env_var.and_then(|v| env::var(v).ok()))
            };
            let username = decode(url.username())?.into_owned();
            if username.is_empty() {
                return Err(Error::msg("The username is missing"));
            }
            let password = match url.password() {
                Some(password) => decode(password)?.into_owned(),
                None => return Err(Error::msg("The password is missing")),
            };
            let wsdl = take_param("wsdl", Some(Self::ENV_WSDL))
                .ok_or_else(|| Error::msg("The wsdl parameter is missing"))?;
            let token = take_param("token", Some(Self::ENV_TOKEN))
                .ok_or_else(|| Error::msg("The token parameter is missing"))?;
            let log = match take_param("log", None).as_deref() {
                None | Some("false") | Some("0") => false,
                Some("true") | Some("1") => true,
                Some(other) => {
                    return Err(Error::msg(format!(
                        "Unexpected value `{}` for the log parameter, expected true or false",
                        other
                    )));
                }
            };
            let endpoint = url.host_str().filter(|v| !v.is_empty()).map(|host| {
                let mut endpoint = format!("https://{}", host);
                if let Some(port) = url.port() {
                    endpoint.push_str(&format!(":{}", port));
                }
                if url.path() != "/" {
                    endpoint.push_str(url.path());
                }
                endpoint
            });
            Ok(Self {
                wsdl,
                endpoint,
                username,
                password,
                token,
                log,
                soap_options: params,
            })
        })()
        .with_context(context);
        if let Err(e) = &result {
            log::error!("{:#}", e);
        }
        result
    }
}
