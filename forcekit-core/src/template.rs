use crate::{
    Args, DefaultSoqlWriter, MissingParameter, Result, SafeString, SoqlWriter, consume_while,
    is_word_char, truncate_long,
};
use std::fmt::{self, Display, Formatter};

/// Key of a placeholder: the ordinal of an anonymous `?` or the name of `:name` / `::name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKey {
    Index(usize),
    Name(String),
}

impl Display for ParamKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParamKey::Index(index) => write!(f, "{}", index),
            ParamKey::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for ParamKey {
    fn from(value: usize) -> Self {
        ParamKey::Index(value)
    }
}

impl From<&str> for ParamKey {
    fn from(value: &str) -> Self {
        ParamKey::Name(value.into())
    }
}

impl From<String> for ParamKey {
    fn from(value: String) -> Self {
        ParamKey::Name(value)
    }
}

/// A parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Text copied verbatim.
    Literal(String),
    /// Resolved against the arguments at build time. `quote` is false only for `::name`.
    Placeholder { key: ParamKey, quote: bool },
}

/// Recognizes a placeholder at the start of `input`: `::name`, `:name` or `?`, in this priority.
///
/// Returns the length of the token, the name (none for `?`) and the quoting flag.
fn placeholder_at(input: &str) -> Option<(usize, Option<&str>, bool)> {
    if input.starts_with('?') {
        return Some((1, None, true));
    }
    for (prefix, quote) in [("::", false), (":", true)] {
        if let Some(mut rest) = input.strip_prefix(prefix) {
            let name = consume_while(&mut rest, is_word_char);
            if !name.is_empty() {
                return Some((prefix.len() + name.len(), Some(name), quote));
            }
        }
    }
    None
}

/// Split a template into literal and placeholder fragments.
///
/// The result always alternates literal and placeholder, starting and ending
/// with a literal (possibly empty). Anonymous placeholders get the ordinals
/// 0, 1, 2, ... in order of appearance.
///
/// There is no way to escape a `?` or a `:name` that should stay literal text.
pub fn parse(template: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut ordinal = 0;
    let mut literal = 0;
    let mut position = 0;
    while let Some(c) = template[position..].chars().next() {
        let Some((len, name, quote)) = placeholder_at(&template[position..]) else {
            position += c.len_utf8();
            continue;
        };
        fragments.push(Fragment::Literal(template[literal..position].into()));
        let key = match name {
            Some(name) => ParamKey::Name(name.into()),
            None => {
                ordinal += 1;
                ParamKey::Index(ordinal - 1)
            }
        };
        fragments.push(Fragment::Placeholder { key, quote });
        position += len;
        literal = position;
    }
    fragments.push(Fragment::Literal(template[literal..].into()));
    fragments
}

/// A parameterized query, parsed once and built many times.
///
/// Placeholders:
/// * `?`: anonymous, bound by position, the value is quoted if it is a string.
/// * `:name`: named, quoted if it is a string.
/// * `::name`: named, never quoted (for field names, sort orders, ...). The value is still escaped.
///
/// The global arguments given at construction are defaults for every build,
/// arguments passed to [`Template::build`] take precedence over them.
///
/// ```rust
/// use forcekit_core::{Args, Template};
/// let template = Template::with_args(
///     "SELECT Id FROM ::object WHERE Name = :name",
///     Args::new().bind_name("object", "Account"),
/// );
/// let query = template
///     .build(Some(&Args::new().bind_name("name", "O'Reilly")))
///     .unwrap();
/// assert_eq!(query, r"SELECT Id FROM Account WHERE Name = 'O\'Reilly'");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    raw: String,
    fragments: Box<[Fragment]>,
    globals: Args,
}

impl Template {
    pub fn new(query: impl Into<String>) -> Self {
        Self::with_args(query, Args::new())
    }

    pub fn with_args(query: impl Into<String>, globals: impl Into<Args>) -> Self {
        let raw = query.into();
        let fragments = parse(&raw).into_boxed_slice();
        log::debug!(
            "Parsed query template with {} placeholders: {}",
            fragments.len() / 2,
            truncate_long!(raw)
        );
        Self {
            raw,
            fragments,
            globals: globals.into(),
        }
    }

    /// The unprocessed query with its placeholders.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Render the query into `out` with a specific dialect.
    ///
    /// Nothing is written when a placeholder cannot be resolved.
    pub fn write(
        &self,
        writer: &dyn SoqlWriter,
        out: &mut String,
        args: Option<&Args>,
    ) -> Result<()> {
        let args = self.globals.merged(args);
        let mut query = String::with_capacity(self.raw.len() + 32);
        for fragment in &self.fragments {
            match fragment {
                Fragment::Literal(text) => query.push_str(text),
                Fragment::Placeholder { key, quote } => {
                    let Some(value) = args.get(key) else {
                        return Err(MissingParameter { key: key.clone() }.into());
                    };
                    writer.write_value(&mut query, value, false, *quote);
                }
            }
        }
        out.push_str(&query);
        Ok(())
    }

    /// Bind the arguments and produce the complete query.
    pub fn build(&self, args: Option<&Args>) -> Result<String> {
        let mut out = String::new();
        self.write(DefaultSoqlWriter::new().as_dyn(), &mut out, args)?;
        log::debug!("Built query: {}", truncate_long!(out));
        Ok(out)
    }

    /// Build the query and wrap it as a [`SafeString`], to embed it in another template.
    pub fn build_safe(&self, args: Option<&Args>) -> Result<SafeString> {
        self.build(args).map(SafeString::new)
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&truncate_long!(self.raw))
    }
}

impl AsRef<Template> for Template {
    fn as_ref(&self) -> &Template {
        self
    }
}

impl From<&str> for Template {
    fn from(value: &str) -> Self {
        Template::new(value)
    }
}

impl From<String> for Template {
    fn from(value: String) -> Self {
        Template::new(value)
    }
}
