use crate::Template;

/// Anything that can be executed as a query: raw query text or a prepared [`Template`].
///
/// Raw text is parsed on the spot and carries no global arguments.
pub trait AsQuery {
    type Output: AsRef<Template> + Send;
    fn as_query(self) -> Self::Output;
}

impl AsQuery for Template {
    type Output = Template;
    fn as_query(self) -> Self::Output {
        self
    }
}

impl<'t> AsQuery for &'t Template {
    type Output = &'t Template;
    fn as_query(self) -> Self::Output {
        self
    }
}

impl AsQuery for String {
    type Output = Template;
    fn as_query(self) -> Self::Output {
        Template::new(self)
    }
}

impl AsQuery for &str {
    type Output = Template;
    fn as_query(self) -> Self::Output {
        Template::new(self)
    }
}
