/// Splits off the longest prefix of `input` whose chars satisfy `predicate`,
/// advancing `input` past it.
pub fn consume_while<'s>(input: &mut &'s str, mut predicate: impl FnMut(&char) -> bool) -> &'s str {
    let len = input
        .char_indices()
        .find(|(_, c)| !predicate(c))
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    let result = &input[..len];
    *input = &input[len..];
    result
}

/// Word characters accepted in a placeholder name: `[A-Za-z0-9_]`.
pub fn is_word_char(c: &char) -> bool {
    c.is_ascii_alphanumeric() || *c == '_'
}

#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {{
        let query: &str = &$query;
        let end = query
            .char_indices()
            .nth(497)
            .map(|(i, _)| i)
            .unwrap_or(query.len());
        format!(
            "{}{}",
            query[..end].trim_end(),
            if end < query.len() { "..." } else { "" },
        )
    }};
}
