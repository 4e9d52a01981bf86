//! Struct tags.

use gomatch_ast::{LitKind, LitValue};

/// The unquoted text of a struct field tag, such as
/// `json:"name,omitempty" db:"name"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructTag(String);

impl StructTag {
    /// Wraps tag text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the raw tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the value associated with `key`.
    ///
    /// Tags are space-separated `key:"value"` pairs with Go-quoted values.
    /// Parsing stops at the first malformed pair. A value whose escapes
    /// decode to bytes that are not UTF-8 is treated as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let mut rest = self.0.as_str();
        loop {
            rest = rest.trim_start_matches(' ');
            if rest.is_empty() {
                return None;
            }
            let name_len = rest
                .find(|c: char| c <= ' ' || c == ':' || c == '"' || c == '\x7f')
                .unwrap_or(rest.len());
            let (name, after_name) = rest.split_at_checked(name_len)?;
            if name.is_empty() {
                return None;
            }
            let quoted = after_name.strip_prefix(":\"")?;
            let (body, tail) = quoted.split_at_checked(closing_quote(quoted)?)?;
            if name == key {
                return LitValue::parse(LitKind::String, &format!("\"{body}\""))
                    .and_then(|value| value.as_str().map(str::to_owned));
            }
            rest = tail.strip_prefix('"')?;
        }
    }

    /// Returns `true` when `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl std::fmt::Display for StructTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn closing_quote(text: &str) -> Option<usize> {
    let mut escaped = false;
    for (index, c) in text.char_indices() {
        match c {
            '"' if !escaped => return Some(index),
            '\\' if !escaped => escaped = true,
            _ => escaped = false,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::StructTag;

    #[rstest]
    #[case(r#"json:"name""#, "json", Some("name"))]
    #[case(r#"json:"name,omitempty" db:"col""#, "db", Some("col"))]
    #[case(r#"json:"a\"b""#, "json", Some("a\"b"))]
    #[case(r#"json:"\xc3\xbf""#, "json", Some("ÿ"))]
    #[case(r#"json:"\xff""#, "json", None)]
    #[case(r#"json:"name""#, "xml", None)]
    #[case(r#"json:name"#, "json", None)]
    #[case("", "json", None)]
    fn looks_up_keys(#[case] text: &str, #[case] key: &str, #[case] expected: Option<&str>) {
        let tag = StructTag::new(text);
        assert_eq!(tag.get(key).as_deref(), expected);
    }

    #[test]
    fn malformed_pair_stops_lookup() {
        let tag = StructTag::new(r#"bad db:"col""#);
        assert!(!tag.contains("db"));
    }
}
