use crate::combinators::{block, comma_newline, join, ToDoc};
use crate::doc::{text, Doc};
use once_cell::sync::Lazy;

#[derive(Debug, Clone, PartialEq)]
pub enum Json {
    Null,
    Bool(bool),
    /// Kept as written, so that it displays exactly as given.
    Number(String),
    String(String),
    List(Vec<Json>),
    Dict(Vec<(String, Json)>),
}

pub fn json_null() -> Json {
    Json::Null
}

pub fn json_bool(b: bool) -> Json {
    Json::Bool(b)
}

pub fn json_number<N: ToString>(n: N) -> Json {
    Json::Number(n.to_string())
}

pub fn json_string(s: &str) -> Json {
    Json::String(s.to_owned())
}

pub fn json_list(elements: Vec<Json>) -> Json {
    Json::List(elements)
}

pub fn json_dict(entries: Vec<(&str, Json)>) -> Json {
    Json::Dict(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect(),
    )
}

static JSON_NULL: Lazy<Doc> = Lazy::new(|| text("null"));
static JSON_TRUE: Lazy<Doc> = Lazy::new(|| text("true"));
static JSON_FALSE: Lazy<Doc> = Lazy::new(|| text("false"));
static JSON_EMPTY_LIST: Lazy<Doc> = Lazy::new(|| text("[]"));
static JSON_EMPTY_DICT: Lazy<Doc> = Lazy::new(|| text("{}"));
static JSON_COLON: Lazy<Doc> = Lazy::new(|| text(": "));

impl ToDoc for Json {
    fn to_doc(&self) -> Doc {
        match self {
            Json::Null => JSON_NULL.clone(),
            Json::Bool(true) => JSON_TRUE.clone(),
            Json::Bool(false) => JSON_FALSE.clone(),
            Json::Number(n) => text(n.as_str()),
            Json::String(s) => quoted(s),
            Json::List(elements) if elements.is_empty() => JSON_EMPTY_LIST.clone(),
            Json::List(elements) => block(
                "[",
                join(elements.iter().map(Json::to_doc), comma_newline()),
                "]",
            ),
            Json::Dict(entries) if entries.is_empty() => JSON_EMPTY_DICT.clone(),
            Json::Dict(entries) => {
                let entries = entries
                    .iter()
                    .map(|(key, value)| quoted(key) + JSON_COLON.clone() + value.to_doc());
                block("{", join(entries, comma_newline()), "}")
            }
        }
    }
}

fn quoted(s: &str) -> Doc {
    let mut escaped = String::with_capacity(s.len() + 2);
    escaped.push('"');
    for ch in s.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            ch if ch.is_control() => escaped.push_str(&format!("\\u{:04x}", ch as u32)),
            ch => escaped.push(ch),
        }
    }
    escaped.push('"');
    text(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaping() {
        let s = json_string("a \"quote\"\n\\ \u{1}");
        assert_eq!(s.to_pretty_string(), r#""a \"quote\"\n\\ \u0001""#);
    }
}
