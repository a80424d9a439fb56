//! Lenient field decoders for payloads coming from browser forms, where
//! numbers often arrive as strings, empty inputs as "" and untouched
//! fields as `null`.

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

/// `Option<T>` from a JSON number, a numeric string, `""` or `null`.
pub fn opt_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    match Option::<NumberOrText<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("not a number: {s}"))),
    }
}

/// `Option<NaiveDate>` from "YYYY-MM-DD", `""` or `null`.
pub fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid date: {s}"))),
    }
}

/// Free text that may also arrive as a number (e.g. a vehicle plate typed as digits).
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        None => None,
        Some(TextOrNumber::Text(s)) => Some(s),
        Some(TextOrNumber::Number(n)) => Some(n.to_string()),
    })
}

/// Required text that may arrive as `null` (read as `""`) or as a number.
pub fn text_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_text(deserializer)?.unwrap_or_default())
}

/// Text items of a JSON array. Numbers are stringified, other items dropped.
fn text_items(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect()
}

/// A list of names; anything that is not an array (`null`, `""`, an object)
/// reads as an empty list.
pub fn list_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => text_items(items),
        _ => Vec::new(),
    })
}

/// Two-level map of name lists (`{"Acme": {"2025-09": ["Stand"]}}`).
///
/// Inner values that are not objects and leaves that are not arrays are
/// skipped, so one bad branch does not reject the whole document.
pub fn nested_lists<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, BTreeMap<String, Vec<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(outer) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };

    let mut out = BTreeMap::new();
    for (key, inner) in outer {
        let Value::Object(inner) = inner else {
            continue;
        };
        let lists: BTreeMap<String, Vec<String>> = inner
            .into_iter()
            .filter_map(|(k, v)| match v {
                Value::Array(items) => Some((k, text_items(items))),
                _ => None,
            })
            .collect();
        out.insert(key, lists);
    }
    Ok(out)
}
