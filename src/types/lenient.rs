//! Deserializers for browser form payloads, where the same field may arrive
//! as a JSON string, a JSON number, or a url-encoded text value.

use serde::Deserializer;
use serde::de::{self, SeqAccess, Visitor};
use std::fmt;

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a scalar value")
    }

    // left for the field rules to reject
    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(ScalarVisitor)
    }
}

/// `Option<String>` from a string, number, boolean or null.
pub fn scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ScalarVisitor)
}

struct ListVisitor;

impl<'de> Visitor<'de> for ListVisitor {
    type Value = Vec<String>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of strings")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<String>()? {
            out.push(item);
        }
        Ok(out)
    }

    // a single url-encoded value arrives as a bare string
    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(vec![v.to_string()])
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(ListVisitor)
    }
}

/// `Vec<String>` from an array, a single string, or null.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ListVisitor)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "super::scalar")]
        age: Option<String>,
        #[serde(default, deserialize_with = "super::string_list")]
        tags: Vec<String>,
    }

    #[test]
    fn numbers_and_strings_both_become_text() {
        let p: Sample = serde_json::from_str(r#"{"age": 42, "tags": ["a", "b"]}"#).unwrap();
        assert_eq!(p.age.as_deref(), Some("42"));
        assert_eq!(p.tags, ["a", "b"]);

        let p: Sample = serde_json::from_str(r#"{"age": "42"}"#).unwrap();
        assert_eq!(p.age.as_deref(), Some("42"));
        assert!(p.tags.is_empty());
    }

    #[test]
    fn booleans_are_kept_as_text() {
        let p: Sample = serde_json::from_str(r#"{"age": true}"#).unwrap();
        assert_eq!(p.age.as_deref(), Some("true"));
    }

    #[test]
    fn nulls_are_absent() {
        let p: Sample = serde_json::from_str(r#"{"age": null, "tags": null}"#).unwrap();
        assert_eq!(p.age, None);
        assert!(p.tags.is_empty());
    }
}
