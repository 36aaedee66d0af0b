//! Custom serde deserializers for request bodies and query strings.
//!
//! The web client builds category IDs from JSON object keys, so IDs arrive
//! as either numbers (`5`) or numeric strings (`"5"`).

use serde::Deserializer;

/// Deserialize an optional integer that may be encoded as a JSON number or a
/// numeric string.
///
/// `null`, a missing field (with `#[serde(default)]`) and an empty string all
/// deserialize to `None`.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> serde::de::Visitor<'de> for IdVisitor {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            i64::try_from(value).map(Some).map_err(E::custom)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            let value = value.trim();

            if value.is_empty() {
                return Ok(None);
            }

            value.parse::<i64>().map(Some).map_err(E::custom)
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            self.visit_str(&value)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[cfg(test)]
mod deserialize_optional_id_tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::deserialize_optional_id;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "deserialize_optional_id")]
        id: Option<i64>,
    }

    fn parse(value: serde_json::Value) -> Result<Option<i64>, serde_json::Error> {
        serde_json::from_value::<Body>(value).map(|body| body.id)
    }

    #[test]
    fn parses_number() {
        assert_eq!(parse(json!({"id": 5})).unwrap(), Some(5));
    }

    #[test]
    fn parses_numeric_string() {
        assert_eq!(parse(json!({"id": "12"})).unwrap(), Some(12));
    }

    #[test]
    fn missing_field_is_none() {
        assert_eq!(parse(json!({})).unwrap(), None);
    }

    #[test]
    fn null_is_none() {
        assert_eq!(parse(json!({"id": null})).unwrap(), None);
    }

    #[test]
    fn empty_string_is_none() {
        assert_eq!(parse(json!({"id": ""})).unwrap(), None);
    }

    #[test]
    fn rejects_non_numeric_string() {
        assert!(parse(json!({"id": "click"})).is_err());
    }

    #[test]
    fn rejects_boolean() {
        assert!(parse(json!({"id": true})).is_err());
    }
}
