use serde::{Deserialize, Deserializer};

// JSON serialization / deserialization helpers shared by the wire types

pub(crate) fn is_zero(v: &i64) -> bool {
    *v == 0
}

/// Reads an explicit `null` as the field's zero value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt: Option<T> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default, deserialize_with = "null_as_default")]
        count: i64,
        #[serde(default, deserialize_with = "null_as_default")]
        names: Vec<String>,
    }

    #[test]
    fn test_null_reads_as_zero_value() {
        let sample: Sample = serde_json::from_str(r#"{"count":null,"names":null}"#).unwrap();
        assert_eq!(
            sample,
            Sample {
                count: 0,
                names: vec![]
            }
        );
    }

    #[test]
    fn test_values_and_missing_fields() {
        let sample: Sample = serde_json::from_str(r#"{"count":4}"#).unwrap();
        assert_eq!(sample.count, 4);
        assert!(sample.names.is_empty());

        assert!(serde_json::from_str::<Sample>(r#"{"count":"4"}"#).is_err());
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero(&0));
        assert!(!is_zero(&-1));
    }
}
