//! Decimal amounts arrive either as JSON numbers or as decimal strings
//! (`"1500.00"`), depending on the serializer on the API side.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f64),
}

fn parse<E: de::Error>(value: StringOrFloat) -> Result<f64, E> {
    match value {
        StringOrFloat::String(s) => s.trim().parse::<f64>().map_err(de::Error::custom),
        StringOrFloat::Float(f) => Ok(f),
    }
}

pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    parse(StringOrFloat::deserialize(deserializer)?)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "super::deserialize_amount")]
        amount: f64,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let row: Row = serde_json::from_str(r#"{"amount": 12.5}"#).unwrap();
        assert_eq!(row.amount, 12.5);

        let row: Row = serde_json::from_str(r#"{"amount": "1500.00"}"#).unwrap();
        assert_eq!(row.amount, 1500.0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Row>(r#"{"amount": "abc"}"#).is_err());
    }
}
