use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn into_number<E: serde::de::Error>(self) -> Result<f64, E> {
        let value = match self {
            NumberOrText::Number(value) => value,
            NumberOrText::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("could not convert '{raw}' to a number")))?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(E::custom("numeric values must be finite"))
        }
    }
}

/// Accepts JSON numbers as well as numeric strings such as `"12.5"`.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrText::deserialize(deserializer)?.into_number()
}

pub(crate) fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrText>::deserialize(deserializer)?
        .map(NumberOrText::into_number)
        .transpose()
}
