use serde::Serialize;

/// Placeholder for a country attribute the API did not return.
pub const NOT_AVAILABLE: &str = "N/A";

/// One flattened row of a country lookup.
///
/// Serializes with the tabular column names `Country`, `Capital`, and
/// `Flag URL`. The flag URL is passed through unvalidated since it may be
/// the [`NOT_AVAILABLE`] placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    #[serde(rename = "Country")]
    pub name: String,
    #[serde(rename = "Capital")]
    pub capital: String,
    #[serde(rename = "Flag URL")]
    pub flag_url: String,
}

impl Country {
    /// Builds a row, substituting [`NOT_AVAILABLE`] for each missing value.
    #[must_use]
    pub fn from_parts(name: Option<String>, capital: Option<String>, flag_url: Option<String>) -> Self {
        let or_na = |v: Option<String>| v.unwrap_or_else(|| NOT_AVAILABLE.to_owned());
        Self {
            name: or_na(name),
            capital: or_na(capital),
            flag_url: or_na(flag_url),
        }
    }
}
