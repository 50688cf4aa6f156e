//! REST Countries v3.1 response types.
//!
//! Only the three attributes that make it into a [`Country`] row are modelled.
//! Everything is optional: lookups by region or translation routinely return
//! territories with no `capital` key at all (Antarctica, Bouvet Island), and
//! `capital` is occasionally present as an empty array.

use harvest_core::Country;
use serde::Deserialize;

/// One country object as returned by the API.
#[derive(Debug, Deserialize)]
pub struct RawCountry {
    #[serde(default)]
    pub name: Option<RawName>,

    /// Capitals in API order; South Africa lists three.
    #[serde(default)]
    pub capital: Option<Vec<String>>,

    #[serde(default)]
    pub flags: Option<RawFlags>,
}

#[derive(Debug, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub common: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawFlags {
    #[serde(default)]
    pub png: Option<String>,
}

impl From<RawCountry> for Country {
    /// Keeps the common name, the first listed capital, and the PNG flag.
    fn from(raw: RawCountry) -> Self {
        Country::from_parts(
            raw.name.and_then(|n| n.common),
            raw.capital.and_then(|c| c.into_iter().next()),
            raw.flags.and_then(|f| f.png),
        )
    }
}

/// Flattens a decoded response into rows, preserving response order.
#[must_use]
pub fn to_countries(raw: Vec<RawCountry>) -> Vec<Country> {
    raw.into_iter().map(Country::from).collect()
}

#[cfg(test)]
mod tests {
    use harvest_core::NOT_AVAILABLE;
    use serde_json::json;

    use super::*;

    fn decode(value: serde_json::Value) -> Vec<Country> {
        to_countries(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn keeps_common_name_first_capital_and_png_flag() {
        let rows = decode(json!([{
            "name": { "common": "South Africa", "official": "Republic of South Africa" },
            "capital": ["Pretoria", "Bloemfontein", "Cape Town"],
            "flags": { "png": "https://flagcdn.com/w320/za.png", "svg": "https://flagcdn.com/za.svg" },
            "population": 59_308_690
        }]));
        assert_eq!(
            rows,
            vec![Country::from_parts(
                Some("South Africa".into()),
                Some("Pretoria".into()),
                Some("https://flagcdn.com/w320/za.png".into()),
            )]
        );
    }

    #[test]
    fn missing_keys_become_not_available() {
        let rows = decode(json!([{ "name": { "official": "Antarctica" } }]));
        assert_eq!(rows[0].name, NOT_AVAILABLE);
        assert_eq!(rows[0].capital, NOT_AVAILABLE);
        assert_eq!(rows[0].flag_url, NOT_AVAILABLE);
    }

    #[test]
    fn empty_capital_array_becomes_not_available() {
        let rows = decode(json!([{ "name": { "common": "Macau" }, "capital": [] }]));
        assert_eq!(rows[0].capital, NOT_AVAILABLE);
    }

    #[test]
    fn explicit_nulls_become_not_available() {
        let rows = decode(json!([{ "name": null, "capital": null, "flags": { "png": null } }]));
        assert_eq!(rows[0], Country::from_parts(None, None, None));
    }

    #[test]
    fn preserves_response_order_and_duplicates() {
        let rows = decode(json!([
            { "name": { "common": "Peru" } },
            { "name": { "common": "Chile" } },
            { "name": { "common": "Peru" } }
        ]));
        let names: Vec<_> = rows.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Peru", "Chile", "Peru"]);
    }
}
