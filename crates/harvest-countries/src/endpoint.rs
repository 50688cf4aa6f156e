//! The REST Countries lookup operations and their URLs.

use url::Url;

use crate::error::CountriesError;

/// One lookup against the REST Countries API. Each variant maps to exactly
/// one sub-path of the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `all`
    All,
    /// `name/{name}`
    Name(String),
    /// `alpha/{code}`
    Code(String),
    /// `alpha?codes=a,b,c`
    Codes(Vec<String>),
    /// `currency/{currency}`
    Currency(String),
    /// `demonym/{demonym}`
    Demonym(String),
    /// `lang/{language}`
    Language(String),
    /// `capital/{capital}`
    Capital(String),
    /// `region/{region}`
    Region(String),
    /// `subregion/{subregion}`
    Subregion(String),
    /// `translation/{translation}`
    Translation(String),
    /// `independent?status={true|false}`
    Independent(bool),
}

impl Endpoint {
    /// Short operation name for logs and error context.
    #[must_use]
    pub fn op(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Name(_) => "name",
            Self::Code(_) | Self::Codes(_) => "alpha",
            Self::Currency(_) => "currency",
            Self::Demonym(_) => "demonym",
            Self::Language(_) => "lang",
            Self::Capital(_) => "capital",
            Self::Region(_) => "region",
            Self::Subregion(_) => "subregion",
            Self::Translation(_) => "translation",
            Self::Independent(_) => "independent",
        }
    }

    fn argument(&self) -> Option<&str> {
        match self {
            Self::Name(v)
            | Self::Code(v)
            | Self::Currency(v)
            | Self::Demonym(v)
            | Self::Language(v)
            | Self::Capital(v)
            | Self::Region(v)
            | Self::Subregion(v)
            | Self::Translation(v) => Some(v),
            Self::All | Self::Codes(_) | Self::Independent(_) => None,
        }
    }

    fn query(&self) -> Option<(&'static str, String)> {
        match self {
            Self::Codes(codes) => Some(("codes", codes.join(","))),
            Self::Independent(status) => Some(("status", status.to_string())),
            _ => None,
        }
    }

    /// Resolves the endpoint against `base`, percent-encoding the path
    /// argument as a single segment and the query value as a form pair.
    ///
    /// # Errors
    ///
    /// Returns [`CountriesError::InvalidBaseUrl`] if `base` cannot carry a
    /// path (e.g., `mailto:` or `data:` URLs).
    pub fn url(&self, base: &Url) -> Result<Url, CountriesError> {
        let mut url = base.clone();
        {
            let mut segments =
                url.path_segments_mut()
                    .map_err(|()| CountriesError::InvalidBaseUrl {
                        base_url: base.to_string(),
                        reason: "URL cannot be a base".to_owned(),
                    })?;
            segments.pop_if_empty().push(self.op());
            if let Some(arg) = self.argument() {
                segments.push(arg);
            }
        }
        if let Some((key, value)) = self.query() {
            url.query_pairs_mut().append_pair(key, &value);
        }
        Ok(url)
    }
}
