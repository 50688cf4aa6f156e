//! HTTP client for the REST Countries v3.1 API.
//!
//! Every lookup is one GET against [`Endpoint::url`]; the decoded response is
//! flattened into [`Country`] rows (`Country`, `Capital`, `Flag URL`).

use std::time::Duration;

use async_trait::async_trait;
use harvest_core::{Country, Fetchable};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::CountriesError;
use crate::types::{to_countries, RawCountry};

const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1/";

/// JSON transport for the API: one GET, exact-200 check, JSON decode.
pub struct CountriesFetcher {
    client: Client,
}

impl CountriesFetcher {
    /// # Errors
    ///
    /// Returns [`CountriesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CountriesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetchable for CountriesFetcher {
    type Output = Value;
    type Error = CountriesError;

    /// # Errors
    ///
    /// - [`CountriesError::Api`] for any status other than 200, with the body.
    /// - [`CountriesError::Http`] on network failure.
    /// - [`CountriesError::Deserialize`] if the body is not valid JSON.
    async fn fetch(&self, url: &Url) -> Result<Value, CountriesError> {
        tracing::debug!(%url, "requesting countries");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            tracing::warn!(%url, status = status.as_u16(), "countries request failed");
            return Err(CountriesError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| CountriesError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

/// Client for the REST Countries API.
///
/// Use [`RestCountriesClient::new`] for production or
/// [`RestCountriesClient::with_base_url`] to point at a mock server in tests.
pub struct RestCountriesClient {
    fetcher: CountriesFetcher,
    base_url: Url,
}

impl RestCountriesClient {
    /// Creates a client pointed at `https://restcountries.com/v3.1/`.
    ///
    /// # Errors
    ///
    /// Returns [`CountriesError::Http`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CountriesError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`CountriesError::Http`] if the HTTP client cannot be built,
    /// or [`CountriesError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, CountriesError> {
        let parsed = Url::parse(base_url).map_err(|e| CountriesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(CountriesError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be a base".to_owned(),
            });
        }

        Ok(Self {
            fetcher: CountriesFetcher::new(timeout_secs, user_agent)?,
            base_url: parsed,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Runs `endpoint` and returns the decoded country objects untouched.
    ///
    /// A single object response is treated as a one-element list.
    ///
    /// # Errors
    ///
    /// - [`CountriesError::Api`] for a non-200 response.
    /// - [`CountriesError::Http`] on network failure.
    /// - [`CountriesError::Deserialize`] if the body is not JSON.
    /// - [`CountriesError::UnexpectedShape`] if the body is a JSON scalar.
    pub async fn lookup_raw(&self, endpoint: &Endpoint) -> Result<Vec<Value>, CountriesError> {
        let url = endpoint.url(&self.base_url)?;
        match self.fetcher.fetch(&url).await? {
            Value::Array(items) => Ok(items),
            object @ Value::Object(_) => Ok(vec![object]),
            other => Err(CountriesError::UnexpectedShape {
                context: url.to_string(),
                found: json_kind(&other),
            }),
        }
    }

    /// Runs `endpoint` and flattens the response into rows, in response order.
    ///
    /// # Errors
    ///
    /// Everything [`Self::lookup_raw`] returns, plus
    /// [`CountriesError::Deserialize`] if a country object has the wrong shape
    /// (e.g., `capital` is not a list of strings).
    pub async fn lookup(&self, endpoint: &Endpoint) -> Result<Vec<Country>, CountriesError> {
        let items = self.lookup_raw(endpoint).await?;
        let raw: Vec<RawCountry> = serde_json::from_value(Value::Array(items)).map_err(|e| {
            CountriesError::Deserialize {
                context: format!("{} response", endpoint.op()),
                source: e,
            }
        })?;
        let rows = to_countries(raw);
        tracing::debug!(op = endpoint.op(), rows = rows.len(), "flattened countries");
        Ok(rows)
    }

    /// # Errors
    ///
    /// See [`Self::lookup`].
    pub async fn get_all(&self) -> Result<Vec<Country>, CountriesError> {
        self.lookup(&Endpoint::All).await
    }

    /// # Errors
    ///
    /// See [`Self::lookup`].
    pub async fn get_by_name(&self, name: &str) -> Result<Vec<Country>, CountriesError> {
        self.lookup(&Endpoint::Name(name.to_owned())).await
    }

    /// # Errors
    ///
    /// See [`Self::lookup`].
    pub async fn get_by_code(&self, code: &str) -> Result<Vec<Country>, CountriesError> {
        self.lookup(&Endpoint::Code(code.to_owned())).await
    }

    /// # Errors
    ///
    /// See [`Self::lookup`].
    pub async fn get_by_codes<S: AsRef<str>>(
        &self,
        codes: &[S],
    ) -> Result<Vec<Country>, CountriesError> {
        let codes = codes.iter().map(|c| c.as_ref().to_owned()).collect();
        self.lookup(&Endpoint::Codes(codes)).await
    }

    /// # Errors
    ///
    /// See [`Self::lookup`].
    pub async fn get_by_currency(&self, currency: &str) -> Result<Vec<Country>, CountriesError> {
        self.lookup(&Endpoint::Currency(currency.to_owned())).await
    }

    /// # Errors
    ///
    /// See [`Self::lookup`].
    pub async fn get_by_demonym(&self, demonym: &str) -> Result<Vec<Country>, CountriesError> {
        self.lookup(&Endpoint::Demonym(demonym.to_owned())).await
    }

    /// # Errors
    ///
    /// See [`Self::lookup`].
    pub async fn get_by_language(&self, language: &str) -> Result<Vec<Country>, CountriesError> {
        self.lookup(&Endpoint::Language(language.to_owned())).await
    }

    /// # Errors
    ///
    /// See [`Self::lookup`].
    pub async fn get_by_capital(&self, capital: &str) -> Result<Vec<Country>, CountriesError> {
        self.lookup(&Endpoint::Capital(capital.to_owned())).await
    }

    /// # Errors
    ///
    /// See [`Self::lookup`].
    pub async fn get_by_region(&self, region: &str) -> Result<Vec<Country>, CountriesError> {
        self.lookup(&Endpoint::Region(region.to_owned())).await
    }

    /// # Errors
    ///
    /// See [`Self::lookup`].
    pub async fn get_by_subregion(&self, subregion: &str) -> Result<Vec<Country>, CountriesError> {
        self.lookup(&Endpoint::Subregion(subregion.to_owned())).await
    }

    /// # Errors
    ///
    /// See [`Self::lookup`].
    pub async fn get_by_translation(
        &self,
        translation: &str,
    ) -> Result<Vec<Country>, CountriesError> {
        self.lookup(&Endpoint::Translation(translation.to_owned()))
            .await
    }

    /// # Errors
    ///
    /// See [`Self::lookup`].
    pub async fn get_independent(&self, status: bool) -> Result<Vec<Country>, CountriesError> {
        self.lookup(&Endpoint::Independent(status)).await
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
