pub mod client;
pub mod endpoint;
pub mod error;
pub mod flatten;
pub mod types;

pub use client::{CountriesFetcher, RestCountriesClient};
pub use endpoint::Endpoint;
pub use error::CountriesError;
pub use flatten::{flatten_record, flatten_records};
pub use types::{to_countries, RawCountry};
