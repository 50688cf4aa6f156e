pub mod app_config;
pub mod config;
pub mod country;
pub mod error;
pub mod fetch;
pub mod item;
pub mod serialize;
pub mod values;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use country::{Country, NOT_AVAILABLE};
pub use error::{ConfigError, CoreError};
pub use fetch::Fetchable;
pub use item::{EbayItem, RawItemFields};
pub use serialize::{write_json, Serializable};
pub use values::{Price, PriceField, ValidUrl};
