pub mod assemble;
pub mod client;
pub mod error;
pub mod extract;
pub mod item;
pub mod schema;

pub use assemble::{parse_document, RecordAssembler};
pub use client::ItemPageClient;
pub use error::ScraperError;
pub use extract::{Cardinality, CompiledField, FieldSpec, FieldValue};
pub use item::EbayScraper;
pub use schema::ItemSchema;
