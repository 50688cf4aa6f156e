//! Applies the item schema to a document and builds the validated record.

use harvest_core::{EbayItem, RawItemFields, ValidUrl};
use scraper::Html;

use crate::error::ScraperError;
use crate::extract::CompiledField;
use crate::schema::ItemSchema;

/// Parses an HTML body into a document tree.
///
/// The HTML parser itself is lenient, so the only body rejected here is one
/// with no markup at all.
///
/// # Errors
///
/// Returns [`ScraperError::Parse`] if `body` is empty or whitespace.
pub fn parse_document(body: &str, context: &str) -> Result<Html, ScraperError> {
    if body.trim().is_empty() {
        return Err(ScraperError::Parse {
            context: context.to_owned(),
            reason: "document is empty".to_owned(),
        });
    }
    Ok(Html::parse_document(body))
}

/// Turns one item-page document into an [`EbayItem`].
#[derive(Debug)]
pub struct RecordAssembler {
    schema: ItemSchema,
}

impl RecordAssembler {
    /// # Errors
    ///
    /// Returns [`ScraperError::Parse`] if the item schema fails to compile.
    pub fn new() -> Result<Self, ScraperError> {
        Ok(Self {
            schema: ItemSchema::compile()?,
        })
    }

    /// Runs every schema field against `doc` and collects the raw values.
    ///
    /// Fields that match nothing come back as `None`; this never fails.
    #[must_use]
    pub fn extract(&self, doc: &Html, url: &ValidUrl) -> RawItemFields {
        RawItemFields {
            url: url.as_str().to_owned(),
            title: single(&self.schema.title, doc),
            price: single(&self.schema.price, doc),
            seller: single(&self.schema.seller, doc),
            delivery_price: single(&self.schema.delivery_price, doc),
            images: self.schema.images.extract(doc).into_list(),
        }
    }

    /// Extracts and validates in one step.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Validation`] if an image URL is malformed or a
    /// price is a negative integer. No partial record is produced.
    pub fn assemble(&self, doc: &Html, url: &ValidUrl) -> Result<EbayItem, ScraperError> {
        let raw = self.extract(doc, url);
        tracing::debug!(
            %url,
            images = raw.images.len(),
            has_title = raw.title.is_some(),
            "extracted item fields"
        );
        Ok(EbayItem::from_raw(raw)?)
    }
}

fn single(field: &CompiledField, doc: &Html) -> Option<String> {
    let value = field.extract(doc).into_text();
    if value.is_none() {
        tracing::debug!(field = field.spec().name, "field not found on page");
    }
    value
}

#[cfg(test)]
#[path = "assemble_test.rs"]
mod tests;
