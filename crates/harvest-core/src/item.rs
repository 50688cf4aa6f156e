//! The validated record produced by one successful item-page scrape.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::serialize::Serializable;
use crate::values::{PriceField, ValidUrl};

/// Field values located on an item page, before validation.
///
/// `None` means the selector matched nothing on the page. Images hold only
/// the `src` values that were actually present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItemFields {
    pub url: String,
    pub title: Option<String>,
    pub price: Option<String>,
    pub seller: Option<String>,
    pub delivery_price: Option<String>,
    pub images: Vec<String>,
}

/// A single eBay listing.
///
/// Built once by [`EbayItem::from_raw`] and never mutated afterwards; the
/// fields are private and exposed through accessors only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EbayItem {
    images: Vec<ValidUrl>,
    title: Option<String>,
    url: ValidUrl,
    seller: Option<String>,
    price: Option<PriceField>,
    delivery_price: Option<PriceField>,
}

impl EbayItem {
    /// Validates the raw fields and builds the record.
    ///
    /// Missing title, seller, and prices are carried as `None`. Every image
    /// URL and the source URL must validate; one bad URL fails the whole
    /// record.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidUrl`] for a malformed image or source URL.
    /// - [`CoreError::InvalidPrice`] for a negative integer price.
    pub fn from_raw(raw: RawItemFields) -> Result<Self, CoreError> {
        let images = raw
            .images
            .iter()
            .map(|src| ValidUrl::parse(src))
            .collect::<Result<Vec<_>, _>>()?;
        let url = ValidUrl::parse(&raw.url)?;
        let price = raw.price.as_deref().map(PriceField::from_raw).transpose()?;
        let delivery_price = raw
            .delivery_price
            .as_deref()
            .map(PriceField::from_raw)
            .transpose()?;

        Ok(Self {
            images,
            title: raw.title,
            url,
            seller: raw.seller,
            price,
            delivery_price,
        })
    }

    #[must_use]
    pub fn images(&self) -> &[ValidUrl] {
        &self.images
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn url(&self) -> &ValidUrl {
        &self.url
    }

    #[must_use]
    pub fn seller(&self) -> Option<&str> {
        self.seller.as_deref()
    }

    #[must_use]
    pub fn price(&self) -> Option<&PriceField> {
        self.price.as_ref()
    }

    #[must_use]
    pub fn delivery_price(&self) -> Option<&PriceField> {
        self.delivery_price.as_ref()
    }
}

fn optional_string(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |s| Value::String(s.to_owned()))
}

fn optional_price(value: Option<&PriceField>) -> Value {
    value.map_or(Value::Null, Value::from)
}

impl Serializable for EbayItem {
    fn to_field_mapping(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(
            "images".to_owned(),
            self.images.iter().map(ValidUrl::as_str).collect(),
        );
        fields.insert("title".to_owned(), optional_string(self.title()));
        fields.insert("url".to_owned(), Value::String(self.url.to_string()));
        fields.insert("seller".to_owned(), optional_string(self.seller()));
        fields.insert("price".to_owned(), optional_price(self.price()));
        fields.insert(
            "delivery_price".to_owned(),
            optional_price(self.delivery_price()),
        );
        fields
    }

    /// `"Blue Widget 2"` becomes `Blue-Widget-2.json`. Path separators are
    /// replaced as well so the name never escapes the target directory.
    fn default_file_name(&self) -> Option<String> {
        let title = self.title.as_deref().filter(|t| !t.trim().is_empty())?;
        let stem: String = title
            .chars()
            .map(|c| if matches!(c, ' ' | '/' | '\\') { '-' } else { c })
            .collect();
        Some(format!("{stem}.json"))
    }
}

struct Opt<'a, T: ?Sized>(Option<&'a T>);

impl<T: fmt::Display + ?Sized> fmt::Display for Opt<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for EbayItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let images = self
            .images
            .iter()
            .map(ValidUrl::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "EbayItem(images=[{images}], title={}, url={}, seller={}, price={}, delivery_price={})",
            Opt(self.title()),
            self.url,
            Opt(self.seller()),
            Opt(self.price()),
            Opt(self.delivery_price()),
        )
    }
}
