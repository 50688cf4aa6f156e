//! Fixed selector schema for eBay item pages.
//!
//! The selectors target the exact `class` attribute values eBay renders, so
//! `[class="..."]` is used rather than `.class` matching.

use crate::error::ScraperError;
use crate::extract::{Cardinality, CompiledField, FieldSpec};

pub const TITLE: FieldSpec = FieldSpec {
    name: "title",
    selector: r#"h1[class="x-item-title__mainTitle"] > span"#,
    cardinality: Cardinality::Single,
    attribute: None,
};

pub const PRICE: FieldSpec = FieldSpec {
    name: "price",
    selector: r#"div[class="x-price-primary"] > span"#,
    cardinality: Cardinality::Single,
    attribute: None,
};

pub const IMAGES: FieldSpec = FieldSpec {
    name: "images",
    selector: r#"div[class="ux-image-grid no-scrollbar"] img"#,
    cardinality: Cardinality::Multiple,
    attribute: Some("src"),
};

pub const SELLER: FieldSpec = FieldSpec {
    name: "seller",
    selector: r#"div[class="x-sellercard-atf__info__about-seller"] span"#,
    cardinality: Cardinality::Single,
    attribute: None,
};

/// The second `div` of the shipping row holds the delivery cost.
pub const DELIVERY_PRICE: FieldSpec = FieldSpec {
    name: "delivery_price",
    selector: r#"div[class="ux-labels-values col-12 ux-labels-values--shipping"] > div:nth-of-type(2) span"#,
    cardinality: Cardinality::Single,
    attribute: None,
};

pub const ITEM_FIELDS: [FieldSpec; 5] = [TITLE, PRICE, IMAGES, SELLER, DELIVERY_PRICE];

/// The item schema with every selector compiled.
#[derive(Debug)]
pub struct ItemSchema {
    pub title: CompiledField,
    pub price: CompiledField,
    pub images: CompiledField,
    pub seller: CompiledField,
    pub delivery_price: CompiledField,
}

impl ItemSchema {
    /// # Errors
    ///
    /// Returns [`ScraperError::Parse`] if any selector fails to compile.
    pub fn compile() -> Result<Self, ScraperError> {
        Ok(Self {
            title: CompiledField::compile(TITLE)?,
            price: CompiledField::compile(PRICE)?,
            images: CompiledField::compile(IMAGES)?,
            seller: CompiledField::compile(SELLER)?,
            delivery_price: CompiledField::compile(DELIVERY_PRICE)?,
        })
    }
}
