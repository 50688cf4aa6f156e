//! Selector-driven field lookup against a parsed HTML document.
//!
//! A missing field is an expected outcome, reported as [`FieldValue::Absent`]
//! (or `None` from [`CompiledField::first_text`]). Only a selector that does
//! not compile is an error.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;

/// Whether a selector is expected to match one node or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Single,
    Multiple,
}

/// A named selector rule.
///
/// For [`Cardinality::Multiple`] fields, `attribute` projects each match to
/// that attribute's value; matches without it are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub selector: &'static str,
    pub cardinality: Cardinality,
    pub attribute: Option<&'static str>,
}

/// The result of applying one [`FieldSpec`] to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Absent,
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// `Some` only for [`FieldValue::Text`].
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Absent | Self::List(_) => None,
        }
    }

    /// The matched values of a [`FieldValue::List`]; empty otherwise.
    #[must_use]
    pub fn into_list(self) -> Vec<String> {
        match self {
            Self::List(values) => values,
            Self::Absent | Self::Text(_) => Vec::new(),
        }
    }
}

/// A [`FieldSpec`] with its selector compiled.
#[derive(Debug)]
pub struct CompiledField {
    spec: FieldSpec,
    selector: Selector,
}

impl CompiledField {
    /// # Errors
    ///
    /// Returns [`ScraperError::Parse`] if the selector is not valid CSS.
    pub fn compile(spec: FieldSpec) -> Result<Self, ScraperError> {
        let selector = Selector::parse(spec.selector).map_err(|e| ScraperError::Parse {
            context: format!("selector for field '{}'", spec.name),
            reason: e.to_string(),
        })?;
        Ok(Self { spec, selector })
    }

    #[must_use]
    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// Trimmed text of the first match, or `None` when nothing matches.
    ///
    /// A match whose text is blank yields `Some("")`; deciding whether that
    /// counts as missing is up to the caller.
    #[must_use]
    pub fn first_text(&self, doc: &Html) -> Option<String> {
        doc.select(&self.selector).next().map(element_text)
    }

    /// Every match in document order.
    #[must_use]
    pub fn all<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>> {
        doc.select(&self.selector).collect()
    }

    /// `attr` of every match in document order, skipping matches where the
    /// attribute is missing or empty.
    #[must_use]
    pub fn attribute_values(&self, doc: &Html, attr: &str) -> Vec<String> {
        doc.select(&self.selector)
            .filter_map(|el| el.value().attr(attr))
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Applies the rule according to its cardinality.
    #[must_use]
    pub fn extract(&self, doc: &Html) -> FieldValue {
        match (self.spec.cardinality, self.spec.attribute) {
            (Cardinality::Single, _) => self
                .first_text(doc)
                .map_or(FieldValue::Absent, FieldValue::Text),
            (Cardinality::Multiple, Some(attr)) => {
                FieldValue::List(self.attribute_values(doc, attr))
            }
            (Cardinality::Multiple, None) => {
                FieldValue::List(self.all(doc).into_iter().map(element_text).collect())
            }
        }
    }
}

/// All descendant text of `element`, concatenated and trimmed.
#[must_use]
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <h1 class="headline"><span>
              Blue Widget
          </span></h1>
          <p class="empty"><span>   </span></p>
          <ul class="gallery">
            <li><img src="https://img.example.com/1.jpg"></li>
            <li><img alt="no source"></li>
            <li><img src=""></li>
            <li><img src="https://img.example.com/2.jpg"></li>
          </ul>
          <ol><li>one</li><li> two </li></ol>
        </body></html>
    "#;

    fn field(
        selector: &'static str,
        cardinality: Cardinality,
        attribute: Option<&'static str>,
    ) -> CompiledField {
        CompiledField::compile(FieldSpec {
            name: "test",
            selector,
            cardinality,
            attribute,
        })
        .expect("test selector should compile")
    }

    #[test]
    fn single_returns_trimmed_text_of_first_match() {
        let doc = Html::parse_document(PAGE);
        let title = field("h1.headline > span", Cardinality::Single, None);
        assert_eq!(title.extract(&doc), FieldValue::Text("Blue Widget".to_owned()));
    }

    #[test]
    fn single_without_match_is_absent_not_error() {
        let doc = Html::parse_document(PAGE);
        let missing = field("div.no-such-thing span", Cardinality::Single, None);
        assert_eq!(missing.first_text(&doc), None);
        assert_eq!(missing.extract(&doc), FieldValue::Absent);
    }

    #[test]
    fn single_blank_match_is_empty_string() {
        let doc = Html::parse_document(PAGE);
        let blank = field("p.empty > span", Cardinality::Single, None);
        assert_eq!(blank.first_text(&doc).as_deref(), Some(""));
    }

    #[test]
    fn multiple_projects_attribute_and_drops_missing_in_order() {
        let doc = Html::parse_document(PAGE);
        let images = field("ul.gallery img", Cardinality::Multiple, Some("src"));
        assert_eq!(images.all(&doc).len(), 4);
        assert_eq!(
            images.extract(&doc).into_list(),
            vec![
                "https://img.example.com/1.jpg".to_owned(),
                "https://img.example.com/2.jpg".to_owned(),
            ]
        );
    }

    #[test]
    fn multiple_without_attribute_collects_text() {
        let doc = Html::parse_document(PAGE);
        let items = field("ol > li", Cardinality::Multiple, None);
        assert_eq!(
            items.extract(&doc),
            FieldValue::List(vec!["one".to_owned(), "two".to_owned()])
        );
    }

    #[test]
    fn multiple_without_match_is_empty_list() {
        let doc = Html::parse_document(PAGE);
        let images = field("div.carousel img", Cardinality::Multiple, Some("src"));
        assert_eq!(images.extract(&doc), FieldValue::List(Vec::new()));
    }

    #[test]
    fn malformed_selector_is_parse_error() {
        let err = CompiledField::compile(FieldSpec {
            name: "broken",
            selector: "div[class=",
            cardinality: Cardinality::Single,
            attribute: None,
        })
        .unwrap_err();
        assert!(
            matches!(err, ScraperError::Parse { ref context, .. } if context.contains("broken")),
            "expected Parse, got: {err:?}"
        );
    }

    #[test]
    fn field_value_accessors() {
        assert_eq!(FieldValue::Text("x".into()).into_text().as_deref(), Some("x"));
        assert_eq!(FieldValue::Absent.into_text(), None);
        assert!(FieldValue::Absent.into_list().is_empty());
    }
}
