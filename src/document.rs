// src/document.rs
// =============================================================================
// Turns raw markup into something we can query with CSS selectors.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Is built on html5ever, so broken markup is repaired, never rejected
// - Supports CSS selectors for finding elements
//
// The checker only needs one capability from a document: "give me every node
// matching this selector". That capability is the `SelectorQuery` trait, so
// the checker does not care which HTML library sits behind it.
// =============================================================================

use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use crate::error::{GraderError, Result};

/// Anything that can be searched with a CSS selector
pub trait SelectorQuery {
    /// A matched node, borrowed from the document
    type Node<'a>
    where
        Self: 'a;

    /// Returns every node matching `selector`, in document order
    fn query<'a>(&'a self, selector: &str) -> Result<Vec<Self::Node<'a>>>;
}

/// An HTML document parsed once and then only read
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// Parses a full HTML document
    ///
    /// Parsing is lenient: unclosed tags, stray end tags and the like are
    /// fixed up the way a browser would, so this never fails.
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            trace!(count = html.errors.len(), "markup repaired while parsing");
        }
        ParsedDocument { html }
    }
}

impl SelectorQuery for ParsedDocument {
    type Node<'a> = ElementRef<'a>;

    fn query<'a>(&'a self, selector: &str) -> Result<Vec<ElementRef<'a>>> {
        // A blank selector selects nothing rather than being a syntax error
        if selector.trim().is_empty() {
            return Ok(Vec::new());
        }

        let parsed = Selector::parse(selector).map_err(|e| GraderError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;

        Ok(self.html.select(&parsed).collect())
    }
}
