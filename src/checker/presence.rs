// src/checker/presence.rs
// =============================================================================
// The grading step itself: for each selector, does the document contain at
// least one matching element?
//
// The result is a map from selector to true/false. It is backed by a
// BTreeMap, so keys are unique and iterate in ascending order, which is
// exactly the order of a sorted checklist.
// =============================================================================

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::checklist::Checklist;
use crate::document::SelectorQuery;
use crate::error::Result;

/// Selector -> presence, in sorted selector order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultMap {
    entries: BTreeMap<String, bool>,
}

impl ResultMap {
    /// Presence flag for one selector, if it was checked
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.entries.get(selector).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every selector was found
    pub fn all_present(&self) -> bool {
        self.entries.values().all(|present| *present)
    }
}

/// Checks every selector of `checklist` against `document`
///
/// Stops at the first selector the document cannot evaluate (invalid CSS).
pub fn check_presence<D: SelectorQuery>(document: &D, checklist: &Checklist) -> Result<ResultMap> {
    let mut entries = BTreeMap::new();

    for selector in checklist.iter() {
        let present = !document.query(selector)?.is_empty();
        debug!(selector, present, "checked selector");
        entries.insert(selector.to_string(), present);
    }

    Ok(ResultMap { entries })
}
