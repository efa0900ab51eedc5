//! Per-field locale fallback over sheet-driven key-value content.

use crate::constants::PRIMARY_LOCALE;
use crate::defaults::SiteDefaults;
use std::collections::HashMap;

/// section → key → locale → value
pub type ContentTree = HashMap<String, HashMap<String, HashMap<String, String>>>;

/// Resolves display strings from a content tree with graceful degradation:
/// requested locale, then the primary locale, then a registered default,
/// then the empty string. Never errors; missing data is a display concern,
/// not a failure.
pub struct ContentResolver<'a> {
    tree: ContentTree,
    defaults: &'a SiteDefaults,
}

impl<'a> ContentResolver<'a> {
    pub fn new(tree: ContentTree, defaults: &'a SiteDefaults) -> Self {
        Self { tree, defaults }
    }

    pub fn resolve(&self, section: &str, key: &str, locale: &str) -> String {
        if let Some(values) = self
            .tree
            .get(section)
            .and_then(|section| section.get(key))
        {
            if let Some(value) = values.get(locale) {
                return value.clone();
            }
            if let Some(value) = values.get(PRIMARY_LOCALE) {
                return value.clone();
            }
        }

        self.defaults
            .content
            .get(&(section.to_string(), key.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}
