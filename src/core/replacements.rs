//! Placeholder replacement mapping
//!
//! Maps each `@TOKEN@` to the text substituted for it. Entries are kept
//! sorted by token so every line sees the same replacement order.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::defaults::PKGVER_DATE_FORMAT;

use super::manifest::DependencyManifest;
use super::scheme::{JoinStyle, TOKEN_DEPENDS, TOKEN_OPTDEPENDS};

/// Token to substitution text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    entries: BTreeMap<String, String>,
}

impl Replacements {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the dependency lists of a manifest
    pub fn from_manifest(manifest: &DependencyManifest, style: JoinStyle) -> Self {
        let mut replacements = Self::new();
        replacements.insert(TOKEN_DEPENDS, manifest.depends(style));
        replacements.insert(TOKEN_OPTDEPENDS, manifest.optdepends(style));
        replacements
    }

    /// Add or replace an entry
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(token.into(), value.into());
    }

    /// Look up the text for a token
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in application order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Apply every entry to a line as a literal substring replacement
    ///
    /// Returns the rewritten line and the number of occurrences replaced.
    pub fn apply(&self, line: &str) -> (String, usize) {
        let mut out = line.to_string();
        let mut count = 0;
        for (token, value) in self.iter() {
            let hits = out.matches(token).count();
            if hits > 0 {
                out = out.replace(token, value);
                count += hits;
            }
        }
        (out, count)
    }
}

/// `@PKGVER@` text for a date
pub fn pkgver_for_date(date: NaiveDate) -> String {
    date.format(PKGVER_DATE_FORMAT).to_string()
}

/// Date of a `SOURCE_DATE_EPOCH` value, if it is a valid timestamp
pub fn date_from_source_epoch(value: &str) -> Option<NaiveDate> {
    let secs = value.trim().parse::<i64>().ok()?;
    DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| dt.date_naive())
}

/// Build date: `SOURCE_DATE_EPOCH` when set and valid, else the local clock
pub fn build_date(source_date_epoch: Option<&str>) -> NaiveDate {
    match source_date_epoch {
        Some(value) => date_from_source_epoch(value).unwrap_or_else(|| {
            tracing::warn!("Ignoring invalid SOURCE_DATE_EPOCH '{value}'");
            chrono::Local::now().date_naive()
        }),
        None => chrono::Local::now().date_naive(),
    }
}
