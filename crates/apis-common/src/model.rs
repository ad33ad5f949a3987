use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::CatalogError;

/// Auth label the catalog uses for "no authentication required".
pub const NO_AUTH: &str = "No";

/// A single catalogued public API (one data row of the directory tables).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEntry {
    /// Display name taken from the markdown link text, e.g. "Cat Facts"
    pub name: String,
    /// Link target, always `http://` or `https://`
    pub url: String,
    /// Free-text description; may be empty
    pub description: String,
    /// Auth label with backticks stripped: "No", "apiKey", "OAuth", ...
    pub auth: String,
    /// "Yes" / "No" as written in the document
    pub https: String,
    /// "Yes" / "No" / "Unknown" or whatever the maintainer typed
    pub cors: String,
    /// Heading of the section this row was parsed under
    pub category: String,
}

impl ApiEntry {
    pub fn requires_auth(&self) -> bool {
        self.auth != NO_AUTH
    }

    pub fn supports_https(&self) -> bool {
        self.https == "Yes"
    }

    pub fn supports_cors(&self) -> bool {
        self.cors == "Yes"
    }
}

/// A named section of the directory and its entries, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub entries: Vec<ApiEntry>,
}

/// Ordered mapping from category name to its entries.
///
/// Category order follows first appearance in the document. A heading that
/// repeats an existing name resets that category's entries in place.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
    fingerprint: String,
}

impl Catalog {
    pub(crate) fn new(source: &str) -> Self {
        let digest = Sha256::digest(source.as_bytes());
        Self {
            categories: Vec::new(),
            index: HashMap::new(),
            fingerprint: format!("{digest:x}"),
        }
    }

    /// Open (or reopen) a category and return its position.
    pub(crate) fn open_category(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            self.categories[idx].entries.clear();
            return idx;
        }
        let idx = self.categories.len();
        self.categories.push(Category {
            name: name.to_string(),
            entries: Vec::new(),
        });
        self.index.insert(name.to_string(), idx);
        idx
    }

    pub(crate) fn push_entry(&mut self, category_idx: usize, entry: ApiEntry) {
        debug_assert_eq!(entry.category, self.categories[category_idx].name);
        self.categories[category_idx].entries.push(entry);
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.index.get(name).map(|&idx| &self.categories[idx])
    }

    /// All entries, category order first, then row order within a category.
    pub fn entries(&self) -> impl Iterator<Item = &ApiEntry> {
        self.categories.iter().flat_map(|c| c.entries.iter())
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Hex SHA-256 of the document text this catalog was parsed from.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

/// How much authentication the user is willing to deal with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthPreference {
    /// Only APIs that need no auth get a bonus.
    None,
    /// Keyless APIs and plain `apiKey` APIs get a bonus.
    #[default]
    ApiKey,
    /// Anything goes. Never adds a bonus.
    Any,
}

impl AuthPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ApiKey => "apikey",
            Self::Any => "any",
        }
    }
}

impl FromStr for AuthPreference {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" => Ok(Self::None),
            "apikey" => Ok(Self::ApiKey),
            "any" => Ok(Self::Any),
            other => Err(CatalogError::UnknownAuthPreference(other.to_string())),
        }
    }
}

impl fmt::Display for AuthPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry paired with its (perturbed) total score for one request.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredApi<'a> {
    #[serde(flatten)]
    pub entry: &'a ApiEntry,
    pub score: f64,
}
