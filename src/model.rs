use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Short species code as used by the taxonomy and the species site (e.g. `amegfi`).
///
/// Used verbatim when building request URLs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SpeciesId(String);

impl SpeciesId {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpeciesId {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Deduplicated identifiers, iterated in sorted order.
pub type IdentifierSet = BTreeSet<SpeciesId>;

/// One output row: identifier plus the scraped description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesRecord {
    pub id: SpeciesId,
    pub description: String,
}

impl SpeciesRecord {
    pub fn new(id: SpeciesId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }
}
