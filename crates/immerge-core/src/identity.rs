//! Row identity resolution
//!
//! Decides which key identifies a row for deduplication: the DOI when one
//! is present, the title otherwise.

/// Canonical identity of a row, carrying the normalized key value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityKey {
    /// Normalized DOI
    Doi(String),
    /// Normalized title, used only when the row has no usable DOI
    Title(String),
    /// Neither field is usable
    None,
}

/// Normalize a field for comparison: trim surrounding whitespace, lowercase
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Resolve the identity key for a row from its raw DOI and title fields.
///
/// A DOI is globally unique and database-independent, so a non-empty DOI
/// always wins over the title, even when both are present. Total function:
/// absent, empty, or whitespace-only input degrades to [`IdentityKey::None`].
pub fn resolve(doi: Option<&str>, title: Option<&str>) -> IdentityKey {
    let doi_norm = doi.map(normalize).unwrap_or_default();
    if !doi_norm.is_empty() {
        return IdentityKey::Doi(doi_norm);
    }

    let title_norm = title.map(normalize).unwrap_or_default();
    if !title_norm.is_empty() {
        return IdentityKey::Title(title_norm);
    }

    IdentityKey::None
}
