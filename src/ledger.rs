//! Embedding ledger
//!
//! The ledger records which cultures one embed run actually folded into the
//! assembly. It is the only state that crosses from the embed step to the
//! cleanup step — possibly across a process boundary — so it serializes to a
//! plain semicolon-delimited string suitable for a build step output property.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ResfoldError;

/// Separator used in the serialized form (`"de;de-DE;fr"`)
pub const CULTURE_SEPARATOR: char = ';';

/// Set of cultures embedded by one successful embed run
///
/// Immutable once produced; hand it verbatim to [`cleanup`](crate::cleanup).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddingLedger {
    cultures: BTreeSet<String>,
}

impl EmbeddingLedger {
    /// Create a ledger from the cultures an embed run committed
    pub fn from_cultures<I, S>(cultures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cultures: cultures.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the semicolon-delimited form produced by [`to_delimited`](Self::to_delimited)
    ///
    /// Lenient about whitespace and empty segments, so round-tripping through
    /// build-step output properties (which may reformat) stays safe.
    pub fn parse(input: &str) -> Self {
        let cultures = input
            .split(CULTURE_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect();
        Self { cultures }
    }

    /// Serialize as a semicolon-joined culture list
    pub fn to_delimited(&self) -> String {
        self.cultures
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Whether no cultures were embedded
    pub fn is_empty(&self) -> bool {
        self.cultures.is_empty()
    }

    /// Number of embedded cultures
    pub fn len(&self) -> usize {
        self.cultures.len()
    }

    /// Whether a culture is recorded in this ledger
    pub fn contains(&self, culture: &str) -> bool {
        self.cultures.contains(culture)
    }

    /// Iterate cultures in stable (lexicographic) order
    pub fn cultures(&self) -> impl Iterator<Item = &str> {
        self.cultures.iter().map(String::as_str)
    }
}

impl fmt::Display for EmbeddingLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_delimited())
    }
}

impl FromStr for EmbeddingLedger {
    type Err = ResfoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
