//! Cadastre number syntax validation.
//!
//! A cadastre number is four colon-separated digit groups:
//! district (2), region (2), quarter (6 or 7), parcel (1+), e.g.
//! `77:03:0001001:1`. Validation is a pure full-string match and
//! always runs before any network call.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Correct-syntax example shown to users when a candidate is rejected.
pub const EXAMPLE: &str = "77:03:0001001:1";

static GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}:\d{6,7}:\d+$").expect("grammar regex compiles"));

/// A candidate string that does not match the cadastre number grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Неверный формат кадастрового номера. Пример: 77:03:0001001:1")]
pub struct InvalidFormat {
    /// The rejected input, kept for logging.
    pub candidate: String,
}

/// A syntactically valid cadastre number.
///
/// Construction goes through [`CadastreNumber::parse`]; holding one is
/// proof the grammar matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CadastreNumber(String);

impl CadastreNumber {
    /// Validate `candidate` against the grammar. No trimming is done
    /// here; callers strip surrounding whitespace first.
    pub fn parse(candidate: &str) -> Result<Self, InvalidFormat> {
        if GRAMMAR.is_match(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(InvalidFormat {
                candidate: candidate.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CadastreNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
