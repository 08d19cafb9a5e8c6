//! Domain identifier types with validation
//!
//! The clinic code is the join key across all five source collections. It is
//! an opaque string: no trimming, case folding or other normalization is ever
//! applied, so `"C001"` and `"c001 "` are different clinics.
//!
//! Keys read from the store are taken as-is ([`ClinicCode::from_key`], and the
//! serde impls). Only codes typed by a user go through the non-blank check of
//! [`ClinicCode::new`] / [`FromStr`].

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Clinic identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use clinic_dashboard::domain::ids::ClinicCode;
/// use std::str::FromStr;
///
/// let code = ClinicCode::from_str("EC-MH-0142").unwrap();
/// assert_eq!(code.as_str(), "EC-MH-0142");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ClinicCode(String);

impl ClinicCode {
    /// Wraps a key read from a source collection, whatever its content
    pub fn from_key(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Creates a new ClinicCode from user input
    ///
    /// # Returns
    ///
    /// Returns `Err` if the code is empty or whitespace only. The value is
    /// stored exactly as given.
    pub fn new(code: impl Into<String>) -> Result<Self, String> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err("Clinic code cannot be empty".to_string());
        }
        Ok(Self(code))
    }

    /// Returns the clinic code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ClinicCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClinicCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<String> for ClinicCode {
    fn from(key: String) -> Self {
        Self::from_key(key)
    }
}

impl From<ClinicCode> for String {
    fn from(code: ClinicCode) -> Self {
        code.0
    }
}

impl AsRef<str> for ClinicCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ClinicCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
