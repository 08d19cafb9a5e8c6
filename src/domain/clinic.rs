//! Clinic domain model
//!
//! A [`ClinicRecord`] is the flat view of one clinic produced by joining the
//! facility, location and operational collections. Field names follow the
//! source documents so a merged JSON object deserializes directly.

use super::ids::ClinicCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Source field carrying the clinic identifier in merged records
pub const CLINIC_CODE_FIELD: &str = "E-Clinic Code";

/// Rent status that excludes fans from a clinic's equipment allotment
pub const IN_HOUSE_CLINIC: &str = "In-House Clinic";

/// Closure status of a clinic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ClosureStatus {
    /// Operating normally (also the reading for an absent status)
    #[default]
    Active,
    /// Closure scheduled
    Pending,
    /// Closed
    Closed,
}

impl ClosureStatus {
    /// Case-insensitive parse used for status badges.
    ///
    /// Anything that is not `closed` or `pending` reads as [`ClosureStatus::Active`].
    pub fn from_badge_text(raw: Option<&str>) -> Self {
        match raw.map(str::to_lowercase).as_deref() {
            Some("closed") => ClosureStatus::Closed,
            Some("pending") => ClosureStatus::Pending,
            _ => ClosureStatus::Active,
        }
    }

    /// Returns the canonical label
    pub fn as_str(&self) -> &'static str {
        match self {
            ClosureStatus::Active => "Active",
            ClosureStatus::Pending => "Pending",
            ClosureStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for ClosureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rent arrangement of a clinic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RentStatus {
    /// Exactly `"In-House Clinic"`
    InHouseClinic,
    /// Any other arrangement, kept verbatim
    Other(String),
}

impl RentStatus {
    /// Whether this clinic is hosted in-house
    pub fn is_in_house(&self) -> bool {
        matches!(self, RentStatus::InHouseClinic)
    }

    /// Returns the status as it appears in the source data
    pub fn as_str(&self) -> &str {
        match self {
            RentStatus::InHouseClinic => IN_HOUSE_CLINIC,
            RentStatus::Other(s) => s,
        }
    }
}

impl From<String> for RentStatus {
    fn from(value: String) -> Self {
        if value == IN_HOUSE_CLINIC {
            RentStatus::InHouseClinic
        } else {
            RentStatus::Other(value)
        }
    }
}

impl From<&str> for RentStatus {
    fn from(value: &str) -> Self {
        RentStatus::from(value.to_string())
    }
}

impl From<RentStatus> for String {
    fn from(status: RentStatus) -> Self {
        match status {
            RentStatus::InHouseClinic => IN_HOUSE_CLINIC.to_string(),
            RentStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for RentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Security deposit as stored
///
/// The stored form is kept because a numeric zero means "no deposit" while
/// the text `"0"` is shown as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecurityDeposit {
    Amount(serde_json::Number),
    Flag(bool),
    Text(String),
}

impl SecurityDeposit {
    /// Numeric zero, `false` or empty text
    pub fn is_blank(&self) -> bool {
        match self {
            SecurityDeposit::Amount(n) => n.as_f64().is_some_and(|v| v == 0.0),
            SecurityDeposit::Flag(b) => !b,
            SecurityDeposit::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for SecurityDeposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityDeposit::Amount(n) => write!(f, "{n}"),
            SecurityDeposit::Flag(b) => write!(f, "{b}"),
            SecurityDeposit::Text(s) => f.write_str(s),
        }
    }
}

/// Relocation state for one relocation type (e.g. `equipment`, `staff`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RelocationEntry {
    #[serde(default, deserialize_with = "text_or_number")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "text_or_number")]
    pub relocated_to: Option<String>,
}

impl RelocationEntry {
    /// Status label, `Not Relocated` when absent or empty
    pub fn status_label(&self) -> &str {
        match self.status.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => "Not Relocated",
        }
    }
}

/// Relocation type → relocation state
pub type RelocationInfo = BTreeMap<String, RelocationEntry>;

/// One clinic, merged across the facility, location and operational collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicRecord {
    #[serde(rename = "E-Clinic Code")]
    pub code: ClinicCode,

    #[serde(rename = "clinic_name", default, deserialize_with = "text_or_number")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "text_or_number")]
    pub branch_name: Option<String>,

    #[serde(default, deserialize_with = "text_or_number")]
    pub region: Option<String>,

    #[serde(default, deserialize_with = "text_or_number")]
    pub state: Option<String>,

    #[serde(default, deserialize_with = "text_or_number")]
    pub start_date: Option<String>,

    /// Raw closure status; see [`ClinicRecord::badge_status`] and
    /// [`ClinicRecord::is_closed`] for the two ways it is read
    #[serde(default, deserialize_with = "text_or_number")]
    pub closure_status: Option<String>,

    #[serde(default, deserialize_with = "text_or_number")]
    pub closure_week: Option<String>,

    #[serde(default)]
    pub rent_status: Option<RentStatus>,

    #[serde(default, deserialize_with = "text_or_number")]
    pub ageing: Option<String>,

    #[serde(default)]
    pub security_deposit: Option<SecurityDeposit>,

    #[serde(default)]
    pub relocation_info: Option<RelocationInfo>,

    /// Source fields without a typed counterpart
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ClinicRecord {
    /// Creates a record carrying only its identifier
    pub fn new(code: ClinicCode) -> Self {
        Self {
            code,
            name: None,
            branch_name: None,
            region: None,
            state: None,
            start_date: None,
            closure_status: None,
            closure_week: None,
            rent_status: None,
            ageing: None,
            security_deposit: None,
            relocation_info: None,
            extra: BTreeMap::new(),
        }
    }

    /// Sets the clinic name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the state
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the raw closure status
    pub fn with_closure_status(mut self, status: impl Into<String>) -> Self {
        self.closure_status = Some(status.into());
        self
    }

    /// Sets the rent status
    pub fn with_rent_status(mut self, status: impl Into<RentStatus>) -> Self {
        self.rent_status = Some(status.into());
        self
    }

    /// Whether the clinic is hosted in-house (drives the fan exclusion)
    pub fn is_in_house(&self) -> bool {
        self.rent_status.as_ref().is_some_and(RentStatus::is_in_house)
    }

    /// Exact, case-sensitive `"Closed"` check used for the active count
    pub fn is_closed(&self) -> bool {
        self.closure_status.as_deref() == Some("Closed")
    }

    /// Exact, case-sensitive `"Pending"` check used for the pending-closure count
    pub fn is_pending_closure(&self) -> bool {
        self.closure_status.as_deref() == Some("Pending")
    }

    /// Case-insensitive status reading for badges
    pub fn badge_status(&self) -> ClosureStatus {
        ClosureStatus::from_badge_text(self.closure_status.as_deref())
    }

    /// Badge label: the raw status, or `Active` when absent
    pub fn badge_label(&self) -> &str {
        match self.closure_status.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => ClosureStatus::Active.as_str(),
        }
    }

    /// Security deposit label, `NA` when absent or blank
    pub fn security_deposit_label(&self) -> String {
        match &self.security_deposit {
            Some(deposit) if !deposit.is_blank() => deposit.to_string(),
            _ => "NA".to_string(),
        }
    }
}

/// Accepts a JSON string, number or boolean as text; `null` reads as absent
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected text or number, found {other}"
        ))),
    }
}
