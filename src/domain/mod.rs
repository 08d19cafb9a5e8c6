//! Domain models and types for the clinic dashboard.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ClinicCode`])
//! - **Domain models** ([`ClinicRecord`], [`EquipmentCatalog`], [`RegionInventoryMap`])
//! - **Error types** ([`DashboardError`], [`FetchError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use clinic_dashboard::domain::{ClinicCode, ClinicRecord};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let clinic = ClinicRecord::new(ClinicCode::new("C001")?)
//!     .with_name("Andheri East")
//!     .with_rent_status("In-House Clinic");
//!
//! assert!(clinic.is_in_house());
//! # Ok(())
//! # }
//! ```

pub mod clinic;
pub mod errors;
pub mod ids;
pub mod inventory;
pub mod result;

// Re-export commonly used types for convenience
pub use clinic::{
    ClinicRecord, ClosureStatus, RelocationEntry, RelocationInfo, RentStatus, SecurityDeposit,
};
pub use errors::{DashboardError, FetchError};
pub use ids::ClinicCode;
pub use inventory::{CatalogEntry, EquipmentCatalog, ItemQuantities, RegionInventoryMap};
pub use result::Result;
