//! OPD Clinic Core Library
//!
//! Client-side core for a clinic-management front-end: the dental tooth
//! chart model, the OPD summary builder, form validation, and the clinic
//! registry with pluggable local persistence.
//!
//! # Architecture
//!
//! ```text
//! Form input → Validation → Summary Builder → OpdSummary → Print Renderer
//!                  │              ▲
//!            field errors    ToothChart / MedicineEntry / VitalsRecord
//!
//! Registry (patients / doctors / appointments)
//!     └── KvStore (in-memory or SQLite mirror of local storage)
//! ```
//!
//! # Core Principle
//!
//! The builder is pure: one validated input snapshot in, one immutable
//! summary out. It never touches the registry, the auth session, or any I/O.
//!
//! # Modules
//!
//! - [`chart`]: Tooth chart id scheme and sparse annotation set
//! - [`models`]: Domain types (OpdFormInput, MedicineEntry, OpdSummary, etc.)
//! - [`builder`]: Normalization pipeline from form input to printable summary
//! - [`validate`]: Pre-builder field validation
//! - [`store`]: Clinic registry over an injected key-value store
//! - [`auth`]: Opaque session gate for the external identity provider

pub mod auth;
pub mod builder;
pub mod chart;
pub mod models;
pub mod store;
pub mod validate;

// Re-export commonly used types
pub use builder::{build_summary, BuildError};
pub use chart::{tooth_id, Quadrant, ToothChart};
pub use models::{
    DosageUnit, DurationUnit, FrequencyUnit, MedicineEntry, OpdFormInput, OpdSummary,
    RadiographEntry, RadiographKind, TestEntry, VitalsRecord,
};
pub use store::{KvStore, MemoryStore, Registry, SqliteStore};
pub use validate::{validate, FieldError};
