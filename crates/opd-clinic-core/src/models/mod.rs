//! Domain models for the OPD clinic system.

mod form;
mod prescription;
mod records;
mod summary;
mod vitals;

pub use form::*;
pub use prescription::*;
pub use records::*;
pub use summary::*;
pub use vitals::*;
