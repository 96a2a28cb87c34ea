//! Speech-to-prescription structuring for the general OPD flow.
//!
//! The external language-model service is a black box: it takes dictated
//! free text and returns a pipe-delimited prescription table with fixed
//! columns Medicine/Dosage/Timing/Duration (Days). This crate holds the
//! prompt templates, the table-parsing contract, and an optional HTTP
//! client behind the `client` feature.

pub mod prompts;
pub mod structuring;

#[cfg(feature = "client")]
pub mod client;

pub use prompts::*;
pub use structuring::*;
