//! Image provider integrations for Tableau.
//!
//! Each provider implements [`tableau_interface::ImageProvider`]. Vendor
//! request and response shapes stay inside their module; only the
//! provider-agnostic contract from `tableau_core` crosses the boundary.

mod dryrun;
#[cfg(feature = "gemini")]
pub mod gemini;

pub use dryrun::DryrunProvider;
#[cfg(feature = "gemini")]
pub use gemini::GeminiImageClient;
