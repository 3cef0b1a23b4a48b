//! Trait interfaces for image generation providers.
//!
//! The orchestrator only ever talks to a provider through [`ImageProvider`],
//! which keeps the concurrency and failure policy independent of any vendor
//! SDK and lets tests substitute scripted fakes.

mod provider;

pub use provider::ImageProvider;
