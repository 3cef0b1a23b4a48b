//! What to do when only some of the concurrent calls fail.

use serde::{Deserialize, Serialize};

/// Failure policy applied after every call has settled.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FailurePolicy {
    /// Any failed call fails the whole generation, discarding sibling images.
    #[default]
    AllOrNothing,
    /// Return whatever images arrived as long as there is at least one.
    PartialSuccess,
}
