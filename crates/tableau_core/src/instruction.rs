//! Instruction templates sent alongside the reference images.

use serde::{Deserialize, Serialize};

/// Which textual template wraps the user's instruction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InstructionTemplate {
    /// Characters only; references steer style and appearance.
    Base,
    /// Characters placed into the supplied background, which must not change.
    FixedBackground,
}

impl InstructionTemplate {
    /// Pick the template for a request.
    ///
    /// `FixedBackground` is chosen only when the user asked to use the
    /// background and one is attached.
    ///
    /// # Examples
    ///
    /// ```
    /// use tableau_core::InstructionTemplate;
    ///
    /// assert_eq!(InstructionTemplate::select(true, true), InstructionTemplate::FixedBackground);
    /// assert_eq!(InstructionTemplate::select(true, false), InstructionTemplate::Base);
    /// assert_eq!(InstructionTemplate::select(false, true), InstructionTemplate::Base);
    /// ```
    pub fn select(use_background: bool, has_background: bool) -> Self {
        if use_background && has_background {
            InstructionTemplate::FixedBackground
        } else {
            InstructionTemplate::Base
        }
    }

    /// Compose the final prompt around the user's instruction.
    pub fn render(&self, instruction: &str) -> String {
        match self {
            InstructionTemplate::Base => format!(
                "Using the provided character images as a strict reference for style and \
                 appearance, create a high-resolution 2K image of them doing the following: \
                 \"{}\".",
                instruction
            ),
            InstructionTemplate::FixedBackground => format!(
                "Using the provided background image as the exact background, and using the \
                 provided character images as a strict reference for style and appearance, \
                 create a high-resolution 2K image of the characters doing the following: \
                 \"{}\". Do not change the background.",
                instruction
            ),
        }
    }

    /// Whether the background image is part of the request.
    pub fn includes_background(&self) -> bool {
        matches!(self, InstructionTemplate::FixedBackground)
    }
}
