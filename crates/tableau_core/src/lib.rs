//! Core data types and input assembly for Tableau.
//!
//! This crate holds the reference board the user fills, the input assembler
//! that turns it into a [`GenerationRequest`], and the provider-agnostic
//! request/response contract shared by every image provider.

mod assembler;
mod asset;
mod board;
mod instruction;
mod media;
mod observability;
mod outcome;
mod preview;
mod request;

pub use assembler::assemble;
pub use asset::{BackgroundSlot, CharacterSlot, ReferenceAsset};
pub use board::{DEFAULT_CHARACTER_SLOTS, ReferenceBoard};
pub use instruction::InstructionTemplate;
pub use media::{DEFAULT_IMAGE_MIME, EncodedImage, extension_for_mime, mime_for_path};
pub use observability::{LogFormat, init_tracing};
pub use outcome::{GenerationOutcome, GenerationResult};
pub use preview::{PreviewHandle, PreviewRegistry, PreviewSet, SlotKey};
pub use request::{
    GenerationRequest, Modality, ProviderRequest, ProviderResponse, RequestPart, ResponsePart,
};
pub use tableau_error::FailureKind;
