//! Input assembly: from UI selections to a canonical [`GenerationRequest`].

use crate::{CharacterSlot, GenerationRequest, InstructionTemplate, ReferenceAsset};
use tableau_error::{ValidationError, ValidationErrorKind};
use tracing::{debug, instrument};

/// Validate the user's selections and build a generation request.
///
/// Characters are filtered to slots that are selected and hold an image, in
/// slot order. The background is encoded only when it will be used. Nothing
/// is encoded if validation fails.
///
/// # Errors
///
/// - [`ValidationErrorKind::NoCharacterSelected`] when no usable character
///   slot remains, whatever the instruction says.
/// - [`ValidationErrorKind::EmptyInstruction`] when the instruction is blank
///   after trimming.
///
/// # Examples
///
/// ```
/// use tableau_core::{CharacterSlot, InstructionTemplate, ReferenceAsset, assemble};
///
/// let slots = vec![
///     CharacterSlot::with_asset(0, ReferenceAsset::new(vec![1, 2, 3], "image/png"), true),
///     CharacterSlot::empty(1),
/// ];
/// let request = assemble(&slots, None, false, "waving").unwrap();
/// assert_eq!(request.characters().len(), 1);
/// assert_eq!(*request.template(), InstructionTemplate::Base);
/// ```
#[instrument(
    skip_all,
    fields(
        slots = characters.len(),
        use_background = use_background,
        has_background = background.is_some()
    )
)]
pub fn assemble(
    characters: &[CharacterSlot],
    background: Option<&ReferenceAsset>,
    use_background: bool,
    instruction: &str,
) -> Result<GenerationRequest, ValidationError> {
    let selected: Vec<&ReferenceAsset> = characters
        .iter()
        .filter_map(CharacterSlot::selected_asset)
        .collect();

    if selected.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::NoCharacterSelected));
    }

    if instruction.trim().is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyInstruction));
    }

    let background = background.filter(|asset| !asset.is_empty());
    let template = InstructionTemplate::select(use_background, background.is_some());
    let characters = selected.into_iter().map(ReferenceAsset::encode).collect::<Vec<_>>();
    let background = background
        .filter(|_| template.includes_background())
        .map(ReferenceAsset::encode);

    debug!(
        characters = characters.len(),
        background = background.is_some(),
        template = %template,
        "Assembled generation request"
    );

    Ok(GenerationRequest::new(
        characters,
        background,
        use_background,
        instruction.to_string(),
        template,
    ))
}
