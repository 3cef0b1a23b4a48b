//! The reference board: every slot the user can fill before generating.
//!
//! User actions never mutate a board in place. Each transition returns a new
//! board value, and slots that did not change keep sharing their payloads.

use crate::{BackgroundSlot, CharacterSlot, GenerationRequest, ReferenceAsset, assemble};
use derive_getters::Getters;
use tableau_error::ValidationError;

/// Number of character slots offered by default.
pub const DEFAULT_CHARACTER_SLOTS: usize = 5;

/// Character slots plus the background slot.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ReferenceBoard {
    /// Character slots in display order
    characters: Vec<CharacterSlot>,
    /// Background slot
    background: BackgroundSlot,
}

impl Default for ReferenceBoard {
    fn default() -> Self {
        Self::with_slots(DEFAULT_CHARACTER_SLOTS)
    }
}

impl ReferenceBoard {
    /// A board with `count` empty character slots, numbered from zero.
    pub fn with_slots(count: usize) -> Self {
        Self {
            characters: (0..count).map(CharacterSlot::empty).collect(),
            background: BackgroundSlot::default(),
        }
    }

    fn map_character(&self, id: usize, f: impl Fn(&CharacterSlot) -> CharacterSlot) -> Self {
        Self {
            characters: self
                .characters
                .iter()
                .map(|slot| if *slot.id() == id { f(slot) } else { slot.clone() })
                .collect(),
            background: self.background.clone(),
        }
    }

    /// Attach (or replace) the image in character slot `id`.
    pub fn attach_character(&self, id: usize, asset: ReferenceAsset) -> Self {
        self.map_character(id, |slot| slot.replace_asset(Some(asset.clone())))
    }

    /// Remove the image from character slot `id`, clearing its selection.
    pub fn remove_character(&self, id: usize) -> Self {
        self.map_character(id, |slot| slot.replace_asset(None))
    }

    /// Select or deselect character slot `id`.
    pub fn set_character_selected(&self, id: usize, selected: bool) -> Self {
        self.map_character(id, |slot| slot.set_selected(selected))
    }

    /// Attach (or replace) the background image.
    pub fn attach_background(&self, asset: ReferenceAsset) -> Self {
        Self {
            characters: self.characters.clone(),
            background: self.background.replace_asset(Some(asset)),
        }
    }

    /// Remove the background image, clearing the use flag.
    pub fn remove_background(&self) -> Self {
        Self {
            characters: self.characters.clone(),
            background: self.background.replace_asset(None),
        }
    }

    /// Toggle whether the background is kept fixed in the output.
    pub fn set_use_background(&self, use_background: bool) -> Self {
        Self {
            characters: self.characters.clone(),
            background: self.background.set_use_background(use_background),
        }
    }

    /// Number of slots that are selected and hold an image.
    pub fn selected_count(&self) -> usize {
        self.characters
            .iter()
            .filter(|slot| slot.selected_asset().is_some())
            .count()
    }

    /// Whether the generate action should be enabled for `instruction`.
    pub fn can_generate(&self, instruction: &str) -> bool {
        self.selected_count() > 0 && !instruction.trim().is_empty()
    }

    /// Assemble a request from the board's current selections.
    pub fn assemble(&self, instruction: &str) -> Result<GenerationRequest, ValidationError> {
        assemble(
            &self.characters,
            self.background.asset().as_ref(),
            *self.background.use_background(),
            instruction,
        )
    }
}
