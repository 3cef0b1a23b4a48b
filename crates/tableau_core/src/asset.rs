//! Reference assets and the slots that hold them.

use crate::EncodedImage;
use derive_getters::Getters;
use std::sync::Arc;

/// A user-supplied reference image.
///
/// The payload is shared immutably, so handing an asset to the assembler
/// never lets anyone mutate the bytes behind the UI's back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceAsset {
    bytes: Arc<[u8]>,
    mime: String,
}

impl ReferenceAsset {
    /// Create an asset from raw image bytes.
    pub fn new(bytes: impl Into<Arc<[u8]>>, mime: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime: mime.into(),
        }
    }

    /// Raw image bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// MIME type reported for the image.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Encode the payload for transport.
    pub fn encode(&self) -> EncodedImage {
        EncodedImage::from_bytes(&self.bytes, self.mime.clone())
    }

    /// Whether both assets point at the same attached payload.
    pub fn same_payload(&self, other: &ReferenceAsset) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes)
    }
}

/// One character reference slot.
///
/// A slot without an asset is never selected. An empty payload counts as no
/// asset.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CharacterSlot {
    /// Stable slot identifier
    id: usize,
    /// Attached image, if any
    asset: Option<ReferenceAsset>,
    /// Whether the slot participates in generation
    selected: bool,
}

impl CharacterSlot {
    /// An empty, unselected slot.
    pub fn empty(id: usize) -> Self {
        Self {
            id,
            asset: None,
            selected: false,
        }
    }

    /// A slot holding `asset`, selected or not.
    pub fn with_asset(id: usize, asset: ReferenceAsset, selected: bool) -> Self {
        Self::empty(id).replace_asset(Some(asset)).set_selected(selected)
    }

    /// Replace the attached asset.
    ///
    /// Removing the asset also clears the selection.
    pub fn replace_asset(&self, asset: Option<ReferenceAsset>) -> Self {
        let asset = asset.filter(|asset| !asset.is_empty());
        let selected = asset.is_some() && self.selected;
        Self {
            id: self.id,
            asset,
            selected,
        }
    }

    /// Change the selection; ignored while the slot is empty.
    pub fn set_selected(&self, selected: bool) -> Self {
        Self {
            id: self.id,
            asset: self.asset.clone(),
            selected: selected && self.asset.is_some(),
        }
    }

    /// The asset, if the slot is selected and holds one.
    pub fn selected_asset(&self) -> Option<&ReferenceAsset> {
        if self.selected {
            self.asset.as_ref()
        } else {
            None
        }
    }
}

/// The optional background slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct BackgroundSlot {
    /// Attached background image, if any
    asset: Option<ReferenceAsset>,
    /// Whether the background should be kept fixed in the output
    use_background: bool,
}

impl BackgroundSlot {
    /// A slot holding `asset`.
    pub fn with_asset(asset: ReferenceAsset, use_background: bool) -> Self {
        Self::default()
            .replace_asset(Some(asset))
            .set_use_background(use_background)
    }

    /// Replace the attached asset; removing it also clears the use flag.
    ///
    /// An empty payload is treated as removal.
    pub fn replace_asset(&self, asset: Option<ReferenceAsset>) -> Self {
        let asset = asset.filter(|asset| !asset.is_empty());
        let use_background = asset.is_some() && self.use_background;
        Self {
            asset,
            use_background,
        }
    }

    /// Change the use flag; ignored while the slot is empty.
    pub fn set_use_background(&self, use_background: bool) -> Self {
        Self {
            asset: self.asset.clone(),
            use_background: use_background && self.asset.is_some(),
        }
    }
}
