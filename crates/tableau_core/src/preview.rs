//! Scoped preview handles for attached reference images.
//!
//! A [`PreviewHandle`] is registered when a file is attached and released
//! when the handle is dropped. [`PreviewSet`] keeps one handle per board slot
//! and drops the stale one whenever a slot's image is replaced or removed.

use crate::{ReferenceAsset, ReferenceBoard};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::trace;

#[derive(Debug, Default)]
struct RegistryState {
    next_id: u64,
    live: BTreeSet<u64>,
}

/// Tracks which previews are currently alive.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    state: Arc<Mutex<RegistryState>>,
}

impl PreviewRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut RegistryState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// Register a preview for `asset`.
    pub fn acquire(&self, asset: &ReferenceAsset) -> PreviewHandle {
        let id = self.with_state(|state| {
            let id = state.next_id;
            state.next_id += 1;
            state.live.insert(id);
            id
        });
        trace!(preview = id, mime = asset.mime(), "Acquired preview");

        PreviewHandle {
            id,
            url: asset.encode().data_url(),
            asset: asset.clone(),
            registry: self.clone(),
        }
    }

    /// Number of previews that have not been released.
    pub fn live_count(&self) -> usize {
        self.with_state(|state| state.live.len())
    }

    /// Whether the preview `id` is still alive.
    pub fn is_live(&self, id: u64) -> bool {
        self.with_state(|state| state.live.contains(&id))
    }

    fn release(&self, id: u64) {
        self.with_state(|state| state.live.remove(&id));
        trace!(preview = id, "Released preview");
    }
}

/// A live preview; released on drop.
#[derive(Debug)]
pub struct PreviewHandle {
    id: u64,
    url: String,
    asset: ReferenceAsset,
    registry: PreviewRegistry,
}

impl PreviewHandle {
    /// Registry identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// `data:` URL rendering the attached image.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether this handle previews exactly `asset`.
    pub fn previews(&self, asset: &ReferenceAsset) -> bool {
        self.asset.same_payload(asset)
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}

/// Board slot a preview belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotKey {
    /// Character slot by id
    Character(usize),
    /// The background slot
    Background,
}

/// One preview per filled board slot.
#[derive(Debug)]
pub struct PreviewSet {
    registry: PreviewRegistry,
    handles: BTreeMap<SlotKey, PreviewHandle>,
}

impl PreviewSet {
    /// Create an empty set backed by `registry`.
    pub fn new(registry: PreviewRegistry) -> Self {
        Self {
            registry,
            handles: BTreeMap::new(),
        }
    }

    /// Reconcile previews with `board`.
    ///
    /// New images get a handle; replaced or removed images have their old
    /// handle dropped. Unchanged slots keep their handle.
    pub fn sync(&mut self, board: &ReferenceBoard) {
        let mut wanted: BTreeMap<SlotKey, &ReferenceAsset> = board
            .characters()
            .iter()
            .filter_map(|slot| {
                slot.asset()
                    .as_ref()
                    .map(|asset| (SlotKey::Character(*slot.id()), asset))
            })
            .collect();
        if let Some(asset) = board.background().asset() {
            wanted.insert(SlotKey::Background, asset);
        }

        self.handles
            .retain(|key, handle| wanted.get(key).is_some_and(|asset| handle.previews(asset)));

        for (key, asset) in wanted {
            if !self.handles.contains_key(&key) {
                let handle = self.registry.acquire(asset);
                self.handles.insert(key, handle);
            }
        }
    }

    /// Preview for `key`, if the slot holds an image.
    pub fn get(&self, key: SlotKey) -> Option<&PreviewHandle> {
        self.handles.get(&key)
    }

    /// Number of held previews.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether no previews are held.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
