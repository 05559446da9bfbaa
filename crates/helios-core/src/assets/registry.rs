use crate::assets::manifest::{TextureEntry, TextureManifest};

/// Slot index into the texture registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Load state of one texture slot.
///
/// Loads resolve asynchronously on the host side; a failed load is silent
/// and non-fatal — the body simply stays untextured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Ready,
    Failed,
}

/// Registry of texture slots, built once by the scene builder.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    entries: Vec<(&'static str, LoadState)>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image reference, deduplicating by path.
    pub fn register(&mut self, path: &'static str) -> TextureId {
        if let Some(idx) = self.entries.iter().position(|(p, _)| *p == path) {
            return TextureId(idx as u32);
        }
        self.entries.push((path, LoadState::Pending));
        TextureId((self.entries.len() - 1) as u32)
    }

    /// Record a load result reported by the host. Unknown ids are ignored.
    pub fn mark(&mut self, id: TextureId, ok: bool) {
        if let Some(entry) = self.entries.get_mut(id.0 as usize) {
            entry.1 = if ok { LoadState::Ready } else { LoadState::Failed };
            if !ok {
                log::warn!("texture failed to load: {}", entry.0);
            }
        }
    }

    /// Whether the slot's image has resolved.
    pub fn is_ready(&self, id: TextureId) -> bool {
        self.entries
            .get(id.0 as usize)
            .map(|(_, s)| *s == LoadState::Ready)
            .unwrap_or(false)
    }

    /// Number of slots that failed to load.
    pub fn failed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, s)| *s == LoadState::Failed)
            .count()
    }

    /// Number of registered slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the manifest handed to the host page.
    pub fn manifest(&self) -> TextureManifest {
        TextureManifest {
            textures: self
                .entries
                .iter()
                .enumerate()
                .map(|(i, (path, _))| TextureEntry {
                    id: i as u32,
                    path: (*path).to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_deduplicates_by_path() {
        let mut reg = TextureRegistry::new();
        let a = reg.register("image/sun.jpg");
        let b = reg.register("image/earth.jpg");
        let c = reg.register("image/sun.jpg");
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn load_state_transitions() {
        let mut reg = TextureRegistry::new();
        let id = reg.register("image/mars.jpg");
        assert!(!reg.is_ready(id));

        reg.mark(id, true);
        assert!(reg.is_ready(id));
        assert_eq!(reg.failed_count(), 0);
    }

    #[test]
    fn failed_load_is_counted_not_ready() {
        let mut reg = TextureRegistry::new();
        let id = reg.register("image/venus.jpg");
        reg.mark(id, false);
        assert!(!reg.is_ready(id));
        assert_eq!(reg.failed_count(), 1);
    }

    #[test]
    fn unknown_id_ignored() {
        let mut reg = TextureRegistry::new();
        reg.mark(TextureId(42), true);
        assert!(reg.is_empty());
    }

    #[test]
    fn manifest_lists_all_slots() {
        let mut reg = TextureRegistry::new();
        reg.register("image/sun.jpg");
        reg.register("image/saturn_ring.png");
        let manifest = reg.manifest();
        assert_eq!(manifest.textures.len(), 2);
        assert_eq!(manifest.textures[1].path, "image/saturn_ring.png");
    }
}
