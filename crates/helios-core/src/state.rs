//! Shared mutable UI state, owned by the composition root and handed to the
//! systems that read it — no free-floating module globals.

use std::collections::HashMap;

use crate::catalog;

/// Per-planet angular-speed multipliers.
///
/// Invariant: every catalog planet name has an entry; values are
/// non-negative. Mutated only from drained control-panel events, read once
/// per frame by the motion system.
#[derive(Debug, Clone)]
pub struct SpeedState {
    values: HashMap<&'static str, f32>,
}

impl SpeedState {
    /// Seed every planet with its catalog base speed.
    pub fn from_catalog() -> Self {
        let values = catalog::planets()
            .iter()
            .map(|p| (p.name, p.base_speed))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> f32 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, name: &'static str, value: f32) {
        self.values.insert(name, value.max(0.0));
    }
}

/// Global play/pause and theme flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiMode {
    /// Freezes all orbital, self-rotation and sun motion when set.
    pub paused: bool,
    /// Light theme active.
    pub light: bool,
}
