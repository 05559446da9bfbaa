/// Input events the viewer understands.
/// Pushed by DOM event closures, drained once per frame tick.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Pointer moved over the canvas. NDC axes in [-1, 1] with +Y up
    /// (inverted from screen Y); client coordinates place the tooltip.
    PointerMove {
        ndc_x: f32,
        ndc_y: f32,
        client_x: f32,
        client_y: f32,
    },
    /// Click on the canvas at the last known pointer position.
    Click,
    /// Speed slider changed for the planet at this catalog index.
    SetSpeed { planet: usize, value: f32 },
    /// Pause button clicked.
    TogglePause,
    /// Theme toggle clicked.
    ToggleTheme,
    /// Back-to-overview button clicked.
    ReturnToOverview,
    /// Window resized; new viewport aspect ratio.
    Resize { aspect: f32 },
}

/// A queue of input events.
/// DOM closures write events in; the frame tick reads and drains them.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from a DOM event closure).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::TogglePause);
        q.push(InputEvent::SetSpeed { planet: 2, value: 0.5 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn pointer_move_carries_both_coordinate_spaces() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove {
            ndc_x: 0.5,
            ndc_y: -0.25,
            client_x: 640.0,
            client_y: 360.0,
        });
        match q.drain()[0] {
            InputEvent::PointerMove { ndc_x, ndc_y, client_x, client_y } => {
                assert_eq!(ndc_x, 0.5);
                assert_eq!(ndc_y, -0.25);
                assert_eq!(client_x, 640.0);
                assert_eq!(client_y, 360.0);
            }
            _ => panic!("expected PointerMove"),
        }
    }
}
