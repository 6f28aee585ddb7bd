use serde::{Deserialize, Serialize};

/// Marker currently under the pointer, addressed by series slot and sample
/// index so the engine can look styling and data back up on each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverTarget {
    pub series_index: usize,
    pub sample_index: usize,
}

/// Public pointer state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub inside: bool,
    pub x: f64,
    pub y: f64,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            inside: false,
            x: 0.0,
            y: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pointer: PointerState,
    hover: Option<HoverTarget>,
}

impl InteractionState {
    #[must_use]
    pub fn pointer(self) -> PointerState {
        self.pointer
    }

    #[must_use]
    pub fn hover(self) -> Option<HoverTarget> {
        self.hover
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.inside = true;
        self.pointer.x = x;
        self.pointer.y = y;
    }

    /// Hover state (and with it the tooltip) dies with pointer exit.
    pub fn on_pointer_leave(&mut self) {
        self.pointer.inside = false;
        self.hover = None;
    }

    pub fn set_hover(&mut self, hover: Option<HoverTarget>) {
        self.hover = hover;
    }
}
