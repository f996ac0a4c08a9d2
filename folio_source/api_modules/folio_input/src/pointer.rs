//! Pointer input as delivered by the host: a position in normalized device
//! coordinates plus node-scoped enter/leave/click events and drag gestures.

use folio_structs::Vector2;

/// Event raised against one node's hit region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    Enter,
    Leave,
    Click,
}

/// Drag in progress for orbit-style cameras. Deltas are fractions of the
/// viewport height so the same gesture rotates equally at any resolution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragGesture {
    pub active: bool,
    /// Movement accumulated since the controller last consumed it.
    pub pending: Vector2,
}

/// Current pointer state for one canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Position in NDC, `[-1, 1]` on both axes, +Y up.
    pub ndc: Vector2,
    /// Whether the pointer is over the canvas at all.
    pub over_canvas: bool,
    pub drag: DragGesture,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer move. Out-of-range and non-finite input is clamped.
    pub fn move_to(&mut self, ndc: Vector2) {
        let ndc = ndc.clamped_ndc();
        if self.drag.active {
            // NDC spans 2 units per viewport height.
            self.drag.pending = self.drag.pending + (ndc - self.ndc) * 0.5;
        }
        self.ndc = ndc;
        self.over_canvas = true;
    }

    pub fn leave_canvas(&mut self) {
        self.over_canvas = false;
        self.end_drag();
    }

    pub fn begin_drag(&mut self) {
        self.drag.active = true;
        self.drag.pending = Vector2::ZERO;
    }

    pub fn end_drag(&mut self) {
        self.drag.active = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Takes the drag movement accumulated since the last call.
    pub fn take_drag_delta(&mut self) -> Vector2 {
        std::mem::take(&mut self.drag.pending)
    }
}
