mod pointer;

pub use pointer::{DragGesture, PointerEvent, PointerState};
