//! Frame-driven scene runtime.
//!
//! A [`Runtime`] owns every mounted scene's nodes in one generational arena.
//! Each host frame calls [`Runtime::tick`]; each subscribed scene advances its
//! clock, updates its nodes in fixed order, then its camera, and queues
//! render commands for the host to drain.

mod camera;
mod clock;
mod composer;
mod controller;
mod frame_loop;
mod interaction;
mod node_arena;
mod render_3d;
mod runtime;

pub use camera::{Camera3D, Ray};
pub use clock::{Clock, DEFAULT_MAX_DELTA};
pub use controller::{CameraController, OrbitExplore, PointerFollow, controller_for};
pub use frame_loop::FrameLoop;
pub use interaction::{InteractionSystem, pick};
pub use node_arena::NodeArena;
pub use runtime::{MountedScene, Runtime};
