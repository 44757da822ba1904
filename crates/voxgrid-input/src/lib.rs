//! Interaction layer for voxgrid.
//!
//! Holds the camera and session toggles explicitly and maps window events to
//! camera motion and pick/edit requests:
//!
//! - a left or right click with a free cursor captures it
//! - with the cursor captured, right click places and left click removes
//! - Escape releases the cursor, F1 toggles wireframe
//! - WASD, Space/Q and Shift/E move the camera

pub mod camera;
pub mod control;
pub mod controller;
pub mod mouse;

pub use camera::CameraState;
pub use control::{ControlState, EditAction, EditBindings};
pub use controller::{EditRequest, InteractionController, LOOK_SENSITIVITY, MAX_LOOK_DELTA};
pub use mouse::MouseButton;
