//! Headless voxgrid sandbox.
//!
//! Builds the demo volume, replays a scripted session of key presses and
//! clicks through the interaction controller and logs every edit.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod scene;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use voxgrid_input::{CameraState, InteractionController};
use voxgrid_raycast::RaycastConfig;
use voxgrid_volume::SharedVolume;

use crate::scene::{demo_volume, Step, EYE, SCRIPT};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let volume = SharedVolume::new(demo_volume()?);
    let bounds = volume.with_read(|volume| volume.bounds());
    info!(%bounds, occupied = volume.read().occupied_count(), "demo volume ready");

    let config = RaycastConfig::default();
    let mut controller = InteractionController::new(CameraState::new(EYE));
    let mut edits = 0usize;

    for step in SCRIPT {
        match *step {
            Step::Key(key) => {
                controller.press_key(key);
                controller.release_key(key);
            }
            Step::Look(dx, dy, repeat) => {
                for _ in 0..repeat {
                    controller.look(dx, dy);
                }
            }
            Step::Walk(key, frames) => {
                controller.press_key(key);
                for _ in 0..frames {
                    controller.update(1.0);
                }
                controller.release_key(key);
            }
            Step::Click(button) => {
                let Some(request) = controller.press_button(button) else {
                    let locked = controller.control().cursor_locked;
                    info!(?button, locked, "click without edit");
                    continue;
                };
                match request.apply_shared(&volume, &config) {
                    Ok(Some(outcome)) => {
                        edits += 1;
                        info!(
                            cell = %outcome.target,
                            previous = %outcome.previous.block_id,
                            current = %outcome.current.block_id,
                            "edit applied"
                        );
                    }
                    Ok(None) => info!(?button, "nothing to edit"),
                    Err(err) => warn!(%err, "edit rejected"),
                }
            }
        }
    }

    let camera = controller.camera();
    info!(
        edits,
        occupied = volume.read().occupied_count(),
        position = ?camera.position,
        wireframe = controller.control().wireframe,
        "session finished"
    );
    Ok(())
}
