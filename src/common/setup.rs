use bevy::prelude::*;

use crate::common::error::SceneError;

/// Startup ordering: config is loaded before anything reads it, and the
/// debug panel is built only after every helper has been registered.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SetupSet {
    Config,
    Scene,
    Camera,
    Panel,
}

/// Sink for fallible setup systems. Failures are reported and the app keeps
/// running with whatever was built before the error.
pub fn log_setup_error(In(result): In<Result<(), SceneError>>) {
    if let Err(err) = result {
        error!("Error in scene setup -> {err}");
    }
}
