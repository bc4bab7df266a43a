//! Log output setup.
//!
//! The default level follows the build profile (see `build.rs`). With the
//! `logging` feature, setting `SOLAR_SYSTEM_FLAME=<file>` additionally records
//! span timings in a format `inferno-flamegraph` understands.

use bevy::log::{BoxedLayer, Level, LogPlugin};
use bevy::prelude::*;

pub const FLAME_OUTPUT_ENV: &str = "SOLAR_SYSTEM_FLAME";

#[cfg(log_profile = "release")]
const DEFAULT_LEVEL: Level = Level::ERROR;
#[cfg(log_profile = "profiling")]
const DEFAULT_LEVEL: Level = Level::WARN;
#[cfg(not(any(log_profile = "release", log_profile = "profiling")))]
const DEFAULT_LEVEL: Level = Level::INFO;

pub fn log_plugin() -> LogPlugin {
    LogPlugin {
        level: DEFAULT_LEVEL,
        filter: "wgpu=error,naga=warn".to_string(),
        custom_layer: flame_layer,
    }
}

/// Keeps the flame writer alive; dropping it flushes the output file.
#[cfg(feature = "logging")]
#[derive(Resource)]
struct FlameGuard(
    #[allow(dead_code)] tracing_flame::FlushGuard<std::io::BufWriter<std::fs::File>>,
);

#[cfg(feature = "logging")]
fn flame_layer(app: &mut App) -> Option<BoxedLayer> {
    use tracing_flame::FlameLayer;
    use tracing_subscriber::Registry;

    let path = std::env::var_os(FLAME_OUTPUT_ENV)?;
    match FlameLayer::<Registry, _>::with_file(&path) {
        Ok((layer, guard)) => {
            app.insert_resource(FlameGuard(guard));
            Some(Box::new(layer))
        }
        Err(err) => {
            // The subscriber is not installed yet, so tracing macros would be dropped.
            eprintln!("flame output disabled: {err}");
            None
        }
    }
}

#[cfg(not(feature = "logging"))]
fn flame_layer(_app: &mut App) -> Option<BoxedLayer> {
    None
}
