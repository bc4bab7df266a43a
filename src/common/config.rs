//! Scene configuration with compile-time defaults and an optional RON override file.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::constants::{camera, config, helpers, scene};
use crate::common::error::SceneError;
use crate::common::setup::{log_setup_error, SetupSet};

/// Loads `SceneConfig` and orders the startup sets that depend on it.
pub struct SceneConfigPlugin;

impl Plugin for SceneConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneConfig>()
            .init_resource::<ConfigSource>()
            .configure_sets(
                Startup,
                (
                    SetupSet::Config,
                    SetupSet::Scene,
                    SetupSet::Camera,
                    SetupSet::Panel,
                )
                    .chain(),
            )
            .add_systems(
                Startup,
                load_scene_config.pipe(log_setup_error).in_set(SetupSet::Config),
            );
    }
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub background_color: [f32; 3],
    pub light_intensity: f32,
    pub light_range: f32,
    /// Radians added to each spinning object's Y rotation per frame.
    pub rotation_per_frame: f32,
    pub sun_scale: f32,
    pub earth_scale: f32,
    pub moon_scale: f32,
    pub earth_orbit_radius: f32,
    pub moon_orbit_radius: f32,
    pub camera_fov_degrees: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_height: f32,
    pub helper_grid_units: u32,
    pub helpers_visible: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background_color: scene::BACKGROUND_COLOR,
            light_intensity: scene::LIGHT_INTENSITY,
            light_range: scene::LIGHT_RANGE,
            rotation_per_frame: scene::ROTATION_PER_FRAME,
            sun_scale: scene::SUN_SCALE,
            earth_scale: scene::EARTH_SCALE,
            moon_scale: scene::MOON_SCALE,
            earth_orbit_radius: scene::EARTH_ORBIT_RADIUS,
            moon_orbit_radius: scene::MOON_ORBIT_RADIUS,
            camera_fov_degrees: camera::FOV_DEGREES,
            camera_near: camera::NEAR_PLANE,
            camera_far: camera::FAR_PLANE,
            camera_height: camera::INITIAL_HEIGHT,
            helper_grid_units: helpers::GRID_UNITS,
            helpers_visible: false,
        }
    }
}

impl SceneConfig {
    /// Reads a config file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SceneError::ReadConfig {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = ron::from_str(&contents).map_err(|source| SceneError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        let positive = [
            ("sun_scale", self.sun_scale),
            ("earth_scale", self.earth_scale),
            ("moon_scale", self.moon_scale),
            ("camera_near", self.camera_near),
            ("camera_height", self.camera_height),
            ("light_range", self.light_range),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SceneError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let finite = [
            ("camera_far", self.camera_far),
            ("light_intensity", self.light_intensity),
            ("rotation_per_frame", self.rotation_per_frame),
            ("earth_orbit_radius", self.earth_orbit_radius),
            ("moon_orbit_radius", self.moon_orbit_radius),
            ("background_color.r", self.background_color[0]),
            ("background_color.g", self.background_color[1]),
            ("background_color.b", self.background_color[2]),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SceneError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if !(self.camera_fov_degrees > 0.0 && self.camera_fov_degrees < 180.0) {
            return Err(SceneError::InvalidConfig(format!(
                "camera_fov_degrees must be in (0, 180), got {}",
                self.camera_fov_degrees
            )));
        }
        if self.camera_far <= self.camera_near {
            return Err(SceneError::InvalidConfig(format!(
                "camera_far ({}) must exceed camera_near ({})",
                self.camera_far, self.camera_near
            )));
        }
        if self.light_intensity < 0.0 {
            return Err(SceneError::InvalidConfig(format!(
                "light_intensity must be non-negative, got {}",
                self.light_intensity
            )));
        }
        if self.helper_grid_units == 0 {
            return Err(SceneError::InvalidConfig(
                "helper_grid_units must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Config location: `$SOLAR_SYSTEM_CONFIG` if set, otherwise `solar_system.ron`.
pub fn config_path() -> PathBuf {
    std::env::var_os(config::CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_PATH))
}

/// File the startup loader reads. Resolved from the environment unless
/// inserted before `SceneConfigPlugin` is added.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ConfigSource(pub PathBuf);

impl Default for ConfigSource {
    fn default() -> Self {
        Self(config_path())
    }
}

/// On failure the resource keeps its previous (default) value.
pub fn load_scene_config(
    source: Res<ConfigSource>,
    mut scene_config: ResMut<SceneConfig>,
) -> Result<(), SceneError> {
    *scene_config = SceneConfig::load(&source.0)?;
    info!("Scene config ready ({})", source.0.display());
    Ok(())
}
