use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::common::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::common::setup::SetupSet;
use crate::rendering::camera::MainCamera;

/// Keeps the reported viewport size and the camera aspect in step with the window.
pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .add_systems(Startup, seed_viewport_from_window.before(SetupSet::Camera))
            .add_systems(Update, handle_window_resize);
    }
}

/// Size of the rendering surface in logical pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Picks up the real window size, which may differ from the requested one.
pub fn seed_viewport_from_window(
    mut viewport: ResMut<Viewport>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    if window.width() > 0.0 && window.height() > 0.0 {
        viewport.width = window.width();
        viewport.height = window.height();
    }
}

pub fn handle_window_resize(
    mut resized: EventReader<WindowResized>,
    mut viewport: ResMut<Viewport>,
    mut projections: Query<&mut Projection, With<MainCamera>>,
) {
    // Minimized windows report a zero size; keep the last usable one
    let Some(latest) = resized
        .read()
        .filter(|event| event.width > 0.0 && event.height > 0.0)
        .last()
    else {
        return;
    };

    viewport.width = latest.width;
    viewport.height = latest.height;

    for mut projection in projections.iter_mut() {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = viewport.aspect_ratio();
        }
    }

    debug!(
        "Viewport resized to {}x{} (aspect {:.3})",
        viewport.width,
        viewport.height,
        viewport.aspect_ratio()
    );
}
