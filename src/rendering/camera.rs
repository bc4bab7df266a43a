use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::common::config::SceneConfig;
use crate::common::constants::camera::*;
use crate::common::setup::SetupSet;

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera.in_set(SetupSet::Camera))
            .add_systems(Update, orbit_camera_controls);
    }
}

#[derive(Component, Debug)]
pub struct MainCamera;

/// Orbit controls: the camera sits on a sphere around `target` and always
/// looks at it. Angles are measured against `up`, so the pole of the sphere
/// points along `up` rather than world Y.
#[derive(Component, Debug, Clone)]
pub struct OrbitController {
    pub target: Vec3,
    pub up: Vec3,
    pub distance: f32,
    /// Azimuth around `up`.
    pub yaw: f32,
    /// Elevation above the plane perpendicular to `up`.
    pub pitch: f32,
    pub rotate_sensitivity: f32,
    pub pan_sensitivity: f32,
    pub zoom_scale: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub pitch_limit: f32,
}

impl OrbitController {
    /// Controller reproducing a camera at `eye` looking at `target`.
    pub fn looking_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let up = up.normalize_or(Vec3::Y);
        let local = Self::frame(up).inverse() * (eye - target);
        let distance = local.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let pitch = if local.length_squared() > 0.0 {
            (local.z / local.length()).clamp(-1.0, 1.0).asin()
        } else {
            0.0
        };

        Self {
            target,
            up,
            distance,
            yaw: local.y.atan2(local.x),
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            rotate_sensitivity: ROTATE_SENSITIVITY,
            pan_sensitivity: PAN_SENSITIVITY,
            zoom_scale: ZOOM_SCALE,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            pitch_limit: PITCH_LIMIT,
        }
    }

    // Rotation taking the controller's Z-up local frame to world space
    fn frame(up: Vec3) -> Quat {
        Quat::from_rotation_arc(Vec3::Z, up)
    }

    /// Mouse drag in pixels, horizontal drag spins around `up`.
    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * self.rotate_sensitivity;
        self.pitch = (self.pitch + delta.y * self.rotate_sensitivity)
            .clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Moves the target in the camera's screen plane; farther cameras pan faster.
    pub fn pan(&mut self, delta: Vec2) {
        let rotation = self.transform().rotation;
        let right = rotation * Vec3::X;
        let screen_up = rotation * Vec3::Y;
        let scale = self.distance * self.pan_sensitivity;
        self.target += (-right * delta.x + screen_up * delta.y) * scale;
    }

    /// Positive `lines` (wheel up) moves the camera closer.
    pub fn zoom(&mut self, lines: f32) {
        self.distance =
            (self.distance * self.zoom_scale.powf(lines)).clamp(self.min_distance, self.max_distance);
    }

    pub fn transform(&self) -> Transform {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let local = Vec3::new(cos_pitch * cos_yaw, cos_pitch * sin_yaw, sin_pitch) * self.distance;
        let eye = self.target + Self::frame(self.up) * local;
        Transform::from_translation(eye).looking_at(self.target, self.up)
    }
}

pub fn setup_camera(mut commands: Commands, config: Res<SceneConfig>) {
    let eye = Vec3::new(0.0, config.camera_height, 0.0);
    let controller = OrbitController::looking_at(eye, Vec3::ZERO, Vec3::Z);

    commands.spawn((
        Name::new("Main Camera"),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.camera_fov_degrees.to_radians(),
            near: config.camera_near,
            far: config.camera_far,
            ..default()
        }),
        controller.transform(),
        controller,
        MainCamera,
    ));

    info!("Camera placed at {eye} looking at the origin");
}

/// Left drag orbits, right drag pans, the wheel zooms. Drags that start over
/// the debug panel are left to the panel.
pub fn orbit_camera_controls(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut mouse_wheel: EventReader<MouseWheel>,
    interactions: Query<&Interaction>,
    mut cameras: Query<(&mut OrbitController, &mut Transform), With<MainCamera>>,
) {
    let drag: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    let scroll: f32 = mouse_wheel
        .read()
        .map(|wheel| match wheel.unit {
            MouseScrollUnit::Line => wheel.y,
            MouseScrollUnit::Pixel => wheel.y / PIXELS_PER_SCROLL_LINE,
        })
        .sum();

    let pointer_on_ui = interactions
        .iter()
        .any(|interaction| *interaction != Interaction::None);
    if pointer_on_ui {
        return;
    }

    let orbiting = mouse_buttons.pressed(MouseButton::Left) && drag != Vec2::ZERO;
    let panning = mouse_buttons.pressed(MouseButton::Right) && drag != Vec2::ZERO;
    let zooming = scroll != 0.0;
    if !(orbiting || panning || zooming) {
        return;
    }

    for (mut controller, mut transform) in cameras.iter_mut() {
        if orbiting {
            controller.orbit(drag);
        }
        if panning {
            controller.pan(drag);
        }
        if zooming {
            controller.zoom(scroll);
        }
        *transform = controller.transform();
    }
}
