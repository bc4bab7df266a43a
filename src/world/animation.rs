use bevy::prelude::*;

use crate::common::config::SceneConfig;

/// Marks an object whose Y rotation advances every frame.
#[derive(Component, Debug, Default)]
pub struct Spin;

/// Per-frame tick: a fixed increment, not scaled by frame time, so the
/// animation speed follows the frame rate.
pub fn spin_objects(config: Res<SceneConfig>, mut spinning: Query<&mut Transform, With<Spin>>) {
    for mut transform in spinning.iter_mut() {
        transform.rotate_local_y(config.rotation_per_frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaw(app: &App, entity: Entity) -> f32 {
        let rotation = app.world().get::<Transform>(entity).unwrap().rotation;
        rotation.to_euler(EulerRot::YXZ).0
    }

    #[test]
    fn each_tick_adds_the_fixed_increment() {
        let mut app = App::new();
        app.insert_resource(SceneConfig::default())
            .add_systems(Update, spin_objects);
        let spinning = app.world_mut().spawn((Spin, Transform::default())).id();
        let still = app.world_mut().spawn(Transform::default()).id();

        app.update();
        assert!((yaw(&app, spinning) - 0.02).abs() < 1e-5);

        app.update();
        app.update();
        assert!((yaw(&app, spinning) - 0.06).abs() < 1e-5);
        assert_eq!(yaw(&app, still), 0.0);
    }

    #[test]
    fn increment_comes_from_config() {
        let mut app = App::new();
        app.insert_resource(SceneConfig {
            rotation_per_frame: 0.1,
            ..default()
        })
        .add_systems(Update, spin_objects);
        let spinning = app.world_mut().spawn((Spin, Transform::default())).id();

        app.update();
        assert!((yaw(&app, spinning) - 0.1).abs() < 1e-5);
    }

    #[test]
    fn spin_keeps_translation_and_scale() {
        let mut app = App::new();
        app.insert_resource(SceneConfig::default())
            .add_systems(Update, spin_objects);
        let start = Transform::from_xyz(10.0, 0.0, 0.0).with_scale(Vec3::splat(5.0));
        let spinning = app.world_mut().spawn((Spin, start)).id();

        app.update();
        let transform = app.world().get::<Transform>(spinning).unwrap();
        assert_eq!(transform.translation, start.translation);
        assert_eq!(transform.scale, start.scale);
    }
}
