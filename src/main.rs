use bevy::pbr::wireframe::{Wireframe, WireframePlugin};
use bevy::prelude::*;

mod common;
mod rendering;
mod ui;
mod world;

use crate::common::config::SceneConfigPlugin;
use crate::common::constants;
use rendering::{AxisGridHelperPlugin, OrbitCameraPlugin, ViewportPlugin};
use ui::DebugPanelPlugin;
use world::SolarSystemPlugin;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: constants::WINDOW_TITLE.into(),
                        resolution: (constants::WINDOW_WIDTH, constants::WINDOW_HEIGHT).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(common::logging::log_plugin()),
            WireframePlugin,
            SceneConfigPlugin,
            SolarSystemPlugin,
            OrbitCameraPlugin,
            ViewportPlugin,
            AxisGridHelperPlugin,
            DebugPanelPlugin,
        ))
        .add_systems(Update, toggle_wireframe)
        .run();
}

// Debug function to toggle wireframe rendering on the celestial bodies
fn toggle_wireframe(
    keyboard: Res<ButtonInput<KeyCode>>,
    bodies: Query<(Entity, Option<&Wireframe>), With<Mesh3d>>,
    mut commands: Commands,
) {
    if keyboard.just_pressed(constants::hotkeys::WIREFRAME_TOGGLE) {
        for (entity, wireframe) in bodies.iter() {
            if wireframe.is_some() {
                commands.entity(entity).remove::<Wireframe>();
                debug!("Removed wireframe from entity {:?}", entity);
            } else {
                commands.entity(entity).insert(Wireframe);
                debug!("Added wireframe to entity {:?}", entity);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wireframe_app() -> (App, Entity) {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, toggle_wireframe);
        let body = app.world_mut().spawn(Mesh3d(Handle::default())).id();
        (app, body)
    }

    fn press_toggle(app: &mut App) {
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.release(constants::hotkeys::WIREFRAME_TOGGLE);
        keyboard.clear();
        keyboard.press(constants::hotkeys::WIREFRAME_TOGGLE);
    }

    #[test]
    fn hotkey_flips_wireframe_on_meshes() {
        let (mut app, body) = wireframe_app();
        let bare = app.world_mut().spawn(Transform::default()).id();

        press_toggle(&mut app);
        app.update();
        assert!(app.world().get::<Wireframe>(body).is_some());
        assert!(app.world().get::<Wireframe>(bare).is_none());

        press_toggle(&mut app);
        app.update();
        assert!(app.world().get::<Wireframe>(body).is_none());
    }

    #[test]
    fn held_key_does_not_retoggle() {
        let (mut app, body) = wireframe_app();

        press_toggle(&mut app);
        app.update();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
        app.update();

        assert!(app.world().get::<Wireframe>(body).is_some());
    }
}
