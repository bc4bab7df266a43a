use std::f32::consts::FRAC_PI_2;

use bevy::math::Isometry3d;
use bevy::prelude::*;

use crate::common::constants::helpers::*;

/// Draws the axes and grid of every visible helper.
pub struct AxisGridHelperPlugin;

impl Plugin for AxisGridHelperPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HelperRegistry>()
            .insert_gizmo_config(
                AxisGridGizmos,
                GizmoConfig {
                    line_width: LINE_WIDTH,
                    depth_bias: DEPTH_BIAS,
                    ..default()
                },
            )
            .add_systems(Update, draw_axis_grid_helpers);
    }
}

/// Gizmo group for helper lines, so they can be biased in front of the scene
/// without affecting any other gizmos.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct AxisGridGizmos;

/// Debug visual for one scene node: local axes plus a grid in the node's XZ plane.
///
/// The helper lives on its own child entity so it inherits the node's
/// transform without touching the node itself.
#[derive(Component, Debug, Clone)]
pub struct AxisGridHelper {
    pub label: String,
    pub units: u32,
    pub visible: bool,
}

impl AxisGridHelper {
    /// Spawns a helper under `node` and registers it for the debug panel.
    pub fn attach(
        commands: &mut Commands,
        registry: &mut HelperRegistry,
        node: Entity,
        label: impl Into<String>,
        units: u32,
        visible: bool,
    ) -> Entity {
        let label = label.into();
        let helper = commands
            .spawn((
                Name::new(format!("{label} Helper")),
                AxisGridHelper {
                    label,
                    units,
                    visible,
                },
                Transform::default(),
            ))
            .id();
        commands.entity(node).add_child(helper);
        registry.helpers.push(helper);
        helper
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}

/// Helpers in registration order, which is also the order of the panel rows.
#[derive(Resource, Debug, Default)]
pub struct HelperRegistry {
    pub helpers: Vec<Entity>,
}

pub fn draw_axis_grid_helpers(
    mut gizmos: Gizmos<AxisGridGizmos>,
    helpers: Query<(&AxisGridHelper, &GlobalTransform)>,
) {
    for (helper, transform) in helpers.iter() {
        if !helper.visible {
            continue;
        }

        gizmos.axes(*transform, AXES_LENGTH);

        let (scale, rotation, translation) = transform.to_scale_rotation_translation();
        // Gizmo grids lie in the XY plane; tip them over into XZ
        let grid_rotation = rotation * Quat::from_rotation_x(FRAC_PI_2);
        // One cell per local unit, so the grid spans `units` across
        gizmos.grid(
            Isometry3d::new(translation, grid_rotation),
            UVec2::splat(helper.units),
            Vec2::splat(scale.x),
            GRID_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_parents_helper_to_node_and_registers_it() {
        let mut app = App::new();
        app.init_resource::<HelperRegistry>();
        let node = app.world_mut().spawn(Transform::default()).id();
        app.add_systems(
            Update,
            move |mut commands: Commands, mut registry: ResMut<HelperRegistry>| {
                AxisGridHelper::attach(&mut commands, &mut registry, node, "Earth", 10, false);
            },
        );
        app.update();

        let world = app.world();
        let helpers = &world.resource::<HelperRegistry>().helpers;
        assert_eq!(helpers.len(), 1);
        let helper = helpers[0];
        assert_eq!(world.get::<Parent>(helper).map(Parent::get), Some(node));
        let component = world.get::<AxisGridHelper>(helper).unwrap();
        assert_eq!(component.label, "Earth");
        assert_eq!(component.units, 10);
        assert!(!component.visible);
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut helper = AxisGridHelper {
            label: "Sun".into(),
            units: 10,
            visible: false,
        };
        assert!(helper.toggle());
        assert!(!helper.toggle());
    }
}
