use crate::common::constants::ui::*;
use crate::common::setup::SetupSet;
use crate::rendering::axis_grid_helper::{AxisGridHelper, HelperRegistry};
use crate::ui::button_styles::{checkbox_glyph, ButtonStyle};
use bevy::prelude::*;

pub struct DebugPanelPlugin;

impl Plugin for DebugPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HelperRegistry>()
            .add_systems(Startup, setup_debug_panel.in_set(SetupSet::Panel))
            .add_systems(
                Update,
                (handle_helper_toggles, refresh_checkbox_glyphs).chain(),
            );
    }
}

#[derive(Component)]
pub struct DebugPanel;

/// Checkbox row controlling one helper's visibility.
#[derive(Component, Debug)]
pub struct HelperToggle {
    pub helper: Entity,
}

/// Text showing the checked state of `helper`.
#[derive(Component, Debug)]
pub struct CheckboxGlyph {
    pub helper: Entity,
}

pub fn setup_debug_panel(
    mut commands: Commands,
    registry: Res<HelperRegistry>,
    helpers: Query<&AxisGridHelper>,
) {
    // Top-right property panel
    commands
        .spawn((
            Name::new("Debug Panel"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(PANEL_MARGIN),
                right: Val::Px(PANEL_MARGIN),
                width: Val::Px(PANEL_WIDTH),
                padding: UiRect::all(Val::Px(PANEL_PADDING)),
                border: UiRect::all(Val::Px(1.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(ROW_GAP),
                ..default()
            },
            BackgroundColor(PANEL_COLOR),
            BorderColor(PANEL_BORDER_COLOR),
            DebugPanel,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Helpers"),
                TextFont {
                    font_size: PANEL_TITLE_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));

            for &helper in &registry.helpers {
                let Ok(axis_grid) = helpers.get(helper) else {
                    warn!("Helper {helper:?} is registered but has no AxisGridHelper");
                    continue;
                };
                spawn_checkbox_row(parent, helper, axis_grid);
            }
        });

    info!("Debug panel created with {} toggles", registry.helpers.len());
}

fn spawn_checkbox_row(parent: &mut ChildBuilder, helper: Entity, axis_grid: &AxisGridHelper) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(ROW_HEIGHT),
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(6.0),
                padding: UiRect::horizontal(Val::Px(4.0)),
                ..default()
            },
            BackgroundColor(ButtonStyle::CHECKBOX_ROW.normal),
            HelperToggle { helper },
        ))
        .with_children(|row| {
            row.spawn((
                Text::new(checkbox_glyph(axis_grid.visible)),
                TextFont {
                    font_size: ROW_TEXT_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                CheckboxGlyph { helper },
            ));
            row.spawn((
                Text::new(axis_grid.label.clone()),
                TextFont {
                    font_size: ROW_TEXT_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}

/// A press flips the visibility of the row's helper and nothing else.
pub fn handle_helper_toggles(
    mut interaction_query: Query<
        (&Interaction, &HelperToggle, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut helpers: Query<&mut AxisGridHelper>,
) {
    for (interaction, toggle, mut background_color) in interaction_query.iter_mut() {
        *background_color = ButtonStyle::CHECKBOX_ROW.color_for(*interaction).into();

        if *interaction != Interaction::Pressed {
            continue;
        }
        if let Ok(mut helper) = helpers.get_mut(toggle.helper) {
            let visible = helper.toggle();
            info!("{} helper {}", helper.label, if visible { "shown" } else { "hidden" });
        }
    }
}

pub fn refresh_checkbox_glyphs(
    changed_helpers: Query<(Entity, &AxisGridHelper), Changed<AxisGridHelper>>,
    mut glyphs: Query<(&CheckboxGlyph, &mut Text)>,
) {
    for (helper_entity, helper) in changed_helpers.iter() {
        for (glyph, mut text) in glyphs.iter_mut() {
            if glyph.helper == helper_entity {
                text.0 = checkbox_glyph(helper.visible).to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_app(labels: &[&str]) -> (App, Vec<Entity>) {
        let mut app = App::new();
        app.add_plugins(DebugPanelPlugin);

        let helpers: Vec<Entity> = labels
            .iter()
            .map(|label| {
                app.world_mut()
                    .spawn(AxisGridHelper {
                        label: label.to_string(),
                        units: 10,
                        visible: false,
                    })
                    .id()
            })
            .collect();
        app.world_mut()
            .resource_mut::<HelperRegistry>()
            .helpers
            .clone_from(&helpers);

        app.update();
        (app, helpers)
    }

    fn toggle_row(app: &mut App, helper: Entity) -> Entity {
        app.world_mut()
            .query::<(Entity, &HelperToggle)>()
            .iter(app.world())
            .find(|(_, toggle)| toggle.helper == helper)
            .map(|(row, _)| row)
            .unwrap()
    }

    fn glyph_text(app: &mut App, helper: Entity) -> String {
        app.world_mut()
            .query::<(&CheckboxGlyph, &Text)>()
            .iter(app.world())
            .find(|(glyph, _)| glyph.helper == helper)
            .map(|(_, text)| text.0.clone())
            .unwrap()
    }

    fn visible(app: &App, helper: Entity) -> bool {
        app.world().get::<AxisGridHelper>(helper).unwrap().visible
    }

    fn press(app: &mut App, row: Entity) {
        app.world_mut().entity_mut(row).insert(Interaction::Pressed);
        app.update();
        app.world_mut().entity_mut(row).insert(Interaction::Hovered);
        app.update();
    }

    #[test]
    fn one_labelled_row_per_registered_helper() {
        let (mut app, helpers) = panel_app(&["Sun", "Earth", "Moon"]);

        for &helper in &helpers {
            toggle_row(&mut app, helper);
            assert_eq!(glyph_text(&mut app, helper), UNCHECKED_GLYPH);
        }

        let labels: Vec<String> = app
            .world_mut()
            .query::<&Text>()
            .iter(app.world())
            .map(|text| text.0.clone())
            .collect();
        assert!(labels.contains(&"Sun".to_string()));
        assert!(labels.contains(&"Earth".to_string()));
        assert!(labels.contains(&"Moon".to_string()));
    }

    #[test]
    fn pressing_a_row_flips_only_its_helper() {
        let (mut app, helpers) = panel_app(&["Sun", "Earth"]);
        let (sun, earth) = (helpers[0], helpers[1]);
        let sun_row = toggle_row(&mut app, sun);

        press(&mut app, sun_row);
        assert!(visible(&app, sun));
        assert!(!visible(&app, earth));
        assert_eq!(glyph_text(&mut app, sun), CHECKED_GLYPH);
        assert_eq!(glyph_text(&mut app, earth), UNCHECKED_GLYPH);

        press(&mut app, sun_row);
        assert!(!visible(&app, sun));
        assert!(!visible(&app, earth));
        assert_eq!(glyph_text(&mut app, sun), UNCHECKED_GLYPH);
    }

    #[test]
    fn hovering_does_not_toggle() {
        let (mut app, helpers) = panel_app(&["Moon"]);
        let row = toggle_row(&mut app, helpers[0]);

        app.world_mut().entity_mut(row).insert(Interaction::Hovered);
        app.update();

        assert!(!visible(&app, helpers[0]));
    }

    #[test]
    fn full_startup_builds_one_row_per_scene_node() {
        use crate::common::config::{ConfigSource, SceneConfigPlugin};
        use crate::world::SolarSystemPlugin;

        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .insert_resource(ConfigSource(dir.path().join("absent.ron")))
            .add_plugins((SceneConfigPlugin, SolarSystemPlugin, DebugPanelPlugin));
        app.update();

        let registered = app.world().resource::<HelperRegistry>().helpers.clone();
        let rows: Vec<Entity> = app
            .world_mut()
            .query::<&HelperToggle>()
            .iter(app.world())
            .map(|toggle| toggle.helper)
            .collect();

        assert_eq!(registered.len(), 6);
        assert_eq!(rows.len(), 6);
        assert!(registered.iter().all(|helper| rows.contains(helper)));
    }
}
