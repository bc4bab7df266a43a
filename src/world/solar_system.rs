use bevy::prelude::*;

use crate::common::config::SceneConfig;
use crate::common::constants::scene::*;
use crate::common::error::SceneError;
use crate::common::setup::{log_setup_error, SetupSet};
use crate::rendering::axis_grid_helper::{AxisGridHelper, HelperRegistry};
use crate::world::animation::{spin_objects, Spin};

pub struct SolarSystemPlugin;

impl Plugin for SolarSystemPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneConfig>()
            .init_resource::<HelperRegistry>()
            .add_systems(
                Startup,
                setup_solar_system.pipe(log_setup_error).in_set(SetupSet::Scene),
            )
            .add_systems(Update, spin_objects);
    }
}

// Scene node markers
#[derive(Component, Debug)]
pub struct SolarSystemRoot;

#[derive(Component, Debug)]
pub struct Sun;

#[derive(Component, Debug)]
pub struct EarthOrbit;

#[derive(Component, Debug)]
pub struct Earth;

#[derive(Component, Debug)]
pub struct MoonOrbit;

#[derive(Component, Debug)]
pub struct Moon;

fn srgb([r, g, b]: [f32; 3]) -> Color {
    Color::srgb(r, g, b)
}

fn emissive(rgb: [f32; 3]) -> LinearRgba {
    srgb(rgb).to_linear() * EMISSIVE_STRENGTH
}

/// Builds the hierarchy:
///
/// ```text
/// Solar System
/// ├── Sun
/// └── Earth Orbit
///     ├── Earth
///     └── Moon Orbit
///         └── Moon
/// ```
///
/// Everything but the moon orbit spins, so the moon's path follows the earth
/// orbit while the pivot itself stays fixed relative to the earth.
pub fn setup_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<HelperRegistry>,
    config: Res<SceneConfig>,
) -> Result<(), SceneError> {
    config.validate()?;

    commands.insert_resource(ClearColor(srgb(config.background_color)));

    commands.spawn((
        Name::new("Sun Light"),
        PointLight {
            intensity: config.light_intensity,
            range: config.light_range,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
    ));

    let sphere = meshes.add(Sphere::new(SPHERE_RADIUS).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS));

    // The sun's light source sits inside it, so it is drawn unlit
    let sun_material = materials.add(StandardMaterial {
        base_color: srgb(SUN_COLOR),
        emissive: emissive(SUN_COLOR),
        unlit: true,
        ..default()
    });
    let earth_material = materials.add(StandardMaterial {
        base_color: srgb(EARTH_COLOR),
        emissive: emissive(EARTH_EMISSIVE),
        ..default()
    });
    let moon_material = materials.add(StandardMaterial {
        base_color: srgb(MOON_COLOR),
        emissive: emissive(MOON_EMISSIVE),
        ..default()
    });

    let solar_system = commands
        .spawn((
            Name::new("Solar System"),
            SolarSystemRoot,
            Spin,
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    let sun = commands
        .spawn((
            Name::new("Sun"),
            Sun,
            Spin,
            Mesh3d(sphere.clone()),
            MeshMaterial3d(sun_material),
            Transform::from_scale(Vec3::splat(config.sun_scale)),
        ))
        .id();
    commands.entity(solar_system).add_child(sun);

    let earth_orbit = commands
        .spawn((
            Name::new("Earth Orbit"),
            EarthOrbit,
            Spin,
            Transform::from_xyz(config.earth_orbit_radius, 0.0, 0.0),
            Visibility::default(),
        ))
        .id();
    commands.entity(solar_system).add_child(earth_orbit);

    let earth = commands
        .spawn((
            Name::new("Earth"),
            Earth,
            Spin,
            Mesh3d(sphere.clone()),
            MeshMaterial3d(earth_material),
            Transform::from_scale(Vec3::splat(config.earth_scale)),
        ))
        .id();
    commands.entity(earth_orbit).add_child(earth);

    let moon_orbit = commands
        .spawn((
            Name::new("Moon Orbit"),
            MoonOrbit,
            Transform::from_xyz(config.moon_orbit_radius, 0.0, 0.0),
            Visibility::default(),
        ))
        .id();
    commands.entity(earth_orbit).add_child(moon_orbit);

    let moon = commands
        .spawn((
            Name::new("Moon"),
            Moon,
            Spin,
            Mesh3d(sphere),
            MeshMaterial3d(moon_material),
            Transform::from_scale(Vec3::splat(config.moon_scale)),
        ))
        .id();
    commands.entity(moon_orbit).add_child(moon);

    for (node, label) in [
        (solar_system, "Solar System"),
        (sun, "Sun"),
        (earth_orbit, "Earth Orbit"),
        (earth, "Earth"),
        (moon_orbit, "Moon Orbit"),
        (moon, "Moon"),
    ] {
        AxisGridHelper::attach(
            &mut commands,
            &mut registry,
            node,
            label,
            config.helper_grid_units,
            config.helpers_visible,
        );
    }

    info!("Solar system ready: {} debug helpers registered", registry.helpers.len());
    Ok(())
}
