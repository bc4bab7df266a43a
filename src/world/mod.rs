// Scene content: the solar-system hierarchy and its per-frame animation

pub mod animation;
pub mod solar_system;

pub use solar_system::SolarSystemPlugin;
