// Rendering module: camera, viewport tracking and debug drawing

pub mod axis_grid_helper;
pub mod camera;
pub mod viewport;

pub use axis_grid_helper::AxisGridHelperPlugin;
pub use camera::OrbitCameraPlugin;
pub use viewport::ViewportPlugin;
