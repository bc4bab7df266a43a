// Viewer configuration constants
// Compile-time defaults; anything a user may want to tweak is mirrored in SceneConfig

// === WINDOW AND DISPLAY ===
pub const WINDOW_TITLE: &str = "Solar System";
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 720.0;

// === CONFIG FILE ===
pub mod config {
    pub const DEFAULT_CONFIG_PATH: &str = "solar_system.ron";
    pub const CONFIG_PATH_ENV: &str = "SOLAR_SYSTEM_CONFIG";
}

// === SCENE LAYOUT ===
pub mod scene {
    // Radians added to every spinning object's Y rotation each frame
    pub const ROTATION_PER_FRAME: f32 = 0.02;

    pub const SUN_SCALE: f32 = 5.0;
    pub const EARTH_SCALE: f32 = 1.0;
    pub const MOON_SCALE: f32 = 0.5;

    // Pivot offsets along the parent's X axis
    pub const EARTH_ORBIT_RADIUS: f32 = 10.0;
    pub const MOON_ORBIT_RADIUS: f32 = 2.0;

    // Shared sphere mesh
    pub const SPHERE_RADIUS: f32 = 1.0;
    pub const SPHERE_SECTORS: u32 = 10;
    pub const SPHERE_STACKS: u32 = 10;

    // Colors as sRGB triples
    pub const BACKGROUND_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
    pub const SUN_COLOR: [f32; 3] = [1.0, 1.0, 0.0];
    pub const EARTH_COLOR: [f32; 3] = [0.133, 0.2, 1.0];
    pub const EARTH_EMISSIVE: [f32; 3] = [0.067, 0.133, 0.267];
    pub const MOON_COLOR: [f32; 3] = [0.533, 0.533, 0.533];
    pub const MOON_EMISSIVE: [f32; 3] = [0.133, 0.133, 0.133];

    // Emissive colors are multiplied into the camera's default exposure range
    pub const EMISSIVE_STRENGTH: f32 = 100.0;

    // Point light sitting at the center of the sun
    pub const LIGHT_INTENSITY: f32 = 2_000_000.0;
    pub const LIGHT_RANGE: f32 = 100.0;
}

// === CAMERA SYSTEM ===
pub mod camera {
    pub const FOV_DEGREES: f32 = 40.0;
    pub const NEAR_PLANE: f32 = 0.1;
    pub const FAR_PLANE: f32 = 1000.0;
    pub const INITIAL_HEIGHT: f32 = 50.0;

    // Orbit controls
    pub const ROTATE_SENSITIVITY: f32 = 0.005; // Radians per pixel of mouse drag
    pub const PAN_SENSITIVITY: f32 = 0.0015;   // World units per pixel, scaled by distance
    pub const ZOOM_SCALE: f32 = 0.95;          // Distance multiplier per scroll line
    pub const PIXELS_PER_SCROLL_LINE: f32 = 40.0;
    pub const MIN_DISTANCE: f32 = 2.0;
    pub const MAX_DISTANCE: f32 = 500.0;
    pub const PITCH_LIMIT: f32 = 1.55; // Just short of the pole to keep look_at stable
}

// === DEBUG HELPERS ===
pub mod helpers {
    use bevy::prelude::*;

    pub const GRID_UNITS: u32 = 10;
    pub const AXES_LENGTH: f32 = 1.0;
    pub const GRID_COLOR: Color = Color::srgba(0.55, 0.55, 0.55, 0.6);
    pub const LINE_WIDTH: f32 = 2.0;
    // Negative bias draws helper lines in front of the meshes they annotate
    pub const DEPTH_BIAS: f32 = -1.0;
}

// === UI CONSTANTS ===
pub mod ui {
    use bevy::prelude::*;

    pub const PANEL_WIDTH: f32 = 180.0;
    pub const PANEL_MARGIN: f32 = 10.0;
    pub const PANEL_PADDING: f32 = 8.0;
    pub const PANEL_TITLE_SIZE: f32 = 16.0;
    pub const ROW_HEIGHT: f32 = 24.0;
    pub const ROW_GAP: f32 = 2.0;
    pub const ROW_TEXT_SIZE: f32 = 13.0;

    pub const CHECKED_GLYPH: &str = "[x]";
    pub const UNCHECKED_GLYPH: &str = "[ ]";

    pub const PANEL_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 0.85);
    pub const PANEL_BORDER_COLOR: Color = Color::srgb(0.4, 0.4, 0.4);
    pub const TEXT_COLOR: Color = Color::WHITE;
}

// === HOTKEYS ===
pub mod hotkeys {
    use bevy::prelude::KeyCode;

    pub const WIREFRAME_TOGGLE: KeyCode = KeyCode::KeyT;
}
