// UI module: the helper visibility panel

pub mod button_styles;
pub mod debug_panel;

pub use debug_panel::DebugPanelPlugin;
