pub mod presets;
pub mod render;
