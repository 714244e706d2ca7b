// Library exports for testing
pub mod app_icon;
pub mod canvas;
pub mod constants;
pub mod generate;
pub mod menubar;
pub mod outputs;
pub mod waveform;
