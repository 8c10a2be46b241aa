pub mod audio;
pub mod display;
