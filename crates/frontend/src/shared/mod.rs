pub mod navigation;
pub mod pause;
