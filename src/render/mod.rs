pub mod cpu;
pub mod geometry;
pub mod png;
pub mod scene;
