pub mod color;
pub mod registry;
