pub mod anchors;
pub mod io;
pub mod render;

// Re-export key functions for easier usage
pub use anchors::decorate;
pub use render::{render, render_decorated, slugify};
