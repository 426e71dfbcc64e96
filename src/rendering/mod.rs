mod debug;
mod oracle;
mod render;

pub use debug::debug;
pub use oracle::oracular_render;
pub use render::{render, render_to};
