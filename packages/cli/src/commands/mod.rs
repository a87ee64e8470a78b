pub mod build;
pub mod render;
pub mod wrap;

pub use build::{build, BuildArgs};
pub use render::{render, RenderArgs};
pub use wrap::{wrap, WrapArgs};
