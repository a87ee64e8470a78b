pub mod markup;
pub mod wrapper;

#[cfg(test)]
mod tests;

pub use markup::{content_tag, escape_html, MarkupBuilder};
pub use wrapper::{wrap_children, WrapError, WrapResult, WrapRule};
