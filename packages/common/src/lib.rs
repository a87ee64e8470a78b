pub mod attributes;
pub mod classes;
pub mod error;
pub mod result;
pub mod validation;

pub use attributes::*;
pub use classes::*;
pub use error::*;
pub use result::*;
pub use validation::*;
