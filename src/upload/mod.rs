//! Product image upload control: validation, upload and the state the
//! product form reads the image URL from.

mod validation;
mod widget;

pub use validation::*;
pub use widget::*;
