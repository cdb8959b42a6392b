pub mod product;
pub mod upload;

pub use product::*;
pub use upload::*;
