pub mod annotation;
pub mod operations;
pub mod sequence;

pub use annotation::*;
pub use sequence::*;
