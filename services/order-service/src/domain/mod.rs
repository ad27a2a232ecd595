//! 领域层

mod order;
mod repository;

pub use order::*;
pub use repository::*;
