//! common - 通用类型和工具库

pub mod money;
pub mod types;
pub mod utils;

pub use money::*;
pub use types::*;
pub use utils::*;
