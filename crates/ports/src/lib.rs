//! ports - 抽象 trait 层
//!
//! 定义基础设施的抽象接口，具体实现由各服务的 infrastructure 层提供

mod repository;

pub use repository::*;
