//! 应用层

pub mod dto;
mod service;

pub use service::ProductService;
