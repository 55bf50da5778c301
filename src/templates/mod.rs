//! 嵌入资源管理
//!
//! 使用 rust-embed 将起始源码模板编译进二进制

pub mod files;

pub use files::TemplateAssets;
