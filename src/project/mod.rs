//! 项目管理模块
//!
//! 目标目录解析、文件生成和结果输出

pub mod initializer;
pub mod report;
pub mod resolve;

// 重导出
pub use initializer::*;
pub use report::{print_banner, print_summary};
pub use resolve::{project_name, resolve_target, resolve_target_from_cwd};
