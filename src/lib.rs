// tscinit - Library Root
//
// TypeScript 项目初始化：package.json、tsconfig.json 与起始源码

pub mod documents;
pub mod logging;
pub mod project;
pub mod templates;
pub mod utils;

// 重新导出常用类型
pub use documents::{PackageJson, TsConfig};
pub use project::{init_project, resolve_target, InitReport};
