//! 项目配置文档
//!
//! `package.json` 与 `tsconfig.json` 的强类型模型，每次初始化都整体重写

pub mod package_json;
pub mod tsconfig;

pub use package_json::{PackageJson, Scripts};
pub use tsconfig::{CompilerOptions, TsConfig};
