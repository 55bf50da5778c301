//! 起始源码模板嵌入
//!
//! `src/index.ts` 与 `src/module.ts` 在编译时嵌入二进制，
//! 两者之间的无扩展名相对导入依赖 tsconfig 的模块解析补全。

use anyhow::{anyhow, Result};
use rust_embed::RustEmbed;

/// 起始源码资源（编译时嵌入）
#[derive(RustEmbed)]
#[folder = "embedded/templates/"]
pub struct TemplateAssets;

impl TemplateAssets {
    /// 入口文件 `index.ts`：导入 `./module` 并调用 `hello()`
    pub fn get_index_ts() -> Result<String> {
        Self::get_file("index.ts")
    }

    /// 兄弟模块 `module.ts`：定义打印问候语的 `hello()`
    pub fn get_module_ts() -> Result<String> {
        Self::get_file("module.ts")
    }

    fn get_file(filename: &str) -> Result<String> {
        let file = Self::get(filename)
            .ok_or_else(|| anyhow!("Template '{}' not found", filename))?;

        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| anyhow!("Failed to decode template '{}': {}", filename, e))?;

        Ok(content.to_string())
    }

    /// 列出所有嵌入的模板文件
    pub fn list_templates() -> Vec<String> {
        Self::iter().map(|path| path.as_ref().to_string()).collect()
    }
}
