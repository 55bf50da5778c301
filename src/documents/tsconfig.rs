//! tsconfig.json 编译器配置文档
//!
//! 输出目录与源码根目录固定为 `./build` 和 `./src`，与项目所在位置无关。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub target: String,
    pub module: String,
    pub out_dir: String,
    pub root_dir: String,
    pub strict: bool,
    pub es_module_interop: bool,
    pub skip_lib_check: bool,
    pub force_consistent_casing_in_file_names: bool,
    pub base_url: String,
    /// 路径别名：`@/*` -> `src/*`，`!/*` -> 项目根目录
    pub paths: BTreeMap<String, Vec<String>>,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        let mut paths = BTreeMap::new();
        paths.insert("@/*".to_string(), vec!["src/*".to_string()]);
        paths.insert("!/*".to_string(), vec!["./*".to_string()]);

        Self {
            target: "ES2020".to_string(),
            module: "commonjs".to_string(),
            out_dir: "./build".to_string(),
            root_dir: "./src".to_string(),
            strict: true,
            es_module_interop: true,
            skip_lib_check: true,
            force_consistent_casing_in_file_names: true,
            base_url: ".".to_string(),
            paths,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    pub compiler_options: CompilerOptions,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for TsConfig {
    fn default() -> Self {
        Self {
            compiler_options: CompilerOptions::default(),
            include: vec!["src/**/*.ts".to_string()],
            exclude: vec!["node_modules".to_string()],
        }
    }
}
