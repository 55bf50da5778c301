//! package.json 清单文档

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// npm 脚本
///
/// 字段顺序即输出顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scripts {
    pub build: String,
    pub start: String,
    #[serde(rename = "build:start")]
    pub build_start: String,
}

impl Default for Scripts {
    fn default() -> Self {
        Self {
            build: "tsc".to_string(),
            start: "node build/index.js".to_string(),
            build_start: "npm run build && npm run start".to_string(),
        }
    }
}

/// 项目清单
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    pub name: String,
    pub version: String,
    pub main: String,
    pub scripts: Scripts,
    pub dev_dependencies: BTreeMap<String, String>,
    /// module-alias 运行时别名：`@` 指向编译输出目录
    #[serde(rename = "_moduleAliases")]
    pub module_aliases: BTreeMap<String, String>,
}

impl PackageJson {
    /// 为指定项目名生成清单
    pub fn for_project(name: impl Into<String>) -> Self {
        let mut dev_dependencies = BTreeMap::new();
        dev_dependencies.insert("typescript".to_string(), "latest".to_string());

        let mut module_aliases = BTreeMap::new();
        module_aliases.insert("@".to_string(), "build".to_string());

        Self {
            name: name.into(),
            version: "1.0.0".to_string(),
            main: "index.js".to_string(),
            scripts: Scripts::default(),
            dev_dependencies,
            module_aliases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_package_json_fields() {
        let value = serde_json::to_value(PackageJson::for_project("myapp")).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "myapp",
                "version": "1.0.0",
                "main": "index.js",
                "scripts": {
                    "build": "tsc",
                    "start": "node build/index.js",
                    "build:start": "npm run build && npm run start"
                },
                "devDependencies": {
                    "typescript": "latest"
                },
                "_moduleAliases": {
                    "@": "build"
                }
            })
        );
    }

    #[test]
    fn test_scripts_keep_declared_order() {
        let raw = serde_json::to_string(&Scripts::default()).unwrap();

        let build = raw.find("\"build\"").unwrap();
        let start = raw.find("\"start\"").unwrap();
        let build_start = raw.find("\"build:start\"").unwrap();
        assert!(build < start && start < build_start);
    }

    #[test]
    fn test_package_json_parses_back() {
        let manifest = PackageJson::for_project("demo");
        let raw = serde_json::to_string_pretty(&manifest).unwrap();

        let parsed: PackageJson = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, manifest);

        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["name"], "demo");
    }
}
