//! JSON 工具

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::utils::write_file;

/// 读取 JSON 文件
pub fn read_json<T>(path: &Path) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

/// 写入 JSON 文件（两空格缩进，覆盖已有内容）
pub fn write_json<T>(path: &Path, data: &T) -> Result<()>
where
    T: Serialize,
{
    let json = serde_json::to_string_pretty(data).context("Failed to serialize to JSON")?;

    write_file(path, &json).with_context(|| format!("Failed to write JSON file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_write_json_is_indented() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };
        write_json(&file_path, &data).unwrap();

        let raw = fs::read_to_string(&file_path).unwrap();
        assert_eq!(raw, "{\n  \"name\": \"test\",\n  \"value\": 42\n}");

        let loaded: TestData = read_json(&file_path).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_read_json_rejects_invalid() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("broken.json");
        fs::write(&file_path, "{ not json").unwrap();

        let result: Result<TestData> = read_json(&file_path);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON file"));
    }
}
