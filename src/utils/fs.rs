//! 文件系统工具

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// 安全读取文件内容
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// 安全写入文件（覆盖已有内容）
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    // 确保父目录存在
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// 仅当文件不存在时写入
///
/// 返回 `true` 表示本次创建了文件，`false` 表示文件已存在且未被改动。
/// 同名目录不算文件，写入会失败并返回错误。
pub fn write_file_if_absent(path: &Path, content: &str) -> Result<bool> {
    if file_exists(path) {
        return Ok(false);
    }

    write_file(path, content)?;
    Ok(true)
}

/// 检查文件是否存在
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// 检查目录是否存在
pub fn dir_exists(path: &Path) -> bool {
    path.is_dir()
}

/// 创建目录（包括父目录），已存在时不报错
pub fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}
