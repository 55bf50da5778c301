//! 目标目录解析
//!
//! 支持三种输入：
//! - 绝对路径：原样使用
//! - 相对路径：拼接到当前工作目录
//! - 未提供：使用当前工作目录

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 根据命令行参数和给定的工作目录解析目标目录
///
/// 不做路径合法性检查，非法路径在创建目录时报错。
pub fn resolve_target(arg: Option<&Path>, cwd: &Path) -> PathBuf {
    match arg {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    }
}

/// 以进程当前工作目录为基准解析目标目录
pub fn resolve_target_from_cwd(arg: Option<&Path>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let target = resolve_target(arg, &cwd);

    debug!(cwd = %cwd.display(), target = %target.display(), "resolved target directory");
    Ok(target)
}

/// 从目标目录的最后一段路径推导项目名
///
/// 没有最后一段（如 `/`）时返回空字符串。
pub fn project_name(target: &Path) -> String {
    target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
