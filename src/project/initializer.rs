//! 项目初始化
//!
//! 创建目标目录，重写 package.json / tsconfig.json，
//! 并在缺失时写入 src/index.ts 与 src/module.ts。
//!
//! 清单和编译配置每次都整体覆盖；起始源码只写一次，已有内容原样保留。
//! 任一步骤失败立即返回，之前已写入的文件不回滚。

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::documents::{PackageJson, TsConfig};
use crate::project::resolve::project_name;
use crate::templates::TemplateAssets;
use crate::utils::{create_dir_all, write_file_if_absent, write_json};

pub const PACKAGE_JSON: &str = "package.json";
pub const TSCONFIG_JSON: &str = "tsconfig.json";
pub const SRC_DIR: &str = "src";
pub const INDEX_TS: &str = "index.ts";
pub const MODULE_TS: &str = "module.ts";

/// 起始源码文件的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// 本次新建
    Created,
    /// 已存在，未改动
    Preserved,
}

impl FileStatus {
    fn from_created(created: bool) -> Self {
        if created {
            FileStatus::Created
        } else {
            FileStatus::Preserved
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Created => "created",
            FileStatus::Preserved => "preserved",
        }
    }
}

/// 起始源码对
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterSources {
    pub index_ts: PathBuf,
    pub index_status: FileStatus,
    pub module_ts: PathBuf,
    pub module_status: FileStatus,
}

/// 一次初始化的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub target: PathBuf,
    pub package_json: PathBuf,
    pub tsconfig_json: PathBuf,
    pub sources: StarterSources,
}

/// 初始化项目
///
/// 按顺序执行：创建目录 -> package.json -> tsconfig.json -> 起始源码。
pub fn init_project(target: &Path) -> Result<InitReport> {
    ensure_project_dir(target)?;

    let package_json = write_package_json(target)?;
    let tsconfig_json = write_tsconfig_json(target)?;
    let sources = ensure_starter_sources(target)?;

    info!(target = %target.display(), "project initialized");

    Ok(InitReport {
        target: target.to_path_buf(),
        package_json,
        tsconfig_json,
        sources,
    })
}

/// 确保目标目录存在（包括缺失的父目录）
pub fn ensure_project_dir(target: &Path) -> Result<()> {
    create_dir_all(target)
}

/// 写入 package.json，覆盖已有文件
pub fn write_package_json(target: &Path) -> Result<PathBuf> {
    let path = target.join(PACKAGE_JSON);
    let manifest = PackageJson::for_project(project_name(target));

    write_json(&path, &manifest)?;
    debug!(path = %path.display(), name = %manifest.name, "wrote manifest");

    Ok(path)
}

/// 写入 tsconfig.json，覆盖已有文件
pub fn write_tsconfig_json(target: &Path) -> Result<PathBuf> {
    let path = target.join(TSCONFIG_JSON);

    write_json(&path, &TsConfig::default())?;
    debug!(path = %path.display(), "wrote compiler configuration");

    Ok(path)
}

/// 确保 src/index.ts 与 src/module.ts 存在
///
/// 两个文件独立检查，一个存在不影响另一个的创建。
pub fn ensure_starter_sources(target: &Path) -> Result<StarterSources> {
    let src_dir = target.join(SRC_DIR);
    create_dir_all(&src_dir)?;

    let index_ts = src_dir.join(INDEX_TS);
    let index_status = ensure_source(&index_ts, &TemplateAssets::get_index_ts()?)?;

    let module_ts = src_dir.join(MODULE_TS);
    let module_status = ensure_source(&module_ts, &TemplateAssets::get_module_ts()?)?;

    Ok(StarterSources {
        index_ts,
        index_status,
        module_ts,
        module_status,
    })
}

fn ensure_source(path: &Path, content: &str) -> Result<FileStatus> {
    let status = FileStatus::from_created(write_file_if_absent(path, content)?);

    match status {
        FileStatus::Created => debug!(path = %path.display(), "created starter source"),
        FileStatus::Preserved => {
            debug!(path = %path.display(), "starter source already exists, skipping")
        }
    }

    Ok(status)
}
