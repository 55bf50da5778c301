use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use tscinit::{
    logging::init_tracing,
    project::{init_project, print_banner, print_summary, resolve_target_from_cwd},
};

/// TypeScript project initializer
///
/// 写入 package.json、tsconfig.json，并在缺失时创建 src/index.ts 与 src/module.ts
#[derive(Parser)]
#[command(name = "tscinit")]
#[command(version = env!("APP_VERSION"), about)]
#[command(
    long_about = "Scaffolds a minimal TypeScript project.\n\
                  package.json and tsconfig.json are always regenerated; \
                  src/index.ts and src/module.ts are only written when absent."
)]
struct Cli {
    /// 项目名称或路径（默认：当前目录）
    project: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let target = resolve_target_from_cwd(cli.project.as_deref())?;

    print_banner(&target);
    let report = init_project(&target)?;
    print_summary(&report);

    Ok(())
}
