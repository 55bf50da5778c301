//! 初始化结果输出

use colored::*;
use std::fmt::Write;
use std::path::Path;

use crate::project::initializer::{FileStatus, InitReport};

const NEXT_STEPS: [&str; 4] = [
    "cd into your project directory.",
    "Run `npm install` to install local dev dependencies (TypeScript).",
    "Run `npm run build` to compile TypeScript => JavaScript in build/.",
    "Run `npm run start` to execute the compiled JS from build/.",
];

/// 写入前的提示行
pub fn render_banner(target: &Path) -> String {
    format!(
        "Initializing TypeScript project in: {}",
        target.display().to_string().cyan()
    )
}

/// 写入完成后的汇总：文件列表 + 后续步骤
pub fn render_summary(report: &InitReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}",
        "Success! The following files have been created/updated:".green().bold()
    );
    let _ = writeln!(out, "  - {}", report.package_json.display().to_string().yellow());
    let _ = writeln!(out, "  - {}", report.tsconfig_json.display().to_string().yellow());

    let index = report.sources.index_ts.display().to_string();
    match report.sources.index_status {
        FileStatus::Created => {
            let _ = writeln!(out, "  - {}", index.yellow());
        }
        FileStatus::Preserved => {
            let _ = writeln!(out, "  - {} {}", index.yellow(), "(kept existing)".dimmed());
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Next steps:".cyan().bold());
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step);
    }

    let _ = writeln!(out);
    let _ = write!(
        out,
        "Now your ESM imports in the compiled code will have '.js' appended automatically!"
    );

    out
}

pub fn print_banner(target: &Path) {
    println!("{}", render_banner(target));
}

pub fn print_summary(report: &InitReport) {
    println!("{}", render_summary(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::initializer::StarterSources;
    use std::path::PathBuf;

    fn sample_report(index_status: FileStatus) -> InitReport {
        let target = PathBuf::from("/tmp/myapp");
        InitReport {
            package_json: target.join("package.json"),
            tsconfig_json: target.join("tsconfig.json"),
            sources: StarterSources {
                index_ts: target.join("src/index.ts"),
                index_status,
                module_ts: target.join("src/module.ts"),
                module_status: FileStatus::Created,
            },
            target,
        }
    }

    #[test]
    fn test_banner_names_target() {
        colored::control::set_override(false);
        assert_eq!(
            render_banner(Path::new("/tmp/myapp")),
            "Initializing TypeScript project in: /tmp/myapp"
        );
    }

    #[test]
    fn test_summary_lists_files_in_order() {
        colored::control::set_override(false);
        let report = sample_report(FileStatus::Created);
        let summary = render_summary(&report);

        let pkg = report.package_json.display().to_string();
        let tsconfig = report.tsconfig_json.display().to_string();
        let index = report.sources.index_ts.display().to_string();

        let pkg_at = summary.find(&pkg).unwrap();
        let tsconfig_at = summary.find(&tsconfig).unwrap();
        let index_at = summary.find(&index).unwrap();
        assert!(pkg_at < tsconfig_at && tsconfig_at < index_at);
        assert!(!summary.contains("kept existing"));
    }

    #[test]
    fn test_summary_includes_next_steps() {
        colored::control::set_override(false);
        let summary = render_summary(&sample_report(FileStatus::Created));

        assert!(summary.starts_with("Success! The following files have been created/updated:"));
        assert!(summary.contains("Next steps:"));
        assert!(summary.contains("  1. cd into your project directory."));
        assert!(summary.contains("  4. Run `npm run start`"));
        assert!(summary.ends_with("appended automatically!"));
    }

    #[test]
    fn test_summary_marks_preserved_entry() {
        colored::control::set_override(false);
        let summary = render_summary(&sample_report(FileStatus::Preserved));

        assert!(summary.contains("src/index.ts (kept existing)"));
    }
}
