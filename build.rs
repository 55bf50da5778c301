use std::env;
use std::fs;

fn main() {
    // 读取 VERSION 文件，缺失时回退到 Cargo.toml 中的版本
    let version = fs::read_to_string("VERSION")
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|_| env::var("CARGO_PKG_VERSION").unwrap_or_default());

    // 设置环境变量，供编译时使用
    println!("cargo:rustc-env=APP_VERSION={}", version);

    println!("cargo:rerun-if-changed=VERSION");
    // 模板变更时重新嵌入
    println!("cargo:rerun-if-changed=embedded/templates");
}
