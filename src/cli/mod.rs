//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! - `orca-sweep <TOP_DIR> [--quiet]`
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: sweep

pub mod sweep;

use clap::Parser;

/// orca-sweep - ORCA 作业目录整理工具
#[derive(Parser)]
#[command(name = "orca-sweep")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Refresh ORCA input geometries from .xyz files and mark converged job folders with '_ok'",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub sweep: sweep::SweepArgs,
}
