//! # sweep 命令 CLI 定义
//!
//! 扫描作业目录树，刷新输入几何并标记已收敛的作业
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sweep.rs`

use clap::Args;
use std::path::PathBuf;

/// sweep 参数
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Top-level directory containing ORCA job folders
    pub top_dir: PathBuf,

    /// Only print warnings and errors
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
