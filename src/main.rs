//! # orca-sweep - ORCA 作业目录整理工具
//!
//! 扫描一个目录树中的 ORCA 计算目录：
//! - 跳过已标记 `_ok` 的目录和缺少关键文件（*.inp, *.xyz, slurm-*.out）的目录
//! - 用 *.xyz 中的结构替换 *.inp 的几何块
//! - 编号最大的 slurm-*.out 含收敛标志时，将目录重命名为 `<name>_ok`
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── scan/      (目录遍历与分类)
//!   │     ├── parsers/   (格式解析器)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出与汇报)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod scan;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&error::describe(&e));
        std::process::exit(1);
    }
}
