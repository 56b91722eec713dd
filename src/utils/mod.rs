//! # 工具函数模块
//!
//! 提供美化输出和汇报接口。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `scan/`, `commands/` 模块使用
//! - 子模块: output

pub mod output;

pub use output::{ConsoleReporter, Reporter};

#[cfg(test)]
pub use output::{RecordingReporter, SilentReporter};
