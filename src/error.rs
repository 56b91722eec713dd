//! # 统一错误处理模块
//!
//! 定义 orca-sweep 的所有错误类型，使用 `thiserror` 派生。
//!
//! 目录级错误（NotADirectory）在扫描前终止整个运行；
//! 其余错误都只作用于单个作业目录，由 `commands/sweep.rs` 捕获并汇报。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// orca-sweep 统一错误类型
#[derive(Error, Debug)]
pub enum SweepError {
    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("{path} is not a folder, exiting...")]
    NotADirectory { path: String },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename {from} -> {to}")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to rename {from}: {to} already exists")]
    RenameTargetExists { from: String, to: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 分类错误
    // ─────────────────────────────────────────────────────────────
    #[error("Ambiguous {kind} files in {folder}: {}", .candidates.join(", "))]
    AmbiguousJobFiles {
        folder: String,
        kind: String,
        candidates: Vec<String>,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SweepError>;

/// 拼接错误及其 source 链，用于终端诊断
pub fn describe(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    msg
}
