//! # 数据模型模块
//!
//! 定义作业目录、输入/坐标文件和日志的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `scan/` 和 `commands/` 使用
//! - 子模块: job

pub mod job;

pub use job::{
    CoordinateDocument, FolderListing, FolderStatus, InputDocument, LogCandidate, LogSummary,
    OK_SUFFIX,
};
