//! # 目录扫描模块
//!
//! 提供作业目录的遍历与分类。
//!
//! ## 功能
//! - 一次性收集目录树，子目录先于父目录
//! - 按文件名判定作业目录状态
//! - 选出编号最大的 Slurm 日志
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 使用
//! - 使用 `walkdir` 遍历目录，`regex` 匹配文件名

pub mod classifier;
pub mod walker;

pub use classifier::{Classification, FolderClassifier, JobFiles};
pub use walker::FolderWalker;
