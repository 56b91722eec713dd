//! # 作业目录数据模型
//!
//! 描述一个 ORCA 计算目录及其三类文本文件的解析结果。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `scan/`, `commands/sweep.rs` 使用
//! - 无外部模块依赖

use std::path::{Path, PathBuf};

/// 已处理目录的名称后缀
pub const OK_SUFFIX: &str = "_ok";

/// 目录处理状态（由目录名后缀推导，每次扫描只推导一次）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderStatus {
    /// 尚未标记
    Pending,
    /// 名称以 `_ok` 结尾
    Processed,
}

impl FolderStatus {
    pub fn from_path(path: &Path) -> Self {
        let processed = path
            .file_name()
            .map(|name| name.to_string_lossy().ends_with(OK_SUFFIX))
            .unwrap_or(false);

        if processed {
            FolderStatus::Processed
        } else {
            FolderStatus::Pending
        }
    }
}

/// 一个目录及其直接包含的文件名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderListing {
    pub path: PathBuf,
    pub files: Vec<String>,
}

impl FolderListing {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FolderListing {
            path: path.into(),
            files: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }
}

/// ORCA 输入文件 (.inp)
///
/// 所有行保留原始文本（含换行符）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDocument {
    /// 设置部分（含 `* xyz ...` 开始标记行）
    pub settings: Vec<String>,
    /// 几何部分，每行恰好 4 个字段
    pub geometry: Vec<String>,
}

/// XYZ 坐标文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateDocument {
    pub atom_count: usize,
    pub comment: String,
    pub geometry: Vec<String>,
}

impl CoordinateDocument {
    /// 非空几何行数
    pub fn row_count(&self) -> usize {
        self.geometry
            .iter()
            .filter(|line| !line.trim().is_empty())
            .count()
    }
}

/// `slurm-<N>.out` 日志候选
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogCandidate {
    pub index: u64,
    pub file_name: String,
}

/// Slurm 日志的提取信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSummary {
    pub geometry_converged: bool,
}
