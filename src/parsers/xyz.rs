//! # XYZ 坐标文件解析器
//!
//! ## .xyz 格式说明
//! ```text
//! 3                         # 原子数
//! water, optimised          # 注释行
//! O   0.000  0.000  0.000   # 原子行
//! H   0.000  0.757  0.587
//! H   0.000 -0.757  0.587
//! ```
//!
//! 原子行原样保留（含换行符），不检查与原子数是否一致。
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 使用
//! - 使用 `models/job.rs`

use crate::error::{Result, SweepError};
use crate::models::CoordinateDocument;
use std::fs;
use std::path::Path;

/// 解析 .xyz 文件
pub fn parse_xyz_file(path: &Path) -> Result<CoordinateDocument> {
    let content = fs::read_to_string(path).map_err(|e| SweepError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_xyz_content(&content, &path.display().to_string())
}

/// 从字符串内容解析 XYZ 格式
pub fn parse_xyz_content(content: &str, source_name: &str) -> Result<CoordinateDocument> {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    if lines.len() < 2 {
        return Err(SweepError::ParseError {
            format: "xyz".to_string(),
            path: source_name.to_string(),
            reason: "File too short".to_string(),
        });
    }

    let atom_count = lines[0]
        .trim()
        .parse::<usize>()
        .map_err(|_| SweepError::ParseError {
            format: "xyz".to_string(),
            path: source_name.to_string(),
            reason: format!("Invalid atom count: '{}'", lines[0].trim()),
        })?;

    Ok(CoordinateDocument {
        atom_count,
        comment: lines[1].to_string(),
        geometry: lines[2..].iter().map(|line| line.to_string()).collect(),
    })
}
