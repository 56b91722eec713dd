//! # Slurm 日志 (slurm-N.out) 解析器
//!
//! ORCA 的标准输出被 Slurm 重定向到 `slurm-<jobid>.out`，
//! 其中包含几何优化收敛标志。
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 使用
//! - 使用 `models/job.rs`

use crate::error::{Result, SweepError};
use crate::models::LogSummary;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// ORCA 几何优化收敛标志（空格数量有意义）
pub const CONVERGENCE_MARKER: &str = "     THE OPTIMIZATION HAS CONVERGED   ";

/// 解析 Slurm 日志文件
pub fn parse_slurm_output(path: &Path) -> Result<LogSummary> {
    let file = File::open(path).map_err(|e| SweepError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    scan_log(BufReader::new(file)).map_err(|e| SweepError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 逐行扫描，遇到第一个收敛标志即停止
///
/// 非 UTF-8 字节按有损方式解码。
pub fn scan_log<R: Read>(mut reader: BufReader<R>) -> std::io::Result<LogSummary> {
    let mut summary = LogSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        if String::from_utf8_lossy(&buf).contains(CONVERGENCE_MARKER) {
            summary.geometry_converged = true;
            break;
        }
    }

    Ok(summary)
}
