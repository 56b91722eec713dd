//! # 作业目录分类器
//!
//! 根据目录名和其中的文件名判断目录是否为待处理的 ORCA 作业。
//!
//! ## 判定规则
//! - 目录名以 `_ok` 结尾：已处理
//! - 需要 `<name>.inp`、`<name>.xyz` 以及至少一个 `slurm-<N>.out`
//! - `.inp` 或 `.xyz` 匹配多个文件：歧义，不做猜测
//! - 多个日志时取编号（数值）最大者
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 调用
//! - 使用 `regex` 匹配文件名
//! - 使用 `models/job.rs`

use crate::models::{FolderListing, FolderStatus, LogCandidate};

use regex::Regex;

/// 作业目录中的关键文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFiles {
    pub inp: String,
    pub xyz: String,
    /// 按编号升序
    pub logs: Vec<LogCandidate>,
}

impl JobFiles {
    /// 编号最大的日志（权威日志）
    pub fn latest_log(&self) -> Option<&LogCandidate> {
        self.logs.last()
    }
}

/// 分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// 已标记 `_ok`
    AlreadyProcessed,
    /// 缺少关键文件
    Incomplete { missing: Vec<&'static str> },
    /// 关键文件匹配到多个
    Ambiguous {
        kind: &'static str,
        candidates: Vec<String>,
    },
    /// 可以处理
    Eligible(JobFiles),
}

/// 作业目录分类器
pub struct FolderClassifier {
    inp_pattern: Regex,
    xyz_pattern: Regex,
    slurm_pattern: Regex,
}

impl Default for FolderClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FolderClassifier {
    /// 创建分类器（预编译文件名模式）
    pub fn new() -> Self {
        FolderClassifier {
            inp_pattern: Regex::new(r"^\w+\.inp$").expect("static .inp pattern"),
            xyz_pattern: Regex::new(r"^\w+\.xyz$").expect("static .xyz pattern"),
            slurm_pattern: Regex::new(r"^slurm-(\d+)\.out$").expect("static slurm pattern"),
        }
    }

    /// 对单个目录分类
    ///
    /// 只依赖路径和文件名，重复调用结果相同。
    pub fn classify(&self, listing: &FolderListing) -> Classification {
        if FolderStatus::from_path(&listing.path) == FolderStatus::Processed {
            return Classification::AlreadyProcessed;
        }

        let mut inps = self.matching(&self.inp_pattern, &listing.files);
        let mut xyzs = self.matching(&self.xyz_pattern, &listing.files);
        let logs = self.log_candidates(&listing.files);

        let mut missing = Vec::new();
        if inps.is_empty() {
            missing.push("*.inp");
        }
        if xyzs.is_empty() {
            missing.push("*.xyz");
        }
        if logs.is_empty() {
            missing.push("slurm-*.out");
        }
        if !missing.is_empty() {
            return Classification::Incomplete { missing };
        }

        if inps.len() > 1 {
            return Classification::Ambiguous {
                kind: "*.inp",
                candidates: inps,
            };
        }
        if xyzs.len() > 1 {
            return Classification::Ambiguous {
                kind: "*.xyz",
                candidates: xyzs,
            };
        }

        Classification::Eligible(JobFiles {
            inp: inps.remove(0),
            xyz: xyzs.remove(0),
            logs,
        })
    }

    fn matching(&self, pattern: &Regex, files: &[String]) -> Vec<String> {
        let mut matched: Vec<String> = files
            .iter()
            .filter(|name| pattern.is_match(name))
            .cloned()
            .collect();
        matched.sort();
        matched
    }

    /// 收集 `slurm-<N>.out`，按编号升序
    ///
    /// 编号超出 u64 范围的文件被忽略。
    pub fn log_candidates(&self, files: &[String]) -> Vec<LogCandidate> {
        let mut logs: Vec<LogCandidate> = files
            .iter()
            .filter_map(|name| {
                let caps = self.slurm_pattern.captures(name)?;
                let index = caps[1].parse::<u64>().ok()?;
                Some(LogCandidate {
                    index,
                    file_name: name.clone(),
                })
            })
            .collect();
        logs.sort();
        logs
    }
}
