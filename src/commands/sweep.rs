//! # sweep 命令实现
//!
//! 扫描 ORCA 作业目录树，刷新输入几何并标记已收敛的作业。
//!
//! ## 功能
//! - 子目录先于父目录处理（目录列表在处理前一次性收集）
//! - 跳过 `_ok` 目录和缺少关键文件的目录
//! - 用 .xyz 的几何替换 .inp 的几何块，设置部分保持不变
//! - 检查编号最大的 slurm-N.out，已收敛则将目录重命名为 `<name>_ok`
//! - 单个目录出错只记录失败，不中断整个扫描
//!
//! ## 状态流转
//! ```text
//! Unvisited ─┬─> AlreadyProcessed
//!            ├─> Incomplete
//!            ├─> Failed
//!            └─> Eligible ─┬─> Converged (rename to *_ok)
//!                          └─> NotConverged
//! ```
//!
//! ## 依赖关系
//! - 使用 `cli/sweep.rs` 定义的参数
//! - 使用 `scan/`, `parsers/`
//! - 使用 `utils/output.rs`

use crate::cli::sweep::SweepArgs;
use crate::error::{describe, Result, SweepError};
use crate::models::{FolderListing, LogCandidate, OK_SUFFIX};
use crate::parsers::{parse_inp_file, parse_slurm_output, parse_xyz_file, write_inp_file};
use crate::scan::{Classification, FolderClassifier, FolderWalker, JobFiles};
use crate::utils::{output, ConsoleReporter, Reporter};

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 单个目录的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderOutcome {
    /// 已标记 `_ok`，未做任何修改
    AlreadyProcessed,
    /// 缺少关键文件，未做任何修改
    Incomplete,
    /// 已收敛并重命名
    Converged { renamed_to: PathBuf },
    /// 几何已刷新，尚未收敛
    NotConverged,
    /// 处理失败
    Failed { reason: String },
}

impl fmt::Display for FolderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderOutcome::AlreadyProcessed => write!(f, "status ok"),
            FolderOutcome::Incomplete => write!(f, "missing files"),
            FolderOutcome::Converged { renamed_to } => {
                write!(f, "converged -> {}", renamed_to.display())
            }
            FolderOutcome::NotConverged => write!(f, "not yet converged"),
            FolderOutcome::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}

/// 汇总表的一行
#[derive(Debug, Clone, Tabled)]
struct OutcomeRow {
    #[tabled(rename = "Folder")]
    folder: String,
    #[tabled(rename = "Outcome")]
    outcome: String,
}

/// 扫描结果统计
#[derive(Debug, Default)]
pub struct SweepSummary {
    pub converged: usize,
    pub not_converged: usize,
    pub already_processed: usize,
    pub incomplete: usize,
    pub failed: usize,
    /// 按访问顺序记录的 (目录, 结果)
    pub outcomes: Vec<(PathBuf, FolderOutcome)>,
}

impl SweepSummary {
    /// 合并单个目录的结果
    pub fn merge(&mut self, folder: PathBuf, outcome: FolderOutcome) {
        match &outcome {
            FolderOutcome::AlreadyProcessed => self.already_processed += 1,
            FolderOutcome::Incomplete => self.incomplete += 1,
            FolderOutcome::Converged { .. } => self.converged += 1,
            FolderOutcome::NotConverged => self.not_converged += 1,
            FolderOutcome::Failed { .. } => self.failed += 1,
        }
        self.outcomes.push((folder, outcome));
    }

    /// 访问的目录总数
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// 查找某个目录的结果
    #[cfg(test)]
    pub fn outcome_of(&self, folder: &Path) -> Option<&FolderOutcome> {
        self.outcomes
            .iter()
            .find(|(path, _)| path == folder)
            .map(|(_, outcome)| outcome)
    }
}

/// 执行 sweep 命令
pub fn execute(args: SweepArgs) -> Result<()> {
    let verbose = !args.quiet;
    let reporter = ConsoleReporter::new(verbose);

    if verbose {
        output::print_header("Sweeping ORCA Job Folders");
    }

    let summary = sweep(&args.top_dir, &reporter)?;

    if verbose && summary.total() > 0 {
        let rows: Vec<OutcomeRow> = summary
            .outcomes
            .iter()
            .map(|(path, outcome)| OutcomeRow {
                folder: path.display().to_string(),
                outcome: outcome.to_string(),
            })
            .collect();
        println!("\n{}", Table::new(&rows));

        output::print_done(&format!(
            "{} folders: {} converged, {} not yet converged, {} already ok, {} incomplete, {} failed",
            summary.total(),
            summary.converged,
            summary.not_converged,
            summary.already_processed,
            summary.incomplete,
            summary.failed
        ));
    }

    Ok(())
}

/// 扫描 `top_dir` 下的全部目录（含其自身）
///
/// `top_dir` 不是目录时在任何修改之前返回 `NotADirectory`。
pub fn sweep(top_dir: &Path, reporter: &dyn Reporter) -> Result<SweepSummary> {
    if !top_dir.is_dir() {
        let shown = std::path::absolute(top_dir).unwrap_or_else(|_| top_dir.to_path_buf());
        return Err(SweepError::NotADirectory {
            path: shown.display().to_string(),
        });
    }

    let folders = FolderWalker::new(top_dir).collect(reporter);
    let classifier = FolderClassifier::new();

    let mut summary = SweepSummary::default();
    for listing in &folders {
        let outcome = process_folder(listing, &classifier, reporter);
        summary.merge(listing.path.clone(), outcome);
    }

    Ok(summary)
}

/// 处理单个目录，错误被转换为 `FolderOutcome::Failed`
pub fn process_folder(
    listing: &FolderListing,
    classifier: &FolderClassifier,
    reporter: &dyn Reporter,
) -> FolderOutcome {
    let shown = listing.path.display().to_string();

    let files = match classifier.classify(listing) {
        Classification::AlreadyProcessed => {
            reporter.skip(&format!("{} has status ok", shown));
            return FolderOutcome::AlreadyProcessed;
        }
        Classification::Incomplete { missing } => {
            reporter.skip(&format!(
                "{} misses one or more important files ({})",
                shown,
                missing.join(", ")
            ));
            return FolderOutcome::Incomplete;
        }
        Classification::Ambiguous { kind, candidates } => {
            let err = SweepError::AmbiguousJobFiles {
                folder: shown,
                kind: kind.to_string(),
                candidates,
            };
            return fail(reporter, &err);
        }
        Classification::Eligible(files) => files,
    };

    reporter.info(&format!("{} will be analyzed", shown));

    match analyse_job(&listing.path, &files, reporter) {
        Ok(outcome) => outcome,
        Err(e) => fail(reporter, &e),
    }
}

fn fail(reporter: &dyn Reporter, err: &SweepError) -> FolderOutcome {
    let reason = describe(err);
    reporter.error(&reason);
    FolderOutcome::Failed { reason }
}

/// 刷新几何、判断收敛、必要时重命名
fn analyse_job(folder: &Path, files: &JobFiles, reporter: &dyn Reporter) -> Result<FolderOutcome> {
    refresh_geometry(folder, files, reporter)?;
    reporter.detail("xyz structure -> inp file");

    let converged = files
        .latest_log()
        .map(|log| is_converged(folder, log, reporter))
        .unwrap_or(false);

    if !converged {
        reporter.detail("not yet converged");
        return Ok(FolderOutcome::NotConverged);
    }

    reporter.detail("converged!");
    let renamed_to = mark_ok(folder)?;
    reporter.rename(
        &folder.display().to_string(),
        &renamed_to.display().to_string(),
    );

    Ok(FolderOutcome::Converged { renamed_to })
}

/// 用 .xyz 中的几何替换 .inp 的几何块
pub fn refresh_geometry(folder: &Path, files: &JobFiles, reporter: &dyn Reporter) -> Result<()> {
    let inp_path = folder.join(&files.inp);
    let xyz_path = folder.join(&files.xyz);

    let input = parse_inp_file(&inp_path)?;
    let coords = parse_xyz_file(&xyz_path)?;

    if coords.row_count() != coords.atom_count {
        reporter.warning(&format!(
            "{} declares {} atoms but lists {} rows",
            xyz_path.display(),
            coords.atom_count,
            coords.row_count()
        ));
    }

    write_inp_file(&inp_path, &input.settings, &coords.geometry)
}

/// 读取日志判断是否收敛，读取失败视为未收敛
pub fn is_converged(folder: &Path, log: &LogCandidate, reporter: &dyn Reporter) -> bool {
    match parse_slurm_output(&folder.join(&log.file_name)) {
        Ok(summary) => summary.geometry_converged,
        Err(e) => {
            reporter.warning(&format!("{}; treating as not converged", describe(&e)));
            false
        }
    }
}

/// 在目录名后追加 `_ok`
///
/// 目标已存在时拒绝重命名。
pub fn mark_ok(folder: &Path) -> Result<PathBuf> {
    let name = folder.file_name().ok_or_else(|| SweepError::RenameError {
        from: folder.display().to_string(),
        to: format!("{}{}", folder.display(), OK_SUFFIX),
        source: io::Error::new(io::ErrorKind::InvalidInput, "folder has no name"),
    })?;

    let mut new_name = name.to_os_string();
    new_name.push(OK_SUFFIX);
    let target = folder.with_file_name(new_name);

    if target.exists() {
        return Err(SweepError::RenameTargetExists {
            from: folder.display().to_string(),
            to: target.display().to_string(),
        });
    }

    fs::rename(folder, &target).map_err(|e| SweepError::RenameError {
        from: folder.display().to_string(),
        to: target.display().to_string(),
        source: e,
    })?;

    Ok(target)
}
