//! # 目录遍历器
//!
//! 自顶向下遍历目录树并一次性收集所有目录及其文件名，
//! 然后反转顺序：子目录总是先于其父目录被处理，
//! 处理过程中对父目录的重命名不会影响尚未访问的目录。
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `utils/output.rs` 汇报无法读取的目录

use crate::models::FolderListing;
use crate::utils::Reporter;

use std::collections::HashMap;
use std::path::PathBuf;
use walkdir::WalkDir;

/// 目录遍历器
pub struct FolderWalker {
    /// 根目录
    root: PathBuf,
}

impl FolderWalker {
    /// 创建新的遍历器
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 收集所有目录（含根目录），按自顶向下顺序的逆序返回
    ///
    /// 无法读取的条目只产生警告。
    pub fn collect(&self, reporter: &dyn Reporter) -> Vec<FolderListing> {
        let mut folders: Vec<FolderListing> = Vec::new();
        let mut index: HashMap<PathBuf, usize> = HashMap::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| self.root.display().to_string());
                    reporter.warning(&format!("Cannot read {}: {}", path, e));
                    continue;
                }
            };

            // 根目录为符号链接时 file_type() 描述的是链接本身
            let is_dir =
                entry.file_type().is_dir() || (entry.depth() == 0 && entry.path().is_dir());
            if is_dir {
                index.insert(entry.path().to_path_buf(), folders.len());
                folders.push(FolderListing::new(entry.path()));
                continue;
            }

            let parent = entry.path().parent().and_then(|p| index.get(p));
            if let Some(&i) = parent {
                folders[i]
                    .files
                    .push(entry.file_name().to_string_lossy().to_string());
            }
        }

        folders.reverse();
        folders
    }
}
