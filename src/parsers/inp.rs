//! # ORCA .inp 输入文件解析器 / 写出器
//!
//! 只处理文件末尾的几何块，其余内容作为设置行原样保留。
//!
//! ## .inp 格式说明
//! ```text
//! ! B3LYP def2-SVP Opt      # 设置行
//! %maxcore 2000
//! * xyz 0 1                 # 开始标记（归入设置部分）
//! O   0.000  0.000  0.000   # 几何行：恰好 4 个字段
//! H   0.000  0.757  0.587
//! *                         # 结束标记
//! ```
//!
//! 标记行指首个字段为 `*` 的行。从文件末尾数起：
//! 第 1 个标记到第 2 个标记之间为几何块，第 2 到第 3 个之间为设置块。
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 使用
//! - 使用 `models/job.rs`

use crate::error::{Result, SweepError};
use crate::models::InputDocument;
use std::fs;
use std::path::Path;

/// 几何块的结束标记
pub const CLOSING_MARKER: &str = "*";

/// 解析 .inp 文件
pub fn parse_inp_file(path: &Path) -> Result<InputDocument> {
    let content = fs::read_to_string(path).map_err(|e| SweepError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(parse_inp_content(&content))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// 第 3 个（从末尾数）标记及其之前
    Done,
    InSettingsBlock,
    InGeometryBlock,
    /// 结束标记之后
    SeekingFirstMarker,
}

fn is_marker(line: &str) -> bool {
    line.split_whitespace().next() == Some(CLOSING_MARKER)
}

/// 从字符串内容解析 .inp 格式
pub fn parse_inp_content(content: &str) -> InputDocument {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    let markers: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_marker(line))
        .map(|(i, _)| i)
        .collect();

    // 从末尾数起的第 1/2/3 个标记
    let nth_from_end = |n: usize| markers.len().checked_sub(n).map(|i| markers[i]);
    let closing = nth_from_end(1);
    let opening = nth_from_end(2);
    let previous = nth_from_end(3);

    let mut doc = InputDocument::default();
    let mut state = match (closing, opening, previous) {
        (None, _, _) => ScanState::SeekingFirstMarker,
        (Some(_), None, _) => ScanState::InGeometryBlock,
        (Some(_), Some(_), None) => ScanState::InSettingsBlock,
        (Some(_), Some(_), Some(_)) => ScanState::Done,
    };

    for (i, line) in lines.iter().enumerate() {
        let n_fields = line.split_whitespace().count();

        match state {
            ScanState::Done => {}
            ScanState::InSettingsBlock => {
                if n_fields > 0 {
                    doc.settings.push(line.to_string());
                }
            }
            ScanState::InGeometryBlock => {
                if n_fields == 4 {
                    doc.geometry.push(line.to_string());
                }
            }
            ScanState::SeekingFirstMarker => {}
        }

        // 状态在标记行之后切换：标记行本身属于它开启的块
        if Some(i) == previous {
            state = ScanState::InSettingsBlock;
        } else if Some(i) == opening {
            state = ScanState::InGeometryBlock;
        } else if Some(i) == closing {
            state = ScanState::SeekingFirstMarker;
        }
    }

    doc
}

/// 将 InputDocument 转换为 .inp 格式字符串
///
/// 输出以不带换行符的 `*` 结尾。
pub fn to_inp_string(settings: &[String], geometry: &[String]) -> String {
    let mut result = String::new();

    for line in settings.iter().chain(geometry.iter()) {
        result.push_str(line);
        if !line.ends_with('\n') {
            result.push('\n');
        }
    }

    result.push_str(CLOSING_MARKER);
    result
}

/// 覆盖写入 .inp 文件
pub fn write_inp_file(path: &Path, settings: &[String], geometry: &[String]) -> Result<()> {
    fs::write(path, to_inp_string(settings, geometry)).map_err(|e| SweepError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER_INP: &str = "! B3LYP def2-SVP Opt\n\
%maxcore 2000\n\
\n\
* xyz 0 1\n\
O   0.000000   0.000000   0.000000\n\
H   0.000000   0.757000   0.587000\n\
H   0.000000  -0.757000   0.587000\n\
*\n";

    #[test]
    fn test_parse_inp_basic() {
        let doc = parse_inp_content(WATER_INP);
        assert_eq!(
            doc.settings,
            vec![
                "! B3LYP def2-SVP Opt\n",
                "%maxcore 2000\n",
                "* xyz 0 1\n"
            ]
        );
        assert_eq!(doc.geometry.len(), 3);
        assert_eq!(doc.geometry[0], "O   0.000000   0.000000   0.000000\n");
    }

    #[test]
    fn test_parse_inp_drops_non_geometry_rows() {
        let content = "! Opt\n* xyz 0 1\nO 0 0 0\nH 0 0\nH 0 0 1 extra\n\n*";
        let doc = parse_inp_content(content);
        assert_eq!(doc.geometry, vec!["O 0 0 0\n"]);
        assert_eq!(doc.settings, vec!["! Opt\n", "* xyz 0 1\n"]);
    }

    #[test]
    fn test_parse_inp_ignores_lines_after_closing_marker() {
        let content = "* xyz 0 1\nC 0 0 0\n*\nH 1 2 3\n";
        let doc = parse_inp_content(content);
        assert_eq!(doc.geometry, vec!["C 0 0 0\n"]);
        assert_eq!(doc.settings, vec!["* xyz 0 1\n"]);
    }

    #[test]
    fn test_parse_inp_stops_at_third_marker() {
        let content = "! ignored\n* xyz 0 1\nC 0 0 0\n*\n! Opt\n* xyz 0 1\nN 1 1 1\n*\n";
        let doc = parse_inp_content(content);
        assert_eq!(doc.settings, vec!["! Opt\n", "* xyz 0 1\n"]);
        assert_eq!(doc.geometry, vec!["N 1 1 1\n"]);
    }

    #[test]
    fn test_parse_inp_single_marker() {
        let content = "! Opt\nC 0 0 0\nnot geometry\n*";
        let doc = parse_inp_content(content);
        assert!(doc.settings.is_empty());
        assert_eq!(doc.geometry, vec!["C 0 0 0\n"]);
    }

    #[test]
    fn test_parse_inp_without_markers() {
        let doc = parse_inp_content("! Opt\nC 0 0 0\n");
        assert_eq!(doc, InputDocument::default());
    }

    #[test]
    fn test_closing_marker_with_four_fields_counts_as_geometry() {
        // 与自底向上扫描一致：结束标记行本身也按字段数判断
        let content = "* xyz 0 1\nC 0 0 0\n* a b c\n";
        let doc = parse_inp_content(content);
        assert_eq!(doc.geometry, vec!["C 0 0 0\n", "* a b c\n"]);
    }

    #[test]
    fn test_to_inp_string_ends_with_bare_marker() {
        let settings = vec!["! Opt\n".to_string(), "* xyz 0 1\n".to_string()];
        let geometry = vec!["H 0 0 0\n".to_string(), "H 0 0 0.74".to_string()];
        let text = to_inp_string(&settings, &geometry);
        assert_eq!(text, "! Opt\n* xyz 0 1\nH 0 0 0\nH 0 0 0.74\n*");
    }

    #[test]
    fn test_inp_round_trip() {
        let doc = parse_inp_content(WATER_INP);
        let text = to_inp_string(&doc.settings, &doc.geometry);
        let parsed = parse_inp_content(&text);
        assert_eq!(parsed, doc);
    }
}
