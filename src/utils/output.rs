//! # 美化输出工具
//!
//! 提供统一的终端输出样式，以及供各组件使用的 `Reporter` 汇报接口。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `scan/`, `commands/` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印缩进的细节行
pub fn print_detail(msg: &str) {
    println!("    {}", msg);
}

/// 打印重命名消息
pub fn print_rename(from: &str, to: &str) {
    println!(
        "    {} {} {}",
        from.dimmed(),
        "->".cyan(),
        to
    );
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

// ─────────────────────────────────────────────────────────────
// Reporter
// ─────────────────────────────────────────────────────────────

/// 进度与诊断信息的汇报接口
///
/// 显式传入各组件，取代全局 verbose 开关。
pub trait Reporter {
    fn info(&self, msg: &str);
    fn skip(&self, msg: &str);
    fn detail(&self, msg: &str);
    fn rename(&self, from: &str, to: &str);
    fn warning(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// 终端汇报器
///
/// `verbose == false` 时只输出警告和错误。
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    pub verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        ConsoleReporter { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, msg: &str) {
        if self.verbose {
            print_info(msg);
        }
    }

    fn skip(&self, msg: &str) {
        if self.verbose {
            print_skip(msg);
        }
    }

    fn detail(&self, msg: &str) {
        if self.verbose {
            print_detail(msg);
        }
    }

    fn rename(&self, from: &str, to: &str) {
        if self.verbose {
            print_rename(from, to);
        }
    }

    fn warning(&self, msg: &str) {
        print_warning(msg);
    }

    fn error(&self, msg: &str) {
        print_error(msg);
    }
}

/// 静默汇报器
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

#[cfg(test)]
impl Reporter for SilentReporter {
    fn info(&self, _msg: &str) {}
    fn skip(&self, _msg: &str) {}
    fn detail(&self, _msg: &str) {}
    fn rename(&self, _from: &str, _to: &str) {}
    fn warning(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
}

/// 记录警告与错误的汇报器
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub warnings: std::cell::RefCell<Vec<String>>,
    pub errors: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn info(&self, _msg: &str) {}
    fn skip(&self, _msg: &str) {}
    fn detail(&self, _msg: &str) {}
    fn rename(&self, _from: &str, _to: &str) {}
    fn warning(&self, msg: &str) {
        self.warnings.borrow_mut().push(msg.to_string());
    }
    fn error(&self, msg: &str) {
        self.errors.borrow_mut().push(msg.to_string());
    }
}
