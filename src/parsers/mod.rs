//! # 解析器模块
//!
//! 提供 ORCA 作业目录中三种文本文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: inp, xyz, slurm_out

pub mod inp;
pub mod slurm_out;
pub mod xyz;

pub use inp::{parse_inp_file, write_inp_file};
pub use slurm_out::parse_slurm_output;
pub use xyz::parse_xyz_file;
