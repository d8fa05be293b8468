//! 配置管理
//!
//! 配置文件、环境变量与内置默认值分层合并。

mod r#impl;
mod structs;

pub use structs::*;
