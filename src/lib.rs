//! Student Records - 学生、课程与选课记录管理
//!
//! 单进程内存记录管理核心，供外部表现层调用。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: 请求分发层（JSON 行协议）
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（内存）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
