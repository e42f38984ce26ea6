//! Homework Hub - 作业发布与批改的会话核心
//!
//! 在内存中维护作业目录、已读回执与提交记录，供外部展示层调用。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 会话生命周期
//! - `services`: 作业生命周期控制器
//! - `storage`: 数据存储层（内存）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;
