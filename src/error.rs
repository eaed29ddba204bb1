//! taskpad 统一错误类型定义
//!
//! 使用 `thiserror` 提供统一的错误类型。所有错误都在交互层被转换为
//! 用户可见的提示，不会导致进程退出。

use std::io;
use thiserror::Error;

/// taskpad 错误类型
#[derive(Debug, Error)]
pub enum TaskError {
    /// 输入为空或无效
    #[error("Validation error: {0}")]
    Validation(String),

    /// 未选中任务或索引越界
    #[error("Selection error: {0}")]
    Selection(String),

    /// 任务文件读写失败
    #[error("Persistence error: {0}")]
    Persistence(#[from] io::Error),
}

/// taskpad Result 类型别名
pub type Result<T> = std::result::Result<T, TaskError>;

impl TaskError {
    /// 创建 Validation 错误
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// 创建 Selection 错误
    pub fn selection(msg: impl Into<String>) -> Self {
        Self::Selection(msg.into())
    }

    /// Toast 和日志里使用的简短标题
    pub fn kind(&self) -> &'static str {
        match self {
            TaskError::Validation(_) => "Input Error",
            TaskError::Selection(_) => "Selection Error",
            TaskError::Persistence(_) => "Save Error",
        }
    }
}
