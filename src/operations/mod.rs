//! 业务操作层：前端与存储之间的业务逻辑
//!
//! TUI 只负责把按键映射成命令，并渲染返回的结果。

pub mod tasks;
