//! 持久化层
//!
//! 唯一写盘的数据是任务列表本身（工作目录下的 tasks.txt）。

pub mod tasks;
