//! 日志：记录状态变更和失败
//!
//! TUI 占用了 stdout/stderr，所以事件写到工作目录下只追加的日志文件。
//! 日志只是辅助信息：文件打不开时程序照常运行，只是没有 subscriber。

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 日志文件名（当前工作目录）
pub const LOG_FILE: &str = "task_manager.log";

/// 安装写入 `path` 的全局 subscriber
///
/// 每个事件一行：时间戳、级别、target、字段，不带 ANSI 颜色。
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(LevelFilter::DEBUG)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(io::Error::other)
}
