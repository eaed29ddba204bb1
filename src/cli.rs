//! CLI 定义
//!
//! 只有 `--help` / `--version`；任务文件位置固定，不接受参数。

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "taskpad")]
#[command(version)]
#[command(about = "A personal to-do list in your terminal")]
#[command(
    long_about = "A personal to-do list in your terminal.\n\nTasks are stored one per line in ./tasks.txt; \
                  activity is logged to ./task_manager.log."
)]
pub struct Cli {}
