mod app;
mod cli;
mod dialogs;
mod error;
mod event;
mod logging;
mod operations;
mod storage;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;
use std::path::Path;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::Cli;
use storage::tasks::{TaskStore, TASKS_FILE};

fn main() -> io::Result<()> {
    let _cli = Cli::parse();

    // 日志只是辅助信息，打不开文件也继续运行，启动后提示一次
    let log_error = logging::init(Path::new(logging::LOG_FILE)).err();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "taskpad started");

    // 任务文件在工作目录下；加载失败时以空列表启动并提示
    let (store, load_error) = match TaskStore::open(TASKS_FILE) {
        Ok(store) => (store, None),
        Err(e) => (TaskStore::new(TASKS_FILE), Some(e)),
    };

    let mut app = App::new(store);
    if let Some(e) = log_error {
        app.report_logging_disabled(&e);
    }
    // 加载失败更重要，覆盖日志提示
    if let Some(e) = load_error {
        app.report_load_error(&e);
    }

    // panic 时先恢复终端再输出信息
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        tracing::error!(panic = %panic_info, "taskpad panicked");
        original_hook(panic_info);
    }));

    // 初始化终端
    let mut terminal = ratatui::init();

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    match &result {
        Ok(()) => tracing::info!(tasks = app.store.len(), "taskpad exited"),
        Err(e) => tracing::error!(error = %e, "terminal error"),
    }
    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::main_view::render(frame, app))?;

        if !event::handle_events(app)? {
            break;
        }
    }
    Ok(())
}
