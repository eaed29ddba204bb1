//! 任务命令：前端与存储之间的业务逻辑层
//!
//! 把五个用户意图映射到 [`TaskStore`] 调用，并把结果转换成前端可以直接
//! 渲染的 [`Feedback`]。
//!
//! ## 调用链
//!
//! ```text
//! key press ──> Command + Intent ──> handler(command) ──> TaskStore ──> tasks.txt
//!                                          │
//!                                          └──> Feedback ──> toast / dialog / list refresh
//! ```
//!
//! Handler 不接触终端。三类错误都在这里折叠成 `Feedback::Failed`，
//! 不会继续向上传播。

use tracing::{info, warn};

use crate::error::TaskError;
use crate::storage::tasks::{ClearOutcome, TaskStore};

/// 用户可触发的五个命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Update,
    Delete,
    View,
    Clear,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Add,
        Command::Update,
        Command::Delete,
        Command::View,
        Command::Clear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Update => "update",
            Command::Delete => "delete",
            Command::View => "view",
            Command::Clear => "clear",
        }
    }

    /// 列表模式下的快捷键
    pub fn key(&self) -> char {
        match self {
            Command::Add => 'a',
            Command::Update => 'u',
            Command::Delete => 'd',
            Command::View => 'v',
            Command::Clear => 'c',
        }
    }

    pub fn from_key(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.key() == c)
    }
}

/// 命令的隐式参数：输入框内容、当前选中项，
/// 以及 Clear 是否已经得到用户确认
#[derive(Debug, Clone, Default)]
pub struct Intent {
    pub input: String,
    pub selection: Option<usize>,
    pub confirmed: bool,
}

impl Intent {
    pub fn new(input: impl Into<String>, selection: Option<usize>) -> Self {
        Self {
            input: input.into(),
            selection,
            confirmed: false,
        }
    }

    pub fn confirmed(mut self) -> Self {
        self.confirmed = true;
        self
    }
}

/// 一次命令的用户可见结果
#[derive(Debug)]
pub enum Feedback {
    /// 修改成功，前端需要从 store 重建列表
    Changed(String),
    /// View 的结果：从 1 开始编号的行
    Listing(Vec<String>),
    /// 没有修改，仅提示
    Notice(String),
    /// Clear 需要用户确认
    ConfirmClear { count: usize },
    Failed(TaskError),
}

impl Feedback {
    pub fn is_change(&self) -> bool {
        matches!(self, Feedback::Changed(_))
    }

    /// Toast 文本；Listing 和 ConfirmClear 以弹窗呈现，没有 Toast
    pub fn message(&self) -> Option<String> {
        match self {
            Feedback::Changed(msg) | Feedback::Notice(msg) => Some(msg.clone()),
            Feedback::Failed(err) => Some(user_message(err)),
            Feedback::Listing(_) | Feedback::ConfirmClear { .. } => None,
        }
    }
}

pub type Handler = fn(&mut TaskStore, &Intent) -> Feedback;

/// 命令分发表
pub fn handler(command: Command) -> Handler {
    match command {
        Command::Add => add,
        Command::Update => update,
        Command::Delete => delete,
        Command::View => view,
        Command::Clear => clear,
    }
}

pub fn dispatch(store: &mut TaskStore, command: Command, intent: &Intent) -> Feedback {
    let feedback = handler(command)(store, intent);
    if let Feedback::Failed(ref err) = feedback {
        warn!(command = command.label(), error = %err, "command failed");
    }
    feedback
}

/// "1. Buy milk", "2. Walk dog", ...
pub fn numbered(tasks: &[String]) -> Vec<String> {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| format!("{}. {}", i + 1, task))
        .collect()
}

fn add(store: &mut TaskStore, intent: &Intent) -> Feedback {
    match store.add(&intent.input) {
        Ok(tasks) => Feedback::Changed(format!("Added: {}", tasks[tasks.len() - 1])),
        Err(e) => Feedback::Failed(e),
    }
}

fn update(store: &mut TaskStore, intent: &Intent) -> Feedback {
    let Some(index) = intent.selection else {
        return Feedback::Failed(TaskError::selection("select a task to update"));
    };
    match store.update(index, &intent.input) {
        Ok(tasks) => Feedback::Changed(format!("Updated: {}", tasks[index])),
        Err(e) => Feedback::Failed(e),
    }
}

fn delete(store: &mut TaskStore, intent: &Intent) -> Feedback {
    let Some(index) = intent.selection else {
        return Feedback::Failed(TaskError::selection("select a task to delete"));
    };
    match store.delete(index) {
        Ok(removed) => Feedback::Changed(format!("Deleted: {}", removed)),
        Err(e) => Feedback::Failed(e),
    }
}

fn view(store: &mut TaskStore, _intent: &Intent) -> Feedback {
    if store.is_empty() {
        return Feedback::Notice("No tasks: your task list is empty".to_string());
    }
    info!(count = store.len(), "tasks viewed");
    Feedback::Listing(numbered(store.list()))
}

fn clear(store: &mut TaskStore, intent: &Intent) -> Feedback {
    if store.is_empty() {
        return Feedback::Notice("Nothing to clear".to_string());
    }
    if !intent.confirmed {
        return Feedback::ConfirmClear { count: store.len() };
    }
    match store.clear(true) {
        Ok(ClearOutcome::Cleared(n)) => Feedback::Changed(format!("Cleared {} tasks", n)),
        Ok(ClearOutcome::NothingToClear) => Feedback::Notice("Nothing to clear".to_string()),
        Ok(ClearOutcome::Declined) => Feedback::Notice("Clear cancelled".to_string()),
        Err(e) => Feedback::Failed(e),
    }
}

fn user_message(err: &TaskError) -> String {
    let detail = match err {
        TaskError::Validation(_) => "task field is empty!",
        TaskError::Selection(msg) => msg.as_str(),
        TaskError::Persistence(_) => "failed to save tasks",
    };
    format!("{}: {}", err.kind(), detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tasks::TASKS_FILE;

    fn temp_store(tasks: &[&str]) -> (tempfile::TempDir, TaskStore) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::new(dir.path().join(TASKS_FILE));
        for t in tasks {
            store.add(t).unwrap();
        }
        (dir, store)
    }

    #[test]
    fn test_command_keys_round_trip() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_key(cmd.key()), Some(cmd));
        }
        assert_eq!(Command::from_key('z'), None);
    }

    #[test]
    fn test_add_empty_input() {
        let (_dir, mut store) = temp_store(&["a"]);
        let fb = dispatch(&mut store, Command::Add, &Intent::new("   ", None));

        assert!(matches!(fb, Feedback::Failed(TaskError::Validation(_))));
        assert_eq!(fb.message().as_deref(), Some("Input Error: task field is empty!"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_reports_trimmed_task() {
        let (_dir, mut store) = temp_store(&[]);
        let fb = dispatch(&mut store, Command::Add, &Intent::new("  Buy milk ", None));

        assert!(fb.is_change());
        assert_eq!(fb.message().as_deref(), Some("Added: Buy milk"));
    }

    #[test]
    fn test_update_requires_selection() {
        let (_dir, mut store) = temp_store(&["a"]);
        let fb = dispatch(&mut store, Command::Update, &Intent::new("b", None));

        assert!(matches!(fb, Feedback::Failed(TaskError::Selection(_))));
        assert_eq!(store.list(), ["a"]);
    }

    #[test]
    fn test_update_selected() {
        let (_dir, mut store) = temp_store(&["a", "b"]);
        let fb = dispatch(&mut store, Command::Update, &Intent::new("B!", Some(1)));

        assert_eq!(fb.message().as_deref(), Some("Updated: B!"));
        assert_eq!(store.list(), ["a", "B!"]);
    }

    #[test]
    fn test_update_stale_selection() {
        let (_dir, mut store) = temp_store(&["a"]);
        let fb = dispatch(&mut store, Command::Update, &Intent::new("b", Some(3)));
        assert!(matches!(fb, Feedback::Failed(TaskError::Selection(_))));
    }

    #[test]
    fn test_delete_requires_selection() {
        let (_dir, mut store) = temp_store(&["a"]);
        let fb = dispatch(&mut store, Command::Delete, &Intent::default());

        assert!(matches!(fb, Feedback::Failed(TaskError::Selection(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_selected() {
        let (_dir, mut store) = temp_store(&["a", "b", "c"]);
        let fb = dispatch(&mut store, Command::Delete, &Intent::new("", Some(0)));

        assert_eq!(fb.message().as_deref(), Some("Deleted: a"));
        assert_eq!(store.list(), ["b", "c"]);
    }

    #[test]
    fn test_view_empty() {
        let (_dir, mut store) = temp_store(&[]);
        let fb = dispatch(&mut store, Command::View, &Intent::default());
        assert!(matches!(fb, Feedback::Notice(_)));
    }

    #[test]
    fn test_view_numbers_from_one() {
        let (_dir, mut store) = temp_store(&["Buy milk", "Walk dog"]);
        let fb = dispatch(&mut store, Command::View, &Intent::default());
        assert!(fb.message().is_none());

        match fb {
            Feedback::Listing(lines) => assert_eq!(lines, ["1. Buy milk", "2. Walk dog"]),
            other => panic!("unexpected feedback: {:?}", other),
        }
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_clear_empty_never_asks() {
        let (_dir, mut store) = temp_store(&[]);
        let fb = dispatch(&mut store, Command::Clear, &Intent::default());

        assert!(matches!(fb, Feedback::Notice(_)));
        assert_eq!(fb.message().as_deref(), Some("Nothing to clear"));
    }

    #[test]
    fn test_clear_asks_then_clears() {
        let (_dir, mut store) = temp_store(&["a", "b"]);

        let fb = dispatch(&mut store, Command::Clear, &Intent::default());
        assert!(matches!(fb, Feedback::ConfirmClear { count: 2 }));
        assert!(fb.message().is_none());
        assert_eq!(store.len(), 2);

        let fb = dispatch(&mut store, Command::Clear, &Intent::default().confirmed());
        assert!(fb.is_change());
        assert!(store.is_empty());
    }

    #[test]
    fn test_persistence_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::new(dir.path().join("gone").join(TASKS_FILE));

        let fb = dispatch(&mut store, Command::Add, &Intent::new("x", None));
        assert!(matches!(fb, Feedback::Failed(TaskError::Persistence(_))));
        assert_eq!(fb.message().as_deref(), Some("Save Error: failed to save tasks"));
        // 内存不回滚
        assert_eq!(store.list(), ["x"]);
    }

    #[test]
    fn test_numbered() {
        let tasks = vec!["x".to_string(), "y".to_string()];
        assert_eq!(numbered(&tasks), ["1. x", "2. y"]);
        assert!(numbered(&[]).is_empty());
    }
}
