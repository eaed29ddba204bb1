use std::io;

use ratatui::widgets::ListState;

use crate::dialogs::{ConfirmType, DialogState, ViewPanel};
use crate::error::TaskError;
use crate::operations::tasks::{self as ops, Command, Feedback, Intent};
use crate::storage::tasks::TaskStore;
use crate::theme::Theme;
use crate::ui_state::{ToastLevel, UiState};

/// 当前键盘焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// 任务列表（快捷键生效）
    List,
    /// 输入框（字符进入输入内容）
    Input,
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务存储
    pub store: TaskStore,
    /// 显示用的任务列表（每次命令后从 store 重建）
    pub tasks: Vec<String>,
    /// 列表选择状态
    pub list_state: ListState,
    /// 输入框内容
    pub input: String,
    /// 当前焦点
    pub focus: Focus,
    /// 对话框状态
    pub dialogs: DialogState,
    /// UI 状态
    pub ui: UiState,
    /// 打开主题选择器前的主题（取消时恢复）
    theme_before_preview: Option<Theme>,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        let mut app = Self {
            should_quit: false,
            store,
            tasks: Vec::new(),
            list_state: ListState::default(),
            input: String::new(),
            focus: Focus::Input,
            dialogs: DialogState::new(),
            ui: UiState::new(Theme::default()),
            theme_before_preview: None,
        };
        app.refresh();
        app
    }

    /// 从 store 重建列表，并把选中项限制在有效范围内
    pub fn refresh(&mut self) {
        self.tasks = self.store.list().to_vec();

        let len = self.tasks.len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    /// 当前选中的任务索引
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    // ========== Commands ==========

    /// 用当前输入和选中项执行命令
    pub fn run_command(&mut self, command: Command) {
        let intent = Intent::new(self.input.clone(), self.selected());
        self.apply(command, &intent);
    }

    fn apply(&mut self, command: Command, intent: &Intent) {
        let feedback = ops::dispatch(&mut self.store, command, intent);

        // 失败的保存不会回滚内存，所以无论结果如何都重建列表
        self.refresh();

        if feedback.is_change() && command == Command::Add {
            self.input.clear();
        }

        if let Some(msg) = feedback.message() {
            let level = match feedback {
                Feedback::Changed(_) => ToastLevel::Success,
                Feedback::Failed(_) => ToastLevel::Error,
                _ => ToastLevel::Info,
            };
            self.ui.show_toast(msg, level);
        }

        match feedback {
            Feedback::Listing(lines) => {
                self.dialogs.view_panel = Some(ViewPanel::new(lines));
            }
            Feedback::ConfirmClear { count } => {
                self.dialogs.confirm_dialog = Some(ConfirmType::ClearAll { count });
            }
            _ => {}
        }
    }

    /// 确认弹窗 - 确认
    pub fn confirm_dialog_accept(&mut self) {
        if let Some(ConfirmType::ClearAll { .. }) = self.dialogs.confirm_dialog.take() {
            self.apply(Command::Clear, &Intent::default().confirmed());
        }
    }

    /// 确认弹窗 - 取消
    pub fn confirm_dialog_cancel(&mut self) {
        if self.dialogs.confirm_dialog.take().is_some() {
            self.ui.show_toast("Clear cancelled", ToastLevel::Info);
        }
    }

    /// 启动时加载失败的提示
    pub fn report_load_error(&mut self, err: &TaskError) {
        self.ui
            .show_toast(format!("Failed to load tasks: {}", err), ToastLevel::Error);
    }

    /// 日志文件打不开时的提示（程序继续运行）
    pub fn report_logging_disabled(&mut self, err: &io::Error) {
        self.ui
            .show_toast(format!("Logging disabled: {}", err), ToastLevel::Info);
    }

    // ========== Selection & Input ==========

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(prev));
    }

    pub fn clear_selection(&mut self) {
        self.list_state.select(None);
    }

    /// 把选中任务的文本放进输入框，准备 Update
    pub fn edit_selected(&mut self) {
        let Some(text) = self.selected().and_then(|i| self.store.get(i)) else {
            self.ui
                .show_toast("Selection Error: select a task to edit", ToastLevel::Error);
            return;
        };
        self.input = text.to_string();
        self.focus = Focus::Input;
    }

    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
    }

    // ========== Theme Selector ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        let index = Theme::all()
            .iter()
            .position(|t| *t == self.ui.theme)
            .unwrap_or(0);
        self.theme_before_preview = Some(self.ui.theme);
        self.dialogs.theme_selector = Some(index);
    }

    /// 主题选择器 - 选择上一个（实时预览）
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        if let Some(index) = self.dialogs.theme_selector {
            let prev = if index == 0 { len - 1 } else { index - 1 };
            self.preview_theme(prev);
        }
    }

    /// 主题选择器 - 选择下一个（实时预览）
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        if let Some(index) = self.dialogs.theme_selector {
            self.preview_theme((index + 1) % len);
        }
    }

    fn preview_theme(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.dialogs.theme_selector = Some(index);
            self.ui.set_theme(*theme);
        }
    }

    /// 主题选择器 - 确认（只在本次运行内生效，不写盘）
    pub fn theme_selector_confirm(&mut self) {
        self.dialogs.theme_selector = None;
        self.theme_before_preview = None;
        self.ui
            .show_toast(format!("Theme: {}", self.ui.theme.label()), ToastLevel::Info);
    }

    /// 主题选择器 - 取消（恢复原主题）
    pub fn theme_selector_cancel(&mut self) {
        self.dialogs.theme_selector = None;
        if let Some(theme) = self.theme_before_preview.take() {
            self.ui.set_theme(theme);
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
