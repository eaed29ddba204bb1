//! 对话框状态管理
//!
//! 管理所有 TUI 弹窗的显示状态和数据。

pub use crate::ui::components::confirm_dialog::ConfirmType;

/// 每次 PageUp / PageDown 滚动的行数
pub const VIEW_PAGE: usize = 10;

/// View 面板：编号后的任务行 + 滚动位置
///
/// `scroll` 是第一行可见的显示行；上限在渲染时按面板高度收紧。
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ViewPanel {
    pub lines: Vec<String>,
    pub scroll: usize,
}

impl ViewPanel {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, scroll: 0 }
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_add(rows);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// 滚到末尾（渲染时收紧到最后一页）
    pub fn scroll_to_bottom(&mut self) {
        self.scroll = usize::MAX;
    }
}

/// 对话框状态
#[derive(Debug, Default)]
pub struct DialogState {
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 确认弹窗（Clear 前必须确认）
    pub confirm_dialog: Option<ConfirmType>,
    /// View 面板
    pub view_panel: Option<ViewPanel>,
    /// 主题选择器当前索引；None 表示未打开
    pub theme_selector: Option<usize>,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭所有对话框
    pub fn close_all(&mut self) {
        self.show_help = false;
        self.confirm_dialog = None;
        self.view_panel = None;
        self.theme_selector = None;
    }

    /// 检查是否有活跃的对话框
    pub fn has_active_dialog(&self) -> bool {
        self.show_help
            || self.confirm_dialog.is_some()
            || self.view_panel.is_some()
            || self.theme_selector.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_empty_state() {
        let state = DialogState::new();
        assert!(!state.has_active_dialog());
    }

    #[test]
    fn test_close_all_clears_all_dialogs() {
        let mut state = DialogState::new();
        state.show_help = true;
        state.confirm_dialog = Some(ConfirmType::ClearAll { count: 3 });
        state.view_panel = Some(ViewPanel::new(vec!["1. a".to_string()]));
        state.theme_selector = Some(1);
        assert!(state.has_active_dialog());

        state.close_all();
        assert!(!state.has_active_dialog());
        assert!(state.confirm_dialog.is_none());
        assert!(state.view_panel.is_none());
    }

    #[test]
    fn test_view_panel_scroll_saturates() {
        let mut panel = ViewPanel::new(vec!["1. a".to_string()]);
        panel.scroll_up(3);
        assert_eq!(panel.scroll, 0);

        panel.scroll_down(VIEW_PAGE);
        assert_eq!(panel.scroll, VIEW_PAGE);

        panel.scroll_to_bottom();
        panel.scroll_down(1);
        assert_eq!(panel.scroll, usize::MAX);

        panel.scroll_to_top();
        assert_eq!(panel.scroll, 0);
    }
}
