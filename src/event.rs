use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Focus};
use crate::dialogs::VIEW_PAGE;
use crate::operations::tasks::Command;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.ui.clear_expired_toast();

    // 轮询事件（100ms 超时，便于 Toast 过期）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C 任何时候都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 优先处理弹窗事件
    if app.dialogs.confirm_dialog.is_some() {
        handle_confirm_dialog_key(app, key);
        return;
    }

    if app.dialogs.theme_selector.is_some() {
        handle_theme_selector_key(app, key);
        return;
    }

    // 剩下的只有 View 面板和帮助面板
    if app.dialogs.has_active_dialog() {
        handle_panel_key(app, key);
        return;
    }

    match app.focus {
        Focus::Input => handle_input_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

/// 列表焦点：单键快捷键
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Esc => app.clear_selection(),

        // 编辑选中项
        KeyCode::Enter | KeyCode::Char('e') => app.edit_selected(),

        // 回到输入框
        KeyCode::Char('i') | KeyCode::Tab => app.focus_input(),

        // x 作为 delete 的别名
        KeyCode::Char('x') | KeyCode::Delete => app.run_command(Command::Delete),

        KeyCode::Char('t') | KeyCode::Char('T') => app.open_theme_selector(),
        KeyCode::Char('?') => app.dialogs.show_help = true,

        KeyCode::Char(c) => {
            if let Some(command) = Command::from_key(c) {
                app.run_command(command);
            }
        }

        _ => {}
    }
}

/// 输入焦点：字符进入输入框
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.run_command(Command::Add),
        KeyCode::Esc | KeyCode::Tab => app.focus_list(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Down => {
            app.focus_list();
            app.select_next();
        }
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

/// 确认弹窗
fn handle_confirm_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_dialog_accept(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.confirm_dialog_cancel(),
        _ => {}
    }
}

/// 主题选择器
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.theme_selector_next(),
        KeyCode::Char('k') | KeyCode::Up => app.theme_selector_prev(),
        KeyCode::Enter => app.theme_selector_confirm(),
        KeyCode::Esc | KeyCode::Char('q') => app.theme_selector_cancel(),
        _ => {}
    }
}

/// View 面板 / 帮助面板（只读）
fn handle_panel_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('v') | KeyCode::Char('?') => {
            app.dialogs.close_all();
        }
        _ => {
            if let Some(panel) = app.dialogs.view_panel.as_mut() {
                match key.code {
                    KeyCode::Char('j') | KeyCode::Down => panel.scroll_down(1),
                    KeyCode::Char('k') | KeyCode::Up => panel.scroll_up(1),
                    KeyCode::PageDown => panel.scroll_down(VIEW_PAGE),
                    KeyCode::PageUp => panel.scroll_up(VIEW_PAGE),
                    KeyCode::Char('g') | KeyCode::Home => panel.scroll_to_top(),
                    KeyCode::Char('G') | KeyCode::End => panel.scroll_to_bottom(),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tasks::{TaskStore, TASKS_FILE};

    fn temp_app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::new(dir.path().join(TASKS_FILE));
        let app = App::new(store);
        (dir, app)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_in_input_does_not_trigger_shortcuts() {
        let (_dir, mut app) = temp_app();
        type_text(&mut app, "quit dvc");

        assert_eq!(app.input, "quit dvc");
        assert!(!app.should_quit);
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_from_input() {
        let (_dir, mut app) = temp_app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_keyboard_scenario() {
        let (_dir, mut app) = temp_app();

        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Walk dog");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tasks, ["Buy milk", "Walk dog"]);

        // 选中第一项并改写
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.input, "Buy milk");
        for _ in 0.."milk".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "oat milk");
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.tasks, ["Buy oat milk", "Walk dog"]);

        // 删除第二项
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.tasks, ["Buy oat milk"]);

        // 清空需要确认
        press(&mut app, KeyCode::Char('c'));
        assert!(app.dialogs.confirm_dialog.is_some());
        press(&mut app, KeyCode::Char('y'));
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_view_panel_blocks_list_keys() {
        let (_dir, mut app) = temp_app();
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('v'));
        assert!(app.dialogs.view_panel.is_some());

        // 面板打开时 q 只关闭面板
        press(&mut app, KeyCode::Char('q'));
        assert!(app.dialogs.view_panel.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_view_panel_scroll_keys() {
        let (_dir, mut app) = temp_app();
        for i in 1..=30 {
            type_text(&mut app, &format!("Task {}", i));
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('v'));

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.dialogs.view_panel.as_ref().map(|p| p.scroll), Some(11));

        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.dialogs.view_panel.as_ref().map(|p| p.scroll), Some(10));

        press(&mut app, KeyCode::Home);
        assert_eq!(app.dialogs.view_panel.as_ref().map(|p| p.scroll), Some(0));

        // 滚动键不会改动任务列表或选中项
        assert_eq!(app.tasks.len(), 30);
        assert_eq!(app.selected(), None);
    }

    #[test]
    fn test_confirm_dialog_cancel_keeps_tasks() {
        let (_dir, mut app) = temp_app();
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.dialogs.confirm_dialog.is_none());
        assert_eq!(app.tasks, ["a"]);
    }

    #[test]
    fn test_delete_without_selection() {
        let (_dir, mut app) = temp_app();
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.tasks, ["a"]);
        assert!(app
            .ui
            .toast
            .as_ref()
            .is_some_and(|t| t.message.starts_with("Selection Error")));
    }
}
