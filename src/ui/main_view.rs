//! 主界面渲染

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::{App, Focus};

use super::components::{
    confirm_dialog, footer, header, help_panel, input_bar, task_list, theme_selector, toast,
    view_panel,
};

/// 渲染整个界面：Header / 输入框 / 列表 / Footer，再叠加弹窗
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.ui.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, input_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(input_bar::INPUT_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    header::render(frame, header_area, app.store.path(), app.tasks.len(), &colors);
    input_bar::render(
        frame,
        input_area,
        &app.input,
        app.focus == Focus::Input,
        &colors,
    );
    task_list::render(
        frame,
        list_area,
        &app.tasks,
        &mut app.list_state,
        app.focus == Focus::List,
        &colors,
    );
    footer::render(frame, footer_area, app.focus, !app.tasks.is_empty(), &colors);

    // 弹窗
    if let Some(ref mut panel) = app.dialogs.view_panel {
        view_panel::render(frame, panel, &colors);
    }

    if app.dialogs.show_help {
        help_panel::render(frame, &colors);
    }

    if let Some(index) = app.dialogs.theme_selector {
        theme_selector::render(frame, index, &colors);
    }

    if let Some(ref confirm_type) = app.dialogs.confirm_dialog {
        confirm_dialog::render(frame, confirm_type, &colors);
    }

    // Toast 最后渲染，位于最上层
    if let Some(ref t) = app.ui.toast {
        if !t.is_expired() {
            toast::render(frame, t, &colors);
        }
    }
}
