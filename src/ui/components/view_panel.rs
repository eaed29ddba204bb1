//! View 面板：只读显示编号后的全部任务
//!
//! 任务多于面板高度时可以滚动，长任务按显示宽度折行，保证每个任务都能看到。

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};
use super::wrap;
use crate::dialogs::ViewPanel;
use crate::theme::ThemeColors;

/// 渲染 "Your Tasks" 面板；顺便把滚动位置收紧到有效范围
pub fn render(frame: &mut Frame, panel: &mut ViewPanel, colors: &ThemeColors) {
    let area = frame.area();
    let width = 60u16.min(area.width.saturating_sub(4));

    // 左侧留一列空白
    let text_width = width.saturating_sub(3) as usize;
    let rows: Vec<String> = panel
        .lines
        .iter()
        .flat_map(|line| wrap(line, text_width))
        .collect();

    // 内容 + 边框 + 空行 + 提示，超出屏幕时改为滚动
    let height = (rows.len() as u16)
        .saturating_add(4)
        .min(area.height.saturating_sub(2));

    let popup_area = center_dialog(area, width, height);
    let visible = height.saturating_sub(4) as usize;

    let max_scroll = rows.len().saturating_sub(visible);
    panel.scroll = panel.scroll.min(max_scroll);
    let scrollable = max_scroll > 0;

    let title = if scrollable {
        format!(
            " Your Tasks {}-{}/{} ",
            panel.scroll + 1,
            (panel.scroll + visible).min(rows.len()),
            rows.len()
        )
    } else {
        " Your Tasks ".to_string()
    };
    let inner = render_dialog_frame(frame, popup_area, &title, colors.highlight, colors);

    let [content_area, _, hint_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let content: Vec<Line> = rows
        .iter()
        .skip(panel.scroll)
        .take(visible)
        .map(|row| Line::from(Span::styled(format!(" {}", row), Style::default().fg(colors.text))))
        .collect();
    frame.render_widget(Paragraph::new(content), content_area);

    if scrollable {
        render_hint(frame, hint_area, &[("j/k", "scroll"), ("Esc", "close")], colors);
    } else {
        render_hint(frame, hint_area, &[("Esc", "close")], colors);
    }
}
