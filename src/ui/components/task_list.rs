use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::truncate;
use crate::theme::ThemeColors;

/// 渲染任务列表（每次都从完整列表重建）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[String],
    state: &mut ListState,
    focused: bool,
    colors: &ThemeColors,
) {
    let border = if focused { colors.highlight } else { colors.border };
    let block = Block::default()
        .title(" Tasks ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    if tasks.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No tasks yet",
                Style::default().fg(colors.muted),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // 边框 + 编号前缀
    let max_width = area.width.saturating_sub(8) as usize;
    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3} ", i + 1), Style::default().fg(colors.muted)),
                Span::styled(truncate(task, max_width), Style::default().fg(colors.text)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("❯")
        .highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, area, state);
}
