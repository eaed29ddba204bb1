use std::path::Path;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// Header 高度：边框 + 一行标题
pub const HEADER_HEIGHT: u16 = 3;

/// 渲染顶部标题栏（名称 + 任务文件 + 数量）
pub fn render(frame: &mut Frame, area: Rect, file: &Path, task_count: usize, colors: &ThemeColors) {
    let left = vec![
        Span::styled(
            " taskpad",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", file.display()),
            Style::default().fg(colors.muted),
        ),
    ];
    let right = Span::styled(
        format!("{} tasks ", task_count),
        Style::default().fg(colors.muted),
    );

    // 计算中间填充空格
    let inner_width = area.width.saturating_sub(2) as usize;
    let used_width: usize = left.iter().map(Span::width).sum::<usize>() + right.width();
    let padding = " ".repeat(inner_width.saturating_sub(used_width));

    let mut spans = left;
    spans.push(Span::raw(padding));
    spans.push(right);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
