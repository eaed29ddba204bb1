//! 输入框组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

pub const INPUT_HEIGHT: u16 = 3;

/// 渲染任务输入框；获得焦点时显示光标
pub fn render(frame: &mut Frame, area: Rect, input: &str, focused: bool, colors: &ThemeColors) {
    let border = if focused { colors.highlight } else { colors.border };

    let mut spans = vec![Span::styled(" › ", Style::default().fg(colors.muted))];
    if input.is_empty() && !focused {
        spans.push(Span::styled(
            "press i to type a task",
            Style::default().fg(colors.muted),
        ));
    } else {
        spans.push(Span::styled(input, Style::default().fg(colors.text)));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
    }

    let block = Block::default()
        .title(" Task ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
