use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::ThemeColors;
use crate::ui_state::{Toast, ToastLevel};

/// 在屏幕底部居中显示 Toast 消息
pub fn render(frame: &mut Frame, toast: &Toast, colors: &ThemeColors) {
    let area = frame.area();
    if area.width < 8 || area.height < 7 {
        return;
    }

    // 计算 Toast 尺寸和位置（Footer 上方）
    let toast_width = (toast.message.width() + 6).min(area.width as usize - 4) as u16;
    let toast_height = 3;
    let toast_x = (area.width - toast_width) / 2;
    let toast_y = area.height - toast_height - 3;

    let toast_area = Rect::new(toast_x, toast_y, toast_width, toast_height);

    // 清除背景
    frame.render_widget(Clear, toast_area);

    let border = match toast.level {
        ToastLevel::Info => colors.highlight,
        ToastLevel::Success => colors.success,
        ToastLevel::Error => colors.error,
    };

    let paragraph = Paragraph::new(toast.message.as_str())
        .style(
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(colors.bg)),
        );

    frame.render_widget(paragraph, toast_area);
}
