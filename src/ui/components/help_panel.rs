//! 快捷键帮助面板

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::dialog_utils::center_dialog;
use crate::theme::ThemeColors;

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 36;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let lines = build_help_lines(colors);
    let panel_area = center_dialog(frame.area(), PANEL_WIDTH, lines.len() as u16 + 2);

    // 清除背景
    frame.render_widget(Clear, panel_area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    frame.render_widget(Paragraph::new(lines).block(block), panel_area);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        section_header("Input", colors),
        key_line("Enter", "Add task", colors),
        key_line("Esc / Tab", "Go to list", colors),
        key_line("↓", "Go to list", colors),
        Line::from(""),
        section_header("List", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        key_line("Esc", "Clear selection", colors),
        key_line("e / Enter", "Edit selected", colors),
        key_line("i / Tab", "Go to input", colors),
        Line::from(""),
        section_header("Commands", colors),
        key_line("a", "Add input as task", colors),
        key_line("u", "Update selected", colors),
        key_line("d / x", "Delete selected", colors),
        key_line("v", "View (j/k scroll)", colors),
        key_line("c", "Clear all tasks", colors),
        Line::from(""),
        section_header("Other", colors),
        key_line("t", "Theme selector", colors),
        key_line("?", "This help", colors),
        key_line("q / Ctrl+C", "Quit", colors),
    ]
}

fn section_header(title: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(colors.text)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &'static str, desc: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("   {:<12}", key),
            Style::default().fg(colors.highlight),
        ),
        Span::styled(desc, Style::default().fg(colors.muted)),
    ])
}
