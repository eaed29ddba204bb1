use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Focus;
use crate::operations::tasks::Command;
use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(frame: &mut Frame, area: Rect, focus: Focus, has_items: bool, colors: &ThemeColors) {
    let shortcuts = get_shortcuts(focus, has_items);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            key.clone(),
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn get_shortcuts(focus: Focus, has_items: bool) -> Vec<(String, &'static str)> {
    match focus {
        Focus::Input => vec![
            ("Enter".to_string(), "add"),
            ("Esc".to_string(), "list"),
            ("Ctrl+C".to_string(), "quit"),
        ],
        Focus::List => {
            let commands: &[Command] = if has_items {
                &Command::ALL
            } else {
                &[Command::Add, Command::View]
            };
            let mut shortcuts: Vec<(String, &'static str)> = commands
                .iter()
                .map(|cmd| (cmd.key().to_string(), cmd.label()))
                .collect();
            if has_items {
                shortcuts.push(("e".to_string(), "edit"));
            }
            shortcuts.push(("i".to_string(), "input"));
            shortcuts.push(("?".to_string(), "help"));
            shortcuts.push(("q".to_string(), "quit"));
            shortcuts
        }
    }
}
