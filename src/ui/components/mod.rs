use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 按显示宽度截断字符串，超出部分用省略号替代（CJK 字符占两列）
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.width() <= max_width {
        return s.to_string();
    }

    // 留一列给省略号
    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// 按显示宽度折行；每段不超过 `width` 列
pub fn wrap(s: &str, width: usize) -> Vec<String> {
    if width == 0 || s.width() <= width {
        return vec![s.to_string()];
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        row.push(c);
        used += w;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

pub mod confirm_dialog;
pub mod dialog_utils;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod input_bar;
pub mod task_list;
pub mod theme_selector;
pub mod toast;
pub mod view_panel;
