//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),
        bg_secondary: Color::Rgb(48, 48, 48),
        highlight: Color::Rgb(0, 255, 136), // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),
        border: Color::Rgb(68, 68, 68),
        success: Color::Rgb(0, 255, 136),
        warning: Color::Rgb(255, 165, 0),
        error: Color::Rgb(255, 85, 85),
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),
        bg_secondary: Color::Rgb(230, 230, 230),
        highlight: Color::Rgb(0, 128, 68), // 深绿色
        text: Color::Rgb(30, 30, 30),
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        success: Color::Rgb(0, 150, 80),
        warning: Color::Rgb(200, 120, 0),
        error: Color::Rgb(200, 50, 50),
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),           // polar night
        bg_secondary: Color::Rgb(59, 66, 82),
        highlight: Color::Rgb(136, 192, 208), // frost
        text: Color::Rgb(236, 239, 244),      // snow storm
        muted: Color::Rgb(76, 86, 106),
        border: Color::Rgb(59, 66, 82),
        success: Color::Rgb(163, 190, 140),   // aurora green
        warning: Color::Rgb(235, 203, 139),   // aurora yellow
        error: Color::Rgb(191, 97, 106),      // aurora red
    }
}

/// Gruvbox 主题 (dark)
pub fn gruvbox_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 40, 40),
        bg_secondary: Color::Rgb(60, 56, 54),
        highlight: Color::Rgb(250, 189, 47), // yellow
        text: Color::Rgb(235, 219, 178),
        muted: Color::Rgb(146, 131, 116),
        border: Color::Rgb(80, 73, 69),
        success: Color::Rgb(184, 187, 38),
        warning: Color::Rgb(254, 128, 25),   // orange
        error: Color::Rgb(251, 73, 52),
    }
}
