mod colors;

use ratatui::style::Color;

pub use colors::*;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Nord,
    Gruvbox,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Nord => "Nord",
            Theme::Gruvbox => "Gruvbox",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light, Theme::Nord, Theme::Gruvbox]
    }

    pub fn colors(&self) -> ThemeColors {
        match self {
            Theme::Dark => dark_colors(),
            Theme::Light => light_colors(),
            Theme::Nord => nord_colors(),
            Theme::Gruvbox => gruvbox_colors(),
        }
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 选中行背景
    pub bg_secondary: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 成功提示
    pub success: Color,
    /// 确认弹窗边框
    pub warning: Color,
    /// 错误提示
    pub error: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::all()[0], Theme::default());
    }

    #[test]
    fn test_labels_unique() {
        let mut labels: Vec<_> = Theme::all().iter().map(Theme::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Theme::all().len());
    }
}
