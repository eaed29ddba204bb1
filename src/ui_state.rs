//! UI 状态管理
//!
//! 管理与显示相关的状态：主题、颜色、Toast。

use std::time::{Duration, Instant};

use crate::theme::{Theme, ThemeColors};

/// Toast 默认显示时长
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast 类型（决定边框颜色）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel, duration: Duration) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            toast: None,
            theme,
            colors: theme.colors(),
        }
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toast = Some(Toast::new(message, level, TOAST_DURATION));
    }

    /// 清除过期的 Toast
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// 更新主题
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.colors = theme.colors();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_default_state() {
        let state = UiState::new(Theme::Nord);
        assert!(state.toast.is_none());
        assert_eq!(state.theme, Theme::Nord);
    }

    #[test]
    fn test_show_toast() {
        let mut state = UiState::new(Theme::Dark);
        state.show_toast("Added: x", ToastLevel::Success);

        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.message, "Added: x");
        assert_eq!(toast.level, ToastLevel::Success);
    }

    #[test]
    fn test_clear_expired_toast() {
        let mut state = UiState::new(Theme::Dark);
        state.toast = Some(Toast::new("Test", ToastLevel::Info, Duration::from_millis(1)));

        std::thread::sleep(Duration::from_millis(2));
        state.clear_expired_toast();
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_fresh_toast_survives_cleanup() {
        let mut state = UiState::new(Theme::Dark);
        state.show_toast("still here", ToastLevel::Info);
        state.clear_expired_toast();
        assert!(state.toast.is_some());
    }
}
