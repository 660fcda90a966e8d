// SPDX-License-Identifier: MPL-2.0
//! Ready-made toast styles.

use super::view::{ToastContent, ToastView};
use crate::ui::design_tokens::palette;
use iced::Color;

/// Per-toast overrides of a preset's look.
///
/// Unset fields keep the preset's own icon and colours.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PresetStyle {
    pub icon: Option<char>,
    pub background: Option<Color>,
    pub tint: Option<Color>,
}

impl PresetStyle {
    #[must_use]
    pub fn icon(mut self, icon: char) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    #[must_use]
    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }
}

/// Named styling bundle for common feedback toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Info,
    Warning,
    Error,
    Success,
}

impl Preset {
    #[must_use]
    pub fn background(self) -> Color {
        match self {
            Preset::Info => palette::INFO_500,
            Preset::Warning => palette::WARNING_500,
            Preset::Error => palette::ERROR_500,
            Preset::Success => palette::SUCCESS_500,
        }
    }

    #[must_use]
    pub fn tint(self) -> Color {
        palette::WHITE
    }

    #[must_use]
    pub fn icon(self) -> char {
        match self {
            Preset::Info => 'ℹ',
            Preset::Warning => '!',
            Preset::Error => '✕',
            Preset::Success => '✓',
        }
    }

    /// Builds a stack-enabled view styled for this preset.
    #[must_use]
    pub fn view(self, title: impl Into<String>) -> ToastView {
        self.styled_view(title, PresetStyle::default())
    }

    /// Builds a stack-enabled view with `style` applied over the preset.
    #[must_use]
    pub fn styled_view(self, title: impl Into<String>, style: PresetStyle) -> ToastView {
        let content = ToastContent {
            icon: Some(style.icon.unwrap_or_else(|| self.icon())),
            background: style.background.unwrap_or_else(|| self.background()),
            tint: style.tint.unwrap_or_else(|| self.tint()),
            ..ToastContent::new(title)
        };
        ToastView::from_content(content).stacking(true)
    }
}
