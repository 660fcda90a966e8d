// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::products::ProductId;
use crate::ui::toasts::{self, Position};
use iced::Size;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Input, ticks and dismissals for the toast layer.
    Toast(toasts::Message),
    InputChanged(String),
    AddProduct,
    MoveToBasket(ProductId),
    MoveToList(ProductId),
    DeleteProduct(ProductId),
    ClearBasket,
    HideFirstToast,
    HideLastToast,
    /// Edge that new toasts are shown on.
    EdgeSelected(Position),
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ru`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TOAST_STACK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
