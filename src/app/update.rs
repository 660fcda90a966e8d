// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] with mutable access to the
//! pieces of state it may touch. Product actions report their outcome as
//! toasts; toast events are folded back into the product list afterwards.

use super::products::{ProductId, ProductList, Removed};
use crate::i18n::fluent::I18n;
use crate::ui::toasts::{
    self, ContainerId, Event, Manager, Position, Preset, PresetStyle, ToastId,
};
use iced::{Padding, Size};
use std::collections::HashMap;

/// Mutable view of the application state handed to handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub products: &'a mut ProductList,
    pub input: &'a mut String,
    pub edge: &'a mut Position,
    pub toasts: &'a mut Manager,
    pub toast_container: ContainerId,
    /// Deleted products that tapping their toast can bring back.
    pub restorable: &'a mut HashMap<ToastId, Removed>,
}

/// Icon of the toast confirming that a deleted product came back.
const RESTORED_ICON: char = '↺';

impl UpdateContext<'_> {
    fn show(&mut self, preset: Preset, key: &str, name: &str) -> Option<ToastId> {
        self.show_styled(preset, PresetStyle::default(), key, name)
    }

    fn show_styled(
        &mut self,
        preset: Preset,
        style: PresetStyle,
        key: &str,
        name: &str,
    ) -> Option<ToastId> {
        let title = self.i18n.tr_with_args(key, &[("name", name)]);
        self.toasts
            .show_preset_in(
                preset,
                title,
                style,
                Some(self.toast_container),
                *self.edge,
                None,
            )
            .map(|toast| toast.id())
    }
}

pub fn handle_add_product(ctx: &mut UpdateContext<'_>) {
    let added = ctx.products.add(ctx.input.as_str()).map(|p| p.name().to_string());
    match added {
        Some(name) => {
            ctx.input.clear();
            tracing::debug!(product = %name, "Added product");
            ctx.show(Preset::Success, "toast-product-added", &name);
        }
        None => {
            ctx.show(Preset::Error, "toast-product-name-empty", "");
        }
    }
}

pub fn handle_move(ctx: &mut UpdateContext<'_>, id: ProductId, in_basket: bool) {
    let Some(name) = ctx
        .products
        .set_in_basket(id, in_basket)
        .map(|p| p.name().to_string())
    else {
        return;
    };
    let key = if in_basket {
        "toast-product-in-basket"
    } else {
        "toast-product-returned"
    };
    ctx.show(Preset::Info, key, &name);
}

pub fn handle_delete(ctx: &mut UpdateContext<'_>, id: ProductId) {
    let Some(removed) = ctx.products.remove(id) else {
        return;
    };
    let name = removed.product().name().to_string();
    tracing::debug!(product = %name, "Deleted product");
    if let Some(toast) = ctx.show(Preset::Warning, "toast-product-deleted", &name) {
        ctx.restorable.insert(toast, removed);
    }
}

pub fn handle_clear_basket(ctx: &mut UpdateContext<'_>) {
    if ctx.products.clear_basket() > 0 {
        ctx.show(Preset::Success, "toast-basket-cleared", "");
    } else {
        ctx.show(Preset::Info, "toast-basket-already-empty", "");
    }
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    ctx.toasts
        .resize_container(ctx.toast_container, size, toast_safe_area());
}

pub fn handle_toast_message(ctx: &mut UpdateContext<'_>, message: toasts::Message) {
    ctx.toasts.update(message);
}

/// Applies queued toast events to the product list.
pub fn process_toast_events(ctx: &mut UpdateContext<'_>) {
    for event in ctx.toasts.take_events() {
        match event {
            Event::Tapped(id) => {
                let Some(removed) = ctx.restorable.remove(&id) else {
                    continue;
                };
                ctx.toasts.hide(id);
                let name = ctx.products.restore(removed).name().to_string();
                tracing::debug!(product = %name, "Restored product");
                ctx.show_styled(
                    Preset::Success,
                    PresetStyle::default().icon(RESTORED_ICON),
                    "toast-product-restored",
                    &name,
                );
            }
            Event::Hidden(id) => {
                ctx.restorable.remove(&id);
            }
            Event::Shown(_) | Event::Promoted(_) | Event::Expired(_) => {}
        }
    }
}

/// Insets that keep toasts off the window edges.
#[must_use]
pub fn toast_safe_area() -> Padding {
    use crate::ui::design_tokens::spacing;
    Padding {
        top: spacing::XS,
        right: spacing::MD,
        bottom: spacing::XS,
        left: spacing::MD,
    }
}
