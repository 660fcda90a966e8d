// SPDX-License-Identifier: MPL-2.0
//! Application root state for the shopping-list demo.
//!
//! The `App` struct wires together the product list, localization and the
//! toast manager. Every product action reports its outcome as a toast, and
//! tapping the toast of a deleted product restores it.

pub mod config;
mod message;
pub mod paths;
pub mod products;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::ui::toasts::{self, ContainerId, Manager, Position, Preset, ToastId};
use iced::{window, Element, Subscription, Task, Theme};
use products::{ProductList, Removed};
use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    products: ProductList,
    /// Text of the product name input.
    input: String,
    /// Edge new toasts are shown on.
    edge: Position,
    toasts: Manager,
    /// Container standing for the main window.
    toast_container: ContainerId,
    restorable: HashMap<ToastId, Removed>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("products", &self.products.len())
            .field("edge", &self.edge)
            .field("toasts", &self.toasts.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

fn default_window_size() -> iced::Size {
    iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_settings(I18n::default(), toasts::Settings::default())
    }
}

impl App {
    fn with_settings(i18n: I18n, settings: toasts::Settings) -> Self {
        let mut toasts = Manager::new(settings);
        let toast_container =
            toasts.add_container(default_window_size(), update::toast_safe_area());
        Self {
            i18n,
            products: ProductList::new(),
            input: String::new(),
            edge: Position::default(),
            toasts,
            toast_container,
            restorable: HashMap::new(),
        }
    }

    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let settings = toasts::Settings::from(&config.toast);
        tracing::info!(locale = %i18n.current_locale(), ?settings, "Starting application");

        let mut app = Self::with_settings(i18n, settings);

        // Show warnings for config loading issues
        if let Some(key) = config_warning {
            let title = app.i18n.tr(&key);
            app.toasts
                .show_preset(Preset::Warning, title, Position::Top, None);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.toasts.is_animating(),
            self.toasts.next_deadline(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        // The tick subscription sleeps while the manager is idle, so bring
        // its clock up to date before anything is shown or scheduled.
        if !matches!(message, Message::Toast(toasts::Message::Tick(_))) {
            self.toasts.tick(Instant::now());
        }

        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            products: &mut self.products,
            input: &mut self.input,
            edge: &mut self.edge,
            toasts: &mut self.toasts,
            toast_container: self.toast_container,
            restorable: &mut self.restorable,
        };

        match message {
            Message::Toast(toast_message) => update::handle_toast_message(&mut ctx, toast_message),
            Message::InputChanged(value) => *ctx.input = value,
            Message::AddProduct => update::handle_add_product(&mut ctx),
            Message::MoveToBasket(id) => update::handle_move(&mut ctx, id, true),
            Message::MoveToList(id) => update::handle_move(&mut ctx, id, false),
            Message::DeleteProduct(id) => update::handle_delete(&mut ctx, id),
            Message::ClearBasket => update::handle_clear_basket(&mut ctx),
            Message::HideFirstToast => {
                ctx.toasts.hide_first();
            }
            Message::HideLastToast => {
                ctx.toasts.hide_last();
            }
            Message::EdgeSelected(edge) => *ctx.edge = edge,
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
        }

        update::process_toast_events(&mut ctx);
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            products: &self.products,
            input: &self.input,
            edge: self.edge,
            toasts: &self.toasts,
            toast_container: self.toast_container,
        })
    }
}
