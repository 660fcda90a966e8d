// SPDX-License-Identifier: MPL-2.0
use iced::{Padding, Point, Size};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use toast_stack::config::{self, Config, ToastConfig};
use toast_stack::i18n::fluent::I18n;
use toast_stack::ui::toasts::{
    ContainerId, DragPhase, Event, Manager, Position, Settings, ToastView, TouchPhase,
};
use tempfile::tempdir;

const ANIMATE: Duration = Duration::from_millis(250);
const DEADLINE: Duration = Duration::from_secs(8);

fn manager() -> (Manager, ContainerId, Instant) {
    let start = Instant::now();
    let mut manager = Manager::with_start(Settings::default(), start);
    let container = manager.add_container(
        Size::new(390.0, 844.0),
        Padding {
            top: 47.0,
            right: 0.0,
            bottom: 34.0,
            left: 0.0,
        },
    );
    (manager, container, start)
}

fn stacked(title: &str) -> ToastView {
    ToastView::new(title).stacking(true)
}

#[test]
fn hiding_current_promotes_receded_toast_with_fresh_deadline() {
    let (mut manager, container, start) = manager();

    let a = manager
        .show(stacked("A"), Position::Top, Some(DEADLINE))
        .expect("A shown");
    let b = manager
        .show(stacked("B"), Position::Top, Some(DEADLINE))
        .expect("B shown");
    assert_eq!(manager.current(container, Position::Top), Some(b));

    manager.tick(start + ANIMATE);
    let receded = manager.view(a.id()).expect("A tracked").transform();
    assert!(!receded.is_identity());
    assert!(receded.scale < 1.0);

    // Hide B well after A's original deadline would have passed.
    let hide_at = start + Duration::from_secs(5);
    manager.tick(hide_at);
    assert!(manager.hide(b.id()));
    assert_eq!(manager.current(container, Position::Top), Some(a));
    assert!(manager.take_events().contains(&Event::Promoted(a.id())));

    manager.tick(hide_at + ANIMATE);
    assert!(manager.view(a.id()).expect("A tracked").transform().is_identity());

    // The fresh timer starts at the promotion, not at A's show.
    manager.tick(hide_at + ANIMATE + DEADLINE - Duration::from_millis(1));
    assert!(manager.get(a.id()).is_some());
    manager.tick(hide_at + ANIMATE + DEADLINE);
    assert!(manager.get(a.id()).is_none());
    assert!(manager.take_events().contains(&Event::Expired(a.id())));
}

#[test]
fn deadline_never_fires_before_animation_plus_deadline() {
    let (mut manager, _, start) = manager();
    let deadline = Duration::from_secs(2);
    let toast = manager
        .show(ToastView::new("Saved"), Position::Bottom, Some(deadline))
        .expect("shown");

    let mut at = start;
    while at < start + ANIMATE + deadline {
        manager.tick(at);
        assert!(manager.get(toast.id()).is_some(), "hidden early at {at:?}");
        at += Duration::from_millis(100);
    }

    manager.tick(start + ANIMATE + deadline);
    assert!(manager.get(toast.id()).is_none());
}

#[test]
fn toast_without_deadline_stays_until_hidden() {
    let (mut manager, _, start) = manager();
    let toast = manager
        .show(ToastView::new("Sticky"), Position::Top, None)
        .expect("shown");

    manager.tick(start + Duration::from_secs(3600));
    assert!(manager.get(toast.id()).is_some());
    assert!(!manager.has_activity());
}

#[test]
fn touch_keeps_toast_past_its_deadline() {
    let (mut manager, _, start) = manager();
    let toast = manager
        .show(ToastView::new("Hold"), Position::Top, Some(Duration::from_secs(1)))
        .expect("shown");

    manager.tick(start + ANIMATE);
    manager.touch(toast.id(), TouchPhase::Began);
    manager.tick(start + Duration::from_secs(30));
    assert!(manager.get(toast.id()).is_some());

    manager.touch(toast.id(), TouchPhase::Ended);
    manager.tick(start + Duration::from_secs(60));
    assert!(manager.get(toast.id()).is_some());
}

#[test]
fn drag_dismiss_threshold_is_half_the_height() {
    let (mut manager, _, start) = manager();
    let height = 64.0;
    let short = manager
        .show(
            ToastView::new("Short").with_height(height),
            Position::Top,
            Some(DEADLINE),
        )
        .expect("shown");
    manager.tick(start + ANIMATE);

    // Exactly half does not dismiss.
    manager.drag(short.id(), DragPhase::Began { location: Point::new(10.0, 10.0) });
    manager.drag(short.id(), DragPhase::Changed { translation_y: -height / 2.0 });
    manager.drag(short.id(), DragPhase::Ended { translation_y: -height / 2.0 });
    assert!(manager.get(short.id()).is_some());
    manager.tick(start + ANIMATE * 2);
    assert!(manager.view(short.id()).expect("tracked").transform().is_identity());

    manager.drag(short.id(), DragPhase::Began { location: Point::new(10.0, 10.0) });
    manager.drag(short.id(), DragPhase::Ended { translation_y: -height / 2.0 - 1.0 });
    assert!(manager.get(short.id()).is_none());
}

#[test]
fn bottom_toasts_dismiss_downwards() {
    let (mut manager, _, start) = manager();
    let toast = manager
        .show(ToastView::new("Bottom"), Position::Bottom, Some(DEADLINE))
        .expect("shown");
    manager.tick(start + ANIMATE);

    manager.drag(toast.id(), DragPhase::Began { location: Point::ORIGIN });
    manager.drag(toast.id(), DragPhase::Ended { translation_y: -200.0 });
    assert!(manager.get(toast.id()).is_some());

    manager.drag(toast.id(), DragPhase::Began { location: Point::ORIGIN });
    manager.drag(toast.id(), DragPhase::Ended { translation_y: 200.0 });
    assert!(manager.get(toast.id()).is_none());
}

#[test]
fn hiding_untracked_toast_changes_nothing() {
    let (mut manager, container, start) = manager();
    let toast = manager
        .show(ToastView::new("Once"), Position::Top, None)
        .expect("shown");
    assert!(manager.hide(toast.id()));
    manager.tick(start + ANIMATE);
    let _ = manager.take_events();

    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    assert!(!manager.hide_with(toast.id(), move |_| counter.set(counter.get() + 1)));
    manager.tick(start + ANIMATE * 4);

    assert_eq!(calls.get(), 0);
    assert!(manager.take_events().is_empty());
    assert!(manager.is_empty());
    assert!(manager.group(container, Position::Top).is_empty());
}

#[test]
fn hidden_callback_runs_exactly_once() {
    let (mut manager, _, start) = manager();
    let toast = manager
        .show(ToastView::new("Bye"), Position::Top, None)
        .expect("shown");

    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    assert!(manager.hide_with(toast.id(), move |_| counter.set(counter.get() + 1)));
    assert!(!manager.hide(toast.id()));

    manager.tick(start + ANIMATE);
    manager.tick(start + ANIMATE * 2);
    assert_eq!(calls.get(), 1);
}

#[test]
fn containers_keep_separate_stacks() {
    let (mut manager, first, _) = manager();
    let a = manager
        .show(stacked("A"), Position::Top, None)
        .expect("A shown");
    let second = manager.add_container(Size::new(800.0, 600.0), Padding::ZERO);
    let b = manager
        .show(stacked("B"), Position::Top, None)
        .expect("B shown in the newest container");

    assert_eq!(b.container(), second);
    assert_eq!(manager.current(first, Position::Top), Some(a));
    assert_eq!(manager.current(second, Position::Top), Some(b));
    assert_eq!(manager.layers(first).len(), 1);
    assert_eq!(manager.layers(second).len(), 1);
}

#[test]
fn config_round_trip_drives_settings_and_locale() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("ru".to_string());
    config.toast = ToastConfig {
        animate_duration_ms: Some(400),
        dismiss_threshold: Some(0.25),
        ..ToastConfig::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, config);

    let settings = Settings::from(&loaded.toast);
    assert_eq!(settings.animate_duration, Duration::from_millis(400));
    assert!((settings.dismiss_threshold - 0.25).abs() < f32::EPSILON);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "ru");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn unreadable_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[toast\nbroken")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some(config::CONFIG_LOAD_WARNING_KEY));
}
