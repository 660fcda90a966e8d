// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`Manager`] owns every shown toast. It stacks toasts that share a
//! container and edge, runs their enter/recede/exit animations, fires
//! deadline timers and handles touch and drag input.
//!
//! The manager has no clock of its own. Time only moves forward through
//! [`Manager::tick`], and every other operation runs against the last
//! instant it observed. In an Iced application the tick comes from a
//! subscription; in tests it is driven by hand.

use super::animation::{Animation, Completion, Visual};
use super::container::{Container, ContainerId};
use super::gesture::{self, DragPhase, TouchPhase};
use super::layout::{self, Position, Transform};
use super::preset::{Preset, PresetStyle};
use super::record::{HiddenCallback, Leaving, Record, ShownCallback, Toast};
use super::settings::Settings;
use super::timer::Timers;
use super::view::{ToastId, ToastView};
use iced::{Padding, Rectangle, Size};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

type GroupKey = (ContainerId, Position);

/// Messages for toast state changes, as delivered by the UI runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Advance the clock to the given instant.
    Tick(Instant),
    Touch(ToastId, TouchPhase),
    Drag(ToastId, DragPhase),
    /// The toast body was tapped without dragging.
    Tap(ToastId),
    /// Hide a specific toast.
    Dismiss(ToastId),
}

/// Lifecycle notifications, drained with [`Manager::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The toast finished (or abandoned) its entering animation.
    Shown(ToastId),
    /// The toast was detached from its container.
    Hidden(ToastId),
    /// A receded toast became current again.
    Promoted(ToastId),
    /// The toast's deadline elapsed and it is being hidden.
    Expired(ToastId),
    Tapped(ToastId),
}

/// A view attached to a container, as the renderer sees it.
#[derive(Debug, Clone, Copy)]
pub struct Layer<'a> {
    pub toast: Toast,
    pub view: &'a ToastView,
    /// Anchored frame before the view's transform is applied.
    pub frame: Rectangle,
    pub is_leaving: bool,
}

impl Layer<'_> {
    /// Area the view covers on screen once its transform is applied.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        self.view.transform().apply(self.frame)
    }
}

/// A completion waiting to run on a tick.
enum Pending {
    Shown {
        toast: Toast,
        callback: Option<ShownCallback>,
    },
    Hidden(HiddenCallback),
}

/// Owns shown toasts and drives their lifecycle.
pub struct Manager {
    settings: Settings,
    now: Instant,
    /// Live toasts, oldest first.
    records: Vec<Record>,
    /// Toasts animating out; still attached to their container.
    leaving: Vec<Leaving>,
    /// Live toasts per container and edge, oldest first.
    groups: HashMap<GroupKey, Vec<ToastId>>,
    /// Registered containers, in presentation order.
    containers: Vec<Container>,
    timers: Timers,
    /// Completions interrupted since the last tick.
    deferred: Vec<Pending>,
    events: Vec<Event>,
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("settings", &self.settings)
            .field("now", &self.now)
            .field("records", &self.records)
            .field("leaving", &self.leaving)
            .field("groups", &self.groups)
            .field("containers", &self.containers)
            .field("timers", &self.timers)
            .field("deferred", &self.deferred.len())
            .field("events", &self.events)
            .finish()
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Manager {
    /// Creates an empty manager whose clock starts now.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_start(settings, Instant::now())
    }

    /// Creates an empty manager whose clock starts at `start`.
    #[must_use]
    pub fn with_start(settings: Settings, start: Instant) -> Self {
        Self {
            settings,
            now: start,
            records: Vec::new(),
            leaving: Vec::new(),
            groups: HashMap::new(),
            containers: Vec::new(),
            timers: Timers::new(),
            deferred: Vec::new(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replaces the tuning values. Running animations and timers keep theirs.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Last instant observed through [`tick`](Self::tick).
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    // ------------------------------------------------------------------
    // Containers
    // ------------------------------------------------------------------

    /// Registers a presentation target. It becomes the last presented one.
    pub fn add_container(&mut self, size: Size, safe_area: Padding) -> ContainerId {
        let id = ContainerId::new();
        self.containers.push(Container::new(id, size, safe_area));
        debug!(container = ?id, "Registered toast container");
        id
    }

    /// Updates a container's metrics. Returns `false` if it is unknown.
    pub fn resize_container(&mut self, id: ContainerId, size: Size, safe_area: Padding) -> bool {
        match self.containers.iter_mut().find(|c| c.id() == id) {
            Some(container) => {
                container.set_metrics(size, safe_area);
                true
            }
            None => false,
        }
    }

    /// Unregisters a container and drops its toasts without animation.
    ///
    /// Each dropped toast emits [`Event::Hidden`]. Pending completions of
    /// dropped toasts run on the next tick.
    pub fn remove_container(&mut self, id: ContainerId) -> bool {
        let Some(index) = self.containers.iter().position(|c| c.id() == id) else {
            debug!(container = ?id, "Ignoring removal of unknown container");
            return false;
        };
        let mut container = self.containers.remove(index);

        for toast_id in container.take_children() {
            if let Some(index) = self.index_of(toast_id) {
                let mut record = self.records.remove(index);
                if let Some(timer) = record.timer.take() {
                    self.timers.cancel(timer);
                }
                if record.is_entering() {
                    self.deferred.push(Pending::Shown {
                        toast: record.toast,
                        callback: record.on_shown.take(),
                    });
                }
            } else if let Some(index) = self.leaving.iter().position(|l| l.toast.id() == toast_id) {
                let leaving = self.leaving.remove(index);
                if let Some(callback) = leaving.on_hidden {
                    self.deferred.push(Pending::Hidden(callback));
                }
            }
            self.events.push(Event::Hidden(toast_id));
        }

        self.groups.retain(|(container_id, _), _| *container_id != id);
        info!(container = ?id, "Removed toast container");
        true
    }

    /// Most recently registered container.
    #[must_use]
    pub fn last_container(&self) -> Option<ContainerId> {
        self.containers.last().map(Container::id)
    }

    #[must_use]
    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.iter().find(|c| c.id() == id)
    }

    // ------------------------------------------------------------------
    // Showing
    // ------------------------------------------------------------------

    /// Shows `view` in the last presented container.
    ///
    /// Returns `None` when no container is registered.
    pub fn show(
        &mut self,
        view: ToastView,
        position: Position,
        deadline: Option<Duration>,
    ) -> Option<Toast> {
        let container = self.last_container()?;
        self.present(view, container, position, deadline, None)
    }

    /// Shows `view` in `container`.
    ///
    /// Returns `None` when the container is unknown or the view is already
    /// tracked.
    pub fn show_in(
        &mut self,
        view: ToastView,
        container: ContainerId,
        position: Position,
        deadline: Option<Duration>,
    ) -> Option<Toast> {
        self.present(view, container, position, deadline, None)
    }

    /// Shows `view` and runs `on_shown` once it has finished entering.
    ///
    /// `container` defaults to the last presented one.
    pub fn show_with<F>(
        &mut self,
        view: ToastView,
        container: Option<ContainerId>,
        position: Position,
        deadline: Option<Duration>,
        on_shown: F,
    ) -> Option<Toast>
    where
        F: FnOnce(&mut Manager, &Toast) + 'static,
    {
        let container = container.or_else(|| self.last_container())?;
        self.present(view, container, position, deadline, Some(Box::new(on_shown)))
    }

    /// Shows a preset-styled toast in the last presented container.
    ///
    /// Without an explicit deadline the preset deadline applies.
    pub fn show_preset(
        &mut self,
        preset: Preset,
        title: impl Into<String>,
        position: Position,
        deadline: Option<Duration>,
    ) -> Option<Toast> {
        self.show_preset_in(preset, title, PresetStyle::default(), None, position, deadline)
    }

    /// Shows a preset-styled toast with `style` overrides.
    ///
    /// `container` defaults to the last presented one.
    pub fn show_preset_in(
        &mut self,
        preset: Preset,
        title: impl Into<String>,
        style: PresetStyle,
        container: Option<ContainerId>,
        position: Position,
        deadline: Option<Duration>,
    ) -> Option<Toast> {
        let container = container.or_else(|| self.last_container())?;
        let deadline = deadline.unwrap_or(self.settings.preset_deadline);
        self.present(
            preset.styled_view(title, style),
            container,
            position,
            Some(deadline),
            None,
        )
    }

    fn present(
        &mut self,
        mut view: ToastView,
        container_id: ContainerId,
        position: Position,
        deadline: Option<Duration>,
        on_shown: Option<ShownCallback>,
    ) -> Option<Toast> {
        let id = view.id();
        let Some(container_index) = self.containers.iter().position(|c| c.id() == container_id)
        else {
            debug!(toast = %id, container = ?container_id, "Ignoring show in unknown container");
            return None;
        };
        if self.index_of(id).is_some() {
            debug!(toast = %id, "Ignoring show of an already tracked toast");
            return None;
        }

        let key = (container_id, position);
        let now = self.now;
        let duration = self.settings.animate_duration;
        let shrink = view.is_stack_transform_enabled();

        // Recede the existing members of the group.
        let members = self.groups.get(&key).cloned().unwrap_or_default();
        let previous = members.last().copied();
        for member in members {
            let Some(index) = self.index_of(member) else {
                continue;
            };
            let container = &self.containers[container_index];
            let record = &mut self.records[index];

            record.view.set_current(false);
            if let Some(timer) = record.timer.take() {
                self.timers.cancel(timer);
            }
            if Some(member) != previous {
                record.view.set_hidden(true);
            }
            if record.view.is_stack_transform_enabled() && !record.view.is_moved() {
                let width = layout::anchored_frame(container, &record.view, position).width;
                let target = layout::receded_transform(position, width, shrink, &self.settings);
                let animation = Animation::new(
                    record.visual(),
                    Visual::new(target, record.view.alpha()),
                    now,
                    duration,
                    Completion::Settled,
                );
                start_animation(record, animation, &mut self.deferred);
            }
        }

        let container = &mut self.containers[container_index];
        let entering =
            layout::entering_transform(position, container.safe_area(), &view, &self.settings);
        view.set_current(true);
        view.set_hidden(false);
        view.set_moved(false);
        view.set_transform(entering);
        view.set_alpha(1.0);
        container.attach(id);

        let toast = Toast::new(id, container_id, position, deadline);
        let mut record = Record::new(toast, view);
        record.timer = deadline.map(|deadline| self.timers.schedule(now + duration + deadline, id));
        record.animation = Some(Animation::new(
            Visual::new(entering, 1.0),
            Visual::RESTING,
            now,
            duration,
            Completion::Shown,
        ));
        record.on_shown = on_shown;

        self.records.push(record);
        self.groups.entry(key).or_default().push(id);
        info!(toast = %id, ?position, ?deadline, "Showing toast");

        Some(toast)
    }

    // ------------------------------------------------------------------
    // Hiding
    // ------------------------------------------------------------------

    /// Hides a toast. Returns `false` (and does nothing) if it is not tracked.
    pub fn hide(&mut self, id: ToastId) -> bool {
        self.dismiss(id, None)
    }

    /// Hides a toast and runs `on_hidden` once it has been detached.
    ///
    /// The callback is dropped without running if the toast is not tracked.
    pub fn hide_with<F>(&mut self, id: ToastId, on_hidden: F) -> bool
    where
        F: FnOnce(&mut Manager) + 'static,
    {
        self.dismiss(id, Some(Box::new(on_hidden)))
    }

    /// Hides the oldest live toast.
    pub fn hide_first(&mut self) -> bool {
        match self.records.first() {
            Some(record) => {
                let id = record.toast.id();
                self.hide(id)
            }
            None => false,
        }
    }

    /// Hides the newest live toast.
    pub fn hide_last(&mut self) -> bool {
        match self.records.last() {
            Some(record) => {
                let id = record.toast.id();
                self.hide(id)
            }
            None => false,
        }
    }

    fn dismiss(&mut self, id: ToastId, on_hidden: Option<HiddenCallback>) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!(toast = %id, "Ignoring hide of untracked toast");
            return false;
        };

        let mut record = self.records.remove(index);
        if let Some(timer) = record.timer.take() {
            self.timers.cancel(timer);
        }
        if record.is_entering() {
            self.deferred.push(Pending::Shown {
                toast: record.toast,
                callback: record.on_shown.take(),
            });
        }

        let key = record.toast.group();
        if let Some(members) = self.groups.get_mut(&key) {
            members.retain(|member| *member != id);
            if members.is_empty() {
                self.groups.remove(&key);
            }
        }

        let safe_area = self
            .container(record.toast.container())
            .map_or(Padding::ZERO, Container::safe_area);
        let exit = layout::exiting_transform(
            record.toast.position(),
            safe_area,
            &record.view,
            &self.settings,
        );
        let animation = Animation::new(
            record.visual(),
            Visual::new(exit, self.settings.exiting_alpha),
            self.now,
            self.settings.animate_duration,
            Completion::Hidden,
        );
        self.leaving.push(Leaving {
            toast: record.toast,
            view: record.view,
            animation,
            on_hidden,
        });
        info!(toast = %id, "Hiding toast");

        self.promote(key);
        true
    }

    /// Restores the top of a group after one of its members left.
    fn promote(&mut self, key: GroupKey) {
        let Some(members) = self.groups.get(&key) else {
            return;
        };
        let previous = members.len().checked_sub(2).map(|i| members[i]);
        let last = members.last().copied();

        if let Some(index) = previous.and_then(|id| self.index_of(id)) {
            self.records[index].view.set_hidden(false);
        }

        let Some(last) = last else {
            return;
        };
        let Some(index) = self.index_of(last) else {
            return;
        };
        if self.records[index].view.is_current() {
            return;
        }

        let now = self.now;
        let duration = self.settings.animate_duration;
        let record = &mut self.records[index];
        record.view.set_current(true);
        record.view.set_hidden(false);
        if !record.view.is_moved() {
            let animation = Animation::new(
                record.visual(),
                Visual::new(Transform::IDENTITY, record.view.alpha()),
                now,
                duration,
                Completion::Settled,
            );
            start_animation(record, animation, &mut self.deferred);
        }
        if let Some(timer) = record.timer.take() {
            self.timers.cancel(timer);
        }
        if let Some(deadline) = record.toast.deadline() {
            record.timer = Some(self.timers.schedule(now + duration + deadline, last));
        }

        self.events.push(Event::Promoted(last));
        info!(toast = %last, "Promoted receded toast");
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Handles a press on a toast. A press cancels the toast's deadline.
    pub fn touch(&mut self, id: ToastId, phase: TouchPhase) {
        let Some(index) = self.index_of(id) else {
            debug!(toast = %id, ?phase, "Ignoring touch on untracked toast");
            return;
        };
        if phase == TouchPhase::Began {
            if let Some(timer) = self.records[index].timer.take() {
                self.timers.cancel(timer);
                debug!(toast = %id, "Touch cancelled deadline");
            }
        }
    }

    /// Handles a vertical drag on a toast.
    pub fn drag(&mut self, id: ToastId, phase: DragPhase) {
        let Some(index) = self.index_of(id) else {
            debug!(toast = %id, "Ignoring drag on untracked toast");
            return;
        };

        match phase {
            DragPhase::Began { location } => {
                let record = &mut self.records[index];
                if !record.view.accepts_drag_at(location) {
                    debug!(toast = %id, "Drag began outside the content area");
                    return;
                }
                if let Some(timer) = record.timer.take() {
                    self.timers.cancel(timer);
                }
                if let Some(animation) = record.animation.take() {
                    if animation.completion() == Completion::Shown {
                        self.deferred.push(Pending::Shown {
                            toast: record.toast,
                            callback: record.on_shown.take(),
                        });
                    }
                }
                record.view.set_moved(true);
            }
            DragPhase::Changed { translation_y } => {
                let record = &mut self.records[index];
                if !record.view.is_moved() {
                    return;
                }
                let offset = gesture::damped_offset(
                    record.toast.position(),
                    translation_y,
                    record.view.is_bounced(),
                    &self.settings,
                );
                record.view.set_transform(Transform::translation(offset));
            }
            DragPhase::Ended { translation_y } => {
                let record = &mut self.records[index];
                if !record.view.is_moved() {
                    return;
                }
                record.view.set_moved(false);
                if gesture::should_dismiss(
                    record.toast.position(),
                    translation_y,
                    record.view.height(),
                    &self.settings,
                ) {
                    debug!(toast = %id, translation_y, "Drag dismissed toast");
                    self.hide(id);
                } else {
                    self.spring_back(index);
                }
            }
            DragPhase::Cancelled => {
                if !self.records[index].view.is_moved() {
                    return;
                }
                self.records[index].view.set_moved(false);
                self.spring_back(index);
            }
        }
    }

    /// Animates a released toast to its resting place in the group.
    ///
    /// A toast that lost the top of its group while being dragged settles
    /// receded behind the newer one.
    fn spring_back(&mut self, index: usize) {
        let target = self.resting_transform(index);
        let record = &mut self.records[index];
        let animation = Animation::new(
            record.visual(),
            Visual::new(target, record.view.alpha()),
            self.now,
            self.settings.animate_duration,
            Completion::Settled,
        );
        start_animation(record, animation, &mut self.deferred);
    }

    fn resting_transform(&self, index: usize) -> Transform {
        let record = &self.records[index];
        if record.view.is_current() || !record.view.is_stack_transform_enabled() {
            return Transform::IDENTITY;
        }
        let Some(container) = self.container(record.toast.container()) else {
            return Transform::IDENTITY;
        };
        let shrink = self
            .groups
            .get(&record.toast.group())
            .and_then(|members| members.last())
            .and_then(|last| self.index_of(*last))
            .is_some_and(|last| self.records[last].view.is_stack_transform_enabled());
        let position = record.toast.position();
        let width = layout::anchored_frame(container, &record.view, position).width;
        layout::receded_transform(position, width, shrink, &self.settings)
    }

    /// Reports a tap on a toast as [`Event::Tapped`].
    pub fn tap(&mut self, id: ToastId) -> bool {
        if self.index_of(id).is_none() {
            debug!(toast = %id, "Ignoring tap on untracked toast");
            return false;
        }
        self.events.push(Event::Tapped(id));
        true
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    /// Advances the clock to `now` and processes everything that became due.
    ///
    /// Instants earlier than the last observed one are ignored.
    pub fn tick(&mut self, now: Instant) {
        self.now = self.now.max(now);
        let now = self.now;

        for pending in std::mem::take(&mut self.deferred) {
            self.run(pending);
        }

        let mut completed = Vec::new();
        for record in &mut self.records {
            let Some(animation) = record.animation else {
                continue;
            };
            record.apply(animation.sample(now));
            if animation.is_finished(now) {
                record.animation = None;
                if animation.completion() == Completion::Shown {
                    completed.push(Pending::Shown {
                        toast: record.toast,
                        callback: record.on_shown.take(),
                    });
                }
            }
        }

        let mut index = 0;
        while index < self.leaving.len() {
            let visual = self.leaving[index].animation.sample(now);
            self.leaving[index].view.set_transform(visual.transform);
            self.leaving[index].view.set_alpha(visual.alpha);
            if !self.leaving[index].animation.is_finished(now) {
                index += 1;
                continue;
            }

            let leaving = self.leaving.remove(index);
            let id = leaving.toast.id();
            if let Some(container) = self
                .containers
                .iter_mut()
                .find(|c| c.id() == leaving.toast.container())
            {
                container.detach(id);
            }
            self.events.push(Event::Hidden(id));
            debug!(toast = %id, "Detached toast");
            if let Some(callback) = leaving.on_hidden {
                completed.push(Pending::Hidden(callback));
            }
        }

        for (timer, id) in self.timers.take_due(now) {
            let Some(index) = self.index_of(id) else {
                continue;
            };
            if self.records[index].timer != Some(timer) {
                continue;
            }
            self.records[index].timer = None;
            self.events.push(Event::Expired(id));
            info!(toast = %id, "Toast deadline elapsed");
            self.hide(id);
        }

        for pending in completed {
            self.run(pending);
        }
    }

    fn run(&mut self, pending: Pending) {
        match pending {
            Pending::Shown { toast, callback } => {
                self.events.push(Event::Shown(toast.id()));
                if let Some(callback) = callback {
                    callback(self, &toast);
                }
            }
            Pending::Hidden(callback) => callback(self),
        }
    }

    /// Handles a toast message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => self.tick(now),
            Message::Touch(id, phase) => self.touch(id, phase),
            Message::Drag(id, phase) => self.drag(id, phase),
            Message::Tap(id) => {
                self.tap(id);
            }
            Message::Dismiss(id) => {
                self.hide(id);
            }
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Live toasts, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = Toast> + '_ {
        self.records.iter().map(|record| record.toast)
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<Toast> {
        self.index_of(id).map(|index| self.records[index].toast)
    }

    /// View of a live or leaving toast.
    #[must_use]
    pub fn view(&self, id: ToastId) -> Option<&ToastView> {
        self.index_of(id)
            .map(|index| &self.records[index].view)
            .or_else(|| {
                self.leaving
                    .iter()
                    .find(|leaving| leaving.toast.id() == id)
                    .map(|leaving| &leaving.view)
            })
    }

    /// The current toast of a group.
    #[must_use]
    pub fn current(&self, container: ContainerId, position: Position) -> Option<Toast> {
        let last = *self.groups.get(&(container, position))?.last()?;
        let record = &self.records[self.index_of(last)?];
        record.view.is_current().then_some(record.toast)
    }

    /// Live members of a group, oldest first.
    #[must_use]
    pub fn group(&self, container: ContainerId, position: Position) -> &[ToastId] {
        self.groups
            .get(&(container, position))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Views attached to `container` in draw order, leaving ones included.
    #[must_use]
    pub fn layers(&self, container: ContainerId) -> Vec<Layer<'_>> {
        let Some(target) = self.container(container) else {
            return Vec::new();
        };

        target
            .children()
            .iter()
            .filter_map(|id| {
                if let Some(index) = self.index_of(*id) {
                    let record = &self.records[index];
                    Some((record.toast, &record.view, false))
                } else {
                    self.leaving
                        .iter()
                        .find(|leaving| leaving.toast.id() == *id)
                        .map(|leaving| (leaving.toast, &leaving.view, true))
                }
            })
            .map(|(toast, view, is_leaving)| Layer {
                toast,
                view,
                frame: layout::anchored_frame(target, view, toast.position()),
                is_leaving,
            })
            .collect()
    }

    /// Number of live toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no toast is live or leaving.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.leaving.is_empty()
    }

    /// Whether anything is animating, pending or scheduled.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        self.is_animating() || !self.timers.is_empty()
    }

    /// Whether the next tick has visual work or completions to run.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.leaving.is_empty()
            || !self.deferred.is_empty()
            || self.records.iter().any(|record| record.animation.is_some())
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Drains queued lifecycle events, oldest first.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    fn index_of(&self, id: ToastId) -> Option<usize> {
        self.records.iter().position(|record| record.toast.id() == id)
    }
}

/// Replaces a record's animation, deferring an interrupted entry completion.
fn start_animation(record: &mut Record, animation: Animation, deferred: &mut Vec<Pending>) {
    if record.is_entering() {
        deferred.push(Pending::Shown {
            toast: record.toast,
            callback: record.on_shown.take(),
        });
    }
    record.animation = Some(animation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use iced::Point;
    use std::cell::Cell;
    use std::rc::Rc;

    const ANIMATE: Duration = Duration::from_millis(250);

    fn setup() -> (Manager, ContainerId, Instant) {
        let start = Instant::now();
        let mut manager = Manager::with_start(Settings::default(), start);
        let container = manager.add_container(
            Size::new(400.0, 800.0),
            Padding {
                top: 40.0,
                right: 0.0,
                bottom: 20.0,
                left: 0.0,
            },
        );
        (manager, container, start)
    }

    fn stacked(title: &str) -> ToastView {
        ToastView::new(title).with_height(60.0).stacking(true)
    }

    #[test]
    fn show_without_container_is_noop() {
        let mut manager = Manager::default();
        assert!(manager.show(stacked("a"), Position::Top, None).is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn show_in_unknown_container_is_noop() {
        let (mut manager, _, _) = setup();
        let stranger = ContainerId::new();
        assert!(manager
            .show_in(stacked("a"), stranger, Position::Top, None)
            .is_none());
        assert_eq!(manager.len(), 0);
    }

    #[test]
    fn show_targets_last_presented_container() {
        let (mut manager, _, _) = setup();
        let second = manager.add_container(Size::new(300.0, 600.0), Padding::ZERO);
        let toast = manager
            .show(stacked("a"), Position::Bottom, None)
            .expect("container registered");
        assert_eq!(toast.container(), second);
        assert_eq!(manager.last_container(), Some(second));
    }

    #[test]
    fn new_toast_starts_offscreen_and_settles_at_identity() {
        let (mut manager, _, start) = setup();
        let toast = manager
            .show(stacked("a"), Position::Top, None)
            .expect("shown");

        let view = manager.view(toast.id()).expect("tracked");
        assert_abs_diff_eq!(view.transform().translate_y, -100.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(view.transform().scale, 1.1, epsilon = F32_EPSILON);

        manager.tick(start + ANIMATE);
        let view = manager.view(toast.id()).expect("tracked");
        assert!(view.transform().is_identity());
        assert_eq!(manager.take_events(), vec![Event::Shown(toast.id())]);
    }

    #[test]
    fn second_show_recedes_first() {
        let (mut manager, container, start) = setup();
        let a = manager.show(stacked("a"), Position::Top, None).expect("a");
        manager.tick(start + ANIMATE);
        let b = manager.show(stacked("b"), Position::Top, None).expect("b");
        manager.tick(start + ANIMATE * 2);

        let a_view = manager.view(a.id()).expect("a tracked");
        assert!(!a_view.is_current());
        assert!(!a_view.is_hidden());
        assert_abs_diff_eq!(a_view.transform().translate_y, -10.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(a_view.transform().scale, 380.0 / 400.0, epsilon = 1e-5);

        assert_eq!(manager.current(container, Position::Top), Some(b));
        assert_eq!(manager.group(container, Position::Top), &[a.id(), b.id()]);
    }

    #[test]
    fn third_show_hides_all_but_previous() {
        let (mut manager, _, _) = setup();
        let a = manager.show(stacked("a"), Position::Top, None).expect("a");
        let b = manager.show(stacked("b"), Position::Top, None).expect("b");
        let c = manager.show(stacked("c"), Position::Top, None).expect("c");

        assert!(manager.view(a.id()).expect("a").is_hidden());
        assert!(!manager.view(b.id()).expect("b").is_hidden());
        assert!(manager.view(c.id()).expect("c").is_current());
    }

    #[test]
    fn groups_are_independent_per_edge() {
        let (mut manager, container, _) = setup();
        let top = manager.show(stacked("top"), Position::Top, None).expect("top");
        let bottom = manager
            .show(stacked("bottom"), Position::Bottom, None)
            .expect("bottom");

        assert_eq!(manager.current(container, Position::Top), Some(top));
        assert_eq!(manager.current(container, Position::Bottom), Some(bottom));
    }

    #[test]
    fn non_stacking_member_keeps_identity_but_is_not_current() {
        let (mut manager, _, start) = setup();
        let plain = manager
            .show(ToastView::new("plain").with_height(60.0), Position::Top, None)
            .expect("plain");
        manager.tick(start + ANIMATE);
        manager.show(stacked("b"), Position::Top, None).expect("b");
        manager.tick(start + ANIMATE * 2);

        let view = manager.view(plain.id()).expect("plain");
        assert!(!view.is_current());
        assert!(view.transform().is_identity());
    }

    #[test]
    fn hide_untracked_is_noop_and_drops_callback() {
        let (mut manager, _, start) = setup();
        let called = Rc::new(Cell::new(false));
        let flag = Rc::clone(&called);

        assert!(!manager.hide_with(ToastId::new(), move |_| flag.set(true)));
        manager.tick(start + Duration::from_secs(5));
        assert!(!called.get());
        assert!(manager.take_events().is_empty());
    }

    #[test]
    fn hide_runs_callback_after_exit_animation() {
        let (mut manager, container, start) = setup();
        let toast = manager.show(stacked("a"), Position::Top, None).expect("a");
        manager.tick(start + ANIMATE);

        let called = Rc::new(Cell::new(false));
        let flag = Rc::clone(&called);
        assert!(manager.hide_with(toast.id(), move |_| flag.set(true)));
        assert!(manager.get(toast.id()).is_none());
        assert_eq!(manager.layers(container).len(), 1);

        manager.tick(start + ANIMATE + Duration::from_millis(100));
        assert!(!called.get());

        manager.tick(start + ANIMATE * 2);
        assert!(called.get());
        assert!(manager.layers(container).is_empty());
        assert!(manager.is_empty());
        assert!(manager.take_events().contains(&Event::Hidden(toast.id())));
    }

    #[test]
    fn exit_animation_fades_and_scales_down() {
        let (mut manager, _, start) = setup();
        let toast = manager.show(stacked("a"), Position::Bottom, None).expect("a");
        manager.tick(start + ANIMATE);
        manager.hide(toast.id());
        manager.tick(start + ANIMATE + Duration::from_millis(249));

        let view = manager.view(toast.id()).expect("still leaving");
        assert!(view.alpha() < 0.6);
        assert!(view.transform().scale < 0.85);
        assert!(view.transform().translate_y > 70.0);
    }

    #[test]
    fn hiding_current_promotes_previous() {
        let (mut manager, container, start) = setup();
        let a = manager
            .show(stacked("a"), Position::Top, Some(Duration::from_secs(8)))
            .expect("a");
        let b = manager
            .show(stacked("b"), Position::Top, Some(Duration::from_secs(8)))
            .expect("b");
        manager.tick(start + ANIMATE);
        manager.take_events();

        manager.hide(b.id());
        assert_eq!(manager.current(container, Position::Top), Some(a));
        assert!(manager.take_events().contains(&Event::Promoted(a.id())));

        manager.tick(start + ANIMATE * 2);
        assert!(manager.view(a.id()).expect("a").transform().is_identity());
    }

    #[test]
    fn hiding_middle_member_unhides_previous_without_promotion() {
        let (mut manager, container, _) = setup();
        let a = manager.show(stacked("a"), Position::Top, None).expect("a");
        let b = manager.show(stacked("b"), Position::Top, None).expect("b");
        let c = manager.show(stacked("c"), Position::Top, None).expect("c");
        manager.take_events();

        manager.hide(b.id());
        assert!(!manager.view(a.id()).expect("a").is_hidden());
        assert_eq!(manager.current(container, Position::Top), Some(c));
        assert!(!manager
            .take_events()
            .iter()
            .any(|event| matches!(event, Event::Promoted(_))));
    }

    #[test]
    fn hide_first_and_last_follow_show_order() {
        let (mut manager, _, _) = setup();
        let a = manager.show(stacked("a"), Position::Top, None).expect("a");
        let b = manager.show(stacked("b"), Position::Bottom, None).expect("b");
        let c = manager.show(stacked("c"), Position::Top, None).expect("c");

        assert!(manager.hide_first());
        assert!(manager.get(a.id()).is_none());
        assert!(manager.hide_last());
        assert!(manager.get(c.id()).is_none());
        assert!(manager.get(b.id()).is_some());
    }

    #[test]
    fn deadline_hides_after_animation_plus_deadline() {
        let (mut manager, _, start) = setup();
        let deadline = Duration::from_secs(2);
        let toast = manager
            .show(stacked("a"), Position::Top, Some(deadline))
            .expect("a");

        manager.tick(start + ANIMATE + deadline - Duration::from_millis(1));
        assert!(manager.get(toast.id()).is_some());

        manager.tick(start + ANIMATE + deadline);
        assert!(manager.get(toast.id()).is_none());
        assert!(manager.take_events().contains(&Event::Expired(toast.id())));
    }

    #[test]
    fn show_cancels_deadline_of_receded_members() {
        let (mut manager, _, start) = setup();
        let a = manager
            .show(stacked("a"), Position::Top, Some(Duration::from_secs(1)))
            .expect("a");
        manager.show(stacked("b"), Position::Top, None).expect("b");

        manager.tick(start + Duration::from_secs(10));
        assert!(manager.get(a.id()).is_some());
    }

    #[test]
    fn touch_began_cancels_deadline() {
        let (mut manager, _, start) = setup();
        let toast = manager
            .show(stacked("a"), Position::Top, Some(Duration::from_secs(1)))
            .expect("a");
        manager.touch(toast.id(), TouchPhase::Began);
        manager.touch(toast.id(), TouchPhase::Ended);

        manager.tick(start + Duration::from_secs(30));
        assert!(manager.get(toast.id()).is_some());
    }

    #[test]
    fn drag_past_half_height_dismisses() {
        let (mut manager, _, start) = setup();
        let toast = manager.show(stacked("a"), Position::Top, None).expect("a");
        manager.tick(start + ANIMATE);

        manager.drag(toast.id(), DragPhase::Began { location: Point::ORIGIN });
        manager.drag(toast.id(), DragPhase::Changed { translation_y: -45.0 });
        assert_abs_diff_eq!(
            manager.view(toast.id()).expect("a").transform().translate_y,
            -30.0,
            epsilon = F32_EPSILON
        );
        manager.drag(toast.id(), DragPhase::Ended { translation_y: -45.0 });
        assert!(manager.get(toast.id()).is_none());
    }

    #[test]
    fn short_drag_springs_back() {
        let (mut manager, _, start) = setup();
        let toast = manager.show(stacked("a"), Position::Bottom, None).expect("a");
        manager.tick(start + ANIMATE);

        manager.drag(toast.id(), DragPhase::Began { location: Point::ORIGIN });
        manager.drag(toast.id(), DragPhase::Changed { translation_y: 20.0 });
        manager.drag(toast.id(), DragPhase::Ended { translation_y: 20.0 });
        assert!(manager.get(toast.id()).is_some());
        assert!(!manager.view(toast.id()).expect("a").is_moved());

        manager.tick(start + ANIMATE * 2);
        assert!(manager.view(toast.id()).expect("a").transform().is_identity());
    }

    #[test]
    fn drag_began_cancels_deadline() {
        let (mut manager, _, start) = setup();
        let deadline = Duration::from_secs(1);
        let toast = manager
            .show(stacked("a"), Position::Top, Some(deadline))
            .expect("a");
        manager.tick(start + ANIMATE);

        manager.drag(toast.id(), DragPhase::Began { location: Point::ORIGIN });
        manager.drag(toast.id(), DragPhase::Changed { translation_y: -6.0 });
        manager.tick(start + ANIMATE + deadline * 5);
        assert!(manager.get(toast.id()).is_some());
        assert!(!manager.take_events().contains(&Event::Expired(toast.id())));

        manager.drag(toast.id(), DragPhase::Ended { translation_y: -6.0 });
        manager.tick(start + ANIMATE + deadline * 20);
        assert!(manager.get(toast.id()).is_some());
    }

    #[test]
    fn cancelled_drag_springs_back_to_identity() {
        let (mut manager, _, start) = setup();
        let toast = manager.show(stacked("a"), Position::Top, None).expect("a");
        manager.tick(start + ANIMATE);

        manager.drag(toast.id(), DragPhase::Began { location: Point::ORIGIN });
        manager.drag(toast.id(), DragPhase::Changed { translation_y: -90.0 });
        assert!(manager.view(toast.id()).expect("a").is_moved());

        manager.drag(toast.id(), DragPhase::Cancelled);
        let view = manager.view(toast.id()).expect("a");
        assert!(!view.is_moved());
        assert!(!view.transform().is_identity());

        manager.tick(start + ANIMATE * 2);
        assert!(manager.get(toast.id()).is_some());
        assert!(manager.view(toast.id()).expect("a").transform().is_identity());

        // Without a drag in progress, a stray cancel changes nothing.
        manager.drag(toast.id(), DragPhase::Cancelled);
        assert!(!manager.has_activity());
    }

    #[test]
    fn member_released_after_being_superseded_settles_receded() {
        let (mut manager, container, start) = setup();
        let a = manager.show(stacked("a"), Position::Top, None).expect("a");
        manager.tick(start + ANIMATE);

        manager.drag(a.id(), DragPhase::Began { location: Point::ORIGIN });
        manager.drag(a.id(), DragPhase::Changed { translation_y: 15.0 });
        let b = manager.show(stacked("b"), Position::Top, None).expect("b");
        assert_eq!(manager.current(container, Position::Top), Some(b));

        manager.drag(a.id(), DragPhase::Ended { translation_y: 15.0 });
        manager.tick(start + ANIMATE * 2);

        let width = manager.container(container).expect("container").size().width;
        let view = manager.view(a.id()).expect("a");
        assert!(!view.is_current());
        assert_abs_diff_eq!(view.transform().translate_y, -10.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(view.transform().scale, (width - 20.0) / width, epsilon = 1e-5);
    }

    #[test]
    fn drag_outside_content_bounds_is_ignored() {
        let (mut manager, _, start) = setup();
        let view = stacked("a").with_content_bounds(Rectangle::new(
            Point::new(16.0, 8.0),
            Size::new(300.0, 44.0),
        ));
        let toast = manager
            .show(view, Position::Top, Some(Duration::from_secs(1)))
            .expect("a");
        manager.tick(start + ANIMATE);

        manager.drag(toast.id(), DragPhase::Began { location: Point::new(2.0, 2.0) });
        manager.drag(toast.id(), DragPhase::Ended { translation_y: -200.0 });
        assert!(manager.get(toast.id()).is_some());

        // The deadline was left alone.
        manager.tick(start + ANIMATE + Duration::from_secs(1));
        assert!(manager.get(toast.id()).is_none());
    }

    #[test]
    fn drag_during_entry_defers_shown_callback() {
        let (mut manager, _, start) = setup();
        let shown = Rc::new(Cell::new(0));
        let counter = Rc::clone(&shown);
        let toast = manager
            .show_with(stacked("a"), None, Position::Top, None, move |_, _| {
                counter.set(counter.get() + 1);
            })
            .expect("a");

        manager.drag(toast.id(), DragPhase::Began { location: Point::ORIGIN });
        assert_eq!(shown.get(), 0);
        manager.tick(start + Duration::from_millis(1));
        assert_eq!(shown.get(), 1);
        manager.tick(start + ANIMATE * 4);
        assert_eq!(shown.get(), 1);
    }

    #[test]
    fn shown_callback_can_chain_manager_calls() {
        let (mut manager, _, start) = setup();
        let toast = manager
            .show_with(stacked("a"), None, Position::Top, None, |manager, toast| {
                manager.hide(toast.id());
            })
            .expect("a");

        manager.tick(start + ANIMATE);
        assert!(manager.get(toast.id()).is_none());
    }

    #[test]
    fn preset_can_target_an_earlier_container_with_overrides() {
        let (mut manager, first, start) = setup();
        let second = manager.add_container(Size::new(800.0, 600.0), Padding::ZERO);
        let style = PresetStyle::default().icon('★');

        let toast = manager
            .show_preset_in(Preset::Info, "Saved", style, Some(first), Position::Top, None)
            .expect("shown");
        assert_eq!(toast.container(), first);
        assert!(manager.group(second, Position::Top).is_empty());
        assert_eq!(toast.deadline(), Some(manager.settings().preset_deadline));
        let view = manager.view(toast.id()).expect("view");
        assert_eq!(view.content().icon, Some('★'));
        assert_eq!(view.content().background, Preset::Info.background());

        let unknown = manager.add_container(Size::new(10.0, 10.0), Padding::ZERO);
        manager.remove_container(unknown);
        assert!(manager
            .show_preset_in(Preset::Info, "Lost", style, Some(unknown), Position::Top, None)
            .is_none());

        manager.tick(start + ANIMATE + manager.settings().preset_deadline);
        assert!(manager.get(toast.id()).is_none());
    }

    #[test]
    fn tap_emits_event_for_tracked_toast() {
        let (mut manager, _, _) = setup();
        let toast = manager
            .show_preset(Preset::Warning, "Deleted", Position::Bottom, None)
            .expect("preset");
        assert_eq!(toast.deadline(), Some(Duration::from_secs(8)));

        manager.update(Message::Tap(toast.id()));
        assert!(manager.take_events().contains(&Event::Tapped(toast.id())));
        assert!(!manager.tap(ToastId::new()));
    }

    #[test]
    fn remove_container_drops_its_toasts() {
        let (mut manager, container, start) = setup();
        let a = manager
            .show(stacked("a"), Position::Top, Some(Duration::from_secs(1)))
            .expect("a");
        assert!(manager.remove_container(container));

        assert!(manager.is_empty());
        assert!(manager.group(container, Position::Top).is_empty());
        assert!(manager.take_events().contains(&Event::Hidden(a.id())));
        manager.tick(start + Duration::from_secs(5));
        assert!(!manager.has_activity());
        assert!(!manager.remove_container(container));
    }

    #[test]
    fn activity_stops_once_everything_settles() {
        let (mut manager, _, start) = setup();
        manager.show(stacked("a"), Position::Top, None).expect("a");
        assert!(manager.has_activity());
        manager.tick(start + ANIMATE);
        assert!(!manager.has_activity());
    }

    #[test]
    fn idle_toast_only_waits_for_its_deadline() {
        let (mut manager, _, start) = setup();
        let deadline = Duration::from_secs(3);
        manager
            .show(stacked("a"), Position::Top, Some(deadline))
            .expect("a");
        assert!(manager.is_animating());
        assert_eq!(manager.next_deadline(), Some(start + ANIMATE + deadline));

        manager.tick(start + ANIMATE);
        assert!(!manager.is_animating());
        assert!(manager.has_activity());
        assert_eq!(manager.next_deadline(), Some(start + ANIMATE + deadline));

        manager.tick(start + ANIMATE + deadline);
        assert!(manager.is_animating());
        assert_eq!(manager.next_deadline(), None);
    }

    #[test]
    fn clock_never_moves_backwards() {
        let (mut manager, _, start) = setup();
        manager.tick(start + Duration::from_secs(3));
        manager.tick(start);
        assert_eq!(manager.now(), start + Duration::from_secs(3));
    }
}
