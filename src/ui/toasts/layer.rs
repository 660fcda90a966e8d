// SPDX-License-Identifier: MPL-2.0
//! Canvas overlay that draws the toasts of one container.
//!
//! The layer is meant to sit on top of the window content in a `Stack`.
//! Pointer input over a toast becomes touch, drag and tap messages; input
//! anywhere else is left to the widgets underneath.

use super::container::ContainerId;
use super::gesture::{DragPhase, TouchPhase};
use super::manager::{Layer, Manager, Message};
use super::view::ToastId;
use crate::ui::design_tokens::{opacity, radius, spacing, typography};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Text};
use iced::widget::Action;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Pointer travel before a press turns into a drag.
const DRAG_SLOP: f32 = 4.0;

/// Canvas program rendering a container's toasts.
pub struct ToastLayer<'a> {
    manager: &'a Manager,
    container: ContainerId,
}

impl<'a> ToastLayer<'a> {
    #[must_use]
    pub fn new(manager: &'a Manager, container: ContainerId) -> Self {
        Self { manager, container }
    }

    /// Wraps the layer in a full-size canvas.
    pub fn into_element(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Pointer state kept between canvas events.
#[derive(Debug, Default)]
pub struct Interaction {
    press: Option<Press>,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    id: ToastId,
    origin: Point,
    /// View-local point where the press started.
    location: Point,
    translation_y: f32,
    dragging: bool,
}

/// Pointer input in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pointer {
    Pressed(Point),
    Moved(Point),
    Released,
    Left,
}

impl Interaction {
    /// Turns pointer input over `layers` into a toast message.
    pub fn handle(&mut self, layers: &[Layer<'_>], pointer: Pointer) -> Option<Message> {
        match pointer {
            Pointer::Pressed(position) => {
                let (id, location) = hit_test(layers, position)?;
                self.press = Some(Press {
                    id,
                    origin: position,
                    location,
                    translation_y: 0.0,
                    dragging: false,
                });
                Some(Message::Touch(id, TouchPhase::Began))
            }
            Pointer::Moved(position) => {
                let press = self.press.as_mut()?;
                press.translation_y = position.y - press.origin.y;

                if press.dragging {
                    return Some(Message::Drag(
                        press.id,
                        DragPhase::Changed {
                            translation_y: press.translation_y,
                        },
                    ));
                }
                if position.distance(press.origin) > DRAG_SLOP {
                    press.dragging = true;
                    return Some(Message::Drag(
                        press.id,
                        DragPhase::Began {
                            location: press.location,
                        },
                    ));
                }
                None
            }
            Pointer::Released => {
                let press = self.press.take()?;
                Some(if press.dragging {
                    Message::Drag(
                        press.id,
                        DragPhase::Ended {
                            translation_y: press.translation_y,
                        },
                    )
                } else {
                    Message::Tap(press.id)
                })
            }
            Pointer::Left => {
                let press = self.press.take()?;
                Some(if press.dragging {
                    Message::Drag(press.id, DragPhase::Cancelled)
                } else {
                    Message::Touch(press.id, TouchPhase::Cancelled)
                })
            }
        }
    }

    fn is_dragging(&self) -> bool {
        self.press.is_some_and(|press| press.dragging)
    }

    fn is_pressing(&self, id: ToastId) -> bool {
        self.press
            .is_some_and(|press| press.id == id && !press.dragging)
    }
}

/// Topmost visible, live toast under `point`, with the view-local location.
#[must_use]
pub fn hit_test(layers: &[Layer<'_>], point: Point) -> Option<(ToastId, Point)> {
    layers
        .iter()
        .rev()
        .filter(|layer| !layer.is_leaving && !layer.view.is_hidden())
        .find_map(|layer| {
            let bounds = layer.bounds();
            if !bounds.contains(point) {
                return None;
            }
            let scale = layer.view.transform().scale.max(f32::EPSILON);
            let local = Point::new(
                (point.x - bounds.x) / scale,
                (point.y - bounds.y) / scale,
            );
            Some((layer.toast.id(), local))
        })
}

impl canvas::Program<Message> for ToastLayer<'_> {
    type State = Interaction;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let pointer = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                Pointer::Pressed(cursor.position_in(bounds)?)
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Pointer::Moved(Point::new(position.x - bounds.x, position.y - bounds.y))
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Pointer::Released
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => Pointer::Left,
            _ => return None,
        };

        let layers = self.manager.layers(self.container);
        state
            .handle(&layers, pointer)
            .map(|message| Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for layer in self.manager.layers(self.container) {
            if layer.view.is_hidden() {
                continue;
            }
            let pressed = state.is_pressing(layer.toast.id());
            draw_toast(&mut frame, &layer, pressed);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_dragging() {
            return mouse::Interaction::Grabbing;
        }
        let Some(position) = cursor.position_in(bounds) else {
            return mouse::Interaction::None;
        };
        let layers = self.manager.layers(self.container);
        if hit_test(&layers, position).is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::None
        }
    }
}

fn draw_toast(frame: &mut Frame, layer: &Layer<'_>, pressed: bool) {
    let view = layer.view;
    let covered = layer.bounds();
    let scale = view.transform().scale;
    let (background, tint) = view.content().colors(view.is_current());
    let alpha = if pressed {
        view.alpha() * opacity::OVERLAY_PRESSED
    } else {
        view.alpha()
    };

    // Card inset inside the view frame.
    let inset_x = spacing::XS * scale;
    let inset_y = spacing::XXS * scale;
    let card = Rectangle::new(
        Point::new(covered.x + inset_x, covered.y + inset_y),
        Size::new(
            (covered.width - inset_x * 2.0).max(0.0),
            (covered.height - inset_y * 2.0).max(0.0),
        ),
    );

    let body = Path::rounded_rectangle(card.position(), card.size(), (radius::LG * scale).into());
    frame.fill(&body, with_alpha(background, alpha));

    let text_size = typography::BODY_LG * scale;
    let baseline = card.center_y() - text_size / 2.0;
    let padding = spacing::MD * scale;

    frame.fill_text(Text {
        content: view.content().title.clone(),
        position: Point::new(card.x + padding, baseline),
        color: with_alpha(tint, alpha),
        size: text_size.into(),
        ..Text::default()
    });

    if let Some(icon) = view.content().icon {
        let icon_size = typography::TITLE_MD * scale;
        frame.fill_text(Text {
            content: icon.to_string(),
            position: Point::new(
                card.x + card.width - padding - icon_size,
                card.center_y() - icon_size / 2.0,
            ),
            color: with_alpha(tint, alpha),
            size: icon_size.into(),
            ..Text::default()
        });
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}
