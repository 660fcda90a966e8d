// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The shopping list is laid out with regular widgets; the toast layer is
//! stacked on top of it as a full-window canvas.

use super::products::{Product, ProductList};
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::toasts::{ContainerId, Manager, Position, ToastLayer};
use iced::widget::{
    button, container, radio, scrollable, text, text_input, Column, Container, Row, Space, Stack,
    Text,
};
use iced::{alignment, Border, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub products: &'a ProductList,
    pub input: &'a str,
    pub edge: Position,
    pub toasts: &'a Manager,
    pub toast_container: ContainerId,
}

/// Renders the shopping list with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::LIST_MAX_WIDTH)
        .push(view_toolbar(ctx.i18n, ctx.edge))
        .push(view_input(ctx.i18n, ctx.input))
        .push(view_section(
            ctx.i18n.tr("list-title"),
            ctx.i18n.tr("list-empty"),
            ctx.products.to_buy().map(|p| view_list_row(ctx.i18n, p)),
        ))
        .push(view_section(
            ctx.i18n.tr("basket-title"),
            ctx.i18n.tr("basket-empty"),
            ctx.products.in_basket().map(|p| view_basket_row(ctx.i18n, p)),
        ))
        .push(
            button(text(ctx.i18n.tr("button-clear-basket")).size(typography::BODY))
                .on_press(Message::ClearBasket)
                .style(button::secondary),
        );

    let page = Container::new(scrollable(content).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let overlay = ToastLayer::new(ctx.toasts, ctx.toast_container)
        .into_element()
        .map(Message::Toast);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(overlay)
        .into()
}

fn view_toolbar(i18n: &I18n, edge: Position) -> Element<'_, Message> {
    let edges = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("toast-edge-label")).size(typography::BODY))
        .push(radio(
            i18n.tr("edge-top"),
            Position::Top,
            Some(edge),
            Message::EdgeSelected,
        ))
        .push(radio(
            i18n.tr("edge-bottom"),
            Position::Bottom,
            Some(edge),
            Message::EdgeSelected,
        ));

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(edges)
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(i18n.tr("button-hide-first")).size(typography::BODY_SM))
                .on_press(Message::HideFirstToast)
                .style(button::text),
        )
        .push(
            button(text(i18n.tr("button-hide-last")).size(typography::BODY_SM))
                .on_press(Message::HideLastToast)
                .style(button::text),
        )
        .into()
}

fn view_input<'a>(i18n: &'a I18n, input: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(
            text_input(&i18n.tr("product-input-placeholder"), input)
                .on_input(Message::InputChanged)
                .on_submit(Message::AddProduct)
                .padding(spacing::XS)
                .size(typography::BODY_LG),
        )
        .push(
            button(text(i18n.tr("button-add")).size(typography::BODY))
                .on_press(Message::AddProduct)
                .style(button::primary),
        )
        .into()
}

fn view_section<'a>(
    title: String,
    empty: String,
    rows: impl Iterator<Item = Element<'a, Message>>,
) -> Element<'a, Message> {
    let rows: Vec<Element<'a, Message>> = rows.collect();
    let body: Element<'a, Message> = if rows.is_empty() {
        Text::new(empty)
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into()
    } else {
        Column::with_children(rows).spacing(spacing::XS).into()
    };

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(body)
        .into()
}

fn view_list_row<'a>(i18n: &I18n, product: &'a Product) -> Element<'a, Message> {
    view_row(
        product,
        button(text(i18n.tr("button-to-basket")).size(typography::BODY_SM))
            .on_press(Message::MoveToBasket(product.id()))
            .style(button::secondary)
            .into(),
        i18n.tr("button-delete"),
    )
}

fn view_basket_row<'a>(i18n: &I18n, product: &'a Product) -> Element<'a, Message> {
    view_row(
        product,
        button(text(i18n.tr("button-to-list")).size(typography::BODY_SM))
            .on_press(Message::MoveToList(product.id()))
            .style(button::secondary)
            .into(),
        i18n.tr("button-delete"),
    )
}

fn view_row<'a>(
    product: &'a Product,
    action: Element<'a, Message>,
    delete_label: String,
) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(product.name())
                .size(typography::BODY_LG)
                .width(Length::Fill),
        )
        .push(action)
        .push(
            button(text(delete_label).size(typography::BODY_SM))
                .on_press(Message::DeleteProduct(product.id()))
                .style(button::danger),
        );

    Container::new(row)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(row_style)
        .into()
}

fn row_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..container::Style::default()
    }
}
