// SPDX-License-Identifier: MPL-2.0
//! Rendering of one carousel section.
//!
//! The view is a pure function of the [`Carousel`]: which slide is active and
//! where the strip sits come from [`Carousel::presentation`], never from
//! widget state.

use crate::app::Message;
use crate::carousel::{Carousel, CarouselKind, Command, DesktopLayout, Input, Presentation, Slide};
use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, pin, text, tooltip, Column, Container, Row, Space};
use iced::{Alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub carousel: &'a Carousel,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext { i18n, carousel } = ctx;
    let kind = carousel.kind();

    let title = text(i18n.tr(&content::section_title_key(kind))).size(typography::TITLE_MD);

    let slides: Element<'_, Message> = match carousel.presentation() {
        Presentation::Single { active } => single(carousel, active, i18n),
        Presentation::Strip { active, offset_x } => strip(carousel, active, offset_x, i18n),
        Presentation::Grid => grid(carousel, i18n),
    };

    let mut section = Column::new()
        .spacing(spacing::MD)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .push(title)
        .push(slides);

    if carousel.cycles() {
        section = section.push(controls(carousel, i18n));
    }

    // Hover pauses auto-play; a press outside the buttons may start a gesture.
    let area = Container::new(section)
        .padding([spacing::LG, 0.0])
        .width(Length::Fill);

    mouse_area(area)
        .on_enter(carousel_input(kind, Input::PointerEntered))
        .on_exit(carousel_input(kind, Input::PointerLeft))
        .on_press(Message::SectionPressed(kind))
        .into()
}

fn carousel_input(kind: CarouselKind, input: Input) -> Message {
    Message::Carousel { kind, input }
}

fn card<'a>(slide: &Slide, i18n: &I18n, width: Length, highlighted: bool) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr(slide.title_key())).size(typography::TITLE_SM))
        .push(text(i18n.tr(slide.body_key())).size(typography::BODY));

    if slide.video_id().is_some() {
        body = body.push(
            Container::new(text(i18n.tr("slide-video-badge")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::badge),
        );
    }

    Container::new(body)
        .padding(spacing::MD)
        .width(width)
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .style(styles::container::card(highlighted))
        .into()
}

fn single<'a>(carousel: &Carousel, active: usize, i18n: &I18n) -> Element<'a, Message> {
    let Some(slide) = carousel.slides().get(active) else {
        return Space::new().into();
    };
    Container::new(card(slide, i18n, Length::Fill, false))
        .max_width(sizing::CARD_MAX_WIDTH)
        .padding([0.0, spacing::MD])
        .center_x(Length::Fill)
        .into()
}

fn strip<'a>(carousel: &Carousel, active: usize, offset_x: f32, i18n: &I18n) -> Element<'a, Message> {
    let DesktopLayout::Strip(geometry) = carousel.preset().desktop else {
        return grid(carousel, i18n);
    };

    let cards = carousel.slides().iter().enumerate().map(|(index, slide)| {
        card(
            slide,
            i18n,
            Length::Fixed(geometry.card_width),
            index == active,
        )
    });
    let row = Row::with_children(cards).spacing(geometry.gap);

    // The strip is wider than the window; it is shifted and clipped.
    Container::new(
        pin(row)
            .x(offset_x)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_HEIGHT)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CARD_HEIGHT))
    .clip(true)
    .into()
}

fn grid<'a>(carousel: &Carousel, i18n: &I18n) -> Element<'a, Message> {
    let cards = carousel
        .slides()
        .iter()
        .map(|slide| card(slide, i18n, Length::Fixed(sizing::GRID_CARD_WIDTH), false));

    Container::new(
        Row::with_children(cards)
            .spacing(spacing::LG)
            .wrap(),
    )
    .center_x(Length::Fill)
    .into()
}

fn controls<'a>(carousel: &Carousel, i18n: &I18n) -> Element<'a, Message> {
    let kind = carousel.kind();

    let nav = |label: String, command: Command| {
        button(text(label).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .height(Length::Fixed(sizing::NAV_BUTTON))
            .style(styles::button::nav)
            .on_press(carousel_input(kind, Input::Command(command)))
    };

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(nav(i18n.tr("nav-prev"), Command::Prev));

    if carousel.has_indicators() {
        for index in 0..carousel.len() {
            let active = carousel.indicator_is_active(index);
            let width = if active {
                sizing::INDICATOR_ACTIVE
            } else {
                sizing::INDICATOR
            };
            let dot = button(Space::new())
                .width(Length::Fixed(width))
                .height(Length::Fixed(sizing::INDICATOR))
                .padding(0)
                .style(styles::button::indicator(active))
                .on_press(carousel_input(
                    kind,
                    Input::Command(Command::GoTo(index as i64)),
                ));
            let number = (index + 1).to_string();
            let label = i18n.tr_with_args("indicator-label", &[("index", number.as_str())]);
            row = row.push(tooltip(
                dot,
                text(label).size(typography::CAPTION),
                tooltip::Position::Top,
            ));
        }
    } else {
        let index = (carousel.current_index() + 1).to_string();
        let count = carousel.len().to_string();
        let counter = i18n.tr_with_args(
            "slide-counter",
            &[("index", index.as_str()), ("count", count.as_str())],
        );
        row = row.push(text(counter).size(typography::CAPTION));
    }

    row.push(nav(i18n.tr("nav-next"), Command::Next)).into()
}
