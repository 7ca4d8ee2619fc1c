// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::carousel::Carousel;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::showcase;
use iced::widget::{text, Column, Container, Id, Scrollable};
use iced::{Alignment, Element, Length};

/// Id of the page scrollable, used to hold the page still during swipes.
pub const PAGE_SCROLL_ID: &str = "landing-page";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub carousels: &'a [Carousel],
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let hero = Column::new()
        .spacing(spacing::SM)
        .align_x(Alignment::Center)
        .max_width(sizing::PAGE_MAX_WIDTH)
        .push(text(ctx.i18n.tr("landing-hero-title")).size(typography::HERO))
        .push(text(ctx.i18n.tr("landing-hero-subtitle")).size(typography::BODY_LG));

    // Sections span the full window width: the strip offset is computed
    // against it.
    let page = ctx.carousels.iter().fold(
        Column::new()
            .spacing(spacing::XXL)
            .padding([spacing::XXL, 0.0])
            .width(Length::Fill)
            .push(
                Container::new(hero)
                    .padding([0.0, spacing::XL])
                    .center_x(Length::Fill),
            ),
        |page, carousel| {
            page.push(showcase::view(showcase::ViewContext {
                i18n: ctx.i18n,
                carousel,
            }))
        },
    );

    Scrollable::new(page)
        .id(Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport| Message::PageScrolled(viewport.relative_offset()))
        .into()
}
