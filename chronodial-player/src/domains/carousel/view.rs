//! View builder for the event carousel

use chronodial_model::Period;
use iced::{
    Alignment, Element, Length,
    widget::{Space, button, column, container, row, scrollable, stack, text},
};
use lucide_icons::Icon;

use super::messages::CarouselMessage;
use super::state::EventCarouselState;
use crate::common::messages::DomainMessage;
use crate::infra::constants::{carousel as layout, controls};
use crate::infra::theme::{self, DialTheme, faded};

/// Horizontal strip of the period's events, faded by `opacity`.
pub fn view_carousel<'a>(
    period: Option<&'a Period>,
    state: &EventCarouselState,
    opacity: f32,
) -> Element<'a, DomainMessage> {
    let Some(period) = period else {
        return Space::new().height(Length::Fixed(layout::HEIGHT)).into();
    };

    let mut items = row![].spacing(state.item_spacing);
    for event in &period.events {
        let card = column![
            text(event.year.to_string())
                .size(layout::YEAR_SIZE)
                .color(faded(DialTheme::EVENT_YEAR, opacity)),
            text(event.description.as_str())
                .size(layout::DESCRIPTION_SIZE)
                .color(faded(DialTheme::TEXT_SECONDARY, opacity)),
        ]
        .spacing(15)
        .width(Length::Fixed(state.item_width));
        items = items.push(card);
    }

    let strip = scrollable(items)
        .id(state.scrollable_id.clone())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .on_scroll(|viewport| {
            DomainMessage::Carousel(CarouselMessage::Scrolled(viewport))
        })
        .width(Length::Fill)
        .height(Length::Fixed(layout::HEIGHT));

    // Edges with more cards behind them fade into the background.
    let masked = stack![
        strip,
        row![
            edge_fade(state.can_slide_previous(), theme::Container::FadeLeft),
            Space::new().width(Length::Fill),
            edge_fade(state.can_slide_next(), theme::Container::FadeRight),
        ]
        .height(Length::Fixed(layout::HEIGHT)),
    ];

    let previous = arrow(
        Icon::ChevronLeft,
        state.can_slide_previous(),
        CarouselMessage::PreviousSlide,
        opacity,
    );
    let next = arrow(
        Icon::ChevronRight,
        state.can_slide_next(),
        CarouselMessage::NextSlide,
        opacity,
    );

    row![previous, masked, next]
        .spacing(20)
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .into()
}

fn edge_fade<'a>(
    visible: bool,
    style: theme::Container,
) -> Element<'a, DomainMessage> {
    let width = Length::Fixed(layout::FADE_WIDTH);
    if !visible {
        return Space::new().width(width).into();
    }

    container(Space::new())
        .width(width)
        .height(Length::Fill)
        .style(style.style())
        .into()
}

fn arrow<'a>(
    icon: Icon,
    enabled: bool,
    message: CarouselMessage,
    opacity: f32,
) -> Element<'a, DomainMessage> {
    let side = controls::BUTTON_SIZE * 0.8;
    if !enabled || opacity <= 0.0 {
        return Space::new().width(Length::Fixed(side)).into();
    }

    button(
        container(
            text(icon.unicode().to_string())
                .font(lucide_font())
                .size(controls::ICON_SIZE)
                .color(faded(DialTheme::EVENT_YEAR, opacity)),
        )
        .center(Length::Fill),
    )
    .on_press(DomainMessage::Carousel(message))
    .width(Length::Fixed(side))
    .height(Length::Fixed(side))
    .style(theme::Button::Floating.style())
    .into()
}

pub(crate) fn lucide_font() -> iced::Font {
    iced::Font::with_name("lucide")
}
