//! Selector view: title, circle with year counters, page counter and the
//! navigation controls. Narrow windows get a stacked variant without the
//! circle.

use iced::{
    Alignment, Element, Length,
    widget::{Space, button, column, container, row, stack, text},
};
use lucide_icons::Icon;

use super::messages::SelectorMessage;
use super::wheel::SelectorWheel;
use crate::common::messages::DomainMessage;
use crate::domains::carousel::view::lucide_font;
use crate::infra::constants::{controls, counters};
use crate::infra::theme::{self, DialTheme};
use crate::state::State;

pub fn view_selector(state: &State) -> Element<'_, DomainMessage> {
    let dial = stack![
        SelectorWheel::from_state(state).element(),
        container(view_years(state, counters::YEAR_SIZE)).center(Length::Fill),
    ];

    column![
        view_title(state.title.as_deref()),
        container(dial).center_x(Length::Fill),
        view_navigation(state),
    ]
    .spacing(20)
    .width(Length::Fill)
    .into()
}

/// Title and year counters for narrow windows.
pub fn view_compact_selector(state: &State) -> Element<'_, DomainMessage> {
    column![
        view_title(state.title.as_deref()),
        container(view_years(state, counters::COMPACT_YEAR_SIZE))
            .center_x(Length::Fill),
    ]
    .spacing(20)
    .width(Length::Fill)
    .into()
}

/// Counter, arrows and pagination dots. Sits under the circle in wide
/// windows and under the carousel in narrow ones.
pub fn view_navigation(state: &State) -> Element<'_, DomainMessage> {
    row![
        view_controls(state),
        Space::new().width(Length::Fill),
        view_dots(state),
        Space::new().width(Length::Fill),
    ]
    .align_y(Alignment::End)
    .into()
}

fn view_years(state: &State, size: f32) -> Element<'_, DomainMessage> {
    let (start_year, end_year) = state.displayed_years();

    row![
        text(start_year.to_string())
            .size(size)
            .color(DialTheme::START_YEAR),
        text(end_year.to_string()).size(size).color(DialTheme::END_YEAR),
    ]
    .spacing(size * counters::YEAR_GAP / counters::YEAR_SIZE)
    .align_y(Alignment::Center)
    .into()
}

fn view_title(title: Option<&str>) -> Element<'_, DomainMessage> {
    let Some(title) = title else {
        return Space::new().height(Length::Fixed(0.0)).into();
    };

    row![
        container(Space::new())
            .width(Length::Fixed(5.0))
            .height(Length::Fixed(120.0))
            .style(theme::Container::TitleAccent.style()),
        text(title).size(56).color(DialTheme::TEXT_PRIMARY),
    ]
    .spacing(75)
    .align_y(Alignment::Center)
    .into()
}

/// Page counter above the round previous/next buttons.
fn view_controls(state: &State) -> Element<'_, DomainMessage> {
    let count = state.period_count();
    let selector = &state.selector;

    let previous = round_button(
        Icon::ChevronLeft,
        selector
            .can_go_previous(count)
            .then_some(SelectorMessage::Previous),
    );
    let next = round_button(
        Icon::ChevronRight,
        selector.can_go_next(count).then_some(SelectorMessage::Next),
    );

    column![
        text(state.page_counter())
            .size(counters::PAGE_SIZE)
            .color(DialTheme::TEXT_PRIMARY),
        row![previous, next].spacing(20),
    ]
    .spacing(20)
    .into()
}

fn round_button<'a>(
    icon: Icon,
    message: Option<SelectorMessage>,
) -> Element<'a, DomainMessage> {
    button(
        container(
            text(icon.unicode().to_string())
                .font(lucide_font())
                .size(controls::ICON_SIZE),
        )
        .center(Length::Fill),
    )
    .on_press_maybe(message.map(DomainMessage::Selector))
    .width(Length::Fixed(controls::BUTTON_SIZE))
    .height(Length::Fixed(controls::BUTTON_SIZE))
    .style(theme::Button::Round.style())
    .into()
}

/// One dot per period; the committed one is solid.
fn view_dots(state: &State) -> Element<'_, DomainMessage> {
    let active = state.selector.active_index;

    let dots = (0..state.period_count()).map(|index| {
        button(Space::new())
            .on_press(DomainMessage::Selector(SelectorMessage::DotPressed(index)))
            .width(Length::Fixed(controls::DOT_SIZE))
            .height(Length::Fixed(controls::DOT_SIZE))
            .padding(0)
            .style(theme::Button::Dot(index == active).style())
            .into()
    });

    row(dots).spacing(controls::DOT_SPACING).into()
}
