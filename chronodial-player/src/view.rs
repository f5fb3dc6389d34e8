//! Root-level view composition

use iced::widget::{Space, column, container};
use iced::{Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::carousel::view_carousel;
use crate::domains::selector::{view_compact_selector, view_navigation, view_selector};
use crate::infra::constants::window;
use crate::infra::theme;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let divider = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(theme::Container::Divider.style());

    let carousel = view_carousel(
        state.active_period(),
        &state.carousel,
        state.carousel_opacity(),
    );

    let content = if state.is_compact() {
        column![
            view_compact_selector(state),
            divider,
            carousel,
            view_navigation(state),
        ]
        .spacing(30)
    } else {
        column![view_selector(state), divider, carousel].spacing(40)
    };

    container(content.max_width(window::WIDTH))
        .padding(if state.is_compact() { 20 } else { 40 })
        .center_x(Length::Fill)
        .height(Length::Fill)
        .into()
}
