use iced::widget::scrollable;

#[derive(Debug, Clone)]
pub enum CarouselMessage {
    /// Viewport reporting from the scrollable.
    Scrolled(scrollable::Viewport),
    PreviousSlide,
    NextSlide,
}

impl CarouselMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scrolled(_) => "Carousel::Scrolled",
            Self::PreviousSlide => "Carousel::PreviousSlide",
            Self::NextSlide => "Carousel::NextSlide",
        }
    }
}
