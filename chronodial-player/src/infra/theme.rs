use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::{button, container},
};

/// Light theme modelled on a printed timeline: navy text, blue and pink
/// accents for the start and end years.
#[derive(Debug, Clone, Copy)]
pub struct DialTheme;

impl DialTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.957, 0.961, 0.976); // #F4F5F9
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.259, 0.337, 0.459); // #425675
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.333, 0.333, 0.333);
    pub const LINE: Color = Color::from_rgba(0.259, 0.337, 0.459, 0.2);
    pub const START_YEAR: Color = Color::from_rgb(0.365, 0.373, 0.937); // #5D5FEF
    pub const END_YEAR: Color = Color::from_rgb(0.937, 0.365, 0.659); // #EF5DA8
    pub const EVENT_YEAR: Color = Color::from_rgb(0.220, 0.467, 0.933); // #3877EE
    pub const TITLE_ACCENT: Color = Color::from_rgb(0.365, 0.373, 0.937);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::START_YEAR;
        palette.danger = Self::END_YEAR;

        Theme::custom("Chronodial Light", palette)
    }
}

/// Scale a colour's alpha, used to fade whole widget subtrees.
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

// Container styles using closures
#[derive(Debug)]
pub enum Container {
    TitleAccent,
    Divider,
    /// Background bleeding over the left edge of the event strip.
    FadeLeft,
    FadeRight,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::TitleAccent => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(DialTheme::TITLE_ACCENT)),
                border: Border::default(),
                shadow: Shadow::default(),
                snap: false,
            },
            Container::Divider => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(DialTheme::LINE)),
                border: Border::default(),
                shadow: Shadow::default(),
                snap: false,
            },
            Container::FadeLeft => |_| container::Style {
                background: Some(Background::Gradient(
                    iced::gradient::Linear::new(iced::Radians(
                        std::f32::consts::PI / 2.0,
                    ))
                    .add_stop(0.0, DialTheme::BACKGROUND)
                    .add_stop(1.0, faded(DialTheme::BACKGROUND, 0.0))
                    .into(),
                )),
                ..Default::default()
            },
            Container::FadeRight => |_| container::Style {
                background: Some(Background::Gradient(
                    iced::gradient::Linear::new(iced::Radians(
                        std::f32::consts::PI / 2.0,
                    ))
                    .add_stop(0.0, faded(DialTheme::BACKGROUND, 0.0))
                    .add_stop(1.0, DialTheme::BACKGROUND)
                    .into(),
                )),
                ..Default::default()
            },
        }
    }
}

// Button styles
#[derive(Debug, Clone, Copy)]
pub enum Button {
    /// Round outlined previous/next control.
    Round,
    /// Pagination dot; `true` when it marks the active period.
    Dot(bool),
    /// Carousel arrow.
    Floating,
}

impl Button {
    pub fn style(self) -> impl Fn(&Theme, button::Status) -> button::Style {
        move |_theme: &Theme, status: button::Status| {
            let disabled = matches!(status, button::Status::Disabled);
            let hovered = matches!(status, button::Status::Hovered);
            match self {
                Button::Round => button::Style {
                    background: Some(Background::Color(if hovered {
                        Color::WHITE
                    } else {
                        Color::TRANSPARENT
                    })),
                    text_color: faded(
                        DialTheme::TEXT_PRIMARY,
                        if disabled { 0.5 } else { 1.0 },
                    ),
                    border: Border {
                        color: faded(
                            DialTheme::TEXT_PRIMARY,
                            if disabled { 0.25 } else { 0.5 },
                        ),
                        width: 1.0,
                        radius: 25.0.into(),
                    },
                    ..Default::default()
                },
                Button::Dot(active) => button::Style {
                    background: Some(Background::Color(faded(
                        DialTheme::TEXT_PRIMARY,
                        if active { 1.0 } else { 0.4 },
                    ))),
                    border: Border {
                        radius: 3.0.into(),
                        ..Border::default()
                    },
                    ..Default::default()
                },
                Button::Floating => button::Style {
                    background: Some(Background::Color(Color::WHITE)),
                    text_color: DialTheme::EVENT_YEAR,
                    border: Border {
                        radius: 20.0.into(),
                        ..Border::default()
                    },
                    shadow: Shadow {
                        color: faded(DialTheme::EVENT_YEAR, 0.1),
                        offset: iced::Vector::new(0.0, 0.0),
                        blur_radius: 15.0,
                    },
                    ..Default::default()
                },
            }
        }
    }
}
