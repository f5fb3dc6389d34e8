//! Canvas program drawing the selector circle, its points and the label of
//! the active period.

use iced::widget::canvas::{self, Canvas, Geometry, Path, Program, Stroke};
use iced::{
    Color, Element, Length, Pixels, Point, Rectangle, Renderer, Theme, Vector,
    mouse,
};

use super::geometry::point_position;
use super::messages::SelectorMessage;
use crate::common::messages::DomainMessage;
use crate::infra::constants::wheel;
use crate::infra::theme::{DialTheme, faded};
use crate::state::State;

/// Snapshot of everything the wheel draws, taken from [`State`] each view.
#[derive(Debug, Clone)]
pub struct SelectorWheel {
    pub circle_rotation: f32,
    /// Counter-rotation of every point, degrees.
    pub point_rotations: Vec<f32>,
    /// Point drawn expanded regardless of hover.
    pub expanded: Option<usize>,
    pub label: Option<String>,
    pub label_opacity: f32,
}

impl SelectorWheel {
    pub fn from_state(state: &State) -> Self {
        let count = state.period_count();
        let target = state.selector.selection_target();

        Self {
            circle_rotation: state.circle_rotation(),
            point_rotations: (0..count).map(|i| state.point_rotation(i)).collect(),
            expanded: (count > 0).then_some(target),
            label: state.active_period().map(|period| period.label.clone()),
            label_opacity: state.carousel_opacity(),
        }
    }

    pub fn count(&self) -> usize {
        self.point_rotations.len()
    }

    pub fn element<'a>(self) -> Element<'a, DomainMessage> {
        let side = wheel::canvas_side();
        Canvas::new(self)
            .width(Length::Fixed(side))
            .height(Length::Fixed(side))
            .into()
    }

    fn radius() -> f32 {
        wheel::DIAMETER / 2.0
    }

    fn center(bounds: Rectangle) -> Point {
        Point::new(bounds.width / 2.0, bounds.height / 2.0)
    }

    fn position(&self, index: usize, center: Point) -> Point {
        point_position(
            index,
            self.count(),
            center,
            Self::radius(),
            self.circle_rotation,
        )
    }

    /// Point under `local`, nearest first.
    pub fn hit_test(&self, local: Point, bounds: Rectangle) -> Option<usize> {
        let center = Self::center(bounds);
        (0..self.count())
            .map(|index| (index, self.position(index, center).distance(local)))
            .filter(|(_, distance)| *distance <= wheel::HIT_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }

    fn draw_point(
        &self,
        frame: &mut canvas::Frame,
        index: usize,
        center: Point,
        expanded: bool,
    ) {
        let position = self.position(index, center);

        if !expanded {
            frame.fill(
                &Path::circle(position, wheel::DOT_RADIUS),
                DialTheme::TEXT_PRIMARY,
            );
            return;
        }

        let disc = Path::circle(position, wheel::EXPANDED_RADIUS);
        frame.fill(&disc, DialTheme::BACKGROUND);
        frame.stroke(
            &disc,
            Stroke::default()
                .with_width(1.0)
                .with_color(faded(DialTheme::TEXT_PRIMARY, 0.5)),
        );

        // Net rotation is circle plus counter-rotation, which settles at zero.
        let upright = self.circle_rotation
            + self.point_rotations.get(index).copied().unwrap_or(0.0);
        let number = (index + 1).to_string();

        frame.with_save(|frame| {
            frame.translate(Vector::new(position.x, position.y));
            frame.rotate(upright.to_radians());
            frame.fill_text(centered_text(
                number,
                Point::ORIGIN,
                wheel::NUMBER_SIZE,
                DialTheme::TEXT_PRIMARY,
            ));
        });
    }
}

/// Plain text whose visual centre lands on `center`. Glyph metrics are
/// approximated from the font size.
fn centered_text(
    content: String,
    center: Point,
    size: f32,
    color: Color,
) -> canvas::Text {
    let width = content.chars().count() as f32 * size * 0.55;
    canvas::Text {
        content,
        position: Point::new(center.x - width / 2.0, center.y - size * 0.6),
        color,
        size: Pixels(size),
        ..Default::default()
    }
}

impl Program<DomainMessage> for SelectorWheel {
    /// Hovered point, if any.
    type State = Option<usize>;

    fn draw(
        &self,
        hovered: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = Self::center(bounds);

        frame.stroke(
            &Path::circle(center, Self::radius()),
            Stroke::default().with_width(1.0).with_color(DialTheme::LINE),
        );

        for index in 0..self.count() {
            let expanded =
                self.expanded == Some(index) || *hovered == Some(index);
            self.draw_point(&mut frame, index, center, expanded);
        }

        // Label sits beside the slot the active point rotates into.
        if let Some(label) = &self.label
            && self.label_opacity > 0.0
            && self.count() > 0
        {
            let slot = point_position(0, self.count(), center, Self::radius(), 0.0);
            frame.fill_text(canvas::Text {
                content: label.clone(),
                position: Point::new(
                    slot.x + wheel::EXPANDED_RADIUS + wheel::LABEL_GAP,
                    slot.y - wheel::LABEL_SIZE * 0.6,
                ),
                color: faded(DialTheme::TEXT_PRIMARY, self.label_opacity),
                size: Pixels(wheel::LABEL_SIZE),
                ..Default::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        hovered: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<DomainMessage>> {
        let canvas::Event::Mouse(mouse_event) = event else {
            return None;
        };

        match mouse_event {
            mouse::Event::CursorMoved { .. } => {
                let hit = cursor
                    .position_in(bounds)
                    .and_then(|local| self.hit_test(local, bounds));
                if hit != *hovered {
                    *hovered = hit;
                    return Some(iced::widget::Action::request_redraw());
                }
            }
            mouse::Event::CursorLeft => {
                if hovered.take().is_some() {
                    return Some(iced::widget::Action::request_redraw());
                }
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let local = cursor.position_in(bounds)?;
                let index = self.hit_test(local, bounds)?;
                return Some(iced::widget::Action::publish(
                    DomainMessage::Selector(SelectorMessage::PointPressed(index)),
                ));
            }
            _ => {}
        }
        None
    }

    fn mouse_interaction(
        &self,
        hovered: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if hovered.is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel(count: usize, rotation: f32) -> SelectorWheel {
        SelectorWheel {
            circle_rotation: rotation,
            point_rotations: vec![-rotation; count],
            expanded: Some(0),
            label: None,
            label_opacity: 1.0,
        }
    }

    fn bounds() -> Rectangle {
        let side = wheel::canvas_side();
        Rectangle::new(Point::ORIGIN, iced::Size::new(side, side))
    }

    #[test]
    fn hits_points_and_misses_the_centre() {
        let wheel = wheel(6, 0.0);
        let center = SelectorWheel::center(bounds());
        let third = point_position(2, 6, center, SelectorWheel::radius(), 0.0);

        assert_eq!(wheel.hit_test(third, bounds()), Some(2));
        assert_eq!(
            wheel.hit_test(third + Vector::new(10.0, 5.0), bounds()),
            Some(2)
        );
        assert_eq!(wheel.hit_test(center, bounds()), None);
    }

    #[test]
    fn hit_testing_follows_rotation() {
        let wheel = wheel(4, -90.0);
        let center = SelectorWheel::center(bounds());
        // After a quarter turn back, point 1 occupies point 0's resting slot.
        let slot = point_position(0, 4, center, SelectorWheel::radius(), 0.0);
        assert_eq!(wheel.hit_test(slot, bounds()), Some(1));
    }

    #[test]
    fn empty_wheel_has_no_targets() {
        let wheel = wheel(0, 0.0);
        let center = SelectorWheel::center(bounds());
        assert_eq!(wheel.hit_test(center, bounds()), None);
        assert_eq!(wheel.count(), 0);
    }
}
