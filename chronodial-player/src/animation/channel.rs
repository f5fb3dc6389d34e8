/// Animated properties of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    /// Rotation of the whole circle, degrees.
    CircleRotation,
    /// Counter-rotation of one point, degrees.
    PointRotation(usize),
    StartYear,
    EndYear,
    /// Opacity of the event carousel wrapper, 0.0..=1.0.
    CarouselOpacity,
}

/// Completion notifications carried by tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The carousel finished fading out for a switch to `index`.
    FadeOutComplete { index: usize },
    FadeInComplete { index: usize },
}
