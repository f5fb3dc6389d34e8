//! Layout and timing constants
//!
//! Tuning should happen here so the selector, the counters and the event
//! carousel stay visually consistent.

/// Main window sizing.
pub mod window {
    pub const WIDTH: f32 = 1440.0;
    pub const HEIGHT: f32 = 1080.0;
    pub const MIN_WIDTH: f32 = 360.0;
    pub const MIN_HEIGHT: f32 = 640.0;
    /// Below this width the circle is hidden and navigation moves under the
    /// carousel.
    pub const COMPACT_BREAKPOINT: f32 = 1000.0;
}

/// Geometry of the circular period selector.
pub mod wheel {
    /// Fixed diameter of the selector circle, logical pixels.
    pub const DIAMETER: f32 = 410.0;
    /// Angle of point 0, degrees. Negative is counter-clockwise from due
    /// east on screen, so point 0 sits upper-right.
    pub const START_ANGLE_DEG: f32 = -60.0;
    /// Room around the circle for expanded points and the active label.
    pub const MARGIN: f32 = 40.0;
    /// Radius of an inactive point.
    pub const DOT_RADIUS: f32 = 3.0;
    /// Radius of the active or hovered point.
    pub const EXPANDED_RADIUS: f32 = 28.0;
    /// Pointer distance that counts as a hit on a point.
    pub const HIT_RADIUS: f32 = 28.0;
    pub const NUMBER_SIZE: f32 = 20.0;
    pub const LABEL_SIZE: f32 = 20.0;
    /// Horizontal gap between the active point and its label.
    pub const LABEL_GAP: f32 = 20.0;

    /// Side of the square canvas hosting the circle.
    pub const fn canvas_side() -> f32 {
        DIAMETER + 2.0 * MARGIN
    }
}

/// Big start/end year counters in the middle of the circle.
pub mod counters {
    pub const YEAR_SIZE: f32 = 160.0;
    pub const COMPACT_YEAR_SIZE: f32 = 56.0;
    pub const YEAR_GAP: f32 = 60.0;
    pub const PAGE_SIZE: f32 = 14.0;
}

/// Event carousel metrics.
pub mod carousel {
    pub const ITEM_WIDTH: f32 = 320.0;
    pub const ITEM_SPACING: f32 = 80.0;
    pub const HEIGHT: f32 = 135.0;
    pub const YEAR_SIZE: f32 = 25.0;
    pub const DESCRIPTION_SIZE: f32 = 18.0;
    /// Threshold (logical px) under which the strip counts as scrolled to an
    /// edge.
    pub const EDGE_EPSILON: f32 = 0.5;
    /// Width of the gradient masking a strip edge that has more cards.
    pub const FADE_WIDTH: f32 = 80.0;
}

/// Frame cadence for running tweens.
pub mod animation {
    /// Tick interval in nanoseconds (~120 FPS).
    pub const TICK_NS: u64 = 8_333_333;
}

/// Navigation controls below the counters.
pub mod controls {
    pub const BUTTON_SIZE: f32 = 50.0;
    pub const ICON_SIZE: f32 = 18.0;
    pub const DOT_SIZE: f32 = 6.0;
    pub const DOT_SPACING: f32 = 10.0;
}
