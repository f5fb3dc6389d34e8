#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorMessage {
    Previous,
    Next,
    /// A point on the circle was clicked.
    PointPressed(usize),
    /// A pagination dot was clicked.
    DotPressed(usize),
}

impl SelectorMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Previous => "Selector::Previous",
            Self::Next => "Selector::Next",
            Self::PointPressed(_) => "Selector::PointPressed",
            Self::DotPressed(_) => "Selector::DotPressed",
        }
    }
}
