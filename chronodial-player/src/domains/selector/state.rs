/// Selection state of the period selector.
///
/// `active_index` is the committed selection and only changes once the event
/// carousel has faded out. `pending_index` is the in-flight target between a
/// request and that commit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectorState {
    pub active_index: usize,
    pub pending_index: Option<usize>,
    /// Where the circle rotation is heading, degrees. Accumulates the
    /// negated shortest-path delta of every accepted request.
    pub rotation_goal: f32,
}

impl SelectorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the wheel is heading to: the pending target while a switch is
    /// in flight, otherwise the committed selection.
    pub fn selection_target(&self) -> usize {
        self.pending_index.unwrap_or(self.active_index)
    }

    pub fn can_go_previous(&self, count: usize) -> bool {
        count > 1 && self.selection_target() > 0
    }

    pub fn can_go_next(&self, count: usize) -> bool {
        count > 1 && self.selection_target() + 1 < count
    }
}
