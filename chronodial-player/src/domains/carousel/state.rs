//! EventCarouselState: keyed horizontal strip of event cards

use chronodial_model::PeriodId;
use iced::Task;
use iced::widget::{
    Id as ScrollableId, operation::scroll_to, scrollable,
    scrollable::AbsoluteOffset,
};

use crate::infra::constants::carousel as layout;

#[derive(Debug, Clone)]
pub struct EventCarouselState {
    /// Period whose events are on screen. The item list is keyed by it.
    pub period_id: Option<PeriodId>,
    /// Bumped on every re-key; a fresh scrollable identity goes with it so no
    /// scroll state survives a period switch.
    pub generation: u64,
    pub scrollable_id: ScrollableId,
    pub event_count: usize,

    pub item_width: f32,
    pub item_spacing: f32,
    pub scroll_x: f32,
    pub max_scroll: f32,
    /// Last width the strip reported. Kept across re-keys, the strip does
    /// not change size when its items do.
    pub viewport_width: Option<f32>,
}

impl EventCarouselState {
    pub fn new(period_id: Option<PeriodId>, event_count: usize) -> Self {
        let mut state = Self {
            period_id,
            generation: 0,
            scrollable_id: ScrollableId::unique(),
            event_count,
            item_width: layout::ITEM_WIDTH,
            item_spacing: layout::ITEM_SPACING,
            scroll_x: 0.0,
            max_scroll: 0.0,
            viewport_width: None,
        };
        state.max_scroll = state.estimated_max_scroll();
        state
    }

    /// Swap in the item list of another period.
    pub fn rekey(&mut self, period_id: Option<PeriodId>, event_count: usize) {
        self.period_id = period_id;
        self.generation = self.generation.wrapping_add(1);
        self.scrollable_id = ScrollableId::unique();
        self.event_count = event_count;
        self.scroll_x = 0.0;
        self.max_scroll = self.estimated_max_scroll();
    }

    /// Width of all cards laid out with their spacing.
    pub fn content_width(&self) -> f32 {
        match self.event_count {
            0 => 0.0,
            n => n as f32 * self.item_width + (n - 1) as f32 * self.item_spacing,
        }
    }

    /// Scroll extent before the scrollable has reported a viewport for the
    /// current items. Without a known width the last card's offset is used,
    /// so the next arrow shows whenever there is more than one card.
    fn estimated_max_scroll(&self) -> f32 {
        if self.event_count == 0 {
            return 0.0;
        }
        match self.viewport_width {
            Some(visible) => (self.content_width() - visible).max(0.0),
            None => self.slide_offset(self.event_count - 1),
        }
    }

    pub fn stride(&self) -> f32 {
        (self.item_width + self.item_spacing).max(1.0)
    }

    /// Horizontal offset that left-aligns slide `index`.
    pub fn slide_offset(&self, index: usize) -> f32 {
        index as f32 * self.stride()
    }

    /// Slide currently left-aligned under the viewport.
    pub fn current_slide(&self) -> usize {
        (self.scroll_x / self.stride()).round().max(0.0) as usize
    }

    pub fn can_slide_previous(&self) -> bool {
        self.scroll_x > layout::EDGE_EPSILON
    }

    pub fn can_slide_next(&self) -> bool {
        self.scroll_x + layout::EDGE_EPSILON < self.max_scroll
    }

    /// Handle scroll viewport reporting.
    pub fn update_scroll(&mut self, viewport: scrollable::Viewport) {
        let content = viewport.content_bounds().width;
        let visible = viewport.bounds().width;
        self.viewport_width = Some(visible);
        self.max_scroll = (content - visible).max(0.0);
        self.scroll_x = viewport.absolute_offset().x.clamp(0.0, self.max_scroll);
    }

    /// Jump to slide `index`.
    pub fn slide_to<Message: 'static + Send>(&mut self, index: usize) -> Task<Message> {
        let mut x = self.slide_offset(index);
        if self.max_scroll > 0.0 {
            x = x.min(self.max_scroll);
        }
        self.scroll_x = x;
        scroll_to::<Message>(
            self.scrollable_id.clone(),
            AbsoluteOffset { x, y: 0.0 },
        )
    }
}
