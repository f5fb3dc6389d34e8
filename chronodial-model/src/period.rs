use crate::ids::PeriodId;

/// A dated entry shown in the event carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub year: i32,
    pub description: String,
}

impl Event {
    pub fn new(year: i32, description: impl Into<String>) -> Self {
        Self {
            year,
            description: description.into(),
        }
    }
}

/// A labeled historical span with its ordered events.
///
/// `start_year <= end_year` is assumed for display but not enforced here;
/// callers that care can check [`Period::is_inverted`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    pub id: PeriodId,
    pub label: String,
    #[cfg_attr(feature = "serde", serde(alias = "startYear"))]
    pub start_year: i32,
    #[cfg_attr(feature = "serde", serde(alias = "endYear"))]
    pub end_year: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub events: Vec<Event>,
}

impl Period {
    pub fn new(
        id: impl Into<PeriodId>,
        label: impl Into<String>,
        start_year: i32,
        end_year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            start_year,
            end_year,
            events: Vec::new(),
        }
    }

    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }

    pub fn is_inverted(&self) -> bool {
        self.start_year > self.end_year
    }

    /// Inclusive containment check against the period's span.
    pub fn contains_year(&self, year: i32) -> bool {
        let (lo, hi) = if self.is_inverted() {
            (self.end_year, self.start_year)
        } else {
            (self.start_year, self.end_year)
        };
        (lo..=hi).contains(&year)
    }

    pub fn years(&self) -> (i32, i32) {
        (self.start_year, self.end_year)
    }
}
