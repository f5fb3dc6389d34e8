use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{ModelError, Result};
use crate::period::Period;

/// Ordered, immutable sequence of periods. Insertion order is navigation
/// order. Cloning is cheap; the periods are shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Period>", into = "Vec<Period>")
)]
pub struct PeriodList {
    periods: Arc<[Period]>,
}

impl PeriodList {
    /// Build a list, rejecting duplicate ids (they key the event carousel).
    pub fn new(periods: Vec<Period>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(periods.len());
        for period in &periods {
            if !seen.insert(period.id) {
                return Err(ModelError::DuplicatePeriodId(period.id));
            }
        }
        Ok(Self {
            periods: periods.into(),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Period> {
        self.periods.get(index)
    }

    pub fn first(&self) -> Option<&Period> {
        self.periods.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Period> {
        self.periods.iter()
    }
}

impl TryFrom<Vec<Period>> for PeriodList {
    type Error = ModelError;

    fn try_from(periods: Vec<Period>) -> Result<Self> {
        Self::new(periods)
    }
}

impl From<PeriodList> for Vec<Period> {
    fn from(list: PeriodList) -> Self {
        list.periods.to_vec()
    }
}

impl<'a> IntoIterator for &'a PeriodList {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
