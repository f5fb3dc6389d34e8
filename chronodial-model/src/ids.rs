/// Caller-assigned identifier of a period. Unique within a [`PeriodList`].
///
/// [`PeriodList`]: crate::PeriodList
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PeriodId(pub i64);

impl From<i64> for PeriodId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for PeriodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
