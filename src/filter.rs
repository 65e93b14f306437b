use serde::{Deserialize, Serialize};

/// Tri-state constraint applied to one record field.
///
/// The three states are distinct on purpose: an explicitly-empty selection
/// excludes every row, while an unset selection excludes none. Collapsing the
/// two into a nullable list loses that distinction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterValue<T> {
    /// No constraint; every row passes.
    Unset,
    /// Constraint active with nothing selected; no row passes.
    Empty,
    /// Constraint active; rows whose field value is a member pass.
    Subset(Vec<T>),
}

impl<T: PartialEq> FilterValue<T> {
    /// Build from an optional selection: `None` is unset, `Some` is active.
    pub fn from_optional(selection: Option<Vec<T>>) -> Self {
        match selection {
            None => Self::Unset,
            Some(values) => Self::from_subset(values),
        }
    }

    /// Build an active constraint from selected values.
    pub fn from_subset(values: Vec<T>) -> Self {
        if values.is_empty() {
            Self::Empty
        } else {
            Self::Subset(values)
        }
    }

    /// Whether this filter constrains anything at all.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Whether a field value passes this constraint.
    ///
    /// Rows without a field value (`None`) pass only an unset filter.
    pub fn matches(&self, value: Option<&T>) -> bool {
        match self {
            Self::Unset => true,
            Self::Empty => false,
            Self::Subset(values) => value.is_some_and(|v| values.contains(v)),
        }
    }
}

/// Apply one multi-valued equality filter to a row collection.
///
/// Filters are pure row predicates, so chained applications commute; callers
/// apply one call per active dimension in any order.
pub fn apply_multi_filter<R, T, F>(rows: Vec<R>, filter: &FilterValue<T>, field: F) -> Vec<R>
where
    T: PartialEq,
    F: Fn(&R) -> Option<&T>,
{
    match filter {
        FilterValue::Unset => rows,
        FilterValue::Empty => Vec::new(),
        FilterValue::Subset(_) => rows
            .into_iter()
            .filter(|row| filter.matches(field(row)))
            .collect(),
    }
}
