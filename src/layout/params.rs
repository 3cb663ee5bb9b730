use crate::foundation::error::{CircleError, CircleResult};

/// Stable handle for a child of one container. Never reused by that container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChildId(pub(crate) u64);

impl ChildId {
    /// Raw numeric value, in insertion order.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ChildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "child#{}", self.0)
    }
}

/// Per-axis sizing request of a child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Use the child's measured size, centered on its slice.
    #[default]
    Wrap,
    /// Fill the container along this axis.
    MatchParent,
}

/// Layout parameters attached to each child.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutParams {
    /// Relative share of the angle range. Must be finite and positive.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Horizontal sizing.
    #[serde(default)]
    pub width: Dimension,
    /// Vertical sizing.
    #[serde(default)]
    pub height: Dimension,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            weight: default_weight(),
            width: Dimension::Wrap,
            height: Dimension::Wrap,
        }
    }
}

impl LayoutParams {
    /// Wrap-content params with the given weight.
    pub fn weighted(weight: f64) -> Self {
        Self {
            weight,
            ..Self::default()
        }
    }

    /// Params that fill the container on both axes.
    pub fn match_parent(weight: f64) -> Self {
        Self {
            weight,
            width: Dimension::MatchParent,
            height: Dimension::MatchParent,
        }
    }

    /// Reject weights that cannot take part in a partition.
    pub fn validate(&self) -> CircleResult<()> {
        validate_weight(self.weight)
    }
}

pub(crate) fn validate_weight(weight: f64) -> CircleResult<()> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(CircleError::validation(format!(
            "child weight must be finite and > 0, got {weight}"
        )));
    }
    Ok(())
}

fn default_weight() -> f64 {
    1.0
}
