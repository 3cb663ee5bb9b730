use crate::foundation::{
    core::Rgba8,
    error::{CircleError, CircleResult},
    math::FULL_TURN,
};

/// Radial vs. linear behavior of the container.
///
/// Deserializes from `"normal"` / `"pie"` (any case) or the integer codes `1` / `2`.
/// Anything else is treated as [`LayoutMode::Normal`], which disables all radial logic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "LayoutModeRepr", rename_all = "snake_case")]
pub enum LayoutMode {
    /// Children draw and receive input like an ordinary container.
    #[default]
    Normal,
    /// Children are clipped to weighted wedges and hit-tested by angle.
    Pie,
}

impl LayoutMode {
    /// Integer code used by attribute-style configuration.
    pub const NORMAL_CODE: i64 = 1;
    /// Integer code used by attribute-style configuration.
    pub const PIE_CODE: i64 = 2;

    /// Map an attribute code to a mode. Unknown codes fall back to `Normal`.
    pub fn from_code(code: i64) -> Self {
        match code {
            Self::PIE_CODE => Self::Pie,
            _ => Self::Normal,
        }
    }

    /// Map a mode name to a mode. Unknown names fall back to `Normal`.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("pie") {
            Self::Pie
        } else {
            Self::Normal
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum LayoutModeRepr {
    Code(i64),
    Name(String),
    Other(serde_json::Value),
}

impl From<LayoutModeRepr> for LayoutMode {
    fn from(value: LayoutModeRepr) -> Self {
        match value {
            LayoutModeRepr::Code(code) => LayoutMode::from_code(code),
            LayoutModeRepr::Name(name) => LayoutMode::from_name(&name),
            LayoutModeRepr::Other(_) => LayoutMode::Normal,
        }
    }
}

/// How a child is restricted to its wedge when composited in [`LayoutMode::Pie`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipStrategy {
    /// Render into an offscreen source, mask with a rasterized wedge (source-in), composite.
    #[default]
    Mask,
    /// Clip the rasterizer to the wedge path and draw the child through it.
    PathClip,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-instance configuration of a [`crate::CircleLayout`].
///
/// Every field is optional in JSON; missing fields take the documented defaults.
pub struct LayoutConfig {
    /// Divider line color.
    #[serde(default = "default_divider_color")]
    pub divider_color: Rgba8,
    /// Fill color of the inner hub; `null` draws no hub.
    #[serde(default = "default_inner_circle_color")]
    pub inner_circle_color: Option<Rgba8>,
    /// Rotation of the first slice's start, in degrees.
    #[serde(default = "default_angle_offset")]
    pub angle_offset: f64,
    /// Total sweep shared by all slices, in degrees, within `(0, 360]`.
    #[serde(default = "default_angle_range")]
    pub angle_range: f64,
    /// Divider stroke width in pixels.
    #[serde(default = "default_divider_width")]
    pub divider_width: f64,
    /// Hub radius and inner pointer exclusion radius in pixels.
    #[serde(default = "default_inner_radius")]
    pub inner_radius: u32,
    /// Radial vs. linear rendering and hit-testing.
    #[serde(default)]
    pub layout_mode: LayoutMode,
    /// Optional fill painted beneath the children.
    #[serde(default)]
    pub background: Option<Rgba8>,
    /// Suggested minimum width used during measure.
    #[serde(default)]
    pub min_width: u32,
    /// Suggested minimum height used during measure.
    #[serde(default)]
    pub min_height: u32,
    /// Wedge compositing strategy.
    #[serde(default)]
    pub clip: ClipStrategy,
    /// Whether unchanged wedges are reused from the cached frame.
    #[serde(default = "default_render_cache")]
    pub render_cache: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            divider_color: default_divider_color(),
            inner_circle_color: default_inner_circle_color(),
            angle_offset: default_angle_offset(),
            angle_range: default_angle_range(),
            divider_width: default_divider_width(),
            inner_radius: default_inner_radius(),
            layout_mode: LayoutMode::default(),
            background: None,
            min_width: 0,
            min_height: 0,
            clip: ClipStrategy::default(),
            render_cache: default_render_cache(),
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(s: &str) -> CircleResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| CircleError::config(format!("parse layout config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> CircleResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CircleError::config(format!("serialize layout config: {e}")))
    }

    /// Check numeric ranges.
    pub fn validate(&self) -> CircleResult<()> {
        validate_angle_offset(self.angle_offset)?;
        validate_angle_range(self.angle_range)?;
        validate_divider_width(self.divider_width)?;
        Ok(())
    }
}

pub(crate) fn validate_angle_offset(offset: f64) -> CircleResult<()> {
    if !offset.is_finite() {
        return Err(CircleError::validation("angle_offset must be finite"));
    }
    Ok(())
}

pub(crate) fn validate_angle_range(range: f64) -> CircleResult<()> {
    if !range.is_finite() || range <= 0.0 || range > FULL_TURN {
        return Err(CircleError::validation(format!(
            "angle_range must be within (0, 360], got {range}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_divider_width(width: f64) -> CircleResult<()> {
    if !width.is_finite() || width < 0.0 {
        return Err(CircleError::validation(format!(
            "divider_width must be finite and >= 0, got {width}"
        )));
    }
    Ok(())
}

fn default_divider_color() -> Rgba8 {
    Rgba8::DARKER_GRAY
}

fn default_inner_circle_color() -> Option<Rgba8> {
    Some(Rgba8::WHITE)
}

fn default_angle_offset() -> f64 {
    90.0
}

fn default_angle_range() -> f64 {
    FULL_TURN
}

fn default_divider_width() -> f64 {
    1.0
}

fn default_inner_radius() -> u32 {
    80
}

fn default_render_cache() -> bool {
    true
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
