use crate::config::model::LayoutConfig;
use crate::foundation::{
    core::Rgba8,
    error::{CircleError, CircleResult},
};
use crate::layout::{
    circle_layout::CircleLayout,
    measure::{Container, MeasureSpec},
    params::{Dimension, LayoutParams},
};
use crate::widgets::swatch::Swatch;

/// A container of solid swatches, as read from JSON by the command-line tool.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneDesc {
    /// Container width in pixels.
    pub width: u32,
    /// Container height in pixels.
    pub height: u32,
    /// Container configuration.
    #[serde(default)]
    pub config: LayoutConfig,
    /// Children in slice order.
    #[serde(default)]
    pub children: Vec<SwatchDesc>,
}

/// One swatch child.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SwatchDesc {
    /// Fill color.
    pub color: Rgba8,
    /// Share of the angle range.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Preferred width in pixels.
    #[serde(default = "default_extent")]
    pub width: f64,
    /// Preferred height in pixels.
    #[serde(default = "default_extent")]
    pub height: f64,
    /// Fill the container on both axes.
    #[serde(default)]
    pub match_parent: bool,
    /// Whether the swatch claims pointer downs.
    #[serde(default = "default_true")]
    pub clickable: bool,
    /// Whether the swatch takes part in layout.
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl SceneDesc {
    /// Parse and validate a scene document.
    pub fn from_json(s: &str) -> CircleResult<Self> {
        let scene: Self = serde_json::from_str(s)
            .map_err(|e| CircleError::config(format!("parse scene: {e}")))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Check sizes, configuration and weights.
    pub fn validate(&self) -> CircleResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CircleError::validation(format!(
                "scene size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        self.config.validate()?;
        for (i, child) in self.children.iter().enumerate() {
            self.params_for(child)
                .validate()
                .map_err(|e| CircleError::validation(format!("child {i}: {e}")))?;
        }
        Ok(())
    }

    /// Build the container, then measure it to the scene size and lay it out.
    pub fn build(&self) -> CircleResult<CircleLayout> {
        let mut layout = CircleLayout::new(self.config.clone())?;
        for child in &self.children {
            let swatch = Swatch::new(child.width, child.height, child.color)
                .with_clickable(child.clickable)
                .with_visible(child.visible);
            layout.add_child(swatch, self.params_for(child))?;
        }
        layout.measure(
            MeasureSpec::exactly(self.width),
            MeasureSpec::exactly(self.height),
        );
        layout.layout();
        Ok(layout)
    }

    fn params_for(&self, child: &SwatchDesc) -> LayoutParams {
        let dim = if child.match_parent {
            Dimension::MatchParent
        } else {
            Dimension::Wrap
        };
        LayoutParams {
            weight: child.weight,
            width: dim,
            height: dim,
        }
    }
}

fn default_weight() -> f64 {
    1.0
}

fn default_extent() -> f64 {
    48.0
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
