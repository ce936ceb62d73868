use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunable thresholds for panel analysis.
///
/// Defaults are calibrated for line-art panels around 600x400 pixels. Changing the
/// edge thresholds shifts every downstream verdict, so treat them as part of the
/// output contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub blur_sigma: f32,
    pub edge_thresholds: EdgeThresholds,
    pub figure_filter: FigureFilter,
    pub motion_thresholds: MotionThresholds,
    pub effect_thresholds: EffectThresholds,
    /// Normalized center distance below which two figures are `near`.
    pub near_distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeThresholds {
    pub low: f32,
    pub high: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureFilter {
    pub min_area: f64,
    pub min_aspect_ratio: f64,
    pub max_aspect_ratio: f64,
    pub min_solidity: f64,
    pub max_figures: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionThresholds {
    pub min_edge_density: f64,
    pub min_edge_spread: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectThresholds {
    pub brightness_cutoff: u8,
    pub min_edge_max: u8,
    /// Edge-mask standard deviation on the raw 0-255 scale.
    pub min_edge_std_dev: f64,
    pub min_blob_area: f64,
    pub max_blob_area: f64,
    pub min_blob_count: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            blur_sigma: 1.1, // sigma implied by a 5x5 kernel
            edge_thresholds: EdgeThresholds::default(),
            figure_filter: FigureFilter::default(),
            motion_thresholds: MotionThresholds::default(),
            effect_thresholds: EffectThresholds::default(),
            near_distance: 0.2,
        }
    }
}

impl Default for EdgeThresholds {
    fn default() -> Self {
        Self {
            low: 100.0,
            high: 200.0,
        }
    }
}

impl Default for FigureFilter {
    fn default() -> Self {
        Self {
            min_area: 2000.0,
            min_aspect_ratio: 0.2,
            max_aspect_ratio: 5.0,
            min_solidity: 0.1,
            max_figures: 5,
        }
    }
}

impl Default for MotionThresholds {
    fn default() -> Self {
        Self {
            min_edge_density: 0.08,
            min_edge_spread: 0.2,
        }
    }
}

impl Default for EffectThresholds {
    fn default() -> Self {
        Self {
            brightness_cutoff: 220,
            min_edge_max: 220,
            min_edge_std_dev: 60.0,
            min_blob_area: 10.0,
            max_blob_area: 100.0,
            min_blob_count: 3,
        }
    }
}

impl AnalysisConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_finite()?;

        if self.blur_sigma <= 0.0 {
            return Err(invalid("Blur sigma must be greater than 0"));
        }

        let edges = &self.edge_thresholds;
        if edges.low < 0.0 || edges.low > edges.high {
            return Err(invalid("Edge thresholds must satisfy 0 <= low <= high"));
        }

        let figures = &self.figure_filter;
        if figures.max_figures == 0 {
            return Err(invalid("At least one figure must be allowed"));
        }
        if figures.min_area < 0.0 {
            return Err(invalid("Minimum figure area must not be negative"));
        }
        if figures.min_aspect_ratio < 0.0 || figures.min_aspect_ratio >= figures.max_aspect_ratio
        {
            return Err(invalid("Aspect ratio bounds must satisfy 0 <= min < max"));
        }
        if !(0.0..=1.0).contains(&figures.min_solidity) {
            return Err(invalid("Minimum solidity must be between 0.0 and 1.0"));
        }

        let motion = &self.motion_thresholds;
        if !(0.0..=1.0).contains(&motion.min_edge_density)
            || !(0.0..=1.0).contains(&motion.min_edge_spread)
        {
            return Err(invalid("Motion thresholds must be between 0.0 and 1.0"));
        }

        let effects = &self.effect_thresholds;
        if effects.min_blob_area < 0.0 || effects.min_blob_area >= effects.max_blob_area {
            return Err(invalid("Blob area window must satisfy 0 <= min < max"));
        }

        if !(0.0..=1.0).contains(&self.near_distance) {
            return Err(invalid("Near distance must be between 0.0 and 1.0"));
        }

        Ok(())
    }

    /// NaN slips past every range comparison below, so reject it up front.
    fn check_finite(&self) -> Result<(), ConfigError> {
        let figures = &self.figure_filter;
        let motion = &self.motion_thresholds;
        let effects = &self.effect_thresholds;
        let fields = [
            ("blur_sigma", self.blur_sigma as f64),
            ("edge_thresholds.low", self.edge_thresholds.low as f64),
            ("edge_thresholds.high", self.edge_thresholds.high as f64),
            ("figure_filter.min_area", figures.min_area),
            ("figure_filter.min_aspect_ratio", figures.min_aspect_ratio),
            ("figure_filter.max_aspect_ratio", figures.max_aspect_ratio),
            ("figure_filter.min_solidity", figures.min_solidity),
            ("motion_thresholds.min_edge_density", motion.min_edge_density),
            ("motion_thresholds.min_edge_spread", motion.min_edge_spread),
            ("effect_thresholds.min_edge_std_dev", effects.min_edge_std_dev),
            ("effect_thresholds.min_blob_area", effects.min_blob_area),
            ("effect_thresholds.max_blob_area", effects.max_blob_area),
            ("near_distance", self.near_distance),
        ];

        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(ConfigError::InvalidValue(format!(
                "{} must be a finite number, got {}",
                name, value
            ))),
            None => Ok(()),
        }
    }

    pub fn with_edge_thresholds(mut self, low: f32, high: f32) -> Self {
        self.edge_thresholds = EdgeThresholds { low, high };
        self
    }

    pub fn with_min_figure_area(mut self, min_area: f64) -> Self {
        self.figure_filter.min_area = min_area;
        self
    }

    pub fn with_max_figures(mut self, max_figures: usize) -> Self {
        self.figure_filter.max_figures = max_figures;
        self
    }

    pub fn with_near_distance(mut self, near_distance: f64) -> Self {
        self.near_distance = near_distance;
        self
    }

    pub fn with_brightness_cutoff(mut self, cutoff: u8) -> Self {
        self.effect_thresholds.brightness_cutoff = cutoff;
        self
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::InvalidValue(message.to_string())
}
