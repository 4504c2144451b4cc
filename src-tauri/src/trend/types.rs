use std::fmt;

use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;

/// Layout constants for the trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Margin kept free on every side of the plot band
    pub padding: f64,
    /// Horizontal distance between consecutive points
    pub point_spacing: f64,
    /// Minimum viewport width; wider histories scroll
    pub width: f64,
    /// Viewport height
    pub height: f64,
    /// Score drawn at the bottom of the band
    pub min_score: f64,
    /// Score drawn at the top of the band
    pub max_score: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding: 10.0,
            point_spacing: 50.0,
            width: 300.0,
            height: 80.0,
            min_score: -2.0,
            max_score: 3.0,
        }
    }
}

impl ChartConfig {
    /// Viewport width needed to show `count` points.
    pub fn width_for(&self, count: usize) -> f64 {
        let needed = self.padding * 2.0 + count.saturating_sub(1) as f64 * self.point_spacing;
        self.width.max(needed)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_score <= self.min_score {
            return Err(format!(
                "max_score ({}) must be greater than min_score ({})",
                self.max_score, self.min_score
            ));
        }
        if self.padding < 0.0 || self.point_spacing <= 0.0 {
            return Err("padding must be >= 0 and point_spacing > 0".to_string());
        }
        if self.height < self.padding * 2.0 {
            return Err(format!(
                "height ({}) must leave room for padding ({}) on both sides",
                self.height, self.padding
            ));
        }
        Ok(())
    }
}

/// Whether a point sits above, below, or on the neutral line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

/// One plotted history entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub score: f64,
    pub emotion: Emotion,
}

impl PlotPoint {
    pub fn tone(&self) -> Tone {
        if self.score > 0.0 {
            Tone::Positive
        } else if self.score < 0.0 {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }
}

/// A single polyline command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
}

/// Straight-line path through all plotted points, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPath {
    pub commands: Vec<PathCommand>,
}

impl fmt::Display for TrendPath {
    /// SVG `d` attribute, one decimal place per coordinate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cmd {
                PathCommand::MoveTo { x, y } => write!(f, "M{:.1},{:.1}", x, y)?,
                PathCommand::LineTo { x, y } => write!(f, "L{:.1},{:.1}", x, y)?,
            }
        }
        Ok(())
    }
}

/// Chart-ready view of a history snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendProjection {
    pub points: Vec<PlotPoint>,
    /// `None` when there are fewer than two points
    pub path: Option<TrendPath>,
    pub width: f64,
    pub height: f64,
}
