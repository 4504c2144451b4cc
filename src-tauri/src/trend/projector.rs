//! History-to-chart coordinate mapping.

use crate::history::MoodEntry;

use super::types::{ChartConfig, PathCommand, PlotPoint, TrendPath, TrendProjection};

/// Project a newest-first history snapshot onto chart coordinates.
///
/// Points are laid out oldest to newest, left to right. Scores are mapped
/// linearly into the band between `padding` and `height - padding` and then
/// clamped into it. A path is only produced for two or more points.
pub fn project_trend<'a, I>(entries_newest_first: I, config: &ChartConfig) -> TrendProjection
where
    I: IntoIterator<Item = &'a MoodEntry>,
    I::IntoIter: DoubleEndedIterator,
{
    let points: Vec<PlotPoint> = entries_newest_first
        .into_iter()
        .rev()
        .enumerate()
        .map(|(index, entry)| plot_point(index, entry, config))
        .collect();

    let path = (points.len() >= 2).then(|| TrendPath {
        commands: points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if i == 0 {
                    PathCommand::MoveTo { x: p.x, y: p.y }
                } else {
                    PathCommand::LineTo { x: p.x, y: p.y }
                }
            })
            .collect(),
    });

    TrendProjection {
        width: config.width_for(points.len()),
        height: config.height,
        points,
        path,
    }
}

fn plot_point(index: usize, entry: &MoodEntry, config: &ChartConfig) -> PlotPoint {
    let score = entry.emotion.plot_score();
    let x = config.padding + index as f64 * config.point_spacing;

    let range = config.max_score - config.min_score;
    let fraction = if range > 0.0 {
        (score - config.min_score) / range
    } else {
        0.0
    };
    let band = config.height - 2.0 * config.padding;
    let y = config.height - config.padding - fraction * band;
    // min/max instead of clamp: a misconfigured band must not panic
    let y = y.min(config.height - config.padding).max(config.padding);

    PlotPoint {
        x,
        y,
        score,
        emotion: entry.emotion,
    }
}
