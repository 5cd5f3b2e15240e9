//! Severity bands per dimension.
//!
//! Each dimension's bands are stored as the lower bounds of Mild, Moderate,
//! Severe and Extremely Severe; Normal starts at 0 and the last band is
//! open-ended, so the ranges partition [0, ∞) by construction.

use tracing::error;

use moodly_core::models::dimension::DimensionTag;
use moodly_core::models::score::{ScoreTriple, SeverityBand, SeverityLabels};

use crate::error::InstrumentError;

const DEPRESSION_CUTS: [i32; 4] = [10, 14, 21, 28];
const ANXIETY_CUTS: [i32; 4] = [8, 10, 15, 20];
const STRESS_CUTS: [i32; 4] = [15, 19, 26, 34];

/// Lower bounds of Mild through Extremely Severe for a dimension.
pub fn cut_points(dimension: DimensionTag) -> &'static [i32; 4] {
    match dimension {
        DimensionTag::Depression => &DEPRESSION_CUTS,
        DimensionTag::Anxiety => &ANXIETY_CUTS,
        DimensionTag::Stress => &STRESS_CUTS,
    }
}

/// Inclusive score range of a band; `None` as the upper bound means open-ended.
pub fn band_range(band: SeverityBand, dimension: DimensionTag) -> (i32, Option<i32>) {
    let cuts = cut_points(dimension);
    let position = band as usize;
    let min = if position == 0 { 0 } else { cuts[position - 1] };
    let max = cuts.get(position).map(|next| next - 1);
    (min, max)
}

pub fn classify(score: i32, dimension: DimensionTag) -> Result<SeverityBand, InstrumentError> {
    if score < 0 {
        error!(%dimension, score, "negative score reached the severity classifier");
        return Err(InstrumentError::NegativeScore { dimension, score });
    }
    let position = cut_points(dimension).partition_point(|&lower| lower <= score);
    Ok(SeverityBand::ALL[position])
}

pub fn classify_triple(scores: &ScoreTriple) -> Result<SeverityLabels, InstrumentError> {
    Ok(SeverityLabels {
        depression: classify(i32::from(scores.depression), DimensionTag::Depression)?,
        anxiety: classify(i32::from(scores.anxiety), DimensionTag::Anxiety)?,
        stress: classify(i32::from(scores.stress), DimensionTag::Stress)?,
    })
}
