//! Conversion of chart entries into colored, normalized segments.

use log::{debug, warn};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{PROPORTION_DECIMAL_PRECISION, SEGMENT_PALETTE};
use crate::errors::{Result, ValidationError};

use super::{ChartEntry, Segment};

/// Returns the palette color for an index, wrapping around the palette.
#[inline]
pub fn color_for_index(index: usize) -> &'static str {
    SEGMENT_PALETTE[index % SEGMENT_PALETTE.len()]
}

/// Sums entry values, rejecting negative values and overflow.
pub fn total_value(entries: &[ChartEntry]) -> Result<Decimal> {
    let mut total = Decimal::ZERO;
    for entry in entries {
        if entry.value.is_sign_negative() && !entry.value.is_zero() {
            warn!(
                "Rejecting chart entry '{}' with negative value {}",
                entry.label, entry.value
            );
            return Err(ValidationError::InvalidInput(format!(
                "value for '{}' must be >= 0, got {}",
                entry.label, entry.value
            ))
            .into());
        }
        total = total.checked_add(entry.value).ok_or_else(|| {
            ValidationError::InvalidInput("sum of chart values overflows".to_string())
        })?;
    }
    Ok(total)
}

/// Builds ordered segments from entries.
///
/// Each proportion is `value / total` rounded half away from zero to two
/// decimal places. A zero total yields zero proportions for every entry.
pub fn build_segments(entries: &[ChartEntry]) -> Result<Vec<Segment>> {
    build_segments_with_total(entries).map(|(segments, _)| segments)
}

/// Like [`build_segments`], also returning the validated total.
pub fn build_segments_with_total(entries: &[ChartEntry]) -> Result<(Vec<Segment>, Decimal)> {
    let total = total_value(entries)?;

    if total.is_zero() && !entries.is_empty() {
        warn!(
            "Chart total is zero across {} entries; all proportions set to 0",
            entries.len()
        );
    }

    let segments: Vec<Segment> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let proportion = if total > Decimal::ZERO {
                (entry.value / total).round_dp_with_strategy(
                    PROPORTION_DECIMAL_PRECISION,
                    RoundingStrategy::MidpointAwayFromZero,
                )
            } else {
                Decimal::ZERO
            };

            Segment {
                label: entry.label.clone(),
                value: entry.value,
                color: color_for_index(index).to_string(),
                proportion,
            }
        })
        .collect();

    debug!(
        "Built {} segments from total value {}",
        segments.len(),
        total
    );

    Ok((segments, total))
}
