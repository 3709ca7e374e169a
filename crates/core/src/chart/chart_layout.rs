//! Ring and legend layout derived from chart entries.
//!
//! The layout is a pure function of the entries and the gap. It knows nothing
//! about pointers or selection, so hosts can render a static chart from it.

use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::geometry::{arc_spans, partition_spans, TurnSpan};
use crate::segments::{build_segments_with_total, ChartEntry, Segment};

use super::LegendItem;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartLayout {
    pub segments: Vec<Segment>,
    /// Drawn span per segment; empty when there is nothing to draw
    pub arcs: Vec<TurnSpan>,
    /// Un-gapped cumulative interval per segment
    pub partition: Vec<TurnSpan>,
    pub legend: Vec<LegendItem>,
    pub total: Decimal,
}

impl ChartLayout {
    pub fn compute(entries: &[ChartEntry], gap: f64) -> Result<Self> {
        let (segments, total) = build_segments_with_total(entries)?;

        // A zero total has no meaningful shares, so the ring stays empty
        let arcs = if total > Decimal::ZERO {
            arc_spans(&segments, gap)
        } else {
            Vec::new()
        };
        let partition = partition_spans(&segments);

        let legend = segments
            .iter()
            .map(|segment| LegendItem {
                label: segment.label.clone(),
                color: segment.color.clone(),
                value: segment.value,
                percentage: (segment.proportion * dec!(100)).round_dp_with_strategy(
                    DISPLAY_DECIMAL_PRECISION,
                    RoundingStrategy::MidpointAwayFromZero,
                ),
            })
            .collect();

        debug!(
            "Computed chart layout: {} segments, {} arcs, gap {}",
            segments.len(),
            arcs.len(),
            gap
        );

        Ok(Self {
            segments,
            arcs,
            partition,
            legend,
            total,
        })
    }

    pub fn is_empty_ring(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Non-empty drawn spans with their segment index.
    pub fn visible_arcs(&self) -> impl Iterator<Item = (usize, &TurnSpan)> {
        self.arcs
            .iter()
            .enumerate()
            .filter(|(_, span)| !span.is_empty())
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }
}
