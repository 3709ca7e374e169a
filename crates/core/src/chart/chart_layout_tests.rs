//! Tests for the ring + legend layout.

#[cfg(test)]
mod tests {
    use crate::chart::ChartLayout;
    use crate::segments::ChartEntry;
    use rust_decimal_macros::dec;

    #[test]
    fn test_equity_debt_layout() {
        let layout = ChartLayout::compute(
            &[
                ChartEntry::new("Equity", dec!(70)),
                ChartEntry::new("Debt", dec!(30)),
            ],
            0.04,
        )
        .unwrap();

        assert_eq!(layout.total, dec!(100));
        assert_eq!(layout.segments.len(), 2);
        assert_eq!(layout.arcs.len(), 2);
        assert_eq!(layout.arcs[1].end, 1.0);
        assert_eq!(layout.legend[0].percentage, dec!(70));
        assert_eq!(layout.legend[1].percentage, dec!(30));
        assert_eq!(layout.legend[0].color, layout.segments[0].color);
        assert!(!layout.is_empty_ring());
    }

    #[test]
    fn test_empty_entries_give_empty_ring() {
        let layout = ChartLayout::compute(&[], 0.04).unwrap();
        assert!(layout.is_empty_ring());
        assert!(layout.legend.is_empty());
        assert_eq!(layout.visible_arcs().count(), 0);
    }

    #[test]
    fn test_zero_total_gives_empty_ring_with_legend() {
        let layout = ChartLayout::compute(
            &[ChartEntry::new("A", dec!(0)), ChartEntry::new("B", dec!(0))],
            0.04,
        )
        .unwrap();
        assert!(layout.is_empty_ring());
        assert_eq!(layout.legend.len(), 2);
        assert!(layout.legend.iter().all(|item| item.percentage.is_zero()));
    }

    #[test]
    fn test_degenerate_spans_not_visible() {
        // The zero-value entry gets a span starting after its own end
        let layout = ChartLayout::compute(
            &[
                ChartEntry::new("Empty", dec!(0)),
                ChartEntry::new("Full", dec!(10)),
            ],
            0.04,
        )
        .unwrap();
        let visible: Vec<usize> = layout.visible_arcs().map(|(i, _)| i).collect();
        assert_eq!(visible, vec![1]);
    }

    #[test]
    fn test_negative_entry_is_error() {
        let result = ChartLayout::compute(&[ChartEntry::new("Bad", dec!(-3))], 0.04);
        assert!(result.is_err());
    }
}
