//! Tests for the interactive chart state.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::chart::{ChartProps, DonutChart, PointerEvent};
    use crate::events::{ChartEvent, SelectionRecorder};
    use crate::geometry::{point_at_turn, Point};
    use crate::segments::ChartEntry;
    use rust_decimal_macros::dec;

    fn entries() -> Vec<ChartEntry> {
        vec![
            ChartEntry::new("Equity", dec!(70)),
            ChartEntry::new("Debt", dec!(30)),
        ]
    }

    fn chart_with_sink() -> (DonutChart, SelectionRecorder) {
        let sink = SelectionRecorder::new();
        let chart = DonutChart::new(ChartProps::default(), entries())
            .unwrap()
            .with_event_sink(Arc::new(sink.clone()));
        (chart, sink)
    }

    fn ring_point(chart: &DonutChart, turn: f64) -> Point {
        let props = chart.props();
        point_at_turn(props.center(), props.ring_centerline_radius(), turn)
    }

    // ==================== Selection Tests ====================

    #[test]
    fn test_move_onto_segment_selects_it() {
        let (mut chart, sink) = chart_with_sink();
        let point = ring_point(&chart, 0.5);

        let selected = chart.handle_pointer(PointerEvent::moved(point));

        assert_eq!(selected, Some(0));
        assert_eq!(chart.selected_segment().unwrap().label, "Equity");
        assert_eq!(chart.pointer(), Some(point));
        assert_eq!(sink.events(), vec![ChartEvent::segment_selected(0, "Equity")]);
    }

    #[test]
    fn test_moves_within_segment_emit_once() {
        let (mut chart, sink) = chart_with_sink();
        chart.handle_pointer(PointerEvent::down(ring_point(&chart, 0.1)));
        chart.handle_pointer(PointerEvent::moved(ring_point(&chart, 0.2)));
        chart.handle_pointer(PointerEvent::moved(ring_point(&chart, 0.3)));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_crossing_segments_emits_each_selection() {
        let (mut chart, sink) = chart_with_sink();
        chart.handle_pointer(PointerEvent::moved(ring_point(&chart, 0.5)));
        chart.handle_pointer(PointerEvent::moved(ring_point(&chart, 0.9)));
        assert_eq!(
            sink.events(),
            vec![
                ChartEvent::segment_selected(0, "Equity"),
                ChartEvent::segment_selected(1, "Debt"),
            ]
        );
    }

    #[test]
    fn test_pointer_up_clears_selection() {
        let (mut chart, sink) = chart_with_sink();
        chart.handle_pointer(PointerEvent::down(ring_point(&chart, 0.5)));
        let selected = chart.handle_pointer(PointerEvent::Up);

        assert_eq!(selected, None);
        assert_eq!(chart.pointer(), None);
        assert_eq!(sink.events().last(), Some(&ChartEvent::SelectionCleared));
    }

    #[test]
    fn test_move_into_hole_clears_selection() {
        let (mut chart, _sink) = chart_with_sink();
        chart.handle_pointer(PointerEvent::moved(ring_point(&chart, 0.5)));
        let center = chart.props().center();
        assert_eq!(chart.handle_pointer(PointerEvent::moved(center)), None);
    }

    #[test]
    fn test_leave_without_selection_emits_nothing() {
        let (mut chart, sink) = chart_with_sink();
        chart.handle_pointer(PointerEvent::Leave);
        assert!(sink.is_empty());
    }

    // ==================== Overlay Tests ====================

    #[test]
    fn test_overlay_fades_in_with_segment_content() {
        let (mut chart, _sink) = chart_with_sink();
        chart.handle_pointer(PointerEvent::moved(ring_point(&chart, 0.5)));
        chart.tick(Duration::from_millis(500));

        let overlay = chart.overlay();
        assert_eq!(overlay.opacity(), 1.0);
        let content = overlay.content().unwrap();
        assert_eq!(content.text, "Value: 70");
        assert_eq!(content.color, chart.segments()[0].color);
    }

    #[test]
    fn test_overlay_fades_out_after_leave() {
        let (mut chart, _sink) = chart_with_sink();
        chart.handle_pointer(PointerEvent::moved(ring_point(&chart, 0.5)));
        chart.tick(Duration::from_millis(500));
        chart.handle_pointer(PointerEvent::Leave);

        chart.tick(Duration::from_millis(100));
        assert!(chart.overlay().opacity() > 0.0);
        chart.tick(Duration::from_millis(500));
        assert!(!chart.overlay().is_visible());
    }

    #[test]
    fn test_overlay_tracks_raw_pointer_off_ring() {
        let (mut chart, _sink) = chart_with_sink();
        let config = chart.props().overlay.clone();
        chart.handle_pointer(PointerEvent::moved(Point::new(60.0, 100.0)));
        assert_eq!(
            chart.overlay().position(),
            Point::new(60.0 + config.offset_x, 100.0 + config.offset_y)
        );
        assert_eq!(chart.selected_index(), None);
    }

    // ==================== Recompute Tests ====================

    #[test]
    fn test_set_data_recomputes_and_clears_selection() {
        let (mut chart, sink) = chart_with_sink();
        chart.handle_pointer(PointerEvent::moved(ring_point(&chart, 0.5)));

        chart
            .set_data(vec![
                ChartEntry::new("Gold", dec!(1)),
                ChartEntry::new("Cash", dec!(3)),
            ])
            .unwrap();

        assert_eq!(chart.selected_index(), None);
        assert_eq!(chart.segments()[0].proportion, dec!(0.25));
        assert_eq!(sink.events().last(), Some(&ChartEvent::SelectionCleared));
    }

    #[test]
    fn test_invalid_data_keeps_previous_layout() {
        let (mut chart, _sink) = chart_with_sink();
        let result = chart.set_data(vec![ChartEntry::new("Bad", dec!(-1))]);
        assert!(result.is_err());
        assert_eq!(chart.segments().len(), 2);
        assert_eq!(chart.entries()[0].label, "Equity");
    }

    #[test]
    fn test_set_props_recomputes_gap() {
        let (mut chart, _sink) = chart_with_sink();
        let props = ChartProps {
            gap: 0.1,
            ..ChartProps::default()
        };
        chart.set_props(props).unwrap();
        assert!((chart.layout().arcs[0].start - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_props_rejected() {
        let props = ChartProps {
            radius: 0.0,
            ..ChartProps::default()
        };
        assert!(DonutChart::new(props, entries()).is_err());
    }

    #[test]
    fn test_zero_total_never_selects() {
        let mut chart = DonutChart::new(
            ChartProps::default(),
            vec![ChartEntry::new("A", dec!(0)), ChartEntry::new("B", dec!(0))],
        )
        .unwrap();
        let point = ring_point(&chart, 0.25);
        assert_eq!(chart.handle_pointer(PointerEvent::moved(point)), None);
    }

    #[test]
    fn test_empty_chart_handles_pointer() {
        let mut chart = DonutChart::new(ChartProps::default(), Vec::new()).unwrap();
        let point = ring_point(&chart, 0.25);
        assert_eq!(chart.handle_pointer(PointerEvent::moved(point)), None);
        chart.tick(Duration::from_millis(16));
    }

    #[test]
    fn test_non_finite_pointer_is_ignored() {
        let (mut chart, sink) = chart_with_sink();
        let on_ring = ring_point(&chart, 0.5);
        chart.handle_pointer(PointerEvent::moved(on_ring));
        let position = chart.overlay().position();

        for point in [
            Point::new(f64::NAN, 50.0),
            Point::new(10.0, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, f64::NAN),
        ] {
            assert_eq!(chart.handle_pointer(PointerEvent::moved(point)), Some(0));
            assert_eq!(chart.handle_pointer(PointerEvent::down(point)), Some(0));
        }

        assert_eq!(chart.pointer(), Some(on_ring));
        assert_eq!(chart.overlay().position(), position);
        assert!(chart.overlay().position().is_finite());
        assert_eq!(sink.len(), 1);
    }
}
