//! Interactive donut chart: owns the derived layout and the transient
//! pointer/selection state of one chart instance.

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::errors::Result;
use crate::events::{ChartEvent, ChartEventSink, NoOpChartEventSink};
use crate::geometry::{hit_test, Point};
use crate::overlay::{LabelContent, LabelOverlay};
use crate::segments::{ChartEntry, Segment};

use super::{ChartLayout, ChartProps, PointerEvent};

pub struct DonutChart {
    props: ChartProps,
    entries: Vec<ChartEntry>,
    layout: ChartLayout,
    selected_index: Option<usize>,
    pointer: Option<Point>,
    overlay: LabelOverlay,
    event_sink: Arc<dyn ChartEventSink>,
}

impl DonutChart {
    pub fn new(props: ChartProps, entries: Vec<ChartEntry>) -> Result<Self> {
        props.validate()?;
        let layout = ChartLayout::compute(&entries, props.gap)?;
        let overlay = LabelOverlay::new(props.overlay.clone());

        Ok(Self {
            props,
            entries,
            layout,
            selected_index: None,
            pointer: None,
            overlay,
            event_sink: Arc::new(NoOpChartEventSink),
        })
    }

    /// Routes selection changes to the given sink.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn ChartEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    pub fn props(&self) -> &ChartProps {
        &self.props
    }

    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn segments(&self) -> &[Segment] {
        &self.layout.segments
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_segment(&self) -> Option<&Segment> {
        self.selected_index.and_then(|i| self.layout.segment(i))
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn overlay(&self) -> &LabelOverlay {
        &self.overlay
    }

    /// Replaces the entries and recomputes the layout.
    ///
    /// Invalid entries leave the chart untouched. Any selection is cleared.
    pub fn set_data(&mut self, entries: Vec<ChartEntry>) -> Result<()> {
        let layout = ChartLayout::compute(&entries, self.props.gap)?;
        debug!("Chart data replaced with {} entries", entries.len());
        self.entries = entries;
        self.layout = layout;
        self.clear_pointer();
        Ok(())
    }

    /// Replaces the props and recomputes the layout.
    pub fn set_props(&mut self, props: ChartProps) -> Result<()> {
        props.validate()?;
        let layout = ChartLayout::compute(&self.entries, props.gap)?;
        self.overlay.set_config(props.overlay.clone());
        self.props = props;
        self.layout = layout;
        self.clear_pointer();
        Ok(())
    }

    /// Applies one pointer event and returns the resulting selection.
    ///
    /// Positions with NaN or infinite coordinates are dropped.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<usize> {
        match event.position() {
            Some(point) if !point.is_finite() => {
                debug!("Ignoring pointer event with non-finite position {:?}", point);
            }
            Some(point) => {
                self.pointer = Some(point);
                self.overlay.track(point, self.props.diameter());
                let hit = hit_test(point, &self.props.hit_test_params(), &self.layout.segments);
                self.select(hit);
            }
            None => self.clear_pointer(),
        }
        self.selected_index
    }

    /// Advances the label fade by one host frame.
    pub fn tick(&mut self, dt: Duration) {
        self.overlay.advance(dt);
    }

    fn clear_pointer(&mut self) {
        self.pointer = None;
        self.select(None);
    }

    fn select(&mut self, index: Option<usize>) {
        if index == self.selected_index {
            return;
        }
        self.selected_index = index;

        match index.and_then(|i| self.layout.segment(i).map(|s| (i, s))) {
            Some((i, segment)) => {
                debug!("Segment {} ('{}') selected", i, segment.label);
                let content = LabelContent {
                    color: segment.color.clone(),
                    text: format!("{}{}", self.props.value_label, segment.value),
                };
                let event = ChartEvent::segment_selected(i, segment.label.clone());
                self.overlay.show(content);
                self.event_sink.emit(event);
            }
            None => {
                debug!("Chart selection cleared");
                self.selected_index = None;
                self.overlay.hide();
                self.event_sink.emit(ChartEvent::SelectionCleared);
            }
        }
    }
}
