//! Where the chart publishes selection changes.

use super::ChartEvent;

/// Receives selection changes from an interactive chart.
///
/// `emit()` runs inline on the pointer-event path, so implementations should
/// hand the event off and return.
pub trait ChartEventSink: Send + Sync {
    fn emit(&self, event: ChartEvent);
}

/// Charts without a listener.
#[derive(Clone, Default)]
pub struct NoOpChartEventSink;

impl ChartEventSink for NoOpChartEventSink {
    fn emit(&self, _event: ChartEvent) {}
}

/// Host callbacks: any `Fn(ChartEvent)` closure can listen directly.
impl<F> ChartEventSink for F
where
    F: Fn(ChartEvent) + Send + Sync,
{
    fn emit(&self, event: ChartEvent) {
        self(event)
    }
}

/// Records the selection history a chart publishes.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct SelectionRecorder {
    events: std::sync::Arc<std::sync::Mutex<Vec<ChartEvent>>>,
}

#[cfg(test)]
impl SelectionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ChartEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Selected index after each event; `None` for a cleared selection.
    pub fn selections(&self) -> Vec<Option<usize>> {
        self.events().iter().map(ChartEvent::selected_index).collect()
    }

    pub fn last(&self) -> Option<ChartEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
impl ChartEventSink for SelectionRecorder {
    fn emit(&self, event: ChartEvent) {
        self.events.lock().unwrap().push(event);
    }
}
