use crate::logging::{LogEvent, LogFields, LogLevel};
use serde::Serialize;
use serde_json::json;

/// Counters describing how much work the resolver and recalculation did.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    size_queries: u64,
    memo_hits: u64,
    fills_computed: u64,
    recalculations: u64,
    tiles_invalidated: u64,
    callbacks_fired: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_query(&mut self) {
        self.size_queries = self.size_queries.saturating_add(1);
    }

    pub fn record_memo_hit(&mut self) {
        self.memo_hits = self.memo_hits.saturating_add(1);
    }

    pub fn record_fill(&mut self) {
        self.fills_computed = self.fills_computed.saturating_add(1);
    }

    pub fn record_recalculation(&mut self, invalidated: usize, callbacks: usize) {
        self.recalculations = self.recalculations.saturating_add(1);
        self.tiles_invalidated = self.tiles_invalidated.saturating_add(invalidated as u64);
        self.callbacks_fired = self.callbacks_fired.saturating_add(callbacks as u64);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            size_queries: self.size_queries,
            memo_hits: self.memo_hits,
            fills_computed: self.fills_computed,
            recalculations: self.recalculations,
            tiles_invalidated: self.tiles_invalidated,
            callbacks_fired: self.callbacks_fired,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricSnapshot {
    pub size_queries: u64,
    pub memo_hits: u64,
    pub fills_computed: u64,
    pub recalculations: u64,
    pub tiles_invalidated: u64,
    pub callbacks_fired: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "layout_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("size_queries".to_string(), json!(self.size_queries));
        map.insert("memo_hits".to_string(), json!(self.memo_hits));
        map.insert("fills_computed".to_string(), json!(self.fills_computed));
        map.insert("recalculations".to_string(), json!(self.recalculations));
        map.insert("tiles_invalidated".to_string(), json!(self.tiles_invalidated));
        map.insert("callbacks_fired".to_string(), json!(self.callbacks_fired));
        map
    }
}
