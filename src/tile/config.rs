use std::sync::{Arc, Mutex};

use crate::logging::Logger;
use crate::metrics::LayoutMetrics;

/// Ambient settings for a [`Layout`](super::Layout).
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Optional structured logger receiving join/recalculate diagnostics.
    pub logger: Option<Logger>,
    /// Metrics accumulator updated by size queries and recalculation.
    pub metrics: Option<Arc<Mutex<LayoutMetrics>>>,
    /// Prefix for every emitted event target.
    pub log_target: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            logger: None,
            metrics: None,
            log_target: "room_tiles::layout".to_string(),
        }
    }
}

impl LayoutConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(LayoutMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<LayoutMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }

    pub(crate) fn target(&self, suffix: &str) -> String {
        format!("{}.{}", self.log_target, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enable_metrics_is_idempotent() {
        let mut config = LayoutConfig::default();
        config.enable_metrics();
        let first = config.metrics_handle().unwrap();
        config.enable_metrics();
        let second = config.metrics_handle().unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        config.disable_metrics();
        assert!(config.metrics_handle().is_none());
    }

    #[test]
    fn targets_share_prefix() {
        let config = LayoutConfig::default().with_log_target("app::tiles");
        assert_eq!(config.target("recalculate"), "app::tiles.recalculate");
    }
}
