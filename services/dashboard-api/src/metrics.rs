//! Prometheus metrics for the dashboard API.

use prometheus::{Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};

/// How a dashboard request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Ok,
    FetchError,
    ParseError,
}

impl RequestOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::FetchError => "fetch_error",
            Self::ParseError => "parse_error",
        }
    }
}

/// Service metrics registered on a private registry.
#[derive(Clone)]
pub struct ApiMetrics {
    registry: Registry,
    dashboard_requests: IntCounterVec,
    sheet_fetch_seconds: Histogram,
}

impl ApiMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new_custom(Some("salesboard".to_string()), None)?;

        let dashboard_requests = IntCounterVec::new(
            Opts::new("dashboard_requests_total", "Dashboard requests by outcome"),
            &["outcome"],
        )?;
        let sheet_fetch_seconds = Histogram::with_opts(
            HistogramOpts::new("sheet_fetch_seconds", "Time spent fetching the sheet grid")
                .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        )?;

        registry.register(Box::new(dashboard_requests.clone()))?;
        registry.register(Box::new(sheet_fetch_seconds.clone()))?;

        Ok(Self {
            registry,
            dashboard_requests,
            sheet_fetch_seconds,
        })
    }

    pub fn record_request(&self, outcome: RequestOutcome) {
        self.dashboard_requests
            .with_label_values(&[outcome.as_str()])
            .inc();
    }

    pub fn observe_fetch(&self, seconds: f64) {
        self.sheet_fetch_seconds.observe(seconds);
    }

    pub fn render(&self) -> String {
        TextEncoder::new()
            .encode_to_string(&self.registry.gather())
            .unwrap_or_else(|_| "Error encoding metrics".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_namespaced_counters() {
        let metrics = ApiMetrics::new().unwrap();
        metrics.record_request(RequestOutcome::ParseError);
        metrics.observe_fetch(0.2);

        let text = metrics.render();
        assert!(text.contains("salesboard_dashboard_requests_total{outcome=\"parse_error\"} 1"));
        assert!(text.contains("salesboard_sheet_fetch_seconds_count 1"));
    }
}
