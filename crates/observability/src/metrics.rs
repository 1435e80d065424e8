//! Emit metrics collection
//!
//! Records fan-out activity through the `metrics` facade and aggregates it in
//! memory for end-of-run summaries.

use std::collections::BTreeMap;

use contracts::Severity;
use dispatcher::MetricsSnapshot;
use metrics::{counter, gauge, histogram};

/// Record one emitted message
pub fn record_message_emitted(level: Severity) {
    counter!("fanlog_messages_total", "level" => level.label()).increment(1);
}

/// Record a Critical or Fatal escalation
pub fn record_escalation(level: Severity) {
    counter!("fanlog_escalations_total", "level" => level.label()).increment(1);
}

/// Record how long a single emit took, fan-out included
pub fn record_emit_latency_us(latency_us: f64) {
    histogram!("fanlog_emit_latency_us").record(latency_us);
}

/// Publish a target's delivery counters as gauges
pub fn record_target_snapshot(name: &str, snapshot: &MetricsSnapshot) {
    let series = [
        ("written", snapshot.written),
        ("filtered", snapshot.filtered),
        ("suppressed", snapshot.suppressed),
        ("failures", snapshot.failures),
    ];
    for (outcome, value) in series {
        gauge!(
            "fanlog_target_deliveries",
            "target" => name.to_string(),
            "outcome" => outcome
        )
        .set(value as f64);
    }
}

/// Emit metrics aggregator
///
/// Aggregates in memory so a run can print a summary without an exporter.
#[derive(Debug, Clone, Default)]
pub struct EmitMetricsAggregator {
    /// Messages per severity
    pub per_level: BTreeMap<Severity, u64>,

    /// Critical and Fatal emits
    pub escalations: u64,

    /// Emit latency in microseconds
    pub latency_us: RunningStats,

    /// Last snapshot seen per target
    pub targets: BTreeMap<String, MetricsSnapshot>,
}

impl EmitMetricsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one emit and forward it to the facade
    pub fn update(&mut self, level: Severity, latency_us: f64) {
        *self.per_level.entry(level).or_insert(0) += 1;
        self.latency_us.push(latency_us);
        record_message_emitted(level);
        record_emit_latency_us(latency_us);

        if level.escalates() {
            self.escalations += 1;
            record_escalation(level);
        }
    }

    /// Store the latest counters of a target
    pub fn observe_target(&mut self, name: &str, snapshot: MetricsSnapshot) {
        record_target_snapshot(name, &snapshot);
        self.targets.insert(name.to_string(), snapshot);
    }

    /// Total messages emitted
    pub fn total(&self) -> u64 {
        self.per_level.values().sum()
    }

    /// Generate summary report
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_messages: self.total(),
            escalations: self.escalations,
            per_level: self.per_level.clone(),
            latency_us: StatsSummary::from(&self.latency_us),
            targets: self.targets.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Metrics summary
#[derive(Debug, Clone, Default)]
pub struct MetricsSummary {
    pub total_messages: u64,
    pub escalations: u64,
    pub per_level: BTreeMap<Severity, u64>,
    pub latency_us: StatsSummary,
    pub targets: BTreeMap<String, MetricsSnapshot>,
}

impl std::fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Emit Summary ===")?;
        writeln!(f, "Messages: {}", self.total_messages)?;
        for (level, count) in &self.per_level {
            writeln!(f, "  {level}: {count}")?;
        }
        writeln!(f, "Escalations: {}", self.escalations)?;
        writeln!(f, "Emit latency (us): {}", self.latency_us)?;

        if !self.targets.is_empty() {
            writeln!(f, "Targets:")?;
            for (name, snap) in &self.targets {
                writeln!(
                    f,
                    "  {}: written={} filtered={} suppressed={} failures={}",
                    name, snap.written, snap.filtered, snap.suppressed, snap.failures
                )?;
            }
        }

        Ok(())
    }
}

/// Statistics summary
#[derive(Debug, Clone, Default)]
pub struct StatsSummary {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl From<&RunningStats> for StatsSummary {
    fn from(stats: &RunningStats) -> Self {
        Self {
            count: stats.count,
            min: stats.min,
            max: stats.max,
            mean: stats.mean(),
            std_dev: stats.std_dev(),
        }
    }
}

impl std::fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.count == 0 {
            write!(f, "N/A")
        } else {
            write!(
                f,
                "min={:.1}, max={:.1}, mean={:.1}, std={:.1} (n={})",
                self.min, self.max, self.mean, self.std_dev, self.count
            )
        }
    }
}

/// Online statistics (Welford's algorithm)
#[derive(Debug, Clone, Default)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl RunningStats {
    pub fn push(&mut self, value: f64) {
        self.count += 1;

        if self.count == 1 {
            self.min = value;
            self.max = value;
            self.mean = value;
            self.m2 = 0.0;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);

            let delta = value - self.mean;
            self.mean += delta / self.count as f64;
            let delta2 = value - self.mean;
            self.m2 += delta * delta2;
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    /// Sample variance
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}
