use chrono::{DateTime, Utc};
use log::{info, warn};
use spacetimedb::{
    log_stopwatch::LogStopwatch as SpacetimeLogStopwatch, ReducerContext, Timestamp,
};

/// Converts a module timestamp into the UTC time the progression rules work with.
///
/// Timestamps outside chrono's range collapse to the Unix epoch, with a warning.
pub fn to_utc(ts: Timestamp) -> DateTime<Utc> {
    let micros = ts.to_micros_since_unix_epoch();
    DateTime::from_timestamp_micros(micros).unwrap_or_else(|| {
        warn!("Timestamp {micros}us is outside the calendar range, using the Unix epoch");
        DateTime::default()
    })
}

pub fn to_timestamp(at: DateTime<Utc>) -> Timestamp {
    Timestamp::from_micros_since_unix_epoch(at.timestamp_micros())
}

/// Sampled timing for a single reducer call (WASM-safe).
///
/// Logs a begin/end pair around the call and the total time via SpacetimeDB's `log_stopwatch`.
/// Sampling uses `ctx.random::<f32>()` so the module stays deterministic.
pub struct LogStopwatch {
    event_sw: Option<SpacetimeLogStopwatch>,
    name: &'static str,
}

impl LogStopwatch {
    /// Starts timing `name`, logging with probability `sample_rate` in [0, 1].
    pub fn new(ctx: &ReducerContext, name: &'static str, sample_rate: f32) -> Self {
        let should_sample = sample_rate > 0.0 && ctx.random::<f32>() <= sample_rate;
        if should_sample {
            info!("--------- {name} begin ---------");
        }

        Self {
            event_sw: should_sample.then(|| SpacetimeLogStopwatch::new(name)),
            name,
        }
    }
}

impl Drop for LogStopwatch {
    fn drop(&mut self) {
        if let Some(sw) = self.event_sw.take() {
            sw.end();
            info!("---------- {} end ----------", self.name);
        }
    }
}
