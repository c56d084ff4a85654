//! Throughput measurement around a single case execution.

use std::time::Instant;

use crate::catalog::BenchmarkCase;
use crate::foundation::core::Rgba8;
use crate::foundation::error::BenchResult;
use crate::gfx::Surface;
use crate::scene::SceneSample;
use crate::viewport::Quadrants;

/// Vertical position of the throughput overlay inside the title band.
const OVERLAY_Y: i32 = 26;

/// Monotonic millisecond counter, fakeable in tests.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&mut self) -> u64;
}

/// Wall [`Clock`] backed by [`Instant`].
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// A clock with its origin at construction time.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&mut self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Measured outcome of one case execution.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CaseResult {
    /// Case name from the catalog.
    pub name: String,
    /// Number of draw calls issued.
    pub primitives: u64,
    /// Wall time of the execution in milliseconds.
    pub elapsed_ms: u64,
    /// Primitives per second; `None` when the execution was unmeasurable
    /// (zero elapsed time).
    pub rate: Option<f64>,
}

/// Wraps case execution with timing, the overlay line, and a log line.
pub struct ThroughputReporter<C> {
    clock: C,
}

impl ThroughputReporter<MonotonicClock> {
    /// Reporter on the wall clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for ThroughputReporter<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ThroughputReporter<C> {
    /// Reporter on an explicit clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Run `case` and report its throughput.
    ///
    /// When the elapsed time is measurable the rate is drawn centered in
    /// the title band and emitted via `tracing::info!`; a zero elapsed time
    /// suppresses both (it is not an error).
    pub fn measure(
        &mut self,
        case: &BenchmarkCase,
        surface: &mut dyn Surface,
        quadrants: &Quadrants,
        scene: &SceneSample,
    ) -> BenchResult<CaseResult> {
        let then = self.clock.now_ms();
        let primitives = case.run(surface, quadrants, scene)?;
        let elapsed_ms = self.clock.now_ms().saturating_sub(then);

        let rate = (elapsed_ms > 0).then(|| primitives as f64 * 1000.0 / elapsed_ms as f64);
        if let Some(rate) = rate {
            let line = format!("{:>20}: {:>10.1} /sec", case.name, rate);
            let half_w = surface.size().0 as i32 / 2;
            surface.text(half_w - 4 * line.len() as i32, OVERLAY_Y, &line, Rgba8::WHITE)?;
            tracing::info!(
                case = case.name,
                primitives,
                elapsed_ms,
                rate,
                "case throughput"
            );
        }

        Ok(CaseResult {
            name: case.name.to_owned(),
            primitives,
            elapsed_ms,
            rate,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/report.rs"]
mod tests;
