//! The top-level frame loop.
//!
//! Per frame: drain pending events, apply them to the cycler, and when a
//! redraw is pending regenerate the scene (seed = current slot), annotate,
//! execute the selected case through the reporter, and hand the finished
//! frame to the sink. A fixed sleep paces frames; `Quit` ends the run with
//! a summary.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

use crate::annotate::clear_screen;
use crate::catalog::CATALOG;
use crate::cycler::{InputEvent, TestCycler};
use crate::foundation::error::{BenchError, BenchResult};
use crate::gfx::{FrameRgba, Renderable, Surface};
use crate::report::{CaseResult, Clock, MonotonicClock, ThroughputReporter};
use crate::scene::SceneGenerator;
use crate::viewport;

/// Default sleep between frames.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(25);

/// Title shown for the fallback catalog slot.
const UNKNOWN_TITLE: &str = "Unknown Test";

/// Non-blocking source of input events.
pub trait EventSource {
    /// All events that arrived since the previous call. An empty batch is a
    /// normal idle frame.
    fn drain(&mut self) -> Vec<InputEvent>;
}

/// Scripted [`EventSource`] feeding one pre-built batch per frame.
///
/// Once the script is exhausted every further frame yields `Quit`, so a
/// scripted run always terminates.
#[derive(Clone, Debug, Default)]
pub struct ScriptedEvents {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    /// Script from per-frame batches.
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Script that shows slot 0, advances through every remaining slot
    /// (fallback included), then quits.
    pub fn full_cycle(catalog_size: usize) -> Self {
        let mut frames = vec![Vec::new()];
        for _ in 0..catalog_size {
            frames.push(vec![InputEvent::Advance]);
        }
        Self::new(frames)
    }
}

impl EventSource for ScriptedEvents {
    fn drain(&mut self) -> Vec<InputEvent> {
        self.frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}

/// Destination for finished frames.
pub trait FrameSink {
    /// Accept the frame rendered on frame number `frame_index`.
    fn submit(&mut self, frame_index: u64, frame: &FrameRgba) -> BenchResult<()>;
}

/// Discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn submit(&mut self, _frame_index: u64, _frame: &FrameRgba) -> BenchResult<()> {
        Ok(())
    }
}

/// Writes numbered PNGs into a directory.
#[derive(Clone, Debug)]
pub struct PngDirSink {
    dir: PathBuf,
}

impl PngDirSink {
    /// Create the directory (if needed) and the sink.
    pub fn new(dir: impl Into<PathBuf>) -> BenchResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| BenchError::render(format!("create {}: {e}", dir.display())))?;
        Ok(Self { dir })
    }
}

impl FrameSink for PngDirSink {
    fn submit(&mut self, frame_index: u64, frame: &FrameRgba) -> BenchResult<()> {
        let path = self.dir.join(format!("frame_{frame_index:05}.png"));
        let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_straight_alpha())
            .ok_or_else(|| BenchError::render("frame buffer size mismatch"))?;
        img.save(&path)
            .map_err(|e| BenchError::render(format!("write {}: {e}", path.display())))?;
        Ok(())
    }
}

/// Loop configuration.
#[derive(Clone, Copy, Debug)]
pub struct LoopConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Quadrant border inset in pixels.
    pub border: i32,
    /// Records per scene sample.
    pub samples: usize,
    /// Sleep between frames; zero disables pacing (tests).
    pub frame_delay: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            border: viewport::DEFAULT_BORDER,
            samples: crate::scene::DEFAULT_SAMPLES,
            frame_delay: DEFAULT_FRAME_DELAY,
        }
    }
}

/// Aggregate outcome of one run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunSummary {
    /// Number of loop iterations.
    pub frames: u64,
    /// Wall time of the run in milliseconds.
    pub elapsed_ms: u64,
    /// Loop iterations per second of wall time.
    pub fps: f64,
    /// One entry per executed case, in execution order.
    pub cases: Vec<CaseResult>,
}

/// The run-to-completion frame loop.
pub struct RenderLoop<C> {
    config: LoopConfig,
    cycler: TestCycler,
    reporter: ThroughputReporter<C>,
    wall: C,
}

impl RenderLoop<MonotonicClock> {
    /// Loop on the wall clock.
    pub fn new(config: LoopConfig) -> Self {
        Self::with_clocks(config, MonotonicClock::new(), MonotonicClock::new())
    }
}

impl<C: Clock> RenderLoop<C> {
    /// Loop with explicit clocks for case timing and wall time.
    pub fn with_clocks(config: LoopConfig, case_clock: C, wall_clock: C) -> Self {
        Self {
            config,
            cycler: TestCycler::new(CATALOG.len()),
            reporter: ThroughputReporter::with_clock(case_clock),
            wall: wall_clock,
        }
    }

    /// Drive the loop until an exhausted script or a `Quit` event stops it.
    pub fn run<S, E, K>(
        &mut self,
        surface: &mut S,
        events: &mut E,
        sink: &mut K,
    ) -> BenchResult<RunSummary>
    where
        S: Surface + Renderable,
        E: EventSource,
        K: FrameSink,
    {
        let quadrants = viewport::quadrants(
            self.config.width as i32,
            self.config.height as i32,
            self.config.border,
        )?;
        let generator =
            SceneGenerator::new(self.config.width, self.config.height, self.config.samples);

        let start = self.wall.now_ms();
        let mut frames = 0u64;
        let mut cases = Vec::new();
        let mut quit = false;

        while !quit {
            frames += 1;

            for event in events.drain() {
                match event {
                    InputEvent::Quit => quit = true,
                    nav => self.cycler.apply(nav),
                }
            }

            if self.cycler.needs_redraw() {
                let slot = self.cycler.current();
                match CATALOG.get(slot) {
                    Some(case) => {
                        let scene = generator.generate(slot as i64);
                        clear_screen(surface, case.name)?;
                        cases.push(self.reporter.measure(case, surface, &quadrants, &scene)?);
                    }
                    None => clear_screen(surface, UNKNOWN_TITLE)?,
                }
                let frame = surface.render()?;
                sink.submit(frames - 1, &frame)?;
                self.cycler.redraw_done();
            }

            if !quit && !self.config.frame_delay.is_zero() {
                std::thread::sleep(self.config.frame_delay);
            }
        }

        let elapsed_ms = self.wall.now_ms().saturating_sub(start);
        let fps = if elapsed_ms > 0 {
            frames as f64 * 1000.0 / elapsed_ms as f64
        } else {
            0.0
        };
        tracing::info!(frames, elapsed_ms, fps, "run complete");

        Ok(RunSummary {
            frames,
            elapsed_ms,
            fps,
            cases,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/run_loop.rs"]
mod tests;
