//! primbench is a visual and throughput benchmark harness for 2D drawing
//! primitives.
//!
//! For each entry in a fixed catalog of primitive kinds it generates
//! reproducible synthetic geometry from an integer seed, renders four
//! comparative variants into clipped screen regions, measures achieved
//! primitives per second, and cycles between kinds under scripted input.
//! Rasterization is behind the [`gfx::Surface`] trait; the bundled
//! [`gfx::CpuSurface`] renders on the CPU via `vello_cpu`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod annotate;
pub mod catalog;
pub mod cycler;
pub mod foundation;
pub mod gfx;
pub mod report;
pub mod run_loop;
pub mod scene;
pub mod viewport;

pub use catalog::{BenchmarkCase, CATALOG, ColorPolicy};
pub use cycler::{InputEvent, TestCycler};
pub use foundation::core::{Region, Rgba8};
pub use foundation::error::{BenchError, BenchResult};
pub use gfx::{CpuSurface, FrameRgba, Renderable, Surface, TexturePatch};
pub use report::{CaseResult, Clock, MonotonicClock, ThroughputReporter};
pub use run_loop::{
    EventSource, FrameSink, LoopConfig, NullSink, PngDirSink, RenderLoop, RunSummary,
    ScriptedEvents,
};
pub use scene::{SceneGenerator, SceneRecord, SceneSample};
pub use viewport::{Quadrants, quadrants};
