use super::*;
use crate::foundation::core::{Region, Rgba8};
use crate::gfx::TexturePatch;
use crate::report::Clock;

struct SteppingClock {
    now: u64,
    step: u64,
}

impl SteppingClock {
    fn new(step: u64) -> Self {
        Self { now: 0, step }
    }
}

impl Clock for SteppingClock {
    fn now_ms(&mut self) -> u64 {
        let t = self.now;
        self.now += self.step;
        t
    }
}

/// Accepts every draw; renders empty frames.
struct LoopSurface {
    width: u32,
    height: u32,
    renders: u64,
}

impl LoopSurface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            renders: 0,
        }
    }
}

impl Renderable for LoopSurface {
    fn render(&mut self) -> BenchResult<FrameRgba> {
        self.renders += 1;
        Ok(FrameRgba {
            width: self.width,
            height: self.height,
            data: vec![0; (self.width * self.height * 4) as usize],
        })
    }
}

impl Surface for LoopSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    fn clear(&mut self, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn set_clip(&mut self, _: Region) -> BenchResult<()> {
        Ok(())
    }
    fn clear_clip(&mut self) -> BenchResult<()> {
        Ok(())
    }
    fn pixel(&mut self, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn hline(&mut self, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn vline(&mut self, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn line(&mut self, _: i32, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn thick_line(&mut self, _: i32, _: i32, _: i32, _: i32, _: u8, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn rectangle(&mut self, _: i32, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn rounded_rectangle(
        &mut self,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: i32,
        _: Rgba8,
    ) -> BenchResult<()> {
        Ok(())
    }
    fn filled_box(&mut self, _: i32, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn circle(&mut self, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn aa_circle(&mut self, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn filled_circle(&mut self, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn ellipse(&mut self, _: i32, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn aa_ellipse(&mut self, _: i32, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn filled_ellipse(&mut self, _: i32, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn bezier(&mut self, _: &[(i32, i32)], _: u32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn polygon(&mut self, _: &[(i32, i32)], _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn aa_polygon(&mut self, _: &[(i32, i32)], _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn filled_polygon(&mut self, _: &[(i32, i32)], _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn trigon(&mut self, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn arc(&mut self, _: i32, _: i32, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn pie(&mut self, _: i32, _: i32, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn filled_pie(&mut self, _: i32, _: i32, _: i32, _: i32, _: i32, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
    fn textured_polygon(&mut self, _: &[(i32, i32)], _: &TexturePatch) -> BenchResult<()> {
        Ok(())
    }
    fn text(&mut self, _: i32, _: i32, _: &str, _: Rgba8) -> BenchResult<()> {
        Ok(())
    }
}

#[derive(Default)]
struct CollectingSink {
    frames: Vec<u64>,
}

impl FrameSink for CollectingSink {
    fn submit(&mut self, frame_index: u64, frame: &FrameRgba) -> BenchResult<()> {
        assert_eq!(frame.data.len(), (frame.width * frame.height * 4) as usize);
        self.frames.push(frame_index);
        Ok(())
    }
}

fn test_config() -> LoopConfig {
    LoopConfig {
        width: 320,
        height: 240,
        border: 5,
        samples: 16,
        frame_delay: Duration::ZERO,
    }
}

#[test]
fn full_cycle_executes_every_case_once() {
    let mut surface = LoopSurface::new(320, 240);
    let mut events = ScriptedEvents::full_cycle(CATALOG.len());
    let mut sink = CollectingSink::default();
    let mut render_loop =
        RenderLoop::with_clocks(test_config(), SteppingClock::new(1), SteppingClock::new(1));

    let summary = render_loop
        .run(&mut surface, &mut events, &mut sink)
        .unwrap();

    // One idle frame per slot plus the final quit frame.
    assert_eq!(summary.frames, CATALOG.len() as u64 + 2);
    let names: Vec<&str> = summary.cases.iter().map(|c| c.name.as_str()).collect();
    let expected: Vec<&str> = CATALOG.iter().map(|c| c.name).collect();
    assert_eq!(names, expected);
    assert!(summary.cases.iter().all(|c| c.primitives > 0));
    // Real cases plus the fallback placeholder all produced frames.
    assert_eq!(sink.frames.len(), CATALOG.len() + 1);
    assert_eq!(surface.renders, CATALOG.len() as u64 + 1);
}

#[test]
fn fallback_slot_renders_without_a_case_result() {
    let mut surface = LoopSurface::new(320, 240);
    let mut events = ScriptedEvents::new([vec![], vec![InputEvent::Retreat]]);
    let mut sink = CollectingSink::default();
    let mut render_loop =
        RenderLoop::with_clocks(test_config(), SteppingClock::new(1), SteppingClock::new(1));

    let summary = render_loop
        .run(&mut surface, &mut events, &mut sink)
        .unwrap();

    // Slot 0 then the fallback placeholder, nothing measured for the
    // placeholder.
    assert_eq!(summary.cases.len(), 1);
    assert_eq!(sink.frames.len(), 2);
}

#[test]
fn unmeasurable_runs_keep_case_results_without_rates() {
    let mut surface = LoopSurface::new(320, 240);
    let mut events = ScriptedEvents::new([vec![]]);
    let mut sink = CollectingSink::default();
    let mut render_loop =
        RenderLoop::with_clocks(test_config(), SteppingClock::new(0), SteppingClock::new(0));

    let summary = render_loop
        .run(&mut surface, &mut events, &mut sink)
        .unwrap();

    assert_eq!(summary.cases.len(), 1);
    assert_eq!(summary.cases[0].rate, None);
    assert_eq!(summary.fps, 0.0);
}

#[test]
fn exhausted_scripts_terminate_the_loop() {
    let mut events = ScriptedEvents::new(Vec::<Vec<InputEvent>>::new());
    assert_eq!(events.drain(), vec![InputEvent::Quit]);
    assert_eq!(events.drain(), vec![InputEvent::Quit]);
}

#[test]
fn full_cycle_script_shape() {
    let mut events = ScriptedEvents::full_cycle(3);
    assert_eq!(events.drain(), Vec::<InputEvent>::new());
    assert_eq!(events.drain(), vec![InputEvent::Advance]);
    assert_eq!(events.drain(), vec![InputEvent::Advance]);
    assert_eq!(events.drain(), vec![InputEvent::Advance]);
    assert_eq!(events.drain(), vec![InputEvent::Quit]);
}

#[test]
fn default_config_matches_the_interactive_harness() {
    let config = LoopConfig::default();
    assert_eq!((config.width, config.height), (640, 480));
    assert_eq!(config.border, 10);
    assert_eq!(config.samples, 4096);
    assert_eq!(config.frame_delay, Duration::from_millis(25));
}

#[test]
fn png_sink_writes_numbered_frames() {
    let dir = std::env::temp_dir().join(format!("primbench-sink-{}", std::process::id()));
    let mut sink = PngDirSink::new(&dir).unwrap();
    let frame = FrameRgba {
        width: 2,
        height: 2,
        data: vec![255; 16],
    };
    sink.submit(3, &frame).unwrap();
    assert!(dir.join("frame_00003.png").exists());
    std::fs::remove_dir_all(&dir).unwrap();
}
