use std::time::Instant;

use crate::gpu::GpuState;

/// Converts a host refresh timestamp in milliseconds into shader seconds.
///
/// The display scheduler hands out millisecond timestamps; the shaders
/// consume seconds. A timestamp of 0 maps to 0.0 and 2500 maps to 2.5.
pub fn seconds_from_millis(millis: f64) -> f32 {
    (millis / 1000.0) as f32
}

/// Snapshot of the time state supplied to the shader uniforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    /// Elapsed wall-clock or simulated time in seconds.
    pub seconds: f32,
    /// Monotonic frame counter for the running session.
    pub frame_index: u64,
}

impl TimeSample {
    /// Creates a new time sample.
    pub fn new(seconds: f32, frame_index: u64) -> Self {
        Self {
            seconds,
            frame_index,
        }
    }
}

/// Abstraction over where time values originate from.
pub trait TimeSource: Send {
    /// Resets the source to its initial state.
    fn reset(&mut self);
    /// Produces a time sample for the next frame.
    fn sample(&mut self) -> TimeSample;
}

/// Time source backed by the system monotonic clock.
///
/// The origin is re-anchored on the first sample so frame zero always reads
/// exactly 0.0 seconds, no matter how long startup took.
#[derive(Debug, Clone, Copy)]
pub struct SystemTimeSource {
    origin: Instant,
    frame: u64,
}

impl SystemTimeSource {
    /// Creates a system time source initialised to `Instant::now()`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
            frame: 0,
        }
    }
}

impl TimeSource for SystemTimeSource {
    fn reset(&mut self) {
        self.origin = Instant::now();
        self.frame = 0;
    }

    fn sample(&mut self) -> TimeSample {
        let now = Instant::now();
        if self.frame == 0 {
            self.origin = now;
        }
        let elapsed = now.duration_since(self.origin);
        let sample = TimeSample::new(elapsed.as_secs_f32(), self.frame);
        self.frame = self.frame.saturating_add(1);
        sample
    }
}

/// Time source that always reports a fixed timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource {
    time: f32,
}

impl FixedTimeSource {
    /// Constructs a fixed time source that always returns the provided time.
    pub fn new(time: f32) -> Self {
        Self { time }
    }
}

impl TimeSource for FixedTimeSource {
    fn reset(&mut self) {}

    fn sample(&mut self) -> TimeSample {
        TimeSample::new(self.time, 0)
    }
}

/// Convenient alias for owning time sources behind trait objects.
pub type BoxedTimeSource = Box<dyn TimeSource + Send>;

/// Driver that owns the "render one frame" operation.
///
/// The event loop calls [`FrameLoop::tick`] once per redraw; the loop never
/// reschedules itself. The stop flag gives shutdown an explicit state instead
/// of relying on the host tearing the callback down.
pub(crate) struct FrameLoop {
    time_source: BoxedTimeSource,
    stop: bool,
    frames_rendered: u64,
}

impl FrameLoop {
    pub(crate) fn new(time_source: BoxedTimeSource) -> Self {
        Self {
            time_source,
            stop: false,
            frames_rendered: 0,
        }
    }

    /// Renders exactly one frame: sample time, encode, submit, present.
    pub(crate) fn tick(&mut self, gpu: &mut GpuState) -> Result<(), wgpu::SurfaceError> {
        let sample = self.time_source.sample();
        gpu.render(sample)?;
        self.frames_rendered = self.frames_rendered.saturating_add(1);
        Ok(())
    }

    pub(crate) fn request_stop(&mut self) {
        self.stop = true;
    }

    pub(crate) fn should_stop(&self) -> bool {
        self.stop
    }

    pub(crate) fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_convert_to_seconds() {
        assert_eq!(seconds_from_millis(0.0), 0.0);
        assert_eq!(seconds_from_millis(2500.0), 2.5);
        assert_eq!(seconds_from_millis(16.0), 0.016);
    }

    #[test]
    fn system_source_starts_at_zero() {
        let mut source = SystemTimeSource::new();
        let first = source.sample();
        assert_eq!(first.seconds, 0.0);
        assert_eq!(first.frame_index, 0);
    }

    #[test]
    fn system_source_is_monotonic() {
        let mut source = SystemTimeSource::new();
        let mut last = source.sample();
        for _ in 0..10 {
            let next = source.sample();
            assert!(next.seconds >= last.seconds);
            assert_eq!(next.frame_index, last.frame_index + 1);
            last = next;
        }
    }

    #[test]
    fn system_source_reset_restarts_frames() {
        let mut source = SystemTimeSource::new();
        source.sample();
        source.sample();
        source.reset();
        let sample = source.sample();
        assert_eq!(sample.frame_index, 0);
        assert_eq!(sample.seconds, 0.0);
    }

    #[test]
    fn fixed_source_reports_constant_time() {
        let mut source = FixedTimeSource::new(2.5);
        assert_eq!(source.sample(), TimeSample::new(2.5, 0));
        assert_eq!(source.sample(), TimeSample::new(2.5, 0));
        source.reset();
        assert_eq!(source.sample(), TimeSample::new(2.5, 0));
    }

    #[test]
    fn frame_loop_stop_flag_latches() {
        let mut frame_loop = FrameLoop::new(Box::new(FixedTimeSource::new(0.0)));
        assert!(!frame_loop.should_stop());
        assert_eq!(frame_loop.frames_rendered(), 0);
        frame_loop.request_stop();
        assert!(frame_loop.should_stop());
        frame_loop.request_stop();
        assert!(frame_loop.should_stop());
    }
}
