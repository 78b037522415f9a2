//! Self-contained timers - each accumulates delta time and decides when to fire

/// Frame gate for a fixed update interval
///
/// Real elapsed time accumulates until it exceeds the interval. The whole
/// accumulated delta is then handed out as one step (not clamped, not split)
/// and the accumulator keeps only the remainder modulo the interval.
#[derive(Debug, Clone, Copy)]
pub struct FrameGate {
    interval: f32,
    delta: f32,
}

impl FrameGate {
    /// Create gate that opens at most `hz` times per second
    pub fn new(hz: f32) -> Self {
        Self::with_interval(1.0 / hz)
    }

    pub fn with_interval(interval: f32) -> Self {
        Self {
            interval,
            delta: 0.0,
        }
    }

    /// Add real elapsed seconds; returns the step to simulate if the gate opens
    pub fn tick(&mut self, elapsed: f32) -> Option<f32> {
        self.delta += elapsed;

        if self.delta > self.interval {
            let step = self.delta;
            self.delta %= self.interval;
            Some(step)
        } else {
            None
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Time accumulated towards the next step
    pub fn pending(&self) -> f32 {
        self.delta
    }

    /// Seconds of real time still needed before the gate can open
    pub fn until_next(&self) -> f32 {
        (self.interval - self.delta).max(0.0)
    }
}

/// Countdown timer - fires once after duration
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    duration: f32,
    elapsed: f32,
    active: bool,
}

impl Countdown {
    /// Create inactive countdown
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Start (or restart) from zero
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Tick with delta, returns true on the tick that completes it
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.active {
            return false;
        }

        self.elapsed += delta;

        if self.elapsed >= self.duration {
            self.active = false;
            true
        } else {
            false
        }
    }
}
