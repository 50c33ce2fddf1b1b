//! Monotonic millisecond tick sources

use std::cell::Cell;
use std::time::Instant;

/// Monotonically increasing millisecond counter
pub trait TickSource {
    /// Milliseconds since the source started
    fn ticks(&self) -> u64;
}

/// Ticks from the GLFW timer
pub struct GlfwTicks {
    glfw: glfw::Glfw,
}

impl GlfwTicks {
    /// Wrap an initialised GLFW instance
    pub const fn new(glfw: glfw::Glfw) -> Self {
        Self { glfw }
    }
}

impl TickSource for GlfwTicks {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn ticks(&self) -> u64 {
        (self.glfw.get_time() * 1000.0) as u64
    }
}

/// Ticks from [`Instant`], for hosts without a GLFW instance
#[derive(Debug, Clone, Copy)]
pub struct InstantTicks {
    start: Instant,
}

impl InstantTicks {
    /// Start counting from now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for InstantTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for InstantTicks {
    #[allow(clippy::cast_possible_truncation)]
    fn ticks(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Manually advanced ticks, for replays and deterministic hosts
#[derive(Debug, Default)]
pub struct ManualTicks {
    now: Cell<u64>,
}

impl ManualTicks {
    /// Start at `ticks`
    pub const fn starting_at(ticks: u64) -> Self {
        Self {
            now: Cell::new(ticks),
        }
    }

    /// Move forward by `millis`
    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get().saturating_add(millis));
    }
}

impl TickSource for ManualTicks {
    fn ticks(&self) -> u64 {
        self.now.get()
    }
}

impl<T: TickSource + ?Sized> TickSource for std::rc::Rc<T> {
    fn ticks(&self) -> u64 {
        (**self).ticks()
    }
}
