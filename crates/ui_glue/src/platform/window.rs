//! Window size queries used by the render adapter

/// Anything that can report the size of its drawable area
pub trait WindowSurface {
    /// Drawable size in pixels
    fn framebuffer_size(&self) -> (u32, u32);
}

#[allow(clippy::cast_sign_loss)]
fn clamp_size((width, height): (i32, i32)) -> (u32, u32) {
    (width.max(0) as u32, height.max(0) as u32)
}

impl WindowSurface for glfw::Window {
    fn framebuffer_size(&self) -> (u32, u32) {
        clamp_size(self.get_framebuffer_size())
    }
}

impl WindowSurface for glfw::PWindow {
    fn framebuffer_size(&self) -> (u32, u32) {
        clamp_size(self.get_framebuffer_size())
    }
}

/// Fixed-size surface for headless hosts and off-screen rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSurface {
    width: u32,
    height: u32,
}

impl FixedSurface {
    /// Create a surface of the given size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Change the reported size
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

impl WindowSurface for FixedSurface {
    fn framebuffer_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_sizes_clamp_to_zero() {
        assert_eq!(clamp_size((-5, 10)), (0, 10));
    }

    #[test]
    fn test_fixed_surface_resize() {
        let mut surface = FixedSurface::new(320, 240);
        surface.set_size(640, 480);
        assert_eq!(surface.framebuffer_size(), (640, 480));
    }
}
