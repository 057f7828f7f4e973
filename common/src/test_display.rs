//! In-memory framebuffer for drawing tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};

use crate::colors::BLACK;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// RGB565 framebuffer that silently drops out-of-bounds pixels.
pub struct TestDisplay {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl TestDisplay {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![BLACK; (size.width * size.height) as usize],
        }
    }

    /// Framebuffer the size of the real screen.
    pub fn screen() -> Self { Self::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)) }

    pub fn get(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        self.index(point).map(|i| self.pixels[i])
    }

    /// Number of pixels with exactly this color.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Number of pixels inside `area` matching `predicate`.
    pub fn count_in(
        &self,
        area: &Rectangle,
        predicate: impl Fn(Rgb565) -> bool,
    ) -> usize {
        area.points()
            .filter_map(|p| self.get(p))
            .filter(|&c| predicate(c))
            .count()
    }

    /// Number of pixels outside `area` matching `predicate`.
    pub fn count_outside(
        &self,
        area: &Rectangle,
        predicate: impl Fn(Rgb565) -> bool,
    ) -> usize {
        self.bounding_box()
            .points()
            .filter(|p| !area.contains(*p))
            .filter_map(|p| self.get(p))
            .filter(|&c| predicate(c))
            .count()
    }

    fn index(
        &self,
        point: Point,
    ) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some((y * self.size.width + x) as usize)
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for TestDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}
