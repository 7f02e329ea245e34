//! Pixel buffers and clipped painting.

use crate::color::Color;

/// An RGBA pixel buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data.
    pub data: Vec<Color>,
}

impl PixelBuffer {
    /// Create a buffer filled with a colour.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a fully transparent buffer.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Color::TRANSPARENT)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Sets the pixel at `(x, y)`. Returns false, changing nothing, when the
    /// position is outside the buffer.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.data[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.data.fill(color);
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels equal to `color`.
    pub fn count(&self, color: Color) -> usize {
        self.data.iter().filter(|&&c| c == color).count()
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().flat_map(Color::to_rgba8).collect()
    }
}

/// Paints into a [`PixelBuffer`], dropping and counting writes that land
/// outside it.
#[derive(Debug)]
pub struct Painter<'a> {
    buffer: &'a mut PixelBuffer,
    clipped: usize,
}

impl<'a> Painter<'a> {
    pub fn new(buffer: &'a mut PixelBuffer) -> Self {
        Self { buffer, clipped: 0 }
    }

    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if !self.buffer.set(x, y, color) {
            self.clipped += 1;
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        for yy in 0..height as i32 {
            for xx in 0..width as i32 {
                self.put(x + xx, y + yy, color);
            }
        }
    }

    /// Writes dropped so far.
    pub fn clipped(&self) -> usize {
        self.clipped
    }

    /// Logs the clipped-write total for `what` and returns it.
    pub fn finish(self, what: &str) -> usize {
        if self.clipped > 0 {
            log::debug!(
                "{}: {} pixel writes fell outside the {}x{} buffer",
                what,
                self.clipped,
                self.buffer.width,
                self.buffer.height
            );
        }
        self.clipped
    }
}
