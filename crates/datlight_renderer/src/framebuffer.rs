//! Packed 24-bit pixel storage shared by the render workers.

/// A `width` x `height` grid of packed RGB values, stored column-major:
/// cell `(x, y)` lives at index `x * height + y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

/// Exclusive access to one column of a framebuffer.
#[derive(Debug)]
pub struct Column<'a> {
    /// Column index in the image
    pub x: u32,
    /// Cells for rows `0..height`
    pub cells: &'a mut [u32],
}

impl Column<'_> {
    /// Store a packed color at row `y`.
    #[inline]
    pub fn set(&mut self, y: u32, packed: u32) {
        self.cells[y as usize] = packed;
    }

    pub fn height(&self) -> u32 {
        self.cells.len() as u32
    }
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Storage index of pixel (x, y).
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        x as usize * self.height as usize + y as usize
    }

    /// Get the packed pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[self.index(x, y)]
    }

    /// All cells in storage order.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Split the buffer into disjoint mutable columns, in column order.
    pub fn columns_mut(&mut self) -> impl Iterator<Item = Column<'_>> {
        let height = self.height.max(1) as usize;
        self.pixels
            .chunks_mut(height)
            .enumerate()
            .map(|(x, cells)| Column { x: x as u32, cells })
    }
}
