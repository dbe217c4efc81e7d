use crate::ScreenSize;
use crate::grid::Grid;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Braille dots per terminal column
pub const DOTS_PER_COL: usize = 2;

/// Braille dots per terminal row
pub const DOTS_PER_ROW: usize = 4;

/// Renders grids to the terminal, one braille dot per pixel.
pub struct Camera {
    /// The pixel buffer
    pb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the pixel buffer
    w: usize,

    /// Height of the pixel buffer
    h: usize,
}

impl Camera {
    /// Create a camera covering `cols` by `rows` terminal characters.
    pub fn new(cols: ScreenSize, rows: ScreenSize) -> Self {
        let (w, h) = Self::dots(cols, rows);

        // For each braille character, we need 3 bytes:
        //  - The leader byte:     0b11100010
        //  - Continuation byte 1: 0b101000xx
        //  - Continuation byte 2: 0b10xxxxxx
        // For each newline, we need one byte: 0b00001010
        //
        // `cols * rows` characters and `rows` newlines gives us a framebuffer of length
        // `3 * (cols * rows) + rows`.
        let (bw, bh) = (cols as usize, rows as usize);
        let fb = String::with_capacity(3 * (bw * bh) + bh);

        Self {
            pb: vec![false; w * h],
            fb,
            cp: vec![BRAILLE_EMPTY; bw * bh],
            w,
            h,
        }
    }

    /// Size in braille dots of a `cols` by `rows` terminal.
    pub fn dots(cols: ScreenSize, rows: ScreenSize) -> (usize, usize) {
        (cols as usize * DOTS_PER_COL, rows as usize * DOTS_PER_ROW)
    }

    /// Follow a terminal resize. This clears the picture.
    pub fn resize(&mut self, cols: ScreenSize, rows: ScreenSize) {
        *self = Self::new(cols, rows);
    }

    /// Turns on a square of pixels, clipping whatever falls off the frame
    pub fn draw_square(&mut self, x: usize, y: usize, s: usize) {
        let x_end = x.saturating_add(s).min(self.w);
        let y_end = y.saturating_add(s).min(self.h);

        for y in y..y_end {
            for x in x..x_end {
                let i = self.xy_from(x, y);
                self.pb[i] = true;
            }
        }
    }

    /// Paint every live cell of `grid` as a `cell_size` square.
    pub fn draw(&mut self, grid: &Grid, cell_size: usize) {
        for (x, y, state) in grid.iter() {
            if !state.is_alive() {
                continue;
            }

            let (Some(x), Some(y)) = (
                (x as usize).checked_mul(cell_size),
                (y as usize).checked_mul(cell_size),
            ) else {
                continue;
            };

            if x >= self.w || y >= self.h {
                continue;
            }

            self.draw_square(x, y, cell_size);
        }
    }

    /// Reset the pixel buffer
    pub fn reset(&mut self) {
        self.pb.fill(false);
    }

    /// Build the text frame out of the pixel buffer
    pub fn render(&mut self) -> &str {
        let bw = self.w / DOTS_PER_COL;

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.pb.iter().enumerate() {
            if !px {
                continue;
            }

            let (x, y) = self.xy_to(n);
            self.cp[(y / DOTS_PER_ROW) * bw + (x / DOTS_PER_COL)] += Self::get_hex_value(x, y);
        }

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // Every codepoint is in the braille block, U+2800 to U+28FF
            self.fb
                .push(char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER));
        }

        &self.fb
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
