//! Raster primitives over the framebuffer
//!
//! Everything here mutates the in-memory mirror only; nothing reaches the
//! panel until the driver flushes.

use core::mem::swap;

use crate::color::{Color, DrawMode};
use crate::framebuffer::Framebuffer;

impl Framebuffer<'_> {
    /// Draw a line from `(x0, y0)` to `(x1, y1)` with integer Bresenham.
    ///
    /// The second endpoint itself is not plotted; `line(0, 0, 7, 0, ..)`
    /// covers x 0..=6. Callers relying on the historical output of this
    /// routine depend on that bound, so it stays.
    pub fn line(
        &mut self,
        mut x0: i16,
        mut y0: i16,
        mut x1: i16,
        mut y1: i16,
        color: Color,
        mode: DrawMode,
    ) {
        // iterate along the longer axis
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            swap(&mut x0, &mut y0);
            swap(&mut x1, &mut y1);
        }

        if x0 > x1 {
            swap(&mut x0, &mut x1);
            swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();

        let mut err = dx / 2;
        let ystep: i16 = if y0 < y1 { 1 } else { -1 };

        while x0 < x1 {
            if steep {
                self.set_pixel(y0, x0, color, mode);
            } else {
                self.set_pixel(x0, y0, color, mode);
            }
            err -= dy;
            if err < 0 {
                y0 += ystep;
                err += dx;
            }
            x0 += 1;
        }
    }

    /// Horizontal line of `width` pixels starting at `(x, y)`.
    pub fn line_h(&mut self, x: i16, y: i16, width: i16, color: Color, mode: DrawMode) {
        self.line(x, y, x + width, y, color, mode);
    }

    /// Vertical line of `height` pixels starting at `(x, y)`.
    pub fn line_v(&mut self, x: i16, y: i16, height: i16, color: Color, mode: DrawMode) {
        self.line(x, y, x, y + height, color, mode);
    }

    /// Rectangle outline with corner `(x, y)`.
    pub fn rect(&mut self, x: i16, y: i16, width: i16, height: i16, color: Color, mode: DrawMode) {
        self.line_h(x, y, width, color, mode);
        self.line_h(x, y + height - 1, width, color, mode);

        let inner_height = height - 2;

        // skip the vertical sides when there is no row between the two
        // horizontal ones; re-plotting the shared corner pixels would
        // cancel them under XOR
        if inner_height < 1 {
            return;
        }

        self.line_v(x, y + 1, inner_height, color, mode);
        self.line_v(x + width - 1, y + 1, inner_height, color, mode);
    }

    /// Filled rectangle with corner `(x, y)`.
    pub fn rect_fill(
        &mut self,
        x: i16,
        y: i16,
        width: i16,
        height: i16,
        color: Color,
        mode: DrawMode,
    ) {
        // TODO: walk the byte map directly instead of a line per column
        for i in x..x + width {
            self.line_v(i, y, height, color, mode);
        }
    }

    /// Circle outline centered on `(x0, y0)`, midpoint algorithm.
    pub fn circle(&mut self, x0: i16, y0: i16, radius: i16, color: Color, mode: DrawMode) {
        let mut f = 1 - radius;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * radius;
        let mut x = 0;
        let mut y = radius;

        self.set_pixel(x0, y0 + radius, color, mode);
        self.set_pixel(x0, y0 - radius, color, mode);
        self.set_pixel(x0 + radius, y0, color, mode);
        self.set_pixel(x0 - radius, y0, color, mode);

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            self.set_pixel(x0 + x, y0 + y, color, mode);
            self.set_pixel(x0 - x, y0 + y, color, mode);
            self.set_pixel(x0 + x, y0 - y, color, mode);
            self.set_pixel(x0 - x, y0 - y, color, mode);

            self.set_pixel(x0 + y, y0 + x, color, mode);
            self.set_pixel(x0 - y, y0 + x, color, mode);
            self.set_pixel(x0 + y, y0 - x, color, mode);
            self.set_pixel(x0 - y, y0 - x, color, mode);
        }
    }

    /// Filled circle centered on `(x0, y0)`.
    ///
    /// Rejected under [`DrawMode::Xor`]: the fill spans overlap on shared
    /// rows, and a double toggle would leave an inconsistent result.
    pub fn circle_fill(&mut self, x0: i16, y0: i16, radius: i16, color: Color, mode: DrawMode) {
        if mode == DrawMode::Xor {
            return;
        }

        let mut f = 1 - radius;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * radius;
        let mut x = 0;
        let mut y = radius;

        for i in y0 - radius..=y0 + radius {
            self.set_pixel(x0, i, color, mode);
        }

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            for i in y0 - y..=y0 + y {
                self.set_pixel(x0 + x, i, color, mode);
                self.set_pixel(x0 - x, i, color, mode);
            }
            for i in y0 - x..=y0 + x {
                self.set_pixel(x0 + y, i, color, mode);
                self.set_pixel(x0 - y, i, color, mode);
            }
        }
    }
}
