use diagram_detector::image::ImageRgb8;

/// Owned white RGB canvas for painting synthetic diagram images.
pub struct DiagramCanvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl DiagramCanvas {
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "image dimensions must be positive");
        Self {
            width,
            height,
            data: vec![255u8; width * height * 3],
        }
    }

    fn paint(&mut self, x: i32, y: i32) {
        let off = (y as usize * self.width + x as usize) * 3;
        self.data[off..off + 3].fill(0);
    }

    /// Stamps a filled black disc clipped to the canvas.
    pub fn disc(&mut self, cx: i32, cy: i32, r: i32) {
        let x0 = (cx - r).max(0);
        let x1 = (cx + r).min(self.width as i32 - 1);
        let y0 = (cy - r).max(0);
        let y1 = (cy + r).min(self.height as i32 - 1);
        for x in x0..=x1 {
            for y in y0..=y1 {
                let dx = i64::from(x - cx);
                let dy = i64::from(y - cy);
                if dx * dx + dy * dy <= i64::from(r) * i64::from(r) {
                    self.paint(x, y);
                }
            }
        }
    }

    /// Draws a bold stroke from (x0, y0) to (x1, y1): an orthogonal-stepping
    /// walk toward the target, stamping a disc of radius `half` at every
    /// step. Diagonal targets produce the staircase ink a hand-drawn edge
    /// leaves behind.
    pub fn stroke(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, half: i32) {
        let mut x = x0;
        let mut y = y0;
        self.disc(x, y, half);
        while (x, y) != (x1, y1) {
            if x != x1 {
                x += (x1 - x).signum();
            }
            if y != y1 {
                y += (y1 - y).signum();
            }
            self.disc(x, y, half);
        }
    }

    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8 {
            w: self.width,
            h: self.height,
            stride: self.width * 3,
            data: &self.data,
        }
    }
}
