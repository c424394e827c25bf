//! Phasor plots: a polar value drawn as an arrow in the complex plane.
//!
//! Enable with the `display` feature in Cargo.toml:
//!
//! ```toml
//! [dependencies]
//! polarform = { version = "0.1", features = ["display"] }
//! ```
//!
//! Output is raw RGB, optionally written as a binary PPM image.

use crate::PolarValue;

/// RGB color triple.
pub type Rgb = (u8, u8, u8);

const AXIS_COLOR: Rgb = (0, 0, 0);
const GRID_COLOR: Rgb = (210, 210, 210);
const GRID_DIVISIONS: usize = 10;

/// Half-width of the plotted square, in value units: `ceil(1.2·|p|)`, at
/// least 1.
///
/// # Example
/// ```
/// use polarform::PolarValue;
/// use polarform::display::axis_limit;
///
/// assert_eq!(axis_limit(&PolarValue::new(5.0, 30.0)), 6.0);
/// assert_eq!(axis_limit(&PolarValue::default()), 1.0);
/// ```
pub fn axis_limit(value: &PolarValue) -> f64 {
    (value.magnitude() * 1.2).ceil().max(1.0)
}

struct Canvas {
    size: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    fn new(size: usize, bg_color: Rgb) -> Self {
        let mut pixels = Vec::with_capacity(size * size * 3);
        for _ in 0..(size * size) {
            pixels.extend_from_slice(&[bg_color.0, bg_color.1, bg_color.2]);
        }
        Self { size, pixels }
    }

    fn put(&mut self, x: f64, y: f64, color: Rgb) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (col, row) = (x.round() as usize, y.round() as usize);
        if col >= self.size || row >= self.size {
            return;
        }
        let idx = (row * self.size + col) * 3;
        self.pixels[idx] = color.0;
        self.pixels[idx + 1] = color.1;
        self.pixels[idx + 2] = color.2;
    }

    /// DDA line between two pixel coordinates.
    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            self.put(from.0 + dx * t, from.1 + dy * t, color);
        }
    }
}

/// Draw `value` as an arrow from the origin to `(Re, Im)`.
///
/// Both axes span `±axis_limit(value)`; the origin sits at the image center
/// and the imaginary axis points up.
///
/// # Arguments
/// * `value` - Value to plot
/// * `size` - Width and height of the square image in pixels
/// * `color` - Arrow color
/// * `bg_color` - Background color
/// * `grid` - Draw a light grid behind the axes
///
/// # Returns
/// RGB image data as Vec<u8> (size * size * 3 bytes); empty when `size` is 0
///
/// # Example
/// ```
/// use polarform::PolarValue;
/// use polarform::display::phasor_to_rgb;
///
/// let pixels = phasor_to_rgb(&PolarValue::new(1.0, 45.0), 64, (255, 0, 0), (255, 255, 255), true);
/// assert_eq!(pixels.len(), 64 * 64 * 3);
/// ```
pub fn phasor_to_rgb(
    value: &PolarValue,
    size: usize,
    color: Rgb,
    bg_color: Rgb,
    grid: bool,
) -> Vec<u8> {
    if size == 0 {
        return Vec::new();
    }

    let mut canvas = Canvas::new(size, bg_color);
    let last = (size - 1) as f64;
    let center = last / 2.0;
    let lim = axis_limit(value);
    let to_pixel = |re: f64, im: f64| (center + re / lim * center, center - im / lim * center);

    if grid {
        for i in 0..=GRID_DIVISIONS {
            let pos = last * i as f64 / GRID_DIVISIONS as f64;
            canvas.line((pos, 0.0), (pos, last), GRID_COLOR);
            canvas.line((0.0, pos), (last, pos), GRID_COLOR);
        }
    }
    canvas.line((0.0, center), (last, center), AXIS_COLOR);
    canvas.line((center, 0.0), (center, last), AXIS_COLOR);

    let tip = value.to_rectangular();
    let origin = to_pixel(0.0, 0.0);
    let head = to_pixel(tip.re, tip.im);
    canvas.line(origin, head, color);

    // arrowhead barbs, 8% of the image wide, 150° either side of the shaft
    let barb = size as f64 * 0.08;
    let theta = value.phase_radians();
    for offset in [150f64.to_radians(), -150f64.to_radians()] {
        let (sin, cos) = (theta + offset).sin_cos();
        canvas.line(head, (head.0 + barb * cos, head.1 - barb * sin), color);
    }

    for dx in -1..=1 {
        for dy in -1..=1 {
            canvas.put(origin.0 + dx as f64, origin.1 + dy as f64, AXIS_COLOR);
        }
    }

    canvas.pixels
}

/// Save RGB pixel data as a PPM image file.
///
/// PPM is a simple uncompressed format that can be opened by most image viewers.
///
/// # Arguments
/// * `path` - Output file path (should end in .ppm)
/// * `width` - Image width
/// * `height` - Image height
/// * `pixels` - RGB pixel data (width * height * 3 bytes)
pub fn save_ppm(path: &str, width: usize, height: usize, pixels: &[u8]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;
    file.write_all(pixels)?;
    Ok(())
}

/// Save a phasor plot as a PPM image: red arrow on white, with grid.
///
/// # Example
/// ```ignore
/// use polarform::PolarValue;
/// use polarform::display::save_phasor;
///
/// save_phasor(&PolarValue::new(5.0, 30.0), "phasor.ppm", 400).unwrap();
/// ```
pub fn save_phasor(value: &PolarValue, path: &str, size: usize) -> std::io::Result<()> {
    let pixels = phasor_to_rgb(value, size, (214, 39, 40), (255, 255, 255), true);
    save_ppm(path, size, size, &pixels)
}
