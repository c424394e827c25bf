//! Phasor Plot Example
//!
//! This example writes a polar value as an arrow in the complex plane to a PPM
//! image. Run with `--features display`.

use log::info;
use polarform::PolarValue;
use polarform::display::{axis_limit, save_phasor};

fn main() {
    env_logger::init();

    let value = PolarValue::new(5.0, 30.0);
    let path = "phasor.ppm";
    info!("Plotting {} (axes ±{})", value, axis_limit(&value));

    match save_phasor(&value, path, 400) {
        Ok(()) => info!("Saved {}", path),
        Err(e) => info!("Failed to save {}: {}", path, e),
    }
}
