//! Phasor Arithmetic Example
//!
//! This example walks through a series RLC circuit using polar-form values.

use log::info;
use num_complex::Complex64;
use polarform::{Operand, PolarValue};

fn main() {
    env_logger::init();
    info!("Phasor Arithmetic Example");

    // Source and impedances at 50 Hz
    let source = PolarValue::new(230.0, 0.0);
    let resistor = Complex64::new(10.0, 0.0);
    let inductor = Complex64::new(0.0, 15.7);
    let capacitor = Complex64::new(0.0, -31.8);

    let impedance = PolarValue::from_complex(resistor + inductor + capacitor);
    info!("Total impedance: {}", impedance);
    info!("  - rectangular: {}", impedance.to_rectangular());
    info!("  - radians: {:.4}", impedance.radians());

    let current = source / impedance;
    info!("Current: {}", current);

    // Voltage drop across each element
    for (name, z) in [("R", resistor), ("L", inductor), ("C", capacitor)] {
        info!("  - V_{}: {}", name, current * z);
    }

    // Complex power S = V · conj(I)
    let power = source * current.conjugate();
    let s = power.to_rectangular();
    info!("Apparent power: {:.2} VA", power.abs());
    info!("  - real: {:.2} W", s.re);
    info!("  - reactive: {:.2} var", s.im);

    // Balanced three-phase set
    let phases = [0.0, -120.0, 120.0].map(|p| PolarValue::new(230.0, p));
    let neutral = phases[0] + phases[1] + phases[2];
    info!("Three-phase neutral sum: {}", neutral);

    // Operations outside the operator tables fail explicitly
    match source.try_eq(230.0) {
        Ok(eq) => info!("Compared with a real: {}", eq),
        Err(e) => info!("Compared with a real: {}", e),
    }
    match source.try_pow(Operand::Real(0.5)) {
        Ok(v) => info!("Square root: {}", v),
        Err(e) => info!("Square root: {}", e),
    }
}
