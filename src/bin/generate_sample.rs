//! Generate deterministic frequency-sweep workbooks in the layout the
//! viewer expects: an info sheet first, then a data sheet with a title
//! row, the header on row 2, units on row 3, and measurements below.
//!
//! Usage: `cargo run --bin generate_sample` writes `sample_a.xlsx` and
//! `sample_b.xlsx` into the current directory.

use rust_xlsxwriter::{Workbook, XlsxError};

/// Power-law description of one synthetic sample.
struct SweepModel {
    sample: &'static str,
    /// G' prefactor (Pa) and frequency exponent.
    g_prime_0: f64,
    n_prime: f64,
    /// G'' prefactor (Pa) and frequency exponent.
    g_double_0: f64,
    n_double: f64,
}

const POINTS: usize = 25;
const OMEGA_MIN: f64 = 0.1;
const OMEGA_MAX: f64 = 100.0;

fn main() -> Result<(), XlsxError> {
    let models = [
        (
            "sample_a.xlsx",
            SweepModel {
                sample: "Polyester Elastomer A",
                g_prime_0: 1.2e3,
                n_prime: 0.95,
                g_double_0: 2.4e3,
                n_double: 0.78,
            },
        ),
        (
            "sample_b.xlsx",
            SweepModel {
                sample: "Polyester Elastomer B",
                g_prime_0: 3.1e3,
                n_prime: 0.88,
                g_double_0: 4.0e3,
                n_double: 0.72,
            },
        ),
    ];

    for (path, model) in &models {
        write_sweep(path, model)?;
        println!("Wrote {path}");
    }
    Ok(())
}

fn write_sweep(path: &str, model: &SweepModel) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();

    let info = workbook.add_worksheet();
    info.set_name("Test Info")?;
    info.write_string(0, 0, "Instrument")?;
    info.write_string(0, 1, "RDS-II")?;
    info.write_string(1, 0, "Sample")?;
    info.write_string(1, 1, model.sample)?;
    info.write_string(2, 0, "Test")?;
    info.write_string(2, 1, "Frequency sweep, 1% strain, 230 C")?;

    let data = workbook.add_worksheet();
    data.set_name("Frequency Sweep")?;
    data.write_string(0, 0, "Frequency sweep results")?;

    let headers = [
        "Angular Frequency",
        "Storage modulus",
        "Loss modulus",
        "Complex viscosity",
    ];
    for (c, header) in headers.into_iter().enumerate() {
        data.write_string(1, c as u16, header)?;
    }
    let units = ["rad/s", "Pa", "Pa", "Pa.s"];
    for (c, unit) in units.into_iter().enumerate() {
        data.write_string(2, c as u16, unit)?;
    }

    for i in 0..POINTS {
        let t = i as f64 / (POINTS - 1) as f64;
        let omega = OMEGA_MIN * (OMEGA_MAX / OMEGA_MIN).powf(t);
        let g_prime = model.g_prime_0 * omega.powf(model.n_prime);
        let g_double = model.g_double_0 * omega.powf(model.n_double);
        let eta_star = (g_prime * g_prime + g_double * g_double).sqrt() / omega;

        let row = (i + 3) as u32;
        data.write_number(row, 0, omega)?;
        data.write_number(row, 1, g_prime)?;
        data.write_number(row, 2, g_double)?;
        data.write_number(row, 3, eta_star)?;
    }

    workbook.save(path)
}
