//! Generates the interpolation coefficient tables.
//!
//! The renderers only read these tables; computing them here keeps libm and
//! the float math out of the no_std crate.

use std::{env, f64::consts::PI, fmt::Write, fs, path::PathBuf};

/// Must match `phase::INTERP_ROWS`, the generated array types enforce it.
const INTERP_ROWS: usize = 256;
const SINC_TAPS: usize = 7;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut source = String::new();
    write_table(&mut source, "LINEAR", &linear_rows());
    write_table(&mut source, "CUBIC", &cubic_rows());
    write_table(&mut source, "SINC7", &sinc_rows());

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("coefficients.rs"), source).unwrap();
}

fn linear_rows() -> Vec<Vec<f64>> {
    (0..INTERP_ROWS)
        .map(|row| {
            let x = row as f64 / INTERP_ROWS as f64;
            vec![1.0 - x, x]
        })
        .collect()
}

fn cubic_rows() -> Vec<Vec<f64>> {
    (0..INTERP_ROWS)
        .map(|row| {
            let x = row as f64 / INTERP_ROWS as f64;
            vec![
                x * (-0.5 + x * (1.0 - 0.5 * x)),
                1.0 + x * x * (1.5 * x - 2.5),
                x * (0.5 + x * (2.0 - 1.5 * x)),
                0.5 * x * x * (x - 1.0),
            ]
        })
        .collect()
}

/// Hann windowed sinc, centered between the 3rd and 4th tap. Rows run from the
/// largest sub-sample offset down, so row `r` matches a fraction of `r / 256`
/// after the renderer's half sample shift.
fn sinc_rows() -> Vec<Vec<f64>> {
    let mut rows = vec![vec![0.0; SINC_TAPS]; INTERP_ROWS];

    for tap in 0..SINC_TAPS {
        for step in 0..INTERP_ROWS {
            let offset =
                tap as f64 - SINC_TAPS as f64 / 2.0 + step as f64 / INTERP_ROWS as f64;

            let value = if offset.abs() > 0.000001 {
                let arg = PI * offset;
                let window = 0.5 * (1.0 + (2.0 * arg / SINC_TAPS as f64).cos());
                arg.sin() / arg * window
            } else {
                1.0
            };

            rows[INTERP_ROWS - step - 1][tap] = value;
        }
    }

    // Unity gain at DC, a flat waveform has to come out flat.
    for row in rows.iter_mut() {
        let sum: f64 = row.iter().sum();
        row.iter_mut().for_each(|value| *value /= sum);
    }

    rows
}

fn write_table(source: &mut String, name: &str, rows: &[Vec<f64>]) {
    let taps = rows[0].len();

    writeln!(
        source,
        "pub static {name}: [[f32; {taps}]; crate::phase::INTERP_ROWS] = ["
    )
    .unwrap();

    for row in rows {
        let values = row
            .iter()
            .map(|&value| format!("{:?}", value as f32))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(source, "    [{values}],").unwrap();
    }

    writeln!(source, "];").unwrap();
}
