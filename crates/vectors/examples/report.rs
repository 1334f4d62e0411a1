//! Print the report for a vector given on the command line.
//!
//! `report 3 4` uses components, `report 1 1 4 5` uses a tail and a head.
use anyhow::{bail, Result};
use structopt::StructOpt;

use vectors::Vector2D;

#[derive(StructOpt)]
struct Params {
    /// Decimal places for the magnitude and angles.
    #[structopt(long, default_value = "3")]
    precision: usize,

    /// Either `x y` or `x1 y1 x2 y2`.
    #[structopt(allow_hyphen_values = true)]
    numbers: Vec<f64>,
}

fn main() -> Result<()> {
    vectors_logging::log_to_stderr();

    let params = Params::from_args();
    let vector = match params.numbers[..] {
        [x, y] => Vector2D::new(x, y),
        [x1, y1, x2, y2] => Vector2D::from_points(x1, y1, x2, y2),
        _ => bail!("Expected 2 or 4 numbers but got {}", params.numbers.len()),
    };
    log::info!("Built {:?}", vector);

    print!("{}", vector.report().with_precision(params.precision));

    match vector.hat() {
        Ok(hat) => println!(
            "Unit vector: <{:.*}, {:.*}>",
            params.precision,
            hat.x(),
            params.precision,
            hat.y()
        ),
        Err(e) => log::warn!("{}", e),
    }

    Ok(())
}
