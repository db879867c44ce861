use std::io::Write;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

mod cli;
mod convert;
mod fetch;
mod track;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Usage errors exit with status 1; clap's default would be 2.
    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    let lv03_points = fetch::fetch_route(args.category, args.route_number)?;
    let wgs84_points = lv03_points
        .into_iter()
        .map(|[easting, northing]| convert::lv03_to_wgs84(easting, northing))
        .collect();
    let gpx = track::gpx_from_points(wgs84_points);

    // The output file is only created once the whole document exists, so a
    // failed fetch leaves no empty file behind.
    let file = std::fs::File::create(&args.output_path)
        .wrap_err_with(|| format!("Failed to create {}", args.output_path))?;
    let mut writer = std::io::BufWriter::new(file);
    gpx::write(&gpx, &mut writer)?;
    writer.flush()?;

    Ok(())
}
