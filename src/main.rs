use std::env;
use std::io::{self, BufWriter, Write};
use std::process;

use slippy_tiles::{BoundingBox, TileError, TileRange, DEFAULT_ZOOM};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: slippy-tiles <min_lat> <max_lat> <min_lon> <max_lon> [zoom]";

struct Args {
    bbox: BoundingBox,
    zoom: u8,
}

fn parse_args(args: &[String]) -> Result<Args, TileError> {
    let mut it = args.iter();
    let mut coord = |name: &'static str| -> Result<f64, TileError> {
        Ok(it.next().ok_or(TileError::MissingArgument(name))?.parse::<f64>()?)
    };

    let min_latitude = coord("min_lat")?;
    let max_latitude = coord("max_lat")?;
    let min_longitude = coord("min_lon")?;
    let max_longitude = coord("max_lon")?;

    let zoom = match args.get(4) {
        Some(z) => z.parse::<u8>()?,
        None => DEFAULT_ZOOM,
    };
    if args.len() > 5 {
        return Err(TileError::InvalidArgument(format!(
            "unexpected argument '{}'",
            args[5]
        )));
    }

    let bbox = BoundingBox::new(min_latitude, max_latitude, min_longitude, max_longitude)?;
    Ok(Args { bbox, zoom })
}

fn run(args: &[String]) -> Result<(), TileError> {
    let Args { bbox, zoom } = parse_args(args)?;
    let range = TileRange::try_from_bounds(
        bbox.min_latitude,
        bbox.max_latitude,
        bbox.min_longitude,
        bbox.max_longitude,
        zoom,
    )?;
    info!("Writing {} tiles at zoom {}", range.len(), zoom);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for tile in &range {
        // A closed pipe just ends the listing.
        if writeln!(out, "{}", tile).is_err() {
            return Ok(());
        }
    }
    let _ = out.flush();
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("{}\n{}", e, USAGE);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn zoom_defaults_to_sixteen() {
        let args = parse_args(&strings(&["22.0", "25.5", "119.0", "122.5"])).unwrap();
        assert_eq!(args.zoom, 16);
        assert_eq!(args.bbox.max_longitude, 122.5);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse_args(&strings(&["1.0", "2.0"])).err(),
            Some(TileError::MissingArgument("min_lon"))
        );
        assert!(matches!(
            parse_args(&strings(&["1.0", "north", "3.0", "4.0"])),
            Err(TileError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_args(&strings(&["5.0", "2.0", "3.0", "4.0", "8"])),
            Err(TileError::InvalidBoundingBox { .. })
        ));
        assert!(matches!(
            parse_args(&strings(&["1.0", "2.0", "3.0", "4.0", "8", "extra"])),
            Err(TileError::InvalidArgument(_))
        ));
    }
}
