//! Basic example demonstrating pluscode library usage.
//!
//! Run with: cargo run --example basic -- [latitude] [longitude]

use pluscode::{decode, encode, recover, shorten, PlusCodeError};
use std::env;

fn main() -> Result<(), PlusCodeError> {
    let mut args = env::args().skip(1);
    let (lat, lon) = match (args.next(), args.next()) {
        (Some(lat), Some(lon)) => match (lat.parse::<f64>(), lon.parse::<f64>()) {
            (Ok(lat), Ok(lon)) => (lat, lon),
            _ => {
                eprintln!("Usage: cargo run --example basic -- <latitude> <longitude>");
                std::process::exit(1);
            }
        },
        _ => (35.3606, 138.7274),
    };

    println!("Location: {}, {}", lat, lon);
    println!("{:-<50}", "");

    // Codes at increasing precision
    for length in [2, 4, 6, 8, 10, 11, 12, 13, 14, 15] {
        let code = encode(lat, lon, length)?;
        let area = decode(&code)?;
        println!(
            "{:>2} digits: {:<17} {:.7} x {:.7} degrees",
            length,
            code,
            area.latitude_height(),
            area.longitude_width()
        );
    }

    // Shorten relative to a point a few hundred meters away, then recover it
    let code = encode(lat, lon, 10)?;
    let (ref_lat, ref_lon) = (lat + 0.003, lon - 0.002);
    match shorten(&code, ref_lat, ref_lon) {
        Ok(short) => {
            let recovered = recover(&short, ref_lat, ref_lon);
            println!("\nShortened near ({ref_lat:.4}, {ref_lon:.4}): {short}");
            println!("Recovered: {recovered}");
        }
        Err(e) => println!("\nCould not shorten {code}: {e}"),
    }

    Ok(())
}
