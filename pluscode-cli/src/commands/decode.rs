use anyhow::{Context, Result};
use pluscode::PlusCode;
use serde::Serialize;

#[derive(Serialize)]
struct DecodeResponse {
    code: String,
    south: f64,
    west: f64,
    north: f64,
    east: f64,
    center_lat: f64,
    center_lon: f64,
    length: usize,
}

pub fn run(code: &str, json: bool, geojson: bool) -> Result<()> {
    let code = PlusCode::new(code).context("Failed to parse Plus Code")?;

    if geojson {
        let feature = pluscode::geojson::code_to_feature(&code)
            .context("Failed to convert Plus Code to GeoJSON")?;
        println!("{}", serde_json::to_string_pretty(&feature)?);
        return Ok(());
    }

    let area = pluscode::decode(&code).context("Failed to decode Plus Code")?;
    tracing::debug!(code = %code, length = area.length(), "decoded code");

    if json {
        let response = DecodeResponse {
            code: code.to_string(),
            south: area.south_latitude(),
            west: area.west_longitude(),
            north: area.north_latitude(),
            east: area.east_longitude(),
            center_lat: area.center_latitude(),
            center_lon: area.center_longitude(),
            length: area.length(),
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("Code:    {}", code);
        println!("Center:  {:.8}, {:.8}", area.center_latitude(), area.center_longitude());
        println!(
            "Bounds:  {:.8}, {:.8} to {:.8}, {:.8}",
            area.south_latitude(),
            area.west_longitude(),
            area.north_latitude(),
            area.east_longitude()
        );
        println!("Digits:  {}", area.length());
    }

    Ok(())
}
