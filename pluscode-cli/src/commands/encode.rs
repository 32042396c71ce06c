use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct EncodeResponse {
    lat: f64,
    lon: f64,
    length: usize,
    code: String,
}

pub fn run(lat: f64, lon: f64, length: usize, json: bool) -> Result<()> {
    let code = pluscode::encode(lat, lon, length).context("Failed to encode location")?;
    tracing::debug!(lat, lon, length, code = %code, "encoded location");

    if json {
        let response = EncodeResponse {
            lat,
            lon,
            length: code.digit_count(),
            code: code.into_string(),
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{}", code);
    }

    Ok(())
}
