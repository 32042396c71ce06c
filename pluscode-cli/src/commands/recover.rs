use anyhow::{Context, Result};
use pluscode::PlusCode;

pub fn run(code: &str, ref_lat: f64, ref_lon: f64) -> Result<()> {
    let code = PlusCode::new(code).context("Failed to parse Plus Code")?;
    let full = pluscode::recover(&code, ref_lat, ref_lon);
    tracing::debug!(code = %code, ref_lat, ref_lon, full = %full, "recovered code");

    println!("{}", full);
    Ok(())
}
