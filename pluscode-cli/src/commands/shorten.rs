use anyhow::{Context, Result};
use pluscode::PlusCode;

pub fn run(code: &str, ref_lat: f64, ref_lon: f64) -> Result<()> {
    let code = PlusCode::new(code).context("Failed to parse Plus Code")?;
    let short = pluscode::shorten(&code, ref_lat, ref_lon)
        .with_context(|| format!("Failed to shorten {}", code))?;
    tracing::debug!(code = %code, ref_lat, ref_lon, short = %short, "shortened code");

    println!("{}", short);
    Ok(())
}
