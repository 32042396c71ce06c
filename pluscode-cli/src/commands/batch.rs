use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use pluscode::PlusCodeError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Value written for rows whose coordinates cannot be read.
const INVALID_MARKER: &str = "invalid";

pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    length: usize,
    lat_col: String,
    lon_col: String,
) -> Result<()> {
    // Detect file format
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let output_path = match extension.as_str() {
        "csv" => {
            let output_path = output.unwrap_or_else(|| default_output(&input, "csv"));
            process_csv(&input, &output_path, length, &lat_col, &lon_col)?;
            output_path
        }
        "geojson" | "json" => {
            let output_path = output.unwrap_or_else(|| default_output(&input, "geojson"));
            process_geojson(&input, &output_path, length)?;
            output_path
        }
        _ => bail!(
            "Unsupported file format: {}. Use .csv or .geojson",
            extension
        ),
    };

    println!("Output written to: {}", output_path.display());
    Ok(())
}

fn default_output(input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_pluscode.{}", stem, extension))
}

fn progress_bar(len: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

/// Encode one location. Invalid lengths abort the batch; anything else is
/// reported per row by the caller.
fn encode(lat: f64, lon: f64, length: usize) -> Result<String> {
    match pluscode::encode(lat, lon, length) {
        Ok(code) => Ok(code.into_string()),
        Err(e @ PlusCodeError::InvalidCodeLength { .. }) => Err(e.into()),
        Err(e) => Err(e).context("Failed to encode location"),
    }
}

fn process_csv(
    input: &Path,
    output_path: &Path,
    length: usize,
    lat_col: &str,
    lon_col: &str,
) -> Result<()> {
    let file = File::open(input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    // Find column indices
    let headers = reader.headers()?.clone();
    let lat_idx = headers
        .iter()
        .position(|h| h == lat_col)
        .with_context(|| format!("Column '{}' not found in CSV", lat_col))?;
    let lon_idx = headers
        .iter()
        .position(|h| h == lon_col)
        .with_context(|| format!("Column '{}' not found in CSV", lon_col))?;

    // Collect records for progress bar
    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let pb = progress_bar(records.len() as u64)?;

    let output_file = File::create(output_path).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(output_file));

    let mut new_headers: Vec<&str> = headers.iter().collect();
    new_headers.push("plus_code");
    writer.write_record(&new_headers)?;

    for (row, record) in records.iter().enumerate() {
        let lat = record.get(lat_idx).and_then(|v| v.trim().parse::<f64>().ok());
        let lon = record.get(lon_idx).and_then(|v| v.trim().parse::<f64>().ok());

        let code = match (lat, lon) {
            (Some(lat), Some(lon)) => encode(lat, lon, length)?,
            _ => {
                tracing::warn!(row = row + 1, "skipping row with unreadable coordinates");
                INVALID_MARKER.to_string()
            }
        };

        let mut new_record: Vec<&str> = record.iter().collect();
        new_record.push(&code);
        writer.write_record(&new_record)?;

        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;
    Ok(())
}

fn process_geojson(input: &Path, output_path: &Path, length: usize) -> Result<()> {
    let file = File::open(input).context("Failed to open input file")?;
    let reader = BufReader::new(file);

    let geojson: geojson::GeoJson =
        serde_json::from_reader(reader).context("Failed to parse GeoJSON")?;

    let result = match geojson {
        geojson::GeoJson::Feature(mut feature) => {
            add_code_to_feature(&mut feature, length)?;
            geojson::GeoJson::Feature(feature)
        }
        geojson::GeoJson::FeatureCollection(mut fc) => {
            let pb = progress_bar(fc.features.len() as u64)?;
            for feature in &mut fc.features {
                add_code_to_feature(feature, length)?;
                pb.inc(1);
            }
            pb.finish_with_message("done");
            geojson::GeoJson::FeatureCollection(fc)
        }
        geojson::GeoJson::Geometry(_) => {
            bail!("Bare GeoJSON geometries have no properties. Wrap them in a Feature")
        }
    };

    let output_file = File::create(output_path).context("Failed to create output file")?;
    let mut writer = BufWriter::new(output_file);
    serde_json::to_writer_pretty(&mut writer, &result)?;
    writer.flush()?;
    Ok(())
}

/// Add a `plus_code` property to Point features. Other geometries are left
/// untouched.
fn add_code_to_feature(feature: &mut geojson::Feature, length: usize) -> Result<()> {
    let position = match feature.geometry.as_ref().map(|g| &g.value) {
        Some(geojson::Value::Point(position)) => position,
        _ => {
            tracing::warn!(id = ?feature.id, "skipping feature without Point geometry");
            return Ok(());
        }
    };

    match pluscode::geojson::encode_position(position, length) {
        Ok(code) => feature.set_property("plus_code", code.into_string()),
        Err(e @ PlusCodeError::InvalidCodeLength { .. }) => return Err(e.into()),
        Err(e) => {
            tracing::warn!(id = ?feature.id, error = %e, "skipping feature with unreadable position");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_process_csv() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("points.csv");
        let output = tmp.path().join("out.csv");
        fs::write(
            &input,
            "name,lat,lon\nzurich,47.0000625,8.0000625\nbroken,abc,8.0\nwellington,-41.2730625,174.7859375\n",
        )
        .unwrap();

        process_csv(&input, &output, 10, "lat", "lon").unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "name,lat,lon,plus_code");
        assert_eq!(lines[1], "zurich,47.0000625,8.0000625,8FVC2222+22");
        assert_eq!(lines[2], "broken,abc,8.0,invalid");
        assert_eq!(lines[3], "wellington,-41.2730625,174.7859375,4VCPPQGP+Q9");
    }

    #[test]
    fn test_process_csv_custom_columns() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("points.csv");
        let output = tmp.path().join("out.csv");
        fs::write(&input, "latitude,longitude\n20.375,2.775\n").unwrap();

        process_csv(&input, &output, 6, "latitude", "longitude").unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("20.375,2.775,7FG49Q00+"));
    }

    #[test]
    fn test_process_csv_missing_column() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("points.csv");
        fs::write(&input, "x,y\n1,2\n").unwrap();

        let result = process_csv(&input, &tmp.path().join("out.csv"), 10, "lat", "lon");
        assert!(result.is_err());
    }

    #[test]
    fn test_process_csv_invalid_length() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("points.csv");
        fs::write(&input, "lat,lon\n47.0,8.0\n").unwrap();

        let result = process_csv(&input, &tmp.path().join("out.csv"), 7, "lat", "lon");
        assert!(result.is_err());
    }

    #[test]
    fn test_process_geojson() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("points.geojson");
        let output = tmp.path().join("out.geojson");
        fs::write(
            &input,
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": {"name": "zurich"},
                        "geometry": {"type": "Point", "coordinates": [8.0000625, 47.0000625]}
                    },
                    {
                        "type": "Feature",
                        "properties": {"name": "line"},
                        "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}
                    }
                ]
            }"#,
        )
        .unwrap();

        process_geojson(&input, &output, 10).unwrap();

        let written: geojson::FeatureCollection =
            fs::read_to_string(&output).unwrap().parse().unwrap();
        assert_eq!(
            written.features[0]
                .property("plus_code")
                .and_then(|v| v.as_str()),
            Some("8FVC2222+22")
        );
        assert!(written.features[1].property("plus_code").is_none());
    }

    #[test]
    fn test_default_output() {
        let path = default_output(Path::new("/data/points.csv"), "csv");
        assert_eq!(path, PathBuf::from("/data/points_pluscode.csv"));
    }
}
