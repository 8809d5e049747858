use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::model::{Point, PointSet};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a point set from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with `x` and `y` columns
/// * `.json` – `[{ "x": 1.0, "y": 2.0 }, ...]`
pub fn load_points(path: &Path) -> Result<PointSet> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct PointRecord {
    x: f64,
    y: f64,
}

fn load_json(path: &Path) -> Result<PointSet> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<PointRecord> = serde_json::from_str(&text).context("parsing JSON")?;

    let points = records
        .into_iter()
        .map(|r| Point { x: r.x, y: r.y })
        .collect();
    Ok(PointSet { points })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<PointSet> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let x_idx = headers
        .iter()
        .position(|h| h == "x")
        .context("CSV missing 'x' column")?;
    let y_idx = headers
        .iter()
        .position(|h| h == "y")
        .context("CSV missing 'y' column")?;

    let mut points = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let x: f64 = record
            .get(x_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("CSV row {row_no}: 'x' is not a number"))?;
        let y: f64 = record
            .get(y_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("CSV row {row_no}: 'y' is not a number"))?;

        points.push(Point { x, y });
    }

    Ok(PointSet { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_csv_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "x,y,label").unwrap();
        writeln!(file, "1.0,2.0,a").unwrap();
        writeln!(file, "2.5,-3.0,b").unwrap();

        let set = load_points(&path).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.points[1], Point { x: 2.5, y: -3.0 });
    }

    #[test]
    fn loads_json_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.json");
        std::fs::write(&path, r#"[{"x": 1.0, "y": 2.0}, {"x": 2.0, "y": 3.0}]"#).unwrap();

        let set = load_points(&path).unwrap();
        assert_eq!(set.points[0], Point { x: 1.0, y: 2.0 });
    }

    #[test]
    fn rejects_unknown_extension() {
        assert!(load_points(Path::new("points.parquet")).is_err());
    }

    #[test]
    fn rejects_csv_without_coordinates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();
        assert!(load_points(&path).is_err());
    }
}
