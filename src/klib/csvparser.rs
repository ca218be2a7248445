use crate::klib::{ClusterError, Point};
use std::fs;
use std::path::Path;

/// Reads the feature table at `path` into points, in file order.
pub fn read_points(path: &Path) -> Result<Vec<Point>, ClusterError> {
    let raw = fs::read_to_string(path).map_err(|source| ClusterError::InputIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_points(&raw)
}

/// Parses `id,f0,f1,...` rows. The first line is a header and only needs to
/// be present. Empty lines and lines with fewer than two fields are skipped;
/// the first surviving row fixes the feature count and later rows must match
/// it.
fn parse_points(raw: &str) -> Result<Vec<Point>, ClusterError> {
    let mut lines = raw.lines();
    if lines.next().is_none() {
        return Err(ClusterError::InputFormat("missing header row".into()));
    }

    let mut points = Vec::new();
    let mut width: Option<usize> = None;

    for (offset, line) in lines.enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            continue;
        }

        // the header sits on line 1
        let lineno = offset + 2;
        let game_id = fields[0].trim().parse::<i64>().map_err(|err| {
            ClusterError::InputFormat(format!(
                "line {}: bad identifier {:?}: {}",
                lineno, fields[0], err
            ))
        })?;

        let mut features = Vec::with_capacity(fields.len() - 1);
        for field in &fields[1..] {
            let value = field.trim().parse::<f64>().map_err(|err| {
                ClusterError::InputFormat(format!(
                    "line {}: bad feature {:?}: {}",
                    lineno, field, err
                ))
            })?;
            features.push(value);
        }

        match width {
            None => width = Some(features.len()),
            Some(expected) if expected != features.len() => {
                return Err(ClusterError::DimensionMismatch {
                    line: lineno,
                    expected,
                    found: features.len(),
                })
            }
            Some(_) => {}
        }

        points.push(Point::new(game_id, features));
    }

    Ok(points)
}
