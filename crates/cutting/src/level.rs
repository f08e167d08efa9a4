//! Level data records.

use jigcut_core::{Config, Error, Point2, Result};
use jigcut_d2::Polygon2D;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One starting piece as produced by the level editor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelPiece {
    /// Outline, implicitly closed, either winding.
    pub vertices: Vec<Point2>,
    /// Identity/color tag carried by every piece cut from this one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: String,
}

impl LevelPiece {
    pub fn new(vertices: Vec<Point2>, color: impl Into<String>) -> Self {
        Self {
            vertices,
            color: color.into(),
        }
    }

    /// Validates the outline with the tolerances of `config`.
    pub fn to_polygon(&self, config: &Config) -> Result<Polygon2D> {
        Polygon2D::from_config(self.vertices.clone(), config)
    }
}

/// Validates every record, naming the first bad one by index.
pub(crate) fn validate_records(
    records: &[LevelPiece],
    config: &Config,
) -> Result<Vec<(Polygon2D, String)>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| match record.to_polygon(config) {
            Ok(polygon) => Ok((polygon, record.color.clone())),
            Err(err) => {
                log::warn!("level piece {} rejected: {}", i, err);
                let reason = match err {
                    Error::InvalidGeometry(msg) => msg,
                    other => other.to_string(),
                };
                Err(Error::InvalidGeometry(format!("level piece {}: {}", i, reason)))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_records() {
        let records = vec![
            LevelPiece::new(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)], "blue"),
            LevelPiece::new(vec![(2.0, 0.0), (3.0, 0.0), (3.0, 1.0), (2.0, 1.0)], "green"),
        ];
        let parts = validate_records(&records, &Config::default()).unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].1, "green");
    }

    #[test]
    fn test_bad_record_is_named() {
        let records = vec![
            LevelPiece::new(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)], "blue"),
            LevelPiece::new(vec![(0.0, 0.0), (1.0, 1.0)], "red"),
        ];
        match validate_records(&records, &Config::default()) {
            Err(Error::InvalidGeometry(msg)) => assert!(msg.starts_with("level piece 1:"), "{}", msg),
            other => panic!("expected InvalidGeometry, got {:?}", other),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let json = r#"[{"vertices": [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]], "color": "orange"}]"#;
        let records: Vec<LevelPiece> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].color, "orange");
        assert_eq!(records[0].vertices.len(), 3);
    }
}
