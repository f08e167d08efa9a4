//! Random placement of pieces inside a target rectangle.

use std::sync::Arc;

use jigcut_core::{Transform2D, AABB2D};
use rand::Rng;

use crate::piece::Piece;

/// Range of valid translations that keep a box of extent `geom` inside
/// `area` along one axis. `None` if it does not fit.
fn valid_range(geom_min: f64, geom_max: f64, area_min: f64, area_max: f64) -> Option<(f64, f64)> {
    // t + geom_min >= area_min and t + geom_max <= area_max
    let lo = area_min - geom_min;
    let hi = area_max - geom_max;
    if hi < lo {
        None
    } else {
        Some((lo, hi))
    }
}

fn sample<R: Rng>(range: Option<(f64, f64)>, centered: f64, rng: &mut R) -> f64 {
    match range {
        Some((lo, hi)) if hi > lo => rng.gen_range(lo..=hi),
        Some((lo, _)) => lo,
        None => centered,
    }
}

/// Picks one placement per piece so that its world bounding box lies inside
/// `area`. Each piece keeps its current rotation.
///
/// A piece larger than `area` along an axis is centered on that axis.
pub fn scatter_offsets<R: Rng>(
    pieces: &[Arc<Piece>],
    area: &AABB2D,
    rng: &mut R,
) -> Vec<Transform2D> {
    let (area_cx, area_cy) = area.center();

    pieces
        .iter()
        .map(|piece| {
            let angle = piece.transform().angle;
            let rotated = piece
                .polygon()
                .transformed(&Transform2D::new(0.0, 0.0, angle))
                .aabb();
            let (gcx, gcy) = rotated.center();

            let tx = sample(
                valid_range(rotated.min_x, rotated.max_x, area.min_x, area.max_x),
                area_cx - gcx,
                rng,
            );
            let ty = sample(
                valid_range(rotated.min_y, rotated.max_y, area.min_y, area.max_y),
                area_cy - gcy,
                rng,
            );
            Transform2D::new(tx, ty, angle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceId;
    use jigcut_d2::Polygon2D;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pieces() -> Vec<Arc<Piece>> {
        (0..6)
            .map(|i| {
                let poly = Polygon2D::rectangle(0.0, 0.0, 1.0, 0.5).unwrap();
                Arc::new(Piece::new(PieceId(i), poly, "tile", Transform2D::identity(), 0))
            })
            .collect()
    }

    #[test]
    fn test_scattered_pieces_stay_inside_area() {
        let area = AABB2D::new(10.0, 10.0, 20.0, 15.0);
        let mut rng = StdRng::seed_from_u64(42);
        let pieces = pieces();
        let offsets = scatter_offsets(&pieces, &area, &mut rng);

        assert_eq!(offsets.len(), pieces.len());
        for (piece, offset) in pieces.iter().zip(&offsets) {
            let bb = piece.placed(*offset).world_aabb();
            assert!(bb.min_x >= area.min_x - 1e-9 && bb.max_x <= area.max_x + 1e-9);
            assert!(bb.min_y >= area.min_y - 1e-9 && bb.max_y <= area.max_y + 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let area = AABB2D::new(0.0, 0.0, 8.0, 8.0);
        let a = scatter_offsets(&pieces(), &area, &mut StdRng::seed_from_u64(7));
        let b = scatter_offsets(&pieces(), &area, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_oversized_piece_is_centered() {
        let area = AABB2D::new(0.0, 0.0, 0.5, 0.5);
        let offsets = scatter_offsets(&pieces()[..1], &area, &mut StdRng::seed_from_u64(1));
        // 1.0 wide piece in a 0.5 wide area: centered on x
        assert!((offsets[0].tx - (-0.25)).abs() < 1e-12);
        // Exactly fits on y
        assert!((offsets[0].ty - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_valid_range() {
        assert_eq!(valid_range(0.0, 2.0, 0.0, 10.0), Some((0.0, 8.0)));
        assert_eq!(valid_range(0.0, 20.0, 0.0, 10.0), None);
    }
}
