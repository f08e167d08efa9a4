//! Integration tests for jigcut-assembly.

use approx::assert_relative_eq;
use jigcut_assembly::{
    CompletionEvaluator, CompletionSession, CompletionStatus, PlacedPiece, TargetFrame,
};
use jigcut_core::{Config, AABB2D};
use jigcut_cutting::{CutInput, CutLine, CutPath, CuttingSession};
use jigcut_d2::Polygon2D;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn frame() -> TargetFrame {
    TargetFrame::from_vertices(vec![(-1.0, 1.0), (1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)]).unwrap()
}

fn unit_tiles() -> Vec<PlacedPiece> {
    [(-1.0, 0.0), (0.0, 0.0), (-1.0, -1.0), (0.0, -1.0)]
        .iter()
        .map(|&(x, y)| PlacedPiece::new(Polygon2D::rectangle(x, y, x + 1.0, y + 1.0).unwrap(), true))
        .collect()
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_four_tiles_fill_frame() {
        let evaluator = CompletionEvaluator::new(Config::default()).unwrap();
        let report = evaluator.evaluate(&unit_tiles(), &frame());

        assert_relative_eq!(report.coverage_ratio, 1.0, epsilon = 1e-6);
        assert!(report.complete);
    }

    #[test]
    fn test_missing_tile() {
        let evaluator = CompletionEvaluator::new(Config::default()).unwrap();
        let pieces = &unit_tiles()[..3];
        let report = evaluator.evaluate(pieces, &frame());

        // Healing adds a hair along the inner edges
        assert_relative_eq!(report.coverage_ratio, 0.75, epsilon = 2e-3);
        assert!(!report.complete);
        assert_eq!(report.status, CompletionStatus::InsufficientCoverage);
    }

    #[test]
    fn test_session_signals_once() {
        let mut session = CompletionSession::new(Config::default())
            .unwrap()
            .with_frame(frame());

        let first = session.on_piece_released(&unit_tiles()).unwrap();
        assert!(first.newly_completed);
        let second = session.on_piece_released(&unit_tiles()).unwrap();
        assert!(second.complete && !second.newly_completed);
    }
}

mod property_tests {
    use super::*;

    #[test]
    fn test_repeated_evaluation_is_identical() {
        let evaluator = CompletionEvaluator::new(Config::default()).unwrap();
        let mut pieces = unit_tiles();
        pieces[1] = PlacedPiece::new(Polygon2D::rectangle(0.05, 0.1, 1.1, 0.9).unwrap(), true);

        let a = evaluator.evaluate(&pieces, &frame());
        let b = evaluator.evaluate(&pieces, &frame());
        assert_eq!(a.coverage_ratio, b.coverage_ratio);
        assert_eq!(a, b);
    }

    /// Half-unit frame split at x = 0.3, so nothing sits on the coarse lattices.
    fn off_lattice_scene(with_right: bool) -> (TargetFrame, Vec<PlacedPiece>) {
        let frame = TargetFrame::square((0.0, 0.0), 0.5).unwrap();
        let mut pieces = vec![PlacedPiece::new(
            Polygon2D::rectangle(-0.5, -0.5, 0.3, 0.5).unwrap(),
            true,
        )];
        if with_right {
            pieces.push(PlacedPiece::new(
                Polygon2D::rectangle(0.3, -0.5, 0.5, 0.5).unwrap(),
                true,
            ));
        }
        (frame, pieces)
    }

    #[test]
    fn test_scale_invariance() {
        let scenes = [
            (frame(), unit_tiles()),
            (frame(), unit_tiles()[..3].to_vec()),
            off_lattice_scene(true),
            off_lattice_scene(false),
        ];
        for (frame, pieces) in &scenes {
            let reference = CompletionEvaluator::new(Config::default().with_scale_factor(100_000))
                .unwrap()
                .evaluate(pieces, frame)
                .coverage_ratio;

            for scale in [1u32, 1000] {
                let coverage = CompletionEvaluator::new(Config::default().with_scale_factor(scale))
                    .unwrap()
                    .evaluate(pieces, frame)
                    .coverage_ratio;
                assert!(coverage <= 1.0 + 1e-9, "scale {}: coverage {}", scale, coverage);
                let tolerance = 1.0 / scale as f64 + 1e-6;
                assert!(
                    (coverage - reference).abs() <= tolerance,
                    "scale {}: {} vs {}",
                    scale,
                    coverage,
                    reference
                );
            }
        }
    }

    #[test]
    fn test_off_lattice_split_measures_its_share() {
        let (frame, pieces) = off_lattice_scene(false);
        let report = CompletionEvaluator::new(Config::default())
            .unwrap()
            .evaluate(&pieces, &frame);

        // 0.8 of the frame plus the healed rim along x = 0.3
        assert_relative_eq!(report.coverage_ratio, 0.8015, epsilon = 1e-3);
        assert_eq!(report.status, CompletionStatus::InsufficientCoverage);
    }
}

mod pipeline_tests {
    use super::*;

    fn cut_frame() -> CuttingSession {
        let square = frame().polygon().clone();
        CuttingSession::new(square, "white", Config::default()).unwrap()
    }

    #[test]
    fn test_line_cut_pieces_reassemble() {
        let mut session = cut_frame();
        session.apply_cut(&CutInput::Line(CutLine::new((-2.0, 0.2), (2.0, -0.3))));
        session.apply_cut(&CutInput::Line(CutLine::new((0.1, -2.0), (-0.2, 2.0))));
        session.apply_cut(&CutInput::Line(CutLine::new((-2.0, -2.0), (2.0, 1.7))));

        let placed: Vec<PlacedPiece> = session
            .pieces()
            .iter()
            .map(|p| PlacedPiece::from_piece(p, true))
            .collect();
        let report = CompletionEvaluator::new(Config::default())
            .unwrap()
            .evaluate(&placed, &frame());

        assert_relative_eq!(report.coverage_ratio, 1.0, epsilon = 1e-4);
        assert!(report.complete);
    }

    #[test]
    fn test_stroke_cut_pieces_reassemble() {
        let mut session = cut_frame();
        let paths = vec![
            CutPath::new(vec![(-2.0, 0.0), (-0.3, 0.4), (2.0, 0.1)]).unwrap(),
            CutPath::new(vec![(0.0, -2.0), (0.2, 2.0)]).unwrap(),
        ];
        session.apply_cut_sequence(&paths);
        assert_eq!(session.pieces().len(), 4);

        let placed: Vec<PlacedPiece> = session
            .pieces()
            .iter()
            .map(|p| PlacedPiece::from_piece(p, true))
            .collect();
        let report = CompletionEvaluator::new(Config::default())
            .unwrap()
            .evaluate(&placed, &frame());

        // The blade's kerf is not fully healed, but coverage stays above threshold
        assert!(report.coverage_ratio > 0.96, "coverage {}", report.coverage_ratio);
        assert!(report.coverage_ratio < 1.0);
        assert!(report.complete);
    }

    #[test]
    fn test_scattered_pieces_are_not_complete() {
        let mut session = cut_frame();
        session.apply_cut(&CutInput::Line(CutLine::new((-2.0, 0.0), (2.0, 0.0))));
        let mut rng = StdRng::seed_from_u64(9);
        session.scattered(&mut rng, &AABB2D::new(5.0, 5.0, 15.0, 15.0));

        let placed: Vec<PlacedPiece> = session
            .pieces()
            .iter()
            .map(|p| PlacedPiece::from_piece(p, true))
            .collect();
        let report = CompletionEvaluator::new(Config::default())
            .unwrap()
            .evaluate(&placed, &frame());

        assert_eq!(report.status, CompletionStatus::CentroidGate);
        assert!(!report.complete);
    }
}
