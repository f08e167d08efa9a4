//! One-shot completion state for a puzzle.

use jigcut_core::{Config, Error, Result};

use crate::evaluator::CompletionEvaluator;
use crate::frame::TargetFrame;
use crate::placed::PlacedPiece;
use crate::report::CompletionReport;

/// Outcome of a piece-release event.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSignal {
    /// The puzzle is (or already was) complete.
    pub complete: bool,
    /// True only for the event that engaged the lock.
    pub newly_completed: bool,
    /// Diagnostics; `None` once locked, since nothing is re-evaluated.
    pub report: Option<CompletionReport>,
}

/// Owns the evaluator, the target frame and the completion lock.
///
/// Once an evaluation succeeds the session locks and later releases report
/// completion without evaluating again, until [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct CompletionSession {
    evaluator: CompletionEvaluator,
    frame: Option<TargetFrame>,
    locked: bool,
}

impl CompletionSession {
    /// Creates a session with no frame yet.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            evaluator: CompletionEvaluator::new(config)?,
            frame: None,
            locked: false,
        })
    }

    /// Sets the frame for the session being built.
    pub fn with_frame(mut self, frame: TargetFrame) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Replaces the frame; starting a new puzzle also clears the lock.
    pub fn set_frame(&mut self, frame: TargetFrame) {
        self.frame = Some(frame);
        self.locked = false;
    }

    pub fn frame(&self) -> Option<&TargetFrame> {
        self.frame.as_ref()
    }

    pub fn evaluator(&self) -> &CompletionEvaluator {
        &self.evaluator
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Clears the lock so the same frame can be solved again.
    pub fn reset(&mut self) {
        self.locked = false;
    }

    /// Handles a piece-release event with the current placement of all pieces.
    ///
    /// Fails with [`Error::InvalidFrame`] if no frame was set; completion is
    /// never signalled against a missing frame.
    pub fn on_piece_released(&mut self, pieces: &[PlacedPiece]) -> Result<CompletionSignal> {
        let frame = self
            .frame
            .as_ref()
            .ok_or_else(|| Error::InvalidFrame("no target frame set".to_string()))?;

        if self.locked {
            return Ok(CompletionSignal {
                complete: true,
                newly_completed: false,
                report: None,
            });
        }

        let report = self.evaluator.evaluate(pieces, frame);
        if report.complete {
            self.locked = true;
            log::info!(
                "puzzle complete: coverage {:.4}, dominant {:.4}, {} piece(s)",
                report.coverage_ratio,
                report.dominant_ratio,
                report.piece_count
            );
        }

        Ok(CompletionSignal {
            complete: report.complete,
            newly_completed: report.complete,
            report: Some(report),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jigcut_d2::Polygon2D;

    fn tiles(count: usize) -> Vec<PlacedPiece> {
        [(-1.0, 0.0), (0.0, 0.0), (-1.0, -1.0), (0.0, -1.0)]
            .iter()
            .take(count)
            .map(|&(x, y)| {
                PlacedPiece::new(Polygon2D::rectangle(x, y, x + 1.0, y + 1.0).unwrap(), true)
            })
            .collect()
    }

    fn session() -> CompletionSession {
        CompletionSession::new(Config::default())
            .unwrap()
            .with_frame(TargetFrame::square((0.0, 0.0), 1.0).unwrap())
    }

    #[test]
    fn test_missing_frame() {
        let mut s = CompletionSession::new(Config::default()).unwrap();
        assert!(matches!(
            s.on_piece_released(&tiles(4)),
            Err(Error::InvalidFrame(_))
        ));
    }

    #[test]
    fn test_completion_fires_once() {
        let mut s = session();

        let first = s.on_piece_released(&tiles(3)).unwrap();
        assert!(!first.complete);
        assert!(!s.is_locked());

        let second = s.on_piece_released(&tiles(4)).unwrap();
        assert!(second.complete);
        assert!(second.newly_completed);
        assert!(s.is_locked());

        let third = s.on_piece_released(&tiles(4)).unwrap();
        assert!(third.complete);
        assert!(!third.newly_completed);
        assert!(third.report.is_none());
    }

    #[test]
    fn test_reset_allows_new_completion() {
        let mut s = session();
        s.on_piece_released(&tiles(4)).unwrap();
        s.reset();
        assert!(!s.is_locked());

        let again = s.on_piece_released(&tiles(4)).unwrap();
        assert!(again.newly_completed);
    }

    #[test]
    fn test_new_frame_clears_lock() {
        let mut s = session();
        s.on_piece_released(&tiles(4)).unwrap();
        s.set_frame(TargetFrame::square((10.0, 10.0), 1.0).unwrap());
        assert!(!s.is_locked());

        let signal = s.on_piece_released(&tiles(4)).unwrap();
        assert!(!signal.complete);
    }
}
