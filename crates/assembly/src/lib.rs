//! # jigcut Assembly
//!
//! Decides when the pieces dragged back into the target frame count as a
//! solved puzzle.
//!
//! The check runs on discrete piece-release events. [`CompletionEvaluator`]
//! is a pure function of the scene; [`CompletionSession`] adds the frame and
//! the one-shot lock so victory is signalled exactly once.
//!
//! ## Quick Start
//!
//! ```rust
//! use jigcut_assembly::{CompletionSession, PlacedPiece, TargetFrame};
//! use jigcut_core::Config;
//! use jigcut_d2::Polygon2D;
//!
//! let frame = TargetFrame::square((0.0, 0.0), 1.0).unwrap();
//! let mut session = CompletionSession::new(Config::default()).unwrap().with_frame(frame);
//!
//! let pieces: Vec<PlacedPiece> = [(-1.0, 0.0), (0.0, 0.0), (-1.0, -1.0), (0.0, -1.0)]
//!     .iter()
//!     .map(|&(x, y)| PlacedPiece::new(Polygon2D::rectangle(x, y, x + 1.0, y + 1.0).unwrap(), true))
//!     .collect();
//!
//! let signal = session.on_piece_released(&pieces).unwrap();
//! assert!(signal.complete && signal.newly_completed);
//! ```

pub mod evaluator;
pub mod frame;
pub mod placed;
pub mod report;
pub mod session;

pub use evaluator::CompletionEvaluator;
pub use frame::TargetFrame;
pub use placed::PlacedPiece;
pub use report::{CompletionReport, CompletionStatus};
pub use session::{CompletionSession, CompletionSignal};
