//! Piece generations and cut orchestration.
//!
//! A [`CuttingSession`] owns the timeline of one puzzle: generation 0 holds
//! the starting pieces, and every applied cut produces the next generation
//! by replacing each split piece with its children.
//!
//! # Cuts
//!
//! - [`CutLine`]: an infinite line; every piece it crosses is halved
//! - [`CutPath`]: a freeform polyline swept with a blade of `cut_width`;
//!   only material under the stroke is removed
//!
//! Cuts arrive in world coordinates and are mapped into each piece's local
//! frame before slicing. Pieces keep their placement across cuts.
//!
//! # Example
//!
//! ```rust
//! use jigcut_cutting::{CutInput, CutLine, CuttingSession};
//! use jigcut_core::Config;
//! use jigcut_d2::Polygon2D;
//!
//! let square = Polygon2D::square((0.0, 0.0), 2.0).unwrap();
//! let mut session = CuttingSession::new(square, "white", Config::default()).unwrap();
//!
//! let report = session.apply_cut(&CutInput::Line(CutLine::new((-3.0, 0.0), (3.0, 0.0))));
//! assert_eq!(report.children.len(), 2);
//! assert_eq!(session.pieces().len(), 2);
//!
//! session.undo();
//! assert_eq!(session.pieces().len(), 1);
//! ```

pub mod cut;
pub mod generation;
pub mod level;
pub mod piece;
pub mod result;
pub mod scatter;
pub mod session;

pub use cut::{CutInput, CutLine, CutPath};
pub use generation::Generation;
pub use level::LevelPiece;
pub use piece::{Piece, PieceId};
pub use result::CutReport;
pub use scatter::scatter_offsets;
pub use session::CuttingSession;
