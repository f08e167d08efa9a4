//! Cut orchestration over piece generations.
//!
//! # Algorithm
//!
//! 1. Build an R*-tree of the current pieces' world bounding boxes
//! 2. Select candidates: boxes straddling the cut line, or boxes meeting the
//!    blade's box for a freeform path
//! 3. Map the cut into each candidate's local frame and slice it
//! 4. Replace every split piece by its children in place; carry the rest
//!    over by reference
//! 5. Push the result as a new generation, dropping the oldest snapshot
//!    beyond `history_depth`

use std::collections::VecDeque;
use std::sync::Arc;

use jigcut_core::{Config, Error, Result, Transform2D, AABB2D};
use jigcut_d2::{Polygon2D, PolygonSlicer, SliceOutcome, SpatialEntry2D, SpatialIndex2D};
use rand::Rng;

use crate::cut::{CutInput, CutLine, CutPath};
use crate::generation::Generation;
use crate::level::{validate_records, LevelPiece};
use crate::piece::{Piece, PieceId};
use crate::result::CutReport;
use crate::scatter::scatter_offsets;

/// Owns the cutting timeline of one puzzle.
///
/// All mutation goes through `&mut self`; snapshots handed out by
/// [`current`](Self::current) and [`generation`](Self::generation) are
/// immutable.
#[derive(Debug)]
pub struct CuttingSession {
    config: Config,
    slicer: PolygonSlicer,
    history: VecDeque<Generation>,
    next_id: u64,
}

impl CuttingSession {
    /// Starts a session from a single piece at the origin.
    pub fn new(polygon: Polygon2D, color: impl Into<String>, config: Config) -> Result<Self> {
        Self::with_pieces(vec![(polygon, color.into())], config)
    }

    /// Starts a session from level records.
    ///
    /// Fails with [`Error::InvalidGeometry`] naming the first invalid record.
    pub fn from_level(records: &[LevelPiece], config: Config) -> Result<Self> {
        config.validate()?;
        let parts = validate_records(records, &config)?;
        Self::with_pieces(parts, config)
    }

    fn with_pieces(parts: Vec<(Polygon2D, String)>, config: Config) -> Result<Self> {
        config.validate()?;
        if parts.is_empty() {
            return Err(Error::InvalidGeometry(
                "a session needs at least one piece".to_string(),
            ));
        }

        let slicer = PolygonSlicer::new(&config);
        let mut session = Self {
            config,
            slicer,
            history: VecDeque::new(),
            next_id: 0,
        };

        let pieces = parts
            .into_iter()
            .map(|(polygon, color)| {
                let id = session.allocate_id();
                Arc::new(Piece::new(id, polygon, color, Transform2D::identity(), 0))
            })
            .collect();
        session.history.push_back(Generation::new(0, 0, pieces));
        Ok(session)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The active generation.
    pub fn current(&self) -> &Generation {
        // history is never empty: construction pushes generation 0 and undo keeps one
        &self.history[self.history.len() - 1]
    }

    /// Active pieces.
    pub fn pieces(&self) -> &[Arc<Piece>] {
        self.current().pieces()
    }

    /// A retained snapshot by generation index.
    pub fn generation(&self, index: usize) -> Option<&Generation> {
        self.history.iter().find(|g| g.index() == index)
    }

    /// Number of snapshots currently retained.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Cuts applied to reach the active generation.
    pub fn cuts_applied(&self) -> usize {
        self.current().cuts_applied()
    }

    /// Applies one cut to every piece it can reach and returns what changed.
    ///
    /// A cut that splits nothing still produces a new generation, so every
    /// call advances the timeline by one.
    pub fn apply_cut(&mut self, cut: &CutInput) -> CutReport {
        match cut {
            CutInput::Line(line) => self.apply(Blade::Line(line)),
            CutInput::Path(path) => self.apply(Blade::Path(path)),
        }
    }

    /// Applies freeform paths one after another, each to all pieces present
    /// after the previous one.
    pub fn apply_cut_sequence(&mut self, paths: &[CutPath]) -> Vec<CutReport> {
        paths
            .iter()
            .map(|path| self.apply(Blade::Path(path)))
            .collect()
    }

    /// Restores the previous snapshot. Returns false at the oldest retained one.
    pub fn undo(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop_back();
        log::debug!("undo: back to generation {}", self.current().index());
        true
    }

    /// Re-places every piece at a random position inside `area`.
    ///
    /// Geometry and identities are kept; the result is a new generation.
    pub fn scattered<R: Rng>(&mut self, rng: &mut R, area: &AABB2D) -> &Generation {
        let current = self.current();
        let offsets = scatter_offsets(current.pieces(), area, rng);
        let pieces = current
            .pieces()
            .iter()
            .zip(offsets)
            .map(|(piece, offset)| Arc::new(piece.placed(offset)))
            .collect();

        let next = Generation::new(current.index() + 1, current.cuts_applied(), pieces);
        self.push_generation(next);
        self.current()
    }

    fn apply(&mut self, blade: Blade<'_>) -> CutReport {
        let current = self.current();
        let pieces: Vec<Arc<Piece>> = current.pieces().to_vec();
        let next_index = current.index() + 1;
        let cuts_applied = current.cuts_applied() + 1;
        let candidates = self.candidates(&pieces, blade);

        let mut report = CutReport {
            generation: next_index,
            ..CutReport::default()
        };
        let mut next = Vec::with_capacity(pieces.len() + 2);

        for (piece, candidate) in pieces.iter().zip(candidates) {
            let outcome = if candidate {
                self.slice(piece, blade)
            } else {
                SliceOutcome::Unsplit
            };

            match outcome {
                SliceOutcome::Split(children) => {
                    report.split.push(piece.id());
                    for polygon in children {
                        let id = self.allocate_id();
                        report.children.push(id);
                        next.push(Arc::new(piece.child(id, polygon, next_index)));
                    }
                }
                SliceOutcome::Unsplit => {
                    report.untouched += 1;
                    next.push(Arc::clone(piece));
                }
            }
        }

        log::debug!(
            "cut {} ({}): split {} piece(s) into {}, {} untouched",
            cuts_applied,
            blade.kind(),
            report.split.len(),
            report.children.len(),
            report.untouched
        );

        self.push_generation(Generation::new(next_index, cuts_applied, next));
        report
    }

    /// Broad phase: which pieces can the blade reach at all.
    fn candidates(&self, pieces: &[Arc<Piece>], blade: Blade<'_>) -> Vec<bool> {
        let entries = pieces
            .iter()
            .enumerate()
            .map(|(i, p)| SpatialEntry2D::from_placed(i, p.id().0, p.polygon(), p.transform()))
            .collect();
        let index = SpatialIndex2D::with_entries(entries);

        let hits = match blade {
            Blade::Line(line) => index.query_line(line.start, line.end, self.config.epsilon),
            Blade::Path(path) => match path.aabb() {
                Some(bb) => index.query_box(&bb.expanded(self.config.cut_width)),
                None => Vec::new(),
            },
        };

        let mut mask = vec![false; pieces.len()];
        for entry in hits {
            mask[entry.index] = true;
        }
        mask
    }

    fn slice(&self, piece: &Piece, blade: Blade<'_>) -> SliceOutcome {
        match blade {
            Blade::Line(line) => {
                let local = line.to_local(piece.transform());
                self.slicer.split_by_line(piece.polygon(), local.start, local.end)
            }
            Blade::Path(path) => {
                let local = path.to_local(piece.transform());
                self.slicer.split_by_path(piece.polygon(), &local)
            }
        }
    }

    fn push_generation(&mut self, generation: Generation) {
        self.history.push_back(generation);
        while self.history.len() > self.config.history_depth {
            self.history.pop_front();
        }
    }

    fn allocate_id(&mut self) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[derive(Debug, Clone, Copy)]
enum Blade<'a> {
    Line(&'a CutLine),
    Path(&'a CutPath),
}

impl Blade<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Blade::Line(_) => "line",
            Blade::Path(_) => "path",
        }
    }
}
