//! A tachyon manifold: a beam enters at `S` and falls straight down. Whenever the cell below a
//! beam holds a splitter (`^`) the beam continues from both sides of the splitter instead.

use memchr::memchr;
use nalgebra::Point2;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

pub type Position = Point2<i64>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Start,
    Splitter,
    Empty,
    Other(u8),
    /// Outside of the grid, including past the end of a short row.
    Absent,
}

impl Cell {
    fn from_byte(b: u8) -> Self {
        match b {
            b'S' => Cell::Start,
            b'^' => Cell::Splitter,
            b'.' => Cell::Empty,
            b => Cell::Other(b),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Manifold {
    rows: Vec<Box<[u8]>>,
    start: Option<Position>,
}

impl Manifold {
    pub fn parse(input: &str) -> Self {
        let rows: Vec<Box<[u8]>> = input.lines().map(|line| line.as_bytes().into()).collect();
        let start = rows.iter().enumerate().find_map(|(y, row)| {
            memchr(b'S', row).map(|x| Position::new(x as i64, y as i64))
        });
        Self { rows, start }
    }

    pub fn height(&self) -> i64 {
        self.rows.len() as i64
    }

    /// First `S` in reading order.
    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn cell(&self, pos: Position) -> Cell {
        let (Ok(x), Ok(y)) = (usize::try_from(pos.x), usize::try_from(pos.y)) else {
            return Cell::Absent;
        };
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .map_or(Cell::Absent, |&b| Cell::from_byte(b))
    }

    /// Simulates the beams row by row and counts how often a beam is split. Beams sharing a
    /// column merge into one; a beam above anything other than empty space or a splitter stops.
    pub fn count_splits(&self, start: Position) -> u64 {
        // a splitter right below `S` splits the entering beam, same as for timelines
        let mut beams = FxHashSet::default();
        beams.insert(start.x);
        let mut splits = 0;

        for y in start.y..self.height() - 1 {
            let mut next = FxHashSet::default();
            for &x in &beams {
                match self.cell(Position::new(x, y + 1)) {
                    Cell::Empty => {
                        next.insert(x);
                    }
                    Cell::Splitter => {
                        splits += 1;
                        next.insert(x - 1);
                        next.insert(x + 1);
                    }
                    _ => {}
                }
            }
            if next.is_empty() {
                break;
            }
            beams = next;
        }

        splits
    }
}

/// Counts timelines: the distinct ways a single beam can reach the bottom of the manifold when
/// every splitter sends it either left or right.
///
/// Results are memoized per position, so paths that converge after a splitter are only walked
/// once.
pub struct TimelineCounter<'a> {
    manifold: &'a Manifold,
    memo: FxHashMap<Position, u64>,
}

impl<'a> TimelineCounter<'a> {
    pub fn new(manifold: &'a Manifold) -> Self {
        Self {
            manifold,
            memo: FxHashMap::default(),
        }
    }

    pub fn count(&mut self, pos: Position) -> u64 {
        self.count_at_depth(pos, 0)
    }

    #[cfg(test)]
    fn cached(&self, pos: Position) -> Option<u64> {
        self.memo.get(&pos).copied()
    }

    #[cfg(test)]
    fn cached_positions(&self) -> usize {
        self.memo.len()
    }

    fn count_at_depth(&mut self, pos: Position, depth: usize) -> u64 {
        let mut current = pos;
        let total = loop {
            if let Some(&cached) = self.memo.get(&current) {
                trace!(depth, x = current.x, y = current.y, cached, "cache hit");
                break cached;
            }

            let below = Position::new(current.x, current.y + 1);
            if below.y >= self.manifold.height() {
                trace!(depth, x = current.x, "reached bottom");
                break 1;
            }

            match self.manifold.cell(below) {
                Cell::Empty => current = below,
                Cell::Splitter => {
                    let left = self.count_at_depth(Position::new(below.x - 1, below.y), depth + 1);
                    let right = self.count_at_depth(Position::new(below.x + 1, below.y), depth + 1);
                    trace!(depth, x = below.x, y = below.y, left, right, "splitter");
                    break left + right;
                }
                // boundary or anything unexpected ends the timeline here
                _ => break 1,
            }
        };

        self.memo.insert(current, total);
        self.memo.insert(pos, total);
        total
    }
}
