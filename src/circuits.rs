//! Junction boxes hanging in 3-D space get wired together, closest pair first. Wired boxes form
//! circuits, tracked with a [`DisjointSet`].

use std::hash::BuildHasherDefault;

use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use nalgebra::Point3;
use rustc_hash::FxHasher;
use tracing::debug;

use crate::disjoint_set::DisjointSet;
use crate::parse_i64_from_bytes;

/// How many of the closest pairs get wired before circuits are measured.
pub const CONNECTIONS: usize = 1000;

pub type JunctionBox = Point3<i64>;

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// One `x,y,z` triple per line; blank lines are skipped.
pub fn parse_junction_boxes(input: &str) -> Result<Vec<JunctionBox>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            parse_junction_box(line.trim()).with_context(|| format!("line {}", i + 1))
        })
        .collect()
}

fn parse_junction_box(line: &str) -> Result<JunctionBox> {
    let mut coords = [0; 3];
    let mut fields = line.split(',');
    for coord in coords.iter_mut() {
        let field = fields
            .next()
            .ok_or_else(|| anyhow!("expected 3 coordinates in {:?}", line))?;
        *coord = parse_i64_from_bytes(field.trim().as_bytes())
            .ok_or_else(|| anyhow!("invalid coordinate {:?}", field))?;
    }
    if fields.next().is_some() {
        return Err(anyhow!("expected 3 coordinates in {:?}", line));
    }
    Ok(JunctionBox::new(coords[0], coords[1], coords[2]))
}

/// Two junction boxes by index (`i < j`) and the squared distance between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pair {
    pub i: usize,
    pub j: usize,
    pub distance_sq: u128,
}

impl Pair {
    pub fn distance(&self) -> f64 {
        (self.distance_sq as f64).sqrt()
    }
}

/// All `n * (n - 1) / 2` pairs, closest first. Equal distances keep `(i, j)` order.
pub fn sorted_pairs(boxes: &[JunctionBox]) -> Vec<Pair> {
    let mut pairs = Vec::with_capacity(boxes.len() * boxes.len().saturating_sub(1) / 2);
    for (i, a) in boxes.iter().enumerate() {
        for (j, b) in boxes.iter().enumerate().skip(i + 1) {
            pairs.push(Pair {
                i,
                j,
                distance_sq: distance_sq(a, b),
            });
        }
    }
    pairs.sort_by_key(|pair| pair.distance_sq);
    pairs
}

/// Exact for any two points whose squared distance fits in a `u128`; saturates beyond that.
fn distance_sq(a: &JunctionBox, b: &JunctionBox) -> u128 {
    a.coords
        .iter()
        .zip(b.coords.iter())
        .map(|(&p, &q)| {
            // at most 2^64 - 1, so the square fits
            let d = (i128::from(p) - i128::from(q)).unsigned_abs();
            d * d
        })
        .fold(0, u128::saturating_add)
}

/// Sizes of all circuits, largest first.
pub fn circuit_sizes(circuits: &mut DisjointSet) -> Vec<usize> {
    let mut by_root = FxIndexMap::default();
    for x in 0..circuits.len() {
        let root = circuits.find(x);
        by_root.entry(root).or_insert_with(|| circuits.group_size(root));
    }
    let mut sizes: Vec<_> = by_root.into_values().collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}

/// Wires the first `connections` pairs (or all of them if there are fewer) and multiplies the
/// sizes of the three largest circuits. Fewer than three circuits multiply whatever exists.
pub fn largest_circuits_product(box_count: usize, pairs: &[Pair], connections: usize) -> u64 {
    let mut circuits = DisjointSet::new(box_count);
    for pair in pairs.iter().take(connections) {
        circuits.union(pair.i, pair.j);
    }
    let sizes = circuit_sizes(&mut circuits);
    debug!(circuits = sizes.len(), largest = ?&sizes[..sizes.len().min(3)]);
    sizes.iter().take(3).map(|&size| size as u64).product()
}

/// Wires pairs closest first until everything is one circuit and returns the pair that closed
/// it. `None` if the pairs never join everything, which is always the case for fewer than two
/// boxes.
pub fn final_connection(box_count: usize, pairs: &[Pair]) -> Option<Pair> {
    let mut circuits = DisjointSet::new(box_count);
    for pair in pairs {
        if circuits.union(pair.i, pair.j) && circuits.group_count() == 1 {
            debug!(?pair, distance = pair.distance(), "single circuit");
            return Some(*pair);
        }
    }
    None
}
