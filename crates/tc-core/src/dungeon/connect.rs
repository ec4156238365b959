//! Region connection
//!
//! After rooms and maze walks are carved the grid is a set of disjoint
//! regions. Wall cells touching two or more regions are connectors; carving a
//! random connector merges its regions, and connectors made redundant by a
//! merge are dropped, until one region is left.

use log::{debug, trace, warn};
use tc_rng::RandomSource;

use super::{Direction, Grid, Pos};

/// Connectors closer than this (Euclidean, squared) to a carved one are dropped
const MIN_CONNECTOR_DISTANCE_SQ: i32 = 4;

/// A wall cell bordering several regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    pub pos: Pos,
    /// Distinct region ids around the cell, in N, E, S, W order of discovery
    pub regions: Vec<u32>,
}

/// Tracks which regions have been merged into which (merge map + open set)
///
/// Both tables are dense and indexed by region id; id 0 is never open.
#[derive(Debug, Clone)]
pub struct RegionMerger {
    /// Each region's canonical id
    merged: Vec<u32>,
    /// Regions not yet merged away
    open: Vec<bool>,
    open_count: usize,
}

impl RegionMerger {
    /// Tracker for regions `1..=last_region`, each its own class
    pub fn new(last_region: u32) -> Self {
        let len = last_region as usize + 1;
        let mut open = vec![true; len];
        open[0] = false;
        Self {
            merged: (0..=last_region).collect(),
            open,
            open_count: last_region as usize,
        }
    }

    /// Canonical id of a region
    pub fn resolve(&self, region: u32) -> u32 {
        self.merged[region as usize]
    }

    /// Canonical ids of `regions`, duplicates removed, order kept
    pub fn resolve_all(&self, regions: &[u32]) -> Vec<u32> {
        let mut out: Vec<u32> = Vec::with_capacity(regions.len());
        for &r in regions {
            let c = self.resolve(r);
            if !out.contains(&c) {
                out.push(c);
            }
        }
        out
    }

    /// Fold every class in `sources` into `dest`
    pub fn merge(&mut self, dest: u32, sources: &[u32]) {
        for m in &mut self.merged {
            if sources.contains(m) {
                *m = dest;
            }
        }
        for &s in sources {
            if s != dest && std::mem::replace(&mut self.open[s as usize], false) {
                self.open_count -= 1;
            }
        }
    }

    pub fn is_open(&self, region: u32) -> bool {
        self.open.get(region as usize).copied().unwrap_or(false)
    }

    /// Number of regions still standing on their own
    pub fn open_count(&self) -> usize {
        self.open_count
    }

    /// Check if two regions have been merged
    pub fn are_connected(&self, a: u32, b: u32) -> bool {
        self.resolve(a) == self.resolve(b)
    }
}

/// Outcome of the connection phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectStats {
    pub connectors_found: usize,
    pub connectors_carved: usize,
    pub open_regions: usize,
}

/// Every interior wall cell whose neighbours span two or more regions
pub fn find_connectors(grid: &Grid) -> Vec<Connector> {
    let mut connectors = Vec::new();

    for pos in grid.interior() {
        if grid.cell(pos).is_passable() {
            continue;
        }

        let mut regions = Vec::with_capacity(4);
        for dir in Direction::CARDINAL {
            let region = grid.region(pos.step(dir, 1));
            if region != 0 && !regions.contains(&region) {
                regions.push(region);
            }
        }

        if regions.len() >= 2 {
            connectors.push(Connector { pos, regions });
        }
    }

    connectors
}

/// Carve random connectors until every region is merged into one.
///
/// Stops early, leaving regions apart, if the connectors run out.
pub fn connect_regions<R: RandomSource + ?Sized>(grid: &mut Grid, rng: &mut R) -> ConnectStats {
    let mut connectors = find_connectors(grid);
    let mut merger = RegionMerger::new(grid.current_region());
    let mut stats = ConnectStats {
        connectors_found: connectors.len(),
        ..ConnectStats::default()
    };

    debug!(
        "connecting {} regions through {} connectors",
        merger.open_count(),
        connectors.len()
    );

    while merger.open_count() > 1 && !connectors.is_empty() {
        let pick = rng.rn2(connectors.len() as u32) as usize;
        let carved = connectors[pick].pos;
        grid.carve_junction(carved);
        stats.connectors_carved += 1;

        let regions = merger.resolve_all(&connectors[pick].regions);
        let (dest, sources) = regions
            .split_first()
            .map(|(d, s)| (*d, s.to_vec()))
            .unwrap_or_default();
        merger.merge(dest, &sources);
        trace!("junction at {carved:?} merged {sources:?} into {dest}");

        connectors.retain(|c| {
            c.pos.distance_sq(carved) >= MIN_CONNECTOR_DISTANCE_SQ
                && merger.resolve_all(&c.regions).len() > 1
        });
    }

    stats.open_regions = merger.open_count();
    if stats.open_regions > 1 {
        warn!(
            "connectors exhausted with {} regions still apart",
            stats.open_regions
        );
    }
    stats
}
