//! Room placement
//!
//! Tries a fixed number of random odd-sized, odd-aligned rectangles and keeps
//! the ones that stay clear of every room placed before them. Failed tries are
//! not retried, so a crowded grid simply ends up with fewer rooms.

use log::trace;
use tc_rng::RandomSource;

use super::{Grid, Rect};
use crate::OverlapTest;

/// Padding kept around every room when testing overlap
const ROOM_MARGIN: i32 = 1;

/// Roll one candidate room, or `None` if it cannot fit the grid.
///
/// Draw order: size, rectangularity, orientation, x, y.
fn roll_room<R: RandomSource + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Rect> {
    let size = rng.range(2, 4) * 2 + 1;
    let rectangularity = rng.range(0, 1 + size / 2) * 2;
    let mut width = size;
    let mut height = size;

    if rng.rn2(2) == 1 {
        width += rectangularity;
    } else {
        height += rectangularity;
    }

    let x_slots = (grid.width() as i32 - width) / 2;
    let y_slots = (grid.height() as i32 - height) / 2;
    if x_slots <= 0 || y_slots <= 0 {
        return None;
    }

    let x = rng.rn2(x_slots as u32) as i32 * 2 + 1;
    let y = rng.rn2(y_slots as u32) as i32 * 2 + 1;
    Some(Rect::new(x, y, width, height))
}

fn is_room_overlapped(rooms: &[Rect], candidate: &Rect, test: OverlapTest) -> bool {
    let padded = candidate.expand(ROOM_MARGIN);
    rooms.iter().any(|placed| {
        let placed = placed.expand(ROOM_MARGIN);
        match test {
            OverlapTest::Corners => padded.intersects_corners(&placed),
            OverlapTest::Full => padded.overlaps(&placed),
        }
    })
}

/// Place up to `tries` rooms, each carved as its own region.
///
/// Returns the placed rooms in placement order.
pub fn place_rooms<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    tries: u32,
    overlap: OverlapTest,
    rng: &mut R,
) -> Vec<Rect> {
    let mut rooms = Vec::new();

    for _ in 0..tries {
        let Some(room) = roll_room(grid, rng) else {
            continue;
        };

        if is_room_overlapped(&rooms, &room, overlap) {
            continue;
        }

        let region = grid.start_region();
        grid.carve_rect(room);
        trace!("room {region} at {room:?}");
        rooms.push(room);
    }

    rooms
}
