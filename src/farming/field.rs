//! Field range queries — neighborhood coordinates and bounded folds.

// ─────────────────────────────────────────────────────────────────────────────
// Range geometry
// ─────────────────────────────────────────────────────────────────────────────

/// The full (2·radius+1) × (2·radius+1) coordinate grid centered on
/// (`cx`, `cy`), row by row.
///
/// NOT clipped to any field — coordinates may be negative or past the edge.
/// Callers that need in-bounds cells must clip separately (or use
/// [`for_range`], which clips for them).
pub fn range_coords(radius: u32, cx: i64, cy: i64) -> Vec<Vec<(i64, i64)>> {
    let r = radius as i64;
    (cy - r..=cy + r)
        .map(|y| (cx - r..=cx + r).map(|x| (x, y)).collect())
        .collect()
}

/// Fold `cell_fn` over every in-bounds cell of the (2·radius+1)² square
/// centered on (`cx`, `cy`), clipped to a `width` × `height` field.
///
/// Cells are visited in row-major order (all x for a given y, y ascending)
/// and the fold is strictly sequential: each application receives the state
/// returned by the previous one, so later cells observe earlier updates.
/// A center outside the field yields a partial or empty range rather than
/// an error.
pub fn for_range<S, F>(
    state: S,
    width: u32,
    height: u32,
    mut cell_fn: F,
    radius: u32,
    cx: i64,
    cy: i64,
) -> S
where
    F: FnMut(S, u32, u32) -> S,
{
    let r = radius as i64;
    let mut state = state;
    for y in cy - r..=cy + r {
        if y < 0 || y >= height as i64 {
            continue;
        }
        for x in cx - r..=cx + r {
            if x < 0 || x >= width as i64 {
                continue;
            }
            state = cell_fn(state, x as u32, y as u32);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_coords_is_a_full_square() {
        let coords = range_coords(1, 2, 2);
        assert_eq!(coords.len(), 3);
        assert_eq!(coords[0], vec![(1, 1), (2, 1), (3, 1)]);
        assert_eq!(coords[1], vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(coords[2], vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn range_coords_is_not_clipped() {
        let coords = range_coords(1, 0, 0);
        assert_eq!(coords[0][0], (-1, -1), "negative coordinates are kept");
        assert_eq!(coords[2][2], (1, 1));
    }

    #[test]
    fn for_range_touches_nine_cells_at_center() {
        let visited = for_range(Vec::new(), 5, 5, |mut acc: Vec<(u32, u32)>, x, y| {
            acc.push((x, y));
            acc
        }, 1, 2, 2);
        assert_eq!(visited.len(), 9);
    }

    #[test]
    fn for_range_clips_at_the_corner() {
        let visited = for_range(Vec::new(), 5, 5, |mut acc: Vec<(u32, u32)>, x, y| {
            acc.push((x, y));
            acc
        }, 1, 0, 0);
        assert_eq!(visited, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn for_range_visits_row_major() {
        let visited = for_range(Vec::new(), 4, 4, |mut acc: Vec<(u32, u32)>, x, y| {
            acc.push((x, y));
            acc
        }, 1, 1, 1);
        assert_eq!(
            visited,
            vec![
                (0, 0), (1, 0), (2, 0),
                (0, 1), (1, 1), (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        );
    }

    #[test]
    fn for_range_threads_state_sequentially() {
        // Each cell doubles then increments — order-sensitive, so this fails
        // if the fold were reordered or parallelized.
        let result = for_range(1u64, 3, 3, |acc, _, _| acc * 2 + 1, 1, 1, 1);
        assert_eq!(result, 1023);
    }

    #[test]
    fn for_range_far_outside_is_empty() {
        let visited = for_range(0u32, 5, 5, |acc, _, _| acc + 1, 1, 50, 50);
        assert_eq!(visited, 0, "an out-of-field center folds over nothing");
    }
}
