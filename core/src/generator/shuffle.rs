use super::*;

/// Fills the cells outside the safe zone in scan order, then swaps every one of them with a random cell that is also
/// outside the safe zone. The start cell, and normally its neighbors too, never hold a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleMinefieldGenerator {
    seed: u64,
    start: Coord2,
    safe_zone: SafeZone,
}

impl ShuffleMinefieldGenerator {
    pub fn new(seed: u64, start: Coord2) -> Self {
        Self::with_safe_zone(seed, start, SafeZone::Neighborhood)
    }

    pub fn with_safe_zone(seed: u64, start: Coord2, safe_zone: SafeZone) -> Self {
        Self {
            seed,
            start,
            safe_zone,
        }
    }
}

impl MinefieldGenerator for ShuffleMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        use rand::prelude::*;

        let (rows, cols) = config.size;
        let start = self.start;
        if start.0 >= rows || start.1 >= cols {
            return Err(GameError::OutOfBounds);
        }

        let outside = move |zone: SafeZone| {
            (0..rows)
                .flat_map(move |row| (0..cols).map(move |col| (row, col)))
                .filter(move |&coords| !zone.contains(start, coords))
        };

        let safe_zone = match self.safe_zone {
            SafeZone::Neighborhood
                if outside(SafeZone::Neighborhood).count() < usize::from(config.mines) =>
            {
                log::warn!(
                    "Cannot keep neighbors of {:?} clear of {} mines, fallback to safe start cell",
                    start,
                    config.mines
                );
                SafeZone::Cell
            }
            safe_zone => safe_zone,
        };

        let mut layout = MineLayout::empty(config.size);
        for coords in outside(safe_zone).take(config.mines.into()) {
            layout.insert(coords)?;
        }
        let mines_placed = layout.mine_count();

        if mines_placed < config.mines {
            log::warn!(
                "Minefield already full, requested {} but only fits {}",
                config.mines,
                mines_placed
            );
        }

        // rejection sampling below needs at least one cell outside the safe zone
        if mines_placed > 0 {
            let mut rng = SmallRng::seed_from_u64(self.seed);
            for coords in outside(safe_zone) {
                let other = loop {
                    let candidate = (rng.random_range(0..rows), rng.random_range(0..cols));
                    if !safe_zone.contains(start, candidate) {
                        break candidate;
                    }
                };
                layout.swap(coords, other);
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} board around {:?}",
            mines_placed,
            rows,
            cols,
            start
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(size: Coord2, mines: CellCount, seed: u64, start: Coord2) -> MineLayout {
        ShuffleMinefieldGenerator::new(seed, start)
            .generate(GameConfig::new(size, mines).unwrap())
            .unwrap()
    }

    #[test]
    fn places_exact_count_outside_safe_zone() {
        for seed in 0..64 {
            let start = ((seed % 10) as Coord, (seed * 7 % 10) as Coord);
            let layout = generate((10, 10), 30, seed, start);

            assert_eq!(layout.mine_count(), 30);
            for row in 0..10 {
                for col in 0..10 {
                    if is_within_one(start, (row, col)) {
                        assert!(!layout.contains_mine((row, col)), "mine in safe zone at {:?}", (row, col));
                    }
                }
            }
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let a = generate((8, 8), 15, 42, (3, 4));
        let b = generate((8, 8), 15, 42, (3, 4));

        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_moves_mines_away_from_scan_order() {
        // scan fill alone would always put the mines on the first row
        let moved = (0..16).any(|seed| {
            let layout = generate((8, 8), 8, seed, (7, 7));
            (0..8).any(|col| !layout.contains_mine((0, col)))
        });

        assert!(moved);
    }

    #[test]
    fn crowded_board_falls_back_to_safe_start_cell() {
        let layout = generate((3, 3), 8, 7, (1, 1));

        assert_eq!(layout.mine_count(), 8);
        assert!(!layout.contains_mine((1, 1)));
    }

    #[test]
    fn board_without_mines_stays_empty() {
        let layout = generate((1, 1), 0, 3, (0, 0));

        assert_eq!(layout.mine_count(), 0);
    }

    #[test]
    fn rejects_start_outside_board() {
        let result =
            ShuffleMinefieldGenerator::new(1, (5, 0)).generate(GameConfig::new_unchecked((5, 5), 5));

        assert_eq!(result, Err(GameError::OutOfBounds));
    }
}
