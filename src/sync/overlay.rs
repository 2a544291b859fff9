use common::board::COLUMNS;
use common::model::Winner;

/// Which column targets currently accept input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overlay {
    enabled: [bool; COLUMNS],
}

impl Overlay {
    /// Out of range columns in `valid_moves` are ignored.
    pub fn compute(valid_moves: &[usize], winner: Winner, busy: bool) -> Self {
        let mut enabled = [false; COLUMNS];
        if !winner.is_decided() && !busy {
            for &column in valid_moves {
                if let Some(slot) = enabled.get_mut(column) {
                    *slot = true;
                }
            }
        }
        Overlay { enabled }
    }

    pub fn is_enabled(&self, column: usize) -> bool {
        self.enabled.get(column).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn enabled_columns(&self) -> Vec<usize> {
        (0..COLUMNS).filter(|&column| self.enabled[column]).collect()
    }

    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.enabled.iter().all(|enabled| !enabled)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn winner() -> impl Strategy<Value = Winner> {
        prop_oneof![
            Just(Winner::None),
            Just(Winner::Player),
            Just(Winner::Cpu),
            Just(Winner::Draw),
        ]
    }

    fn valid_moves() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(any::<bool>(), COLUMNS).prop_map(|mask| {
            mask.into_iter()
                .enumerate()
                .filter(|&(_, playable)| playable)
                .map(|(column, _)| column)
                .collect()
        })
    }

    proptest! {
        #[test]
        fn open_game_enables_exactly_valid_moves(moves in valid_moves()) {
            let overlay = Overlay::compute(&moves, Winner::None, false);
            prop_assert_eq!(overlay.enabled_columns(), moves);
        }

        #[test]
        fn busy_disables_everything(moves in valid_moves(), winner in winner()) {
            prop_assert!(Overlay::compute(&moves, winner, true).is_blank());
        }

        #[test]
        fn decided_game_disables_everything(moves in valid_moves(), busy in any::<bool>()) {
            for winner in [Winner::Player, Winner::Cpu, Winner::Draw] {
                prop_assert!(Overlay::compute(&moves, winner, busy).is_blank());
            }
        }

        #[test]
        fn compute_is_idempotent(moves in valid_moves(), winner in winner(), busy in any::<bool>()) {
            let first = Overlay::compute(&moves, winner, busy);
            let second = Overlay::compute(&moves, winner, busy);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn test_out_of_range_ignored() {
        let overlay = Overlay::compute(&[6, 7, 100, 0, 0], Winner::None, false);
        assert_eq!(
            overlay.enabled_columns().into_iter().collect::<BTreeSet<_>>(),
            BTreeSet::from([0, 6])
        );
        assert!(!overlay.is_enabled(7));
    }

    #[test]
    fn test_default_is_blank() {
        assert!(Overlay::default().is_blank());
    }
}
