//! Property tests for the claim/score invariants.
//!
//! Random command sequences must never produce an overlapping claim, a
//! picker entry that is already taken, or a score that disagrees with the
//! claim count plus the single +10 bonus.

use chrono::NaiveDate;
use proptest::prelude::*;
use territory_duel::catalog::TerritoryId;
use territory_duel::core::{GameError, GameState, Team};
use territory_duel::game::Duel;

fn opened() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
}

fn team(is_red: bool) -> Team {
    if is_red {
        Team::Red
    } else {
        Team::Blue
    }
}

proptest! {
    #[test]
    fn claims_are_first_come_first_served(
        ops in prop::collection::vec((any::<bool>(), 0u16..51), 0..80)
    ) {
        let duel = Duel::us_states();
        let mut state = GameState::new(opened());

        for (is_red, idx) in ops {
            let territory = TerritoryId::new(idx);
            let before = state.owner(territory);

            match duel.claim(&mut state, team(is_red), territory) {
                Ok(_) => {
                    // Only an unclaimed territory can be taken
                    prop_assert_eq!(before, None);
                    prop_assert_eq!(state.owner(territory), Some(team(is_red)));
                }
                Err(GameError::AlreadyClaimed { owner, .. }) => {
                    // Rejection reports the holder and changes nothing
                    prop_assert_eq!(before, Some(owner));
                    prop_assert_eq!(state.owner(territory), before);
                }
                Err(err) => prop_assert!(false, "unexpected error: {err}"),
            }
        }
    }

    #[test]
    fn scores_conserve_claims(
        ops in prop::collection::vec((any::<bool>(), 0u16..51), 0..80),
        red_days_ago in 0u32..20_000,
        blue_days_ago in 0u32..20_000,
    ) {
        let duel = Duel::us_states();
        let mut state = GameState::new(opened());

        duel.set_date(&mut state, Team::Red, opened() - chrono::Days::new(red_days_ago.into())).unwrap();
        duel.set_date(&mut state, Team::Blue, opened() - chrono::Days::new(blue_days_ago.into())).unwrap();

        for (is_red, idx) in ops {
            let _ = duel.claim(&mut state, team(is_red), TerritoryId::new(idx));
        }

        let bonus = if red_days_ago == blue_days_ago { 0 } else { 10 };
        prop_assert_eq!(
            duel.score(&state, Team::Red) + duel.score(&state, Team::Blue),
            state.total_claims() as u32 + bonus
        );

        // Per-team score is claim count plus that team's share of the bonus
        for t in Team::both() {
            let expected_bonus = if duel.tie_break_owner(&state) == Some(t) { 10 } else { 0 };
            prop_assert_eq!(
                duel.score(&state, t),
                state.claim_count(t) as u32 + expected_bonus
            );
        }
    }

    #[test]
    fn picker_never_offers_a_taken_territory(
        ops in prop::collection::vec((any::<bool>(), 0u16..51), 0..80)
    ) {
        let duel = Duel::us_states();
        let mut state = GameState::new(opened());

        for (is_red, idx) in ops {
            let _ = duel.claim(&mut state, team(is_red), TerritoryId::new(idx));

            // After every command, each available entry is genuinely open
            for territory in duel.available_territories(&state) {
                let id = duel.catalog().id_of(&territory.name).unwrap();
                prop_assert_eq!(state.owner(id), None);
            }

            // Available and claimed partition the catalog
            prop_assert_eq!(
                duel.available_territories(&state).count() + state.total_claims(),
                duel.catalog().len()
            );
        }
    }
}
