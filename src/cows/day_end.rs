//! Overnight herd processing.

use bevy::prelude::*;

use super::interaction::hug_cow;
use crate::shared::*;

/// Advance one cow by a day. Pure so the day-end pass is testable without
/// an `App`.
pub fn age_cow(cow: &mut Cow) {
    cow.days_old += 1;
    cow.days_since_milking += 1;

    // The hugging machine tops off the day's remaining hug benefits
    // before the nightly decay lands.
    if cow.is_using_hugging_machine {
        while hug_cow(cow) {}
    }

    cow.happiness = (cow.happiness - COW_HAPPINESS_DAILY_DECAY).max(0.0);

    // Happiness above the midpoint fattens the cow, below thins it.
    let drift = (cow.happiness as f64 - 0.5) * 2.0 * COW_WEIGHT_DRIFT_RATE;
    cow.weight_multiplier = (cow.weight_multiplier + drift)
        .clamp(COW_WEIGHT_MULTIPLIER_MINIMUM, COW_WEIGHT_MULTIPLIER_MAXIMUM);

    cow.happiness_boosts_today = 0;
}

/// Runs on `DayEndEvent`: ages the whole herd.
pub fn on_day_end(mut day_end_events: EventReader<DayEndEvent>, mut herd: ResMut<Herd>) {
    for event in day_end_events.read() {
        for cow in &mut herd.cows {
            age_cow(cow);
        }
        if !herd.cows.is_empty() {
            info!("[Cows] Day {} ended for {} cow(s)", event.day, herd.cows.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cows::breeding::{generate_cow, CowOptions};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cow() -> Cow {
        let mut rng = StdRng::seed_from_u64(11);
        generate_cow(
            0,
            CowOptions {
                gender: Some(Gender::Female),
                ..Default::default()
            },
            &mut rng,
        )
    }

    #[test]
    fn counters_advance_and_boosts_reset() {
        let mut cow = cow();
        cow.happiness_boosts_today = 2;
        age_cow(&mut cow);
        assert_eq!(cow.days_old, 1);
        assert_eq!(cow.days_since_milking, 1);
        assert_eq!(cow.happiness_boosts_today, 0);
    }

    #[test]
    fn happiness_decays_but_never_below_zero() {
        let mut cow = cow();
        cow.happiness = 0.05;
        age_cow(&mut cow);
        assert_eq!(cow.happiness, 0.0);
    }

    #[test]
    fn neglected_cows_lose_weight() {
        let mut cow = cow();
        cow.happiness = 0.0;
        age_cow(&mut cow);
        assert!(cow.weight_multiplier < 1.0);
    }

    #[test]
    fn hugging_machine_keeps_cows_fed_and_fattening() {
        let mut cow = cow();
        cow.is_using_hugging_machine = true;
        for _ in 0..200 {
            age_cow(&mut cow);
        }
        assert_eq!(cow.weight_multiplier, COW_WEIGHT_MULTIPLIER_MAXIMUM);
    }

    #[test]
    fn weight_multiplier_stays_in_band() {
        let mut cow = cow();
        cow.happiness = 0.0;
        for _ in 0..500 {
            age_cow(&mut cow);
            cow.happiness = 0.0;
        }
        assert_eq!(cow.weight_multiplier, COW_WEIGHT_MULTIPLIER_MINIMUM);
    }
}
