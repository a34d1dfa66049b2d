//! Player interactions with cows: hugging, milking, breeding requests.

use bevy::prelude::*;

use super::breeding::breed_cows;
use super::economy::{is_cow_ready_to_milk, milk_item_for_cow};
use crate::shared::*;

/// Hug a cow: a small happiness lift, capped per day.
///
/// Returns whether the hug counted. Past [`MAX_DAILY_COW_HUG_BENEFITS`]
/// the cow enjoys the attention but gains nothing.
pub fn hug_cow(cow: &mut Cow) -> bool {
    if cow.happiness_boosts_today >= MAX_DAILY_COW_HUG_BENEFITS {
        return false;
    }
    cow.happiness = (cow.happiness + COW_HUG_BENEFIT).min(1.0);
    cow.happiness_boosts_today += 1;
    true
}

/// Milk a cow if it is ready. Returns the milk item produced, graded by
/// the cow's happiness, or `None` if the cow is male or not yet ready.
pub fn milk_cow(cow: &mut Cow) -> Option<ItemId> {
    if !is_cow_ready_to_milk(cow) {
        return None;
    }
    cow.days_since_milking = 0;
    Some(milk_item_for_cow(cow))
}

/// Handles `BreedCowsEvent`: validates the pair, rolls the offspring, and
/// adds it to the herd.
pub fn handle_breed_cows(
    mut breed_events: EventReader<BreedCowsEvent>,
    mut herd: ResMut<Herd>,
    mut rng: ResMut<GameRng>,
) {
    for event in breed_events.read() {
        let (Some(first), Some(second)) = (herd.cow(event.first_id), herd.cow(event.second_id))
        else {
            warn!(
                "[Cows] Breed request for unknown cow pair #{} / #{}",
                event.first_id, event.second_id
            );
            continue;
        };
        let (first, second) = (first.clone(), second.clone());

        let id = herd.allocate_id();
        match breed_cows(id, &first, &second, &mut rng.0) {
            Ok(calf) => {
                info!(
                    "[Cows] '{}' and '{}' bred calf '{}' (#{}, {:?})",
                    first.name, second.name, calf.name, calf.id, calf.color
                );
                herd.cows.push(calf);
            }
            Err(err) => warn!("[Cows] {err}"),
        }
    }
}

/// Handles `MilkCowEvent`: milks the cow and stores the milk. Milk that
/// does not fit the inventory is spilled with a warning.
pub fn handle_milk_cow(
    mut milk_events: EventReader<MilkCowEvent>,
    mut herd: ResMut<Herd>,
    mut inventory: ResMut<Inventory>,
) {
    for event in milk_events.read() {
        let Some(cow) = herd.cow_mut(event.cow_id) else {
            warn!("[Cows] Milk request for unknown cow #{}", event.cow_id);
            continue;
        };
        match milk_cow(cow) {
            Some(milk_id) => {
                let overflow = inventory.try_add(&milk_id, 1);
                if overflow > 0 {
                    warn!("[Cows] Inventory full, spilled {milk_id} from '{}'", cow.name);
                } else {
                    info!("[Cows] Milked '{}' for {milk_id}", cow.name);
                }
            }
            None => warn!("[Cows] '{}' is not ready to be milked", cow.name),
        }
    }
}
