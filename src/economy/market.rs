//! Market fluctuation — per-item value adjustments and timed price events.
//!
//! Once per day the market decrements its active crash/surge events, has a
//! small chance of starting a new one against a random shop-stocked crop,
//! and regenerates the whole value-adjustment map. Everything in between is
//! pure calculation over the immutable catalog.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashMap;

use super::currency::round_to_cents;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Pure calculators
// ─────────────────────────────────────────────────────────────────────────────

/// Build the day's value-adjustment map.
///
/// Every fluctuating catalog item gets a multiplier: the crash floor if a
/// crash targets it (crash is checked first — crash wins if a surge somehow
/// coexists), the surge ceiling if a surge targets it, otherwise a uniform
/// sample from [0.5, 1.5). Non-fluctuating items are omitted entirely; an
/// absent key means "multiplier 1".
pub fn generate_value_adjustments(
    crashes: &HashMap<ItemId, PriceEvent>,
    surges: &HashMap<ItemId, PriceEvent>,
    catalog: &ItemCatalog,
    rng: &mut impl Rng,
) -> ValueAdjustmentMap {
    let mut adjustments = ValueAdjustmentMap::new();

    // fluctuating_items is id-sorted, so seeded rngs sample deterministically.
    for item in catalog.fluctuating_items() {
        let multiplier = if crashes.contains_key(&item.id) {
            VALUE_ADJUSTMENT_MINIMUM
        } else if surges.contains_key(&item.id) {
            VALUE_ADJUSTMENT_MAXIMUM
        } else {
            rng.gen_range(VALUE_ADJUSTMENT_MINIMUM..VALUE_ADJUSTMENT_MAXIMUM)
        };
        adjustments.insert(item.id.clone(), multiplier);
    }

    adjustments
}

/// Seed a price event for a crop item. The event's lifetime tracks the
/// crop's own planting-to-harvest cycle, shortened by a fixed amount.
pub fn price_event_for_crop(item: &ItemDef) -> Result<PriceEvent, CatalogError> {
    let timetable = item.crop_timetable().ok_or_else(|| CatalogError::InvalidItem {
        id: item.id.clone(),
        reason: "price events can only target crop items".to_string(),
    })?;

    Ok(PriceEvent {
        item_id: item.id.clone(),
        days_remaining: timetable
            .total_days()
            .saturating_sub(PRICE_EVENT_DURATION_DECREASE),
    })
}

/// Total watered-days a crop takes from seed to harvestable.
pub fn crop_lifecycle_duration(item: &ItemDef) -> Result<u32, CatalogError> {
    item.crop_timetable()
        .map(CropTimetable::total_days)
        .ok_or_else(|| CatalogError::InvalidItem {
            id: item.id.clone(),
            reason: "not a crop".to_string(),
        })
}

/// Catalog value with the day's market adjustment applied, rounded to cents.
pub fn item_value(item: &ItemDef, adjustments: &ValueAdjustmentMap) -> f64 {
    let multiplier = adjustments.get(&item.id).copied().unwrap_or(1.0);
    round_to_cents(item.value * multiplier)
}

/// What the shop pays for a player-owned item: a flat half of the base
/// catalog value, unaffected by market fluctuation.
pub fn resale_value(item: &ItemDef) -> f64 {
    round_to_cents(item.value * RESALE_VALUE_MULTIPLIER)
}

// ─────────────────────────────────────────────────────────────────────────────
// Day-end processing
// ─────────────────────────────────────────────────────────────────────────────

/// Decrement every active price event, dropping the expired ones.
fn tick_price_events(events: &mut HashMap<ItemId, PriceEvent>) {
    for event in events.values_mut() {
        event.days_remaining = event.days_remaining.saturating_sub(1);
    }
    events.retain(|_, event| event.days_remaining > 0);
}

/// Crops eligible for a fresh price event: fluctuating, sold in the shop,
/// and not already targeted by an active crash or surge.
fn eligible_event_targets<'a>(
    catalog: &'a ItemCatalog,
    shop: &ShopInventory,
    market: &Market,
) -> Vec<&'a ItemDef> {
    catalog
        .fluctuating_items()
        .into_iter()
        .filter(|item| matches!(item.kind, ItemKind::Crop { .. }))
        .filter(|item| shop.is_sold_in_shop(&item.id))
        .filter(|item| {
            !market.price_crashes.contains_key(&item.id)
                && !market.price_surges.contains_key(&item.id)
        })
        .collect()
}

/// Runs on `DayEndEvent`: ages out price events, maybe schedules a new one,
/// then regenerates the value-adjustment map for the new day.
pub fn on_day_end(
    mut day_end_events: EventReader<DayEndEvent>,
    mut market: ResMut<Market>,
    catalog: Res<ItemCatalog>,
    shop: Res<ShopInventory>,
    mut rng: ResMut<GameRng>,
) {
    for _ in day_end_events.read() {
        tick_price_events(&mut market.price_crashes);
        tick_price_events(&mut market.price_surges);

        if rng.0.gen_bool(PRICE_EVENT_CHANCE) {
            let candidates = eligible_event_targets(&catalog, &shop, &market);
            if !candidates.is_empty() {
                let target = candidates[rng.0.gen_range(0..candidates.len())];
                match price_event_for_crop(target) {
                    Ok(event) if event.days_remaining > 0 => {
                        let is_crash = rng.0.gen_bool(0.5);
                        let kind = if is_crash { "crash" } else { "surge" };
                        info!(
                            "[Market] Price {} on '{}' for {} days",
                            kind, event.item_id, event.days_remaining
                        );
                        if is_crash {
                            market.price_crashes.insert(event.item_id.clone(), event);
                        } else {
                            market.price_surges.insert(event.item_id.clone(), event);
                        }
                    }
                    Ok(_) => {}
                    Err(err) => warn!("[Market] Could not seed price event: {err}"),
                }
            }
        }

        market.value_adjustments = generate_value_adjustments(
            &market.price_crashes,
            &market.price_surges,
            &catalog,
            &mut rng.0,
        );
    }
}
