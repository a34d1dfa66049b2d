//! Cow valuation and milk production math.

use crate::shared::*;

/// Map `value` from the input range onto the output range linearly.
/// The output range may be inverted (out_min > out_max); inputs outside
/// the input range extrapolate, so callers clamp where the domain demands.
pub fn scale(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Effective weight in pounds, rounded to the nearest whole pound.
pub fn cow_weight(cow: &Cow) -> f64 {
    (cow.base_weight * cow.weight_multiplier).round()
}

/// Sale value in currency units.
///
/// Value tracks weight, discounted by age: full price on day one, sliding
/// down to the minimum multiplier at [`COW_MAXIMUM_AGE_VALUE_DROPOFF`] days
/// and flat after that.
pub fn cow_value(cow: &Cow) -> f64 {
    let age_multiplier = scale(
        cow.days_old as f64,
        1.0,
        COW_MAXIMUM_AGE_VALUE_DROPOFF as f64,
        COW_MAXIMUM_VALUE_MULTIPLIER,
        COW_MINIMUM_VALUE_MULTIPLIER,
    )
    .clamp(COW_MINIMUM_VALUE_MULTIPLIER, COW_MAXIMUM_VALUE_MULTIPLIER);

    round_to_cents(cow_weight(cow) * age_multiplier)
}

/// Days between milkings, or `None` for cows that never produce (males).
///
/// Heavier cows milk faster: the weight multiplier band maps onto the rate
/// band inverted, so the minimum multiplier yields the slowest rate.
pub fn cow_milk_rate(cow: &Cow) -> Option<f64> {
    match cow.gender {
        Gender::Male => None,
        Gender::Female => Some(scale(
            cow.weight_multiplier,
            COW_WEIGHT_MULTIPLIER_MINIMUM,
            COW_WEIGHT_MULTIPLIER_MAXIMUM,
            COW_MILK_RATE_SLOWEST,
            COW_MILK_RATE_FASTEST,
        )),
    }
}

/// Which milk tier a milking yields, graded by happiness thirds.
pub fn milk_item_for_cow(cow: &Cow) -> ItemId {
    let tier = if cow.happiness < 1.0 / 3.0 {
        MILK_TIER_1
    } else if cow.happiness < 2.0 / 3.0 {
        MILK_TIER_2
    } else {
        MILK_TIER_3
    };
    tier.to_string()
}

/// A cow is ready once at least its milk rate's worth of days have passed
/// since the last milking. Males are never ready.
pub fn is_cow_ready_to_milk(cow: &Cow) -> bool {
    match cow_milk_rate(cow) {
        Some(rate) => cow.days_since_milking as f64 >= rate,
        None => false,
    }
}
