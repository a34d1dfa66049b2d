//! Crop lifecycle — the SEED → GROWING → GROWN state machine.
//!
//! A crop's life stage is derived, not stored: it is a pure function of the
//! crop's accumulated watered-days and its catalog timetable. Wall-clock age
//! (`days_old`) never advances growth on its own, so a crop that is never
//! watered never leaves SEED.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::memo::Memo;
use crate::shared::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    Seed,
    Growing,
    Grown,
}

/// Stage tables are built once per distinct timetable and memoized; the
/// cache is owned here, never global.
#[derive(Resource, Debug, Default)]
pub struct CropStageCache(pub Memo<Vec<LifeStage>>);

/// `seed_days` copies of Seed followed by `growing_days` copies of Growing.
/// Indexing past the end of this table means the crop is Grown.
fn build_stage_table(timetable: &CropTimetable) -> Vec<LifeStage> {
    let mut table = Vec::with_capacity(timetable.total_days() as usize);
    table.extend(std::iter::repeat(LifeStage::Seed).take(timetable.seed_days as usize));
    table.extend(std::iter::repeat(LifeStage::Growing).take(timetable.growing_days as usize));
    table
}

/// Current life stage: `stage_table[floor(days_watered)]`, Grown past the
/// table's end.
pub fn life_stage(
    crop: &Crop,
    timetable: &CropTimetable,
    cache: &mut Memo<Vec<LifeStage>>,
) -> LifeStage {
    let table = cache.get_or_insert_with(timetable, || build_stage_table(timetable));
    let index = crop.days_watered.max(0.0).floor() as usize;
    table.get(index).copied().unwrap_or(LifeStage::Grown)
}

/// One day of aging for a plot's content.
///
/// Crops always gain a calendar day; watered-days only grow if the crop was
/// watered today, with the fertilizer bonus added onto the watered increment
/// (fertilizer never ages a dry crop). The watered flag resets for the next
/// day.
///
/// Returns `None` for non-crop contents — nothing changed, and callers can
/// skip the write without comparing plots.
pub fn age_plot_content(content: &PlotContent) -> Option<PlotContent> {
    let PlotContent::Crop(crop) = content else {
        return None;
    };

    let mut crop = crop.clone();
    crop.days_old += 1;
    if crop.was_watered_today {
        let mut increment = 1.0;
        if crop.is_fertilized {
            increment += FERTILIZER_GROWTH_BONUS;
        }
        crop.days_watered += increment;
        crop.was_watered_today = false;
    }
    Some(PlotContent::Crop(crop))
}

/// Image lookup key for the presentation layer: `"{id}_seed"` and
/// `"{id}_growing"` while immature, the bare item id once grown.
pub fn plot_image_key(
    crop: &Crop,
    timetable: &CropTimetable,
    cache: &mut Memo<Vec<LifeStage>>,
) -> String {
    match life_stage(crop, timetable, cache) {
        LifeStage::Seed => format!("{}_seed", crop.item_id),
        LifeStage::Growing => format!("{}_growing", crop.item_id),
        LifeStage::Grown => crop.item_id.clone(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Planting & fertilizing (user actions, invoked by the state store)
// ─────────────────────────────────────────────────────────────────────────────

/// Plant a crop into an empty plot. Returns false (and leaves the field
/// untouched) if the plot is occupied or out of bounds.
pub fn plant_crop(field: &mut Field, x: u32, y: u32, item_id: &str) -> bool {
    if x >= field.width() || y >= field.height() || field.plot(x, y).is_some() {
        return false;
    }
    field.set_plot(x, y, Some(PlotContent::Crop(Crop::new(item_id))));
    true
}

/// Fertilize the crop at a plot. Returns false if there is no crop there or
/// it is already fertilized.
pub fn fertilize_crop(field: &mut Field, x: u32, y: u32) -> bool {
    match field.plot_mut(x, y) {
        Some(PlotContent::Crop(crop)) if !crop.is_fertilized => {
            crop.is_fertilized = true;
            true
        }
        _ => false,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Day-end processing
// ─────────────────────────────────────────────────────────────────────────────

/// Ages every plot in the field. Runs after sprinklers so machine-watered
/// crops get today's growth.
pub fn on_day_end(mut day_end_events: EventReader<DayEndEvent>, mut field: ResMut<Field>) {
    for _ in day_end_events.read() {
        for y in 0..field.height() {
            for x in 0..field.width() {
                let aged = field.plot(x, y).and_then(age_plot_content);
                if let Some(content) = aged {
                    field.set_plot(x, y, Some(content));
                }
            }
        }
    }
}
