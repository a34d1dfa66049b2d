//! Farming domain — the field grid, crop lifecycle, and watering.
//!
//! Communicates with other domains exclusively through crate::shared
//! events/resources.

use bevy::prelude::*;

pub mod crops;
pub mod field;
pub mod sprinklers;

pub struct FarmingPlugin;

impl Plugin for FarmingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::shared::Field>()
            .init_resource::<crops::CropStageCache>()
            // Sprinklers water first so crop aging sees today's water.
            .add_systems(Update, (sprinklers::on_day_end, crops::on_day_end).chain());
    }
}
