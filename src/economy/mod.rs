//! Economy domain — market fluctuation and currency math.
//!
//! Communicates with other domains exclusively through crate::shared
//! events/resources.

use bevy::prelude::*;

pub mod currency;
pub mod market;

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::shared::Market>()
            .add_systems(Update, market::on_day_end);
    }
}
