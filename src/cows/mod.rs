//! Cow domain — breeding, valuation, milking, and overnight care.
//!
//! Communicates with other domains exclusively through crate::shared
//! events/resources.

use bevy::prelude::*;

pub mod breeding;
pub mod day_end;
pub mod economy;
pub mod interaction;

pub struct CowsPlugin;

impl Plugin for CowsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::shared::Herd>().add_systems(
            Update,
            (
                interaction::handle_breed_cows,
                interaction::handle_milk_cow,
                day_end::on_day_end,
            ),
        );
    }
}
