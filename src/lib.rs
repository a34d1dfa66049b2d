//! Clovervale — a deterministic, headless farm-economy engine.
//!
//! Crops grow on a plot grid, cows breed and produce milk, and a market
//! reprices everything overnight. The whole simulation advances through
//! `DayEndEvent`; rendering, input, and audio live elsewhere. Every random
//! outcome draws from the injectable [`shared::GameRng`], so a seeded run
//! is fully reproducible.

pub mod shared;

pub mod cows;
pub mod data;
pub mod economy;
pub mod farming;
pub mod inventory;
pub mod memo;

use bevy::prelude::*;

use shared::*;

/// The full engine: data layer plus every domain plugin, with the shared
/// events and resources they communicate through.
pub struct ClovervalePlugin;

impl Plugin for ClovervalePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DayEndEvent>()
            .add_event::<BreedCowsEvent>()
            .add_event::<MilkCowEvent>()
            .init_resource::<GameRng>()
            .init_resource::<Inventory>()
            .add_plugins((
                data::DataPlugin,
                farming::FarmingPlugin,
                cows::CowsPlugin,
                economy::EconomyPlugin,
            ));
    }
}
