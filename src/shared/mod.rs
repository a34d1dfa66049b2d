//! Shared types, resources, events, and constants for Clovervale.
//!
//! This is the type contract. Every domain module imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════
// ITEMS — immutable catalog entries
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for every item type in the game.
/// Using string IDs for data-driven flexibility.
pub type ItemId = String;

/// How many watered-days a crop spends in each pre-mature life stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropTimetable {
    pub seed_days: u32,
    pub growing_days: u32,
}

impl CropTimetable {
    /// Total watered-days from planting to maturity.
    pub fn total_days(&self) -> u32 {
        self.seed_days + self.growing_days
    }
}

/// Kind-specific item payload. Items are a tagged union: the shared fields
/// live on [`ItemDef`], everything kind-specific lives here and is validated
/// at catalog-load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemKind {
    Crop { timetable: CropTimetable },
    Milk { tier: u8 },
    Tool,
    Fertilizer,
    Ore,
    CraftedGood { ingredients: Vec<(ItemId, u32)> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: ItemId,
    pub name: String,
    /// Base catalog value in whole currency units (fractional cents allowed).
    pub value: f64,
    pub does_price_fluctuate: bool,
    pub kind: ItemKind,
}

impl ItemDef {
    pub fn crop_timetable(&self) -> Option<&CropTimetable> {
        match &self.kind {
            ItemKind::Crop { timetable } => Some(timetable),
            _ => None,
        }
    }
}

/// Errors surfaced at the catalog boundary. Unknown ids fail fast here so
/// that no missing-item lookup leaks into numeric calculations downstream.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("unknown item id '{id}'")]
    UnknownItem { id: ItemId },
    #[error("invalid item '{id}': {reason}")]
    InvalidItem { id: ItemId, reason: String },
    #[error("catalog parse error: {0}")]
    Parse(String),
}

/// The immutable item catalog, loaded once at startup.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: HashMap<ItemId, ItemDef>,
}

impl ItemCatalog {
    /// Look up an item by id, failing fast on unknown ids.
    pub fn get(&self, id: &str) -> Result<&ItemDef, CatalogError> {
        self.items.get(id).ok_or_else(|| CatalogError::UnknownItem {
            id: id.to_string(),
        })
    }

    /// Every item flagged as price-fluctuating, in stable id order.
    pub fn fluctuating_items(&self) -> Vec<&ItemDef> {
        let mut items: Vec<&ItemDef> = self
            .items
            .values()
            .filter(|item| item.does_price_fluctuate)
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        items
    }
}

/// Which items the general store stocks. Membership here is the "sold in
/// shop" test used by the market's event scheduler.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopInventory {
    pub item_ids: Vec<ItemId>,
}

impl ShopInventory {
    pub fn is_sold_in_shop(&self, id: &str) -> bool {
        self.item_ids.iter().any(|i| i == id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FIELD — fixed-size 2D plot grid
// ═══════════════════════════════════════════════════════════════════════

/// A planted crop occupying one plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub item_id: ItemId,
    pub days_old: u32,
    /// Fractional: watering adds 1, fertilizer adds a bonus on top.
    pub days_watered: f64,
    pub is_fertilized: bool,
    pub was_watered_today: bool,
}

impl Crop {
    pub fn new(item_id: impl Into<ItemId>) -> Self {
        Self {
            item_id: item_id.into(),
            days_old: 0,
            days_watered: 0.0,
            is_fertilized: false,
            was_watered_today: false,
        }
    }
}

/// Whatever occupies one field cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlotContent {
    Crop(Crop),
    /// A placed non-crop item (sprinkler, ore, tool). Minimal shape shared
    /// by all placeable entities.
    Item { item_id: ItemId },
}

impl PlotContent {
    pub fn item_id(&self) -> &str {
        match self {
            PlotContent::Crop(crop) => &crop.item_id,
            PlotContent::Item { item_id } => item_id,
        }
    }

    pub fn as_crop(&self) -> Option<&Crop> {
        match self {
            PlotContent::Crop(crop) => Some(crop),
            PlotContent::Item { .. } => None,
        }
    }
}

/// Fixed-size row-major grid of plots. Width and height never change after
/// creation.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    width: u32,
    height: u32,
    plots: Vec<Option<PlotContent>>,
}

impl Field {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            plots: vec![None; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    pub fn plot(&self, x: u32, y: u32) -> Option<&PlotContent> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.plots[(y * self.width + x) as usize].as_ref()
    }

    pub fn plot_mut(&mut self, x: u32, y: u32) -> Option<&mut PlotContent> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.plots[(y * self.width + x) as usize].as_mut()
    }

    pub fn set_plot(&mut self, x: u32, y: u32, content: Option<PlotContent>) {
        if x < self.width && y < self.height {
            self.plots[(y * self.width + x) as usize] = content;
        }
    }

    /// Row-major iteration over every plot with its coordinates.
    pub fn iter_plots(&self) -> impl Iterator<Item = (u32, u32, Option<&PlotContent>)> {
        let width = self.width;
        self.plots
            .iter()
            .enumerate()
            .map(move |(i, plot)| (i as u32 % width, i as u32 / width, plot.as_ref()))
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(STANDARD_FIELD_WIDTH, STANDARD_FIELD_HEIGHT)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// COWS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CowColor {
    Blue,
    Brown,
    Green,
    Orange,
    Purple,
    White,
    Yellow,
}

/// Every color a freshly generated cow can roll.
pub const COW_COLORS: [CowColor; 7] = [
    CowColor::Blue,
    CowColor::Brown,
    CowColor::Green,
    CowColor::Orange,
    CowColor::Purple,
    CowColor::White,
    CowColor::Yellow,
];

pub type CowId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cow {
    pub id: CowId,
    pub name: String,
    pub gender: Gender,
    pub color: CowColor,
    /// Accumulated set of ancestor colors carried across generations.
    pub colors_in_bloodline: BTreeSet<CowColor>,
    pub base_weight: f64,
    /// Stays within [COW_WEIGHT_MULTIPLIER_MINIMUM, COW_WEIGHT_MULTIPLIER_MAXIMUM].
    pub weight_multiplier: f64,
    pub days_old: u32,
    pub days_since_milking: u32,
    /// 0.0 (miserable) to 1.0 (blissful).
    pub happiness: f32,
    pub happiness_boosts_today: u32,
    pub is_using_hugging_machine: bool,
}

/// All cows the player owns, plus the id sequence for new ones.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Herd {
    pub cows: Vec<Cow>,
    next_id: CowId,
}

impl Herd {
    /// Hands out a fresh, never-reused cow id.
    pub fn allocate_id(&mut self) -> CowId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn cow(&self, id: CowId) -> Option<&Cow> {
        self.cows.iter().find(|c| c.id == id)
    }

    pub fn cow_mut(&mut self, id: CowId) -> Option<&mut Cow> {
        self.cows.iter_mut().find(|c| c.id == id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// MARKET
// ═══════════════════════════════════════════════════════════════════════

/// An active crash or surge targeting one item's value adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEvent {
    pub item_id: ItemId,
    pub days_remaining: u32,
}

/// Mapping item id → value multiplier. An absent key means multiplier 1.
pub type ValueAdjustmentMap = HashMap<ItemId, f64>;

/// Live market state: the active price events plus the adjustment map
/// regenerated from them once per day.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Market {
    pub price_crashes: HashMap<ItemId, PriceEvent>,
    pub price_surges: HashMap<ItemId, PriceEvent>,
    pub value_adjustments: ValueAdjustmentMap,
}

// ═══════════════════════════════════════════════════════════════════════
// INVENTORY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub id: ItemId,
    pub quantity: u32,
}

/// Stack-based item storage counted against a total-quantity capacity.
/// A limit of [`STORAGE_UNLIMITED`] means no cap.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub entries: Vec<InventoryEntry>,
    pub limit: i64,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            limit: STANDARD_STORAGE_LIMIT,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// MONEY
// ═══════════════════════════════════════════════════════════════════════

/// Round a currency amount to whole cents using integer-cent arithmetic
/// (×100, round, ÷100) so repeated multiplier application never accumulates
/// float drift. Every money-producing calculator rounds through this.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

// ═══════════════════════════════════════════════════════════════════════
// RANDOMNESS — injectable entropy source
// ═══════════════════════════════════════════════════════════════════════

/// The engine's single entropy source. Seed it in tests for reproducible
/// breeding, market, and generation outcomes.
#[derive(Resource, Debug)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

/// Fired by the state store when a day ends. Every domain folds this into
/// its own overnight processing.
#[derive(Event, Debug, Clone)]
pub struct DayEndEvent {
    pub day: u32,
}

/// Request to breed two cows from the herd.
#[derive(Event, Debug, Clone)]
pub struct BreedCowsEvent {
    pub first_id: CowId,
    pub second_id: CowId,
}

/// Request to milk a cow; the milk item lands in the inventory.
#[derive(Event, Debug, Clone)]
pub struct MilkCowEvent {
    pub cow_id: CowId,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const STANDARD_FIELD_WIDTH: u32 = 6;
pub const STANDARD_FIELD_HEIGHT: u32 = 10;

/// Watered-day bonus applied on top of the normal +1 when a fertilized crop
/// is watered. Fertilizer never ages a crop that wasn't watered.
pub const FERTILIZER_GROWTH_BONUS: f64 = 0.5;

pub const SPRINKLER_RANGE: u32 = 1;
pub const SPRINKLER_ITEM_ID: &str = "sprinkler";

pub const COW_STARTING_WEIGHT_BASE: f64 = 1800.0;
pub const COW_STARTING_WEIGHT_VARIANCE: f64 = 200.0;
pub const MALE_COW_WEIGHT_MULTIPLIER: f64 = 1.2;
pub const COW_WEIGHT_MULTIPLIER_MINIMUM: f64 = 0.5;
pub const COW_WEIGHT_MULTIPLIER_MAXIMUM: f64 = 1.5;

/// Age (in days) past which a cow's value multiplier bottoms out.
pub const COW_MAXIMUM_AGE_VALUE_DROPOFF: u32 = 100;
pub const COW_MAXIMUM_VALUE_MULTIPLIER: f64 = 1.0;
pub const COW_MINIMUM_VALUE_MULTIPLIER: f64 = 0.1;

/// Days between milkings for the scrawniest and heaviest cows.
pub const COW_MILK_RATE_SLOWEST: f64 = 7.0;
pub const COW_MILK_RATE_FASTEST: f64 = 1.0;

pub const COW_HUG_BENEFIT: f32 = 0.05;
pub const MAX_DAILY_COW_HUG_BENEFITS: u32 = 3;
pub const COW_HAPPINESS_DAILY_DECAY: f32 = 0.1;

/// Daily weight-multiplier drift per point of happiness above/below neutral.
pub const COW_WEIGHT_DRIFT_RATE: f64 = 0.05;

pub const MILK_TIER_1: &str = "milk_1";
pub const MILK_TIER_2: &str = "milk_2";
pub const MILK_TIER_3: &str = "milk_3";

pub const VALUE_ADJUSTMENT_MINIMUM: f64 = 0.5;
pub const VALUE_ADJUSTMENT_MAXIMUM: f64 = 1.5;

/// Price events run this many days shorter than the targeted crop's own
/// growth cycle.
pub const PRICE_EVENT_DURATION_DECREASE: u32 = 2;
/// Daily chance of a new crash or surge appearing.
pub const PRICE_EVENT_CHANCE: f64 = 0.2;

pub const RESALE_VALUE_MULTIPLIER: f64 = 0.5;

pub const STORAGE_UNLIMITED: i64 = -1;
pub const STANDARD_STORAGE_LIMIT: i64 = 100;

/// Distinct-key count at which a memo cache drops all entries and rebuilds.
pub const MEMO_CLEAR_THRESHOLD: usize = 256;

/// Name pool for freshly generated cows.
pub const COW_NAMES: [&str; 12] = [
    "Annabelle",
    "Bessie",
    "Buttercup",
    "Clementine",
    "Daisy",
    "Ferdinand",
    "Gertrude",
    "Hank",
    "Marigold",
    "Mabel",
    "Norman",
    "Rosie",
];
