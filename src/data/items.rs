use crate::shared::*;

/// Populate the item catalog with all item definitions.
///
/// Timetables are watered-days per pre-mature stage:
///   carrot (2+3), turnip (1+3), pumpkin (3+6), melon (4+6), eggplant (3+5)
///
/// Base values are the shop buy price; sale prices run through the market's
/// value adjustments at sale time.
pub fn populate_items(catalog: &mut ItemCatalog) {
    let items: Vec<ItemDef> = vec![
        // ── Crops ───────────────────────────────────────────────────────
        ItemDef {
            id: "carrot".into(),
            name: "Carrot".into(),
            value: 25.0,
            does_price_fluctuate: true,
            kind: ItemKind::Crop {
                timetable: CropTimetable {
                    seed_days: 2,
                    growing_days: 3,
                },
            },
        },
        ItemDef {
            id: "turnip".into(),
            name: "Turnip".into(),
            value: 15.0,
            does_price_fluctuate: true,
            kind: ItemKind::Crop {
                timetable: CropTimetable {
                    seed_days: 1,
                    growing_days: 3,
                },
            },
        },
        ItemDef {
            id: "pumpkin".into(),
            name: "Pumpkin".into(),
            value: 120.0,
            does_price_fluctuate: true,
            kind: ItemKind::Crop {
                timetable: CropTimetable {
                    seed_days: 3,
                    growing_days: 6,
                },
            },
        },
        ItemDef {
            id: "melon".into(),
            name: "Melon".into(),
            value: 90.0,
            does_price_fluctuate: true,
            kind: ItemKind::Crop {
                timetable: CropTimetable {
                    seed_days: 4,
                    growing_days: 6,
                },
            },
        },
        ItemDef {
            id: "eggplant".into(),
            name: "Eggplant".into(),
            value: 65.0,
            does_price_fluctuate: true,
            kind: ItemKind::Crop {
                timetable: CropTimetable {
                    seed_days: 3,
                    growing_days: 5,
                },
            },
        },
        // ── Milk ────────────────────────────────────────────────────────
        ItemDef {
            id: MILK_TIER_1.into(),
            name: "Milk".into(),
            value: 40.0,
            does_price_fluctuate: false,
            kind: ItemKind::Milk { tier: 1 },
        },
        ItemDef {
            id: MILK_TIER_2.into(),
            name: "Rich Milk".into(),
            value: 80.0,
            does_price_fluctuate: false,
            kind: ItemKind::Milk { tier: 2 },
        },
        ItemDef {
            id: MILK_TIER_3.into(),
            name: "Golden Milk".into(),
            value: 160.0,
            does_price_fluctuate: false,
            kind: ItemKind::Milk { tier: 3 },
        },
        // ── Tools & consumables ─────────────────────────────────────────
        ItemDef {
            id: SPRINKLER_ITEM_ID.into(),
            name: "Sprinkler".into(),
            value: 500.0,
            does_price_fluctuate: false,
            kind: ItemKind::Tool,
        },
        ItemDef {
            id: "fertilizer".into(),
            name: "Fertilizer".into(),
            value: 30.0,
            does_price_fluctuate: false,
            kind: ItemKind::Fertilizer,
        },
        // ── Raw materials & crafting ────────────────────────────────────
        ItemDef {
            id: "copper_ore".into(),
            name: "Copper Ore".into(),
            value: 12.0,
            does_price_fluctuate: false,
            kind: ItemKind::Ore,
        },
        ItemDef {
            id: "cheese".into(),
            name: "Cheese".into(),
            value: 150.0,
            does_price_fluctuate: false,
            kind: ItemKind::CraftedGood {
                ingredients: vec![(MILK_TIER_1.into(), 2)],
            },
        },
    ];

    for item in items {
        catalog.items.insert(item.id.clone(), item);
    }
}
