//! Data layer — populates the item catalog and shop stock at startup.
//!
//! The built-in game data lives in submodules as plain Rust; external data
//! packs load through [`ItemCatalog::from_ron`]. Either way the catalog
//! passes [`validate_catalog`] before any domain reads it.

mod items;
mod shops;

use bevy::prelude::*;

use crate::shared::*;

pub use items::populate_items;
pub use shops::populate_shop;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ItemCatalog>()
            .init_resource::<ShopInventory>()
            .add_systems(Startup, load_all_data);
    }
}

/// Single system that populates the catalog and shop stock.
fn load_all_data(mut catalog: ResMut<ItemCatalog>, mut shop: ResMut<ShopInventory>) {
    info!("[Data] Populating item catalog…");

    items::populate_items(&mut catalog);
    info!("  Items loaded: {}", catalog.items.len());

    shops::populate_shop(&mut shop);
    info!("  Shop stock loaded: {}", shop.item_ids.len());

    if let Err(err) = validate_catalog(&catalog) {
        // Built-in data is authored by hand; shipping an invalid catalog
        // is unrecoverable and must not reach gameplay.
        panic!("[Data] Catalog validation failed: {err}");
    }
}

impl ItemCatalog {
    /// Parse a catalog from a RON list of item definitions, validating the
    /// result before handing it out.
    pub fn from_ron(source: &str) -> Result<Self, CatalogError> {
        let defs: Vec<ItemDef> =
            ron::from_str(source).map_err(|err| CatalogError::Parse(err.to_string()))?;

        let mut catalog = Self::default();
        for def in defs {
            if catalog.items.contains_key(&def.id) {
                return Err(CatalogError::InvalidItem {
                    id: def.id,
                    reason: "duplicate item id".into(),
                });
            }
            catalog.items.insert(def.id.clone(), def);
        }
        validate_catalog(&catalog)?;
        Ok(catalog)
    }
}

/// Structural checks on a loaded catalog: sane values, non-degenerate crop
/// timetables, crafting ingredients that resolve to real items.
pub fn validate_catalog(catalog: &ItemCatalog) -> Result<(), CatalogError> {
    for item in catalog.items.values() {
        if item.value < 0.0 || !item.value.is_finite() {
            return Err(CatalogError::InvalidItem {
                id: item.id.clone(),
                reason: format!("negative or non-finite value {}", item.value),
            });
        }
        if item.does_price_fluctuate && item.value == 0.0 {
            return Err(CatalogError::InvalidItem {
                id: item.id.clone(),
                reason: "fluctuating item with zero value".into(),
            });
        }
        match &item.kind {
            ItemKind::Crop { timetable } => {
                if timetable.total_days() == 0 {
                    return Err(CatalogError::InvalidItem {
                        id: item.id.clone(),
                        reason: "crop timetable has zero total days".into(),
                    });
                }
            }
            ItemKind::Milk { tier } => {
                if !(1..=3).contains(tier) {
                    return Err(CatalogError::InvalidItem {
                        id: item.id.clone(),
                        reason: format!("milk tier {tier} out of range"),
                    });
                }
            }
            ItemKind::CraftedGood { ingredients } => {
                for (ingredient_id, quantity) in ingredients {
                    if *quantity == 0 {
                        return Err(CatalogError::InvalidItem {
                            id: item.id.clone(),
                            reason: format!("zero-quantity ingredient '{ingredient_id}'"),
                        });
                    }
                    catalog.get(ingredient_id).map_err(|_| CatalogError::InvalidItem {
                        id: item.id.clone(),
                        reason: format!("unknown ingredient '{ingredient_id}'"),
                    })?;
                }
            }
            ItemKind::Tool | ItemKind::Fertilizer | ItemKind::Ore => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built_in_catalog() -> ItemCatalog {
        let mut catalog = ItemCatalog::default();
        populate_items(&mut catalog);
        catalog
    }

    #[test]
    fn built_in_data_validates() {
        assert!(validate_catalog(&built_in_catalog()).is_ok());
    }

    #[test]
    fn shop_stock_refers_to_real_items() {
        let catalog = built_in_catalog();
        let mut shop = ShopInventory::default();
        populate_shop(&mut shop);
        for id in &shop.item_ids {
            assert!(catalog.get(id).is_ok(), "shop stocks unknown item '{id}'");
        }
    }

    #[test]
    fn milk_tiers_are_registered_for_every_grade() {
        let catalog = built_in_catalog();
        for id in [MILK_TIER_1, MILK_TIER_2, MILK_TIER_3] {
            assert!(catalog.get(id).is_ok());
        }
    }

    #[test]
    fn ron_catalogs_parse_and_validate() {
        let source = r#"[
            (
                id: "radish",
                name: "Radish",
                value: 18.0,
                does_price_fluctuate: true,
                kind: Crop(timetable: (seed_days: 1, growing_days: 2)),
            ),
        ]"#;
        let catalog = ItemCatalog::from_ron(source).unwrap();
        let radish = catalog.get("radish").unwrap();
        assert_eq!(radish.crop_timetable().unwrap().total_days(), 3);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let source = r#"[
            (id: "ore", name: "Ore", value: 1.0, does_price_fluctuate: false, kind: Ore),
            (id: "ore", name: "Ore", value: 2.0, does_price_fluctuate: false, kind: Ore),
        ]"#;
        assert!(matches!(
            ItemCatalog::from_ron(source),
            Err(CatalogError::InvalidItem { .. })
        ));
    }

    #[test]
    fn crafted_goods_must_reference_real_ingredients() {
        let mut catalog = built_in_catalog();
        catalog.items.insert(
            "mystery_dish".into(),
            ItemDef {
                id: "mystery_dish".into(),
                name: "Mystery Dish".into(),
                value: 10.0,
                does_price_fluctuate: false,
                kind: ItemKind::CraftedGood {
                    ingredients: vec![("unobtainium".into(), 1)],
                },
            },
        );
        assert!(matches!(
            validate_catalog(&catalog),
            Err(CatalogError::InvalidItem { .. })
        ));
    }
}
