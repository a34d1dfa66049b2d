use crate::shared::*;

/// Populate the general store's stock list. Membership here is what makes
/// a crop eligible for market price events.
pub fn populate_shop(shop: &mut ShopInventory) {
    shop.item_ids = vec![
        "carrot".into(),
        "turnip".into(),
        "pumpkin".into(),
        "melon".into(),
        "eggplant".into(),
        SPRINKLER_ITEM_ID.into(),
        "fertilizer".into(),
    ];
}
