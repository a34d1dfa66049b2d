//! Watering — by hand, and automatically by placed sprinklers.
//!
//! A sprinkler is just a plot holding the sprinkler tool item. At day end,
//! every sprinkler waters the crops within [`SPRINKLER_RANGE`] through the
//! bounded range fold, before crop aging runs in the same tick.

use bevy::prelude::*;

use super::field::for_range;
use crate::shared::*;

/// Mark the crop at (x, y) as watered today. Non-crop plots and empty plots
/// are left alone.
pub fn water_plot(field: &mut Field, x: u32, y: u32) {
    if let Some(PlotContent::Crop(crop)) = field.plot_mut(x, y) {
        crop.was_watered_today = true;
    }
}

/// Water every in-bounds plot in the square of `radius` around the center.
/// Area-effect watering is a range fold: the field threads through each
/// cell application in row-major order.
pub fn water_range(field: Field, radius: u32, cx: i64, cy: i64) -> Field {
    let (width, height) = (field.width(), field.height());
    for_range(
        field,
        width,
        height,
        |mut field, x, y| {
            water_plot(&mut field, x, y);
            field
        },
        radius,
        cx,
        cy,
    )
}

/// Runs on `DayEndEvent`, before crop aging: every placed sprinkler waters
/// its neighborhood.
pub fn on_day_end(mut day_end_events: EventReader<DayEndEvent>, mut field: ResMut<Field>) {
    for _ in day_end_events.read() {
        let sprinklers: Vec<(i64, i64)> = field
            .iter_plots()
            .filter(|(_, _, plot)| {
                matches!(plot, Some(PlotContent::Item { item_id }) if item_id == SPRINKLER_ITEM_ID)
            })
            .map(|(x, y, _)| (x as i64, y as i64))
            .collect();

        if !sprinklers.is_empty() {
            debug!("[Farming] {} sprinkler(s) watering", sprinklers.len());
        }

        for (cx, cy) in sprinklers {
            let current = std::mem::take(&mut *field);
            *field = water_range(current, SPRINKLER_RANGE, cx, cy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of_crops(width: u32, height: u32) -> Field {
        let mut field = Field::new(width, height);
        for y in 0..height {
            for x in 0..width {
                field.set_plot(x, y, Some(PlotContent::Crop(Crop::new("carrot"))));
            }
        }
        field
    }

    fn watered_positions(field: &Field) -> Vec<(u32, u32)> {
        field
            .iter_plots()
            .filter(|(_, _, plot)| {
                plot.and_then(|p| p.as_crop())
                    .map(|c| c.was_watered_today)
                    .unwrap_or(false)
            })
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn waters_the_full_square_in_the_interior() {
        let field = water_range(field_of_crops(5, 5), 1, 2, 2);
        assert_eq!(watered_positions(&field).len(), 9);
    }

    #[test]
    fn clips_at_the_field_edge() {
        let field = water_range(field_of_crops(5, 5), 1, 0, 0);
        assert_eq!(
            watered_positions(&field),
            vec![(0, 0), (1, 0), (0, 1), (1, 1)]
        );
    }

    #[test]
    fn non_crop_plots_are_untouched() {
        let mut field = field_of_crops(3, 3);
        field.set_plot(
            1,
            1,
            Some(PlotContent::Item {
                item_id: SPRINKLER_ITEM_ID.to_string(),
            }),
        );
        let field = water_range(field, 1, 1, 1);
        assert_eq!(watered_positions(&field).len(), 8, "the sprinkler plot itself holds no crop");
    }
}
