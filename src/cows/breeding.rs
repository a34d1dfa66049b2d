//! Cow generation and bloodline breeding.

use rand::Rng;
use std::collections::BTreeSet;
use thiserror::Error;

use crate::shared::*;

/// Breeding two cows of the same gender is a domain violation, reported
/// with both offending records attached rather than silently ignored.
#[derive(Debug, Clone, Error)]
#[error(
    "cannot breed '{}' (#{}) with '{}' (#{}): both are {:?}",
    first.name, first.id, second.name, second.id, first.gender
)]
pub struct BreedingError {
    pub first: Cow,
    pub second: Cow,
}

/// Field overrides for [`generate_cow`]. Anything left `None` is rolled
/// from the injected rng; breeding uses this to pin inherited traits.
#[derive(Debug, Clone, Default)]
pub struct CowOptions {
    pub gender: Option<Gender>,
    pub color: Option<CowColor>,
    pub colors_in_bloodline: Option<BTreeSet<CowColor>>,
    pub base_weight: Option<f64>,
    pub name: Option<String>,
}

/// Roll a brand-new cow. Callers allocate the id through
/// [`Herd::allocate_id`] so ids stay unique and deterministic.
pub fn generate_cow(id: CowId, options: CowOptions, rng: &mut impl Rng) -> Cow {
    let gender = options.gender.unwrap_or_else(|| {
        if rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        }
    });

    let base_weight = options.base_weight.unwrap_or_else(|| {
        let gender_multiplier = match gender {
            Gender::Male => MALE_COW_WEIGHT_MULTIPLIER,
            Gender::Female => 1.0,
        };
        COW_STARTING_WEIGHT_BASE * gender_multiplier
            + rng.gen_range(-COW_STARTING_WEIGHT_VARIANCE..=COW_STARTING_WEIGHT_VARIANCE)
    });

    let color = options
        .color
        .unwrap_or_else(|| COW_COLORS[rng.gen_range(0..COW_COLORS.len())]);

    // A fresh bloodline is the singleton of the cow's own color.
    let colors_in_bloodline = options
        .colors_in_bloodline
        .unwrap_or_else(|| BTreeSet::from([color]));

    let name = options
        .name
        .unwrap_or_else(|| COW_NAMES[rng.gen_range(0..COW_NAMES.len())].to_string());

    Cow {
        id,
        name,
        gender,
        color,
        colors_in_bloodline,
        base_weight,
        weight_multiplier: 1.0,
        days_old: 0,
        days_since_milking: 0,
        happiness: 0.0,
        happiness_boosts_today: 0,
        is_using_hugging_machine: false,
    }
}

/// Breed two cows into an offspring.
///
/// The offspring takes the father's color, the union of both parents'
/// bloodlines, and the mean of their base weights; everything else is
/// re-rolled as if newly generated.
pub fn breed_cows(
    id: CowId,
    first: &Cow,
    second: &Cow,
    rng: &mut impl Rng,
) -> Result<Cow, BreedingError> {
    if first.gender == second.gender {
        return Err(BreedingError {
            first: first.clone(),
            second: second.clone(),
        });
    }

    let (father, mother) = match first.gender {
        Gender::Male => (first, second),
        Gender::Female => (second, first),
    };

    let mut bloodline: BTreeSet<CowColor> = father
        .colors_in_bloodline
        .union(&mother.colors_in_bloodline)
        .copied()
        .collect();
    // Both parents' own colors are inserted explicitly even when the
    // inherited sets already carry them: records that predate the bloodline
    // field would otherwise lose their parent's color here.
    bloodline.insert(father.color);
    bloodline.insert(mother.color);

    Ok(generate_cow(
        id,
        CowOptions {
            color: Some(father.color),
            colors_in_bloodline: Some(bloodline),
            base_weight: Some((father.base_weight + mother.base_weight) / 2.0),
            ..Default::default()
        },
        rng,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cow_of(id: CowId, gender: Gender, color: CowColor, rng: &mut StdRng) -> Cow {
        generate_cow(
            id,
            CowOptions {
                gender: Some(gender),
                color: Some(color),
                ..Default::default()
            },
            rng,
        )
    }

    #[test]
    fn fresh_cow_bloodline_is_its_own_color() {
        let mut rng = StdRng::seed_from_u64(1);
        let cow = cow_of(0, Gender::Female, CowColor::Purple, &mut rng);
        assert_eq!(cow.colors_in_bloodline, BTreeSet::from([CowColor::Purple]));
    }

    #[test]
    fn male_cows_start_heavier() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let male = cow_of(0, Gender::Male, CowColor::White, &mut rng);
            let expected_base = COW_STARTING_WEIGHT_BASE * MALE_COW_WEIGHT_MULTIPLIER;
            assert!(
                (male.base_weight - expected_base).abs() <= COW_STARTING_WEIGHT_VARIANCE,
                "male base weight {} outside variance of {}",
                male.base_weight,
                expected_base
            );
        }
    }

    #[test]
    fn breeding_requires_opposite_genders() {
        let mut rng = StdRng::seed_from_u64(2);
        let a = cow_of(0, Gender::Male, CowColor::Blue, &mut rng);
        let b = cow_of(1, Gender::Male, CowColor::Green, &mut rng);

        let err = breed_cows(2, &a, &b, &mut rng).unwrap_err();
        assert_eq!(err.first.id, a.id, "error carries both offending cows");
        assert_eq!(err.second.id, b.id);
    }

    #[test]
    fn offspring_inherits_father_color_and_mean_weight() {
        let mut rng = StdRng::seed_from_u64(3);
        let father = cow_of(0, Gender::Male, CowColor::Orange, &mut rng);
        let mother = cow_of(1, Gender::Female, CowColor::Yellow, &mut rng);

        let calf = breed_cows(2, &father, &mother, &mut rng).unwrap();
        assert_eq!(calf.color, CowColor::Orange);
        assert_eq!(
            calf.base_weight,
            (father.base_weight + mother.base_weight) / 2.0
        );
        // Argument order must not matter for parent roles.
        let calf2 = breed_cows(3, &mother, &father, &mut rng).unwrap();
        assert_eq!(calf2.color, CowColor::Orange);
    }

    #[test]
    fn offspring_bloodline_is_superset_of_both_parents() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut father = cow_of(0, Gender::Male, CowColor::Blue, &mut rng);
        father.colors_in_bloodline =
            BTreeSet::from([CowColor::Green, CowColor::White]);
        let mut mother = cow_of(1, Gender::Female, CowColor::Brown, &mut rng);
        // Simulate a record written before the bloodline field existed.
        mother.colors_in_bloodline = BTreeSet::new();

        let calf = breed_cows(2, &father, &mother, &mut rng).unwrap();
        let expected = BTreeSet::from([
            CowColor::Green,
            CowColor::White,
            CowColor::Blue,  // father's own color, added explicitly
            CowColor::Brown, // mother's own color, despite her empty set
        ]);
        assert_eq!(calf.colors_in_bloodline, expected);
    }
}
