//! Outfit Engine Integration Tests
//!
//! Exercises the public entry points (generate / validate / score) against
//! the behavioural properties the engine guarantees, across many seeds and
//! a deliberately awkward wardrobe.

use outfit_engine::{
    calculate_compatibility, generate_outfit, load_inventory, parse_inventory_json,
    score_compatibility, validate_outfit, EngineConfig, EngineError, FixedRandom, Garment,
    OutfitComposer, OutfitOptions, SeededRandom, Violation,
};

fn ids(garments: &[Garment]) -> Vec<&str> {
    garments.iter().map(|g| g.id.as_str()).collect()
}

/// Wardrobe with competing bottoms, dresses, base layers and seasonal tags
fn mixed_wardrobe() -> Vec<Garment> {
    vec![
        Garment::new("tee", "tops").with_color("white").with_season("summer"),
        Garment::new("sweater", "Knit Tops").with_material("wool").with_season("winter"),
        Garment::new("blouse", "tops").with_occasion("formal").with_season("all-season"),
        Garment::new("jeans", "Skinny Jeans").with_color("blue"),
        Garment::new("shorts", "shorts").with_season("summer").with_material("cotton"),
        Garment::new("skirt", "skirts").with_occasion("formal").with_times_worn(4),
        Garment::new("sundress", "dresses").with_season("summer").with_favorite(true),
        Garment::new("gown", "Evening Dresses").with_occasion("party").with_season("winter"),
        Garment::new("tights", "tights").with_season("winter"),
        Garment::new("thermal", "thermal").with_times_worn(12),
        Garment::new("coat", "coats").with_material("wool").with_season("winter"),
        Garment::new("mac", "Rain Jackets").with_season("spring"),
        Garment::new("boots", "shoes").with_season("winter"),
        Garment::new("sandals", "shoes").with_season("summer"),
        Garment::new("sneakers", "shoes").with_times_worn(20),
        Garment::new("scarf", "scarves").with_season("winter"),
        Garment::new("cap", "hats").with_season("summer"),
        Garment::new("tote", "bags"),
        Garment::new("brooch", "jewelry").with_occasion("party"),
        Garment::new("umbrella", "umbrella"),
    ]
}

fn option_grid() -> Vec<OutfitOptions> {
    let mut grid = Vec::new();
    for (temp, condition) in [(-5.0, "snow"), (12.0, "rain"), (17.0, "clear"), (28.0, "sunny")] {
        for occasion in [None, Some("casual"), Some("formal"), Some("party")] {
            for season in [None, Some("winter"), Some("summer")] {
                let mut options = OutfitOptions::default().with_weather(temp, condition);
                if let Some(o) = occasion {
                    options = options.with_occasion(o);
                }
                if let Some(s) = season {
                    options = options.with_season(s);
                }
                grid.push(options);
            }
        }
    }
    grid.push(OutfitOptions::default());
    grid
}

#[test]
fn deterministic_with_stubbed_randomness() {
    let inventory = mixed_wardrobe();
    for options in option_grid() {
        for draw in [0.0, 0.45, 0.99] {
            let a = generate_outfit(&inventory, &options, &mut FixedRandom(draw)).unwrap();
            let b = generate_outfit(&inventory, &options, &mut FixedRandom(draw)).unwrap();
            assert_eq!(a, b);
        }
    }
}

#[test]
fn generated_outfits_never_double_up_leg_wear_or_mix_dress_and_bottoms() {
    let inventory = mixed_wardrobe();
    for options in option_grid() {
        for seed in 0..20 {
            let outfit =
                generate_outfit(&inventory, &options, &mut SeededRandom::new(seed)).unwrap();
            let result = validate_outfit(&outfit);

            assert!(
                !result.violations.iter().any(|v| matches!(v, Violation::DuplicateLegWear { .. })),
                "duplicate leg-wear in {:?}",
                ids(&outfit)
            );
            assert!(
                !result.has(&Violation::DressWithSeparates),
                "dress with bottoms in {:?}",
                ids(&outfit)
            );
            assert!(outfit.len() <= 7);
        }
    }
}

#[test]
fn generated_outfits_respect_season() {
    let inventory = mixed_wardrobe();
    for options in option_grid() {
        let Some(season) = options.season.clone() else {
            continue;
        };
        for seed in 0..10 {
            let outfit =
                generate_outfit(&inventory, &options, &mut SeededRandom::new(seed)).unwrap();
            for garment in &outfit {
                if let Some(tag) = &garment.season {
                    assert!(
                        tag.eq_ignore_ascii_case("all-season") || tag.eq_ignore_ascii_case(&season),
                        "{} ({}) worn in {}",
                        garment.id,
                        tag,
                        season
                    );
                }
            }
        }
    }
}

#[test]
fn avoided_items_never_appear() {
    let inventory = mixed_wardrobe();
    let avoid = ["jeans", "boots", "sneakers", "tote"];
    for options in option_grid() {
        let options = options.avoiding(avoid);
        for seed in 0..5 {
            let outfit =
                generate_outfit(&inventory, &options, &mut SeededRandom::new(seed)).unwrap();
            assert!(outfit.iter().all(|g| !avoid.contains(&g.id.as_str())));
        }
    }
}

#[test]
fn compatibility_is_bounded() {
    let inventory = mixed_wardrobe();
    // Every prefix and the whole wardrobe, including deliberately invalid mixes
    for n in 0..=inventory.len() {
        let score = score_compatibility(&inventory[..n]);
        assert!(score <= 100);
    }
    assert_eq!(score_compatibility(&[]), 100);

    // Worst case is still clamped at the floor of the deduction table
    let clash: Vec<Garment> = ["red", "blue", "green", "black", "white"]
        .iter()
        .zip(["jeans", "skirts", "shorts", "pants", "bottoms"])
        .zip(["formal", "casual", "sport", "party", "beach"])
        .enumerate()
        .map(|(i, ((color, category), occasion))| {
            Garment::new(format!("c{}", i), category)
                .with_color(color)
                .with_occasion(occasion)
        })
        .collect();
    assert_eq!(score_compatibility(&clash), 45);
}

#[test]
fn cold_casual_scenario() {
    let inventory = vec![
        Garment::new("top", "tops").with_season("all-season"),
        Garment::new("jeans", "jeans"),
        Garment::new("coat", "coats").with_material("wool"),
        Garment::new("shoes", "shoes"),
    ];
    let options = OutfitOptions::default()
        .with_weather(5.0, "clear")
        .with_occasion("casual");

    for draw in [0.0, 0.5, 0.99] {
        let outfit = generate_outfit(&inventory, &options, &mut FixedRandom(draw)).unwrap();
        assert_eq!(ids(&outfit), vec!["top", "jeans", "coat", "shoes"]);
        assert!(validate_outfit(&outfit).valid);
        assert_eq!(score_compatibility(&outfit), 100);
    }

    // A thermal in the wardrobe adds the base layer alongside the jeans
    let mut with_thermal = inventory.clone();
    with_thermal.push(Garment::new("thermal", "thermal"));
    let outfit = generate_outfit(&with_thermal, &options, &mut FixedRandom(0.5)).unwrap();
    assert_eq!(ids(&outfit), vec!["thermal", "top", "jeans", "coat", "shoes"]);
    assert!(validate_outfit(&outfit).valid);
}

#[test]
fn empty_inventory_scenario() {
    let outfit = generate_outfit(&[], &OutfitOptions::default(), &mut FixedRandom(0.0)).unwrap();
    assert!(outfit.is_empty());

    let result = validate_outfit(&outfit);
    assert!(!result.valid);
    assert_eq!(result.issues, vec!["missing top garment", "missing shoes"]);

    assert_eq!(score_compatibility(&outfit), 100);
}

#[test]
fn five_color_scenario() {
    let outfit = vec![
        Garment::new("t", "tops").with_color("red"),
        Garment::new("j", "jeans").with_color("blue"),
        Garment::new("s", "shoes").with_color("green"),
        Garment::new("h", "hats").with_color("black"),
        Garment::new("b", "bags").with_color("white"),
    ];
    assert!(validate_outfit(&outfit).valid);
    assert_eq!(score_compatibility(&outfit), 90);
}

#[test]
fn unmatched_wardrobe_yields_empty_outfit() {
    let inventory = vec![Garment::new("u", "umbrella"), Garment::new("w", "wallet")];
    let options = OutfitOptions::default().with_weather(0.0, "rain");
    let outfit = generate_outfit(&inventory, &options, &mut FixedRandom(0.0)).unwrap();
    assert!(outfit.is_empty());
}

#[test]
fn json_inventory_end_to_end() {
    let payload = r#"[
        {"id": "d1", "category": "dresses", "season": "summer", "occasion": "party"},
        {"id": "t1", "category": "tops"},
        {"id": "s1", "category": "shorts", "material": "cotton"},
        {"id": "f1", "category": "shoes"}
    ]"#;
    let inventory = parse_inventory_json(payload).unwrap();
    let options = OutfitOptions::default()
        .with_weather(30.0, "sunny")
        .with_occasion("party")
        .with_season("summer");

    let dressed = generate_outfit(&inventory, &options, &mut FixedRandom(0.59)).unwrap();
    assert_eq!(ids(&dressed), vec!["d1", "f1"]);

    let separates = generate_outfit(&inventory, &options, &mut FixedRandom(0.6)).unwrap();
    assert_eq!(ids(&separates), vec!["t1", "s1", "f1"]);

    assert!(matches!(
        parse_inventory_json(r#""not a list""#),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn csv_inventory_end_to_end() {
    let path = std::env::temp_dir().join(format!("outfit_engine_{}.csv", std::process::id()));
    std::fs::write(
        &path,
        "id,category,color,material,season,occasion,favorite,times_worn\n\
         t1,tops,white,,all-season,casual,true,2\n\
         j1,jeans,blue,denim,,casual,false,10\n\
         c1,coats,camel,wool,winter,,false,0\n\
         s1,shoes,black,leather,,,false,1\n",
    )
    .unwrap();

    let inventory = load_inventory(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(inventory.len(), 4);
    assert!(inventory[0].favorite);
    assert_eq!(inventory[0].material, None);
    assert_eq!(inventory[1].times_worn, 10);
    assert_eq!(inventory[2].season.as_deref(), Some("winter"));

    let options = OutfitOptions::default()
        .with_weather(3.0, "clear")
        .with_season("winter");
    let outfit = generate_outfit(&inventory, &options, &mut FixedRandom(0.0)).unwrap();
    assert_eq!(ids(&outfit), vec!["t1", "j1", "c1", "s1"]);
}

#[test]
fn custom_config_changes_policy() {
    let mut config = EngineConfig::default();
    config.max_accessories = 0;
    config.thresholds.outer_layer_below = 0.0;
    let composer = OutfitComposer::new(config.clone()).unwrap();

    let inventory = mixed_wardrobe();
    let options = OutfitOptions::default().with_weather(5.0, "clear");
    let outfit = composer
        .compose(&inventory, &options, &mut FixedRandom(0.99))
        .unwrap();

    assert!(outfit.accessories.is_empty());
    assert!(outfit.outer.is_none());

    let compat = calculate_compatibility(&outfit.garments(), &config);
    assert!(compat.score <= 100);

    config.dress.warm_probability = -0.1;
    assert!(matches!(
        OutfitComposer::new(config),
        Err(EngineError::InvalidConfig(_))
    ));
}
