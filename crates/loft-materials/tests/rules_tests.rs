use loft_materials::{LaunchConfig, LaunchRules, MaterialCatalog};

fn catalog() -> MaterialCatalog {
    MaterialCatalog::from_toml_str(
        r#"
        [materials.stone]
        [materials.slime_pad]
        [materials.light_plate]
        pressure_plate = true
        passable = true
        [materials.tall_grass]
        solid = false
    "#,
    )
    .unwrap()
}

fn rules_from(catalog: &MaterialCatalog, toml_str: &str) -> LaunchRules {
    let cfg: LaunchConfig = toml::from_str(toml_str).unwrap();
    LaunchRules::compile(catalog, &cfg)
}

#[test]
fn material_override_wins_over_global() {
    let catalog = catalog();
    let rules = rules_from(
        &catalog,
        r#"
        horizontal_velocity = 0.2
        vertical_velocity = 1.0
        [material_velocities.slime_pad]
        horizontal_velocity = 0.5
        vertical_velocity = 2.0
    "#,
    );
    let slime = catalog.get_id("slime_pad").unwrap();
    let stone = catalog.get_id("stone").unwrap();
    assert_eq!(rules.default_horizontal(slime), 0.5);
    assert_eq!(rules.default_vertical(slime), 2.0);
    assert_eq!(rules.default_horizontal(stone), 0.2);
    assert_eq!(rules.default_vertical(stone), 1.0);
}

#[test]
fn negative_values_floor_to_global_then_zero() {
    let catalog = catalog();
    let rules = rules_from(
        &catalog,
        r#"
        horizontal_velocity = -3.0
        vertical_velocity = 1.0
        [material_velocities.slime_pad]
        horizontal_velocity = -1.0
    "#,
    );
    let slime = catalog.get_id("slime_pad").unwrap();
    // Negative override falls through to the global default, itself floored at 0.
    assert_eq!(rules.default_horizontal(slime), 0.0);
    assert_eq!(rules.default_vertical(slime), 1.0);
}

#[test]
fn empty_whitelist_admits_everything() {
    let catalog = catalog();
    let rules = rules_from(&catalog, "");
    for key in ["stone", "slime_pad", "light_plate"] {
        assert!(rules.is_whitelisted(catalog.get_id(key).unwrap()));
    }
}

#[test]
fn non_empty_whitelist_restricts() {
    let catalog = catalog();
    let rules = rules_from(
        &catalog,
        r#"
        whitelist = ["slime_pad"]
    "#,
    );
    assert!(rules.is_whitelisted(catalog.get_id("slime_pad").unwrap()));
    assert!(!rules.is_whitelisted(catalog.get_id("stone").unwrap()));
}

#[test]
fn non_solid_materials_are_stripped_from_lists() {
    let catalog = catalog();
    let rules = rules_from(
        &catalog,
        r#"
        materials = ["light_plate", "tall_grass", "no_such_material"]
        whitelist = ["tall_grass"]
    "#,
    );
    assert!(rules.is_launch_material(catalog.get_id("light_plate").unwrap()));
    assert!(!rules.is_launch_material(catalog.get_id("tall_grass").unwrap()));
    // The whitelist collapsed to empty, which admits everything again.
    assert!(rules.is_whitelisted(catalog.get_id("stone").unwrap()));
}

#[test]
fn passable_defaults_to_inverse_of_solid() {
    let catalog = catalog();
    assert!(!catalog.is_passable(catalog.get_id("stone").unwrap()));
    assert!(catalog.is_passable(catalog.get_id("tall_grass").unwrap()));
    assert!(catalog.is_passable(catalog.get_id("light_plate").unwrap()));
    assert!(catalog.is_pressure_plate(catalog.get_id("light_plate").unwrap()));
}
