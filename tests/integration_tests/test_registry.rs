// integration tests driving the registry end to end

use unit_registry::{
    FilterProperties, LocationType, Pose, RegistryError, UnitConfig, UnitFilter, UnitRegistry,
    UnitType, Vec3,
};

fn populated_registry() -> UnitRegistry {
    let mut registry = UnitRegistry::new();
    let units = vec![
        UnitConfig::location("home", LocationType::Region, true).with_label("en", "Home"),
        UnitConfig::location("bathroom", LocationType::Tile, false).with_placement("home"),
        UnitConfig::new("mirror-light", UnitType::Light)
            .with_placement("bathroom")
            .with_alias("bathroom-light")
            .with_label("en", "Mirror Light")
            .with_label("de", "Spiegellicht"),
        UnitConfig::new("heater-meter", UnitType::PowerConsumptionSensor)
            .with_placement("bathroom")
            .disabled(),
    ];
    for unit in units {
        registry.register(unit).expect("fixture ids are unique");
    }
    registry
}

#[test]
fn test_query_by_id_alias_and_filter() {
    let registry = populated_registry();

    assert_eq!(
        registry.unit_config_by_id("mirror-light").unwrap().id,
        "mirror-light"
    );
    assert_eq!(
        registry
            .unit_config_by_alias("bathroom-light")
            .unwrap()
            .id,
        "mirror-light"
    );

    let filter = UnitFilter::new(FilterProperties::location_id("bathroom"));
    let ids: Vec<&str> = registry
        .unit_configs_filtered(&filter, true)
        .iter()
        .map(|u| u.id.as_str())
        .collect();
    assert_eq!(ids, vec!["mirror-light", "heater-meter"]);
}

#[test]
fn test_disabled_units_stay_hidden_until_requested() {
    let registry = populated_registry();

    assert!(registry
        .unit_configs(false)
        .iter()
        .all(|u| u.id != "heater-meter"));
    assert!(registry
        .unit_configs(true)
        .iter()
        .any(|u| u.id == "heater-meter"));
}

#[test]
fn test_mutation_flow() {
    let mut registry = populated_registry();

    // relabel, re-parent, re-position, then remove
    registry
        .update_label("mirror-light", "en", "Vanity Light")
        .unwrap();
    registry.update_location("mirror-light", "home").unwrap();
    let pose = Pose {
        translation: Vec3::new(0.2, 1.8, 0.0),
        ..Pose::default()
    };
    registry.update_pose("mirror-light", pose).unwrap();
    registry
        .update_floor_plan(
            "bathroom",
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(2.0, 2.5, 0.0),
                Vec3::new(0.0, 2.5, 0.0),
            ],
        )
        .unwrap();

    let light = registry.unit_config_by_id("mirror-light").unwrap();
    assert_eq!(light.label.best_match("en"), Some("Vanity Light"));
    // other languages keep their entries
    assert_eq!(light.label.best_match("de"), Some("Spiegellicht"));
    assert_eq!(light.placement.location_id.as_deref(), Some("home"));
    assert_eq!(light.placement.pose, Some(pose));

    let bathroom = registry.unit_config_by_id("bathroom").unwrap();
    assert_eq!(
        bathroom.placement.shape.as_ref().map(|s| s.floor.len()),
        Some(4)
    );

    let removed = registry.remove_unit("heater-meter").unwrap();
    assert_eq!(removed.unit_type, UnitType::PowerConsumptionSensor);
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_typo_lookup_suggests_near_miss() {
    let registry = populated_registry();

    let err = registry.unit_config_by_id("miror-light").unwrap_err();
    match err {
        RegistryError::NotFound { suggestions, .. } => {
            assert_eq!(suggestions, vec!["mirror-light".to_string()]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_error_messages_are_descriptive() {
    let registry = populated_registry();

    let err = registry.unit_config_by_id("nope").unwrap_err();
    assert_eq!(err.to_string(), "no unit registered with id \"nope\"");

    let err = registry.unit_config_by_alias("nope").unwrap_err();
    assert_eq!(err.to_string(), "no unit registered with alias \"nope\"");
}
