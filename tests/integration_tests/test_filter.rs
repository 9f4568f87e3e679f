// integration tests for filter evaluation over a realistic unit set

use unit_registry::{
    matches, select_matching, FilterProperties, LocationType, UnitConfig, UnitFilter, UnitType,
};

/// a small home: root region, two tile rooms, devices spread across them
fn sample_home() -> Vec<UnitConfig> {
    vec![
        UnitConfig::location("home", LocationType::Region, true),
        UnitConfig::location("kitchen", LocationType::Tile, false).with_placement("home"),
        UnitConfig::location("living-room", LocationType::Tile, false).with_placement("home"),
        UnitConfig::new("kitchen-lamp", UnitType::Light).with_placement("kitchen"),
        UnitConfig::new("kitchen-switch", UnitType::Switch).with_placement("kitchen"),
        UnitConfig::new("living-lamp", UnitType::ColorableLight).with_placement("living-room"),
        UnitConfig::new("living-motion", UnitType::MotionDetector).with_placement("living-room"),
    ]
}

#[test]
fn test_select_lights_in_kitchen() {
    let home = sample_home();
    let filter = UnitFilter::new(
        FilterProperties::unit_type(UnitType::Light).with_location_id("kitchen"),
    );

    let ids: Vec<&str> = select_matching(&filter, &home)
        .iter()
        .map(|u| u.id.as_str())
        .collect();
    assert_eq!(ids, vec!["kitchen-lamp"]);
}

#[test]
fn test_select_rooms_via_location_type() {
    let home = sample_home();
    let filter = UnitFilter::new(FilterProperties::location_type(LocationType::Tile));

    let ids: Vec<&str> = select_matching(&filter, &home)
        .iter()
        .map(|u| u.id.as_str())
        .collect();
    assert_eq!(ids, vec!["kitchen", "living-room"]);
}

#[test]
fn test_select_everything_but_the_root_location() {
    let home = sample_home();
    // root flag is compared by value, so negating root == true keeps
    // every non-root unit including plain devices
    let filter = UnitFilter::negated(FilterProperties::location_root(true));

    let selected = select_matching(&filter, &home);
    assert_eq!(selected.len(), home.len() - 1);
    assert!(selected.iter().all(|u| u.id != "home"));
}

#[test]
fn test_or_chain_collects_multiple_types() {
    let home = sample_home();
    // lights or colorable lights or switches
    let filter = UnitFilter::new(FilterProperties::unit_type(UnitType::Light)).or(
        UnitFilter::new(FilterProperties::unit_type(UnitType::ColorableLight)).or(
            UnitFilter::new(FilterProperties::unit_type(UnitType::Switch)),
        ),
    );

    let ids: Vec<&str> = select_matching(&filter, &home)
        .iter()
        .map(|u| u.id.as_str())
        .collect();
    assert_eq!(ids, vec!["kitchen-lamp", "kitchen-switch", "living-lamp"]);
}

#[test]
fn test_and_chain_narrows() {
    let home = sample_home();
    // anything in the living room that is not a motion detector
    let filter = UnitFilter::new(FilterProperties::location_id("living-room")).and(
        UnitFilter::negated(FilterProperties::unit_type(UnitType::MotionDetector)),
    );

    let ids: Vec<&str> = select_matching(&filter, &home)
        .iter()
        .map(|u| u.id.as_str())
        .collect();
    assert_eq!(ids, vec!["living-lamp"]);
}

#[test]
fn test_empty_filter_selects_all_in_order() {
    let home = sample_home();
    let filter = UnitFilter::any();

    let selected = select_matching(&filter, &home);
    assert_eq!(selected.len(), home.len());
    let ids: Vec<&str> = selected.iter().map(|u| u.id.as_str()).collect();
    let expected: Vec<&str> = home.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_match_agrees_with_select() {
    let home = sample_home();
    let filter = UnitFilter::new(FilterProperties::unit_type(UnitType::Light))
        .or(UnitFilter::new(FilterProperties::location_root(true)));

    let selected = select_matching(&filter, &home);
    for unit in &home {
        let in_selection = selected.iter().any(|s| s.id == unit.id);
        assert_eq!(matches(&filter, unit), in_selection, "unit {}", unit.id);
    }
}
