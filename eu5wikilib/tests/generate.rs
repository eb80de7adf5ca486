//! Integration tests: every generator over the JSON fixture

use eu5wikilib::{
    extract_section, splice_section, GameData, Generated, Generator, GeneratorConfig, LawLayout,
    PlainFormatter, SectionOptions, TableKind, WikiError,
};

fn fixture_path() -> String {
    env!("CARGO_MANIFEST_DIR").to_string() + "/tests/fixtures/sample.json"
}

fn load() -> GameData {
    GameData::from_json_file(fixture_path()).expect("fixture should load")
}

fn generate(data: &GameData, config: &GeneratorConfig, table: TableKind) -> Generated {
    let formatter = PlainFormatter::new();
    Generator::new(data, &formatter, config)
        .generate(table)
        .expect("generation should succeed")
}

fn keys(generated: &Generated) -> Vec<&str> {
    generated.sections.keys().collect()
}

#[test]
fn test_every_table_generates() {
    let data = load();
    let config = GeneratorConfig::new().game_version("1.0");
    for table in TableKind::ALL {
        let generated = generate(&data, &config, table);
        assert_eq!(generated.table, table);
        assert!(!generated.sections.is_empty(), "{} produced no sections", table);
    }
}

#[test]
fn test_collection_names_come_from_keys() {
    let data = load();
    let buildings = data.buildings().unwrap();
    assert_eq!(buildings["temple"].meta.name, "temple");
    assert_eq!(data.localize_or_key("catholic"), "Catholic");
    assert_eq!(data.localize_or_key("unknown_key"), "unknown_key");
}

#[test]
fn test_missing_collection_is_an_error() {
    let data = GameData::from_json_str(r#"{"traits": {}}"#).unwrap();
    let formatter = PlainFormatter::new();
    let config = GeneratorConfig::new();
    let result = Generator::new(&data, &formatter, &config).generate(TableKind::Buildings);
    assert!(matches!(result, Err(WikiError::MissingCollection("buildings"))));
}

#[test]
fn test_malformed_json_is_an_error() {
    let result = GameData::from_json_str(r#"{"buildings": 3}"#);
    assert!(matches!(result, Err(WikiError::Json { .. })));
}

#[test]
fn test_buildings_page() {
    let data = load();
    let config = GeneratorConfig::new().game_version("1.0.10");
    let generated = generate(&data, &config, TableKind::Buildings);

    assert_eq!(
        keys(&generated),
        vec![
            "buildings_town_city_religious",
            "buildings_rural_religious",
            "buildings_town_military"
        ]
    );
    let page = &generated.page;
    assert!(page.starts_with("== town+city buildings ==\n=== Religious ==="));
    assert!(page.contains("== town buildings =="));
    assert!(page.contains("=== Military ==="));
    assert!(page.contains(
        "<section begin=autogenerated_buildings_town_military/>\n{{Version|1.0.10}}\n"
    ));

    let temple = &generated.sections.get("buildings_town_city_religious").unwrap().body;
    assert!(temple.contains("Temple"));
    assert!(temple.contains("Candles"));
    let barracks = &generated.sections.get("buildings_town_military").unwrap().body;
    assert!(barracks.contains("is_at_war = no"));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let data = load();
    let config = GeneratorConfig::new().game_version("1.0");
    for table in TableKind::ALL {
        let first = generate(&data, &config, table);
        let second = generate(&data, &config, table);
        assert_eq!(first.page, second.page, "{} is not deterministic", table);
    }
}

#[test]
fn test_laws_layouts_share_keys() {
    let data = load();
    let tables = generate(&data, &GeneratorConfig::new(), TableKind::Laws);
    let sections = generate(
        &data,
        &GeneratorConfig::new().law_layout(LawLayout::Sections),
        TableKind::Laws,
    );
    assert_eq!(keys(&tables), vec!["laws_administrative", "laws_military"]);
    assert_eq!(keys(&tables), keys(&sections));

    let administrative = &sections.sections.get("laws_administrative").unwrap().body;
    assert!(administrative.find("Primogeniture").is_some());
    assert!(administrative.find("Elective Monarchy").is_some());
}

#[test]
fn test_goods_buckets() {
    let data = load();
    let generated = generate(&data, &GeneratorConfig::new(), TableKind::Goods);
    assert_eq!(
        keys(&generated),
        vec!["raw_material", "raw_material_food", "produced"]
    );
    assert!(generated.page.contains("=== Raw Materials ==="));
    assert!(generated.page.contains("==== Food ===="));
    assert!(generated.sections.get("raw_material").unwrap().body.contains("Pop demands"));

    let tags = generate(&data, &GeneratorConfig::new(), TableKind::GoodsTags);
    assert_eq!(keys(&tags), vec!["goods_list_grain"]);
    let list = &tags.sections.get("goods_list_grain").unwrap().body;
    assert!(list.find("Wax").unwrap() < list.find("Wheat").unwrap());
    assert!(!list.contains("Iron"));
}

#[test]
fn test_privileges_and_traits() {
    let data = load();
    let privileges = generate(&data, &GeneratorConfig::new(), TableKind::EstatePrivileges);
    assert_eq!(
        keys(&privileges),
        vec!["estate_privileges_clergy_estate", "estate_privileges_nobles_estate"]
    );
    assert!(privileges.page.contains("=== Nobles privileges ==="));

    let traits = generate(&data, &GeneratorConfig::new(), TableKind::Traits);
    assert_eq!(keys(&traits), vec!["traits_ruler", "traits_admiral"]);
}

#[test]
fn test_reforms_split_country_specific() {
    let data = load();
    let generated = generate(&data, &GeneratorConfig::new(), TableKind::Reforms);
    assert_eq!(
        keys(&generated),
        vec!["reforms_minor", "reforms_minor_country_specific", "reforms_major"]
    );
    let specific = &generated
        .sections
        .get("reforms_minor_country_specific")
        .unwrap()
        .body;
    assert!(specific.contains("{{flag|France}}"));
    assert!(!generated.page.contains("<section"));
}

#[test]
fn test_countries_skip_unplaceable() {
    let data = load();
    let generated = generate(&data, &GeneratorConfig::new(), TableKind::Countries);
    assert_eq!(keys(&generated), vec!["western_europe"]);
    let body = &generated.sections.get("western_europe").unwrap().body;
    assert!(body.contains("FRA"));
    assert!(!body.contains("Nowhere"));
}

#[test]
fn test_concepts_are_inline_sections() {
    let data = load();
    let config = GeneratorConfig::new().game_version("1.0");
    let generated = generate(&data, &config, TableKind::Concepts);
    assert_eq!(keys(&generated), vec!["concept_unrest", "concept_stability"]);
    assert!(generated
        .page
        .contains("<section begin=autogenerated_concept_unrest/>Local discontent<section end=autogenerated_concept_unrest/>"));
}

#[test]
fn test_diplomacy_and_culture_tables() {
    let data = load();
    let config = GeneratorConfig::new();

    let subjects = generate(&data, &config, TableKind::SubjectTypes);
    assert_eq!(keys(&subjects), vec!["subject_types"]);
    let body = &subjects.sections.get("subject_types").unwrap().body;
    assert!(body.find("Tributary").unwrap() < body.find("Vassal").unwrap());
    assert!(body.contains("1 {{icon|gold}}"));

    let casus_belli = generate(&data, &config, TableKind::CasusBelli);
    assert!(casus_belli.page.contains("[[Take Province|Take Province]]"));
    assert!(casus_belli.page.contains("* is_at_war = no"));

    let cultures = generate(&data, &config, TableKind::Cultures);
    let body = &cultures.sections.get("cultures").unwrap().body;
    assert!(body.find("Norse").unwrap() < body.find("French").unwrap());

    for table in [
        TableKind::Wargoals,
        TableKind::PeaceTreaties,
        TableKind::ReligiousAspects,
        TableKind::ReligiousSchools,
    ] {
        let generated = generate(&data, &config, table);
        assert_eq!(keys(&generated), vec![table.name()]);
        assert!(generated.page.starts_with("{|"));
        assert!(!table.uses_markers());
    }
}

#[test]
fn test_splice_round_trip() {
    let data = load();
    let config = GeneratorConfig::new().game_version("1.0");
    let generated = generate(&data, &config, TableKind::Traits);
    let options = &config.sections;

    let stale_config = GeneratorConfig::new().game_version("0.9");
    let stale = generate(&data, &stale_config, TableKind::Traits);
    let document = format!(
        "Intro written by hand.\n{}\nOutro written by hand.\n",
        stale.page
    );

    let mut updated = document.clone();
    for section in generated.sections.iter() {
        updated = splice_section(&updated, section, options).unwrap();
    }
    assert!(updated.starts_with("Intro written by hand.\n"));
    assert!(updated.ends_with("\nOutro written by hand.\n"));
    assert!(!updated.contains("{{Version|0.9}}"));
    assert!(updated.contains(&generated.page));

    let ruler = extract_section(&updated, "traits_ruler", options).unwrap();
    assert_eq!(
        ruler,
        options.interior(generated.sections.get("traits_ruler").unwrap())
    );
}

#[test]
fn test_splice_needs_markers() {
    let data = load();
    let generated = generate(&data, &GeneratorConfig::new(), TableKind::Traits);
    let section = generated.sections.get("traits_ruler").unwrap();
    let options = SectionOptions::new();

    let result = splice_section("no markers here", section, &options);
    assert!(matches!(result, Err(WikiError::SectionMarkerNotFound(_))));

    let half = format!("{}\nbody", options.begin_marker("traits_ruler"));
    let result = splice_section(&half, section, &options);
    assert!(matches!(result, Err(WikiError::UnbalancedSectionMarkers(_))));
}
