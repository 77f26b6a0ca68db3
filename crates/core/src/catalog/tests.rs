//! Unit tests for catalog module

use super::*;
use crate::error::CatalogError;
use std::io::Write;

fn agent(id: u64, name: &str, roles: &[&str], photos: &[&str]) -> Agent {
    Agent {
        id,
        name: name.to_string(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        story: String::new(),
        abilities: Vec::new(),
        origin: String::new(),
        release_patch: "1.0".to_string(),
        photos: photos.iter().map(|p| p.to_string()).collect(),
    }
}

fn sample_store() -> AgentStore {
    AgentStore::from_agents(vec![
        agent(1, "Jett", &["Duelist"], &["jett-1.png", "jett-2.png"]),
        agent(2, "Sage", &["Sentinel"], &["sage-1.png", "sage-2.png", "sage-3.png"]),
        agent(3, "Omen", &["Controller"], &[]),
    ])
}

const CATALOG_JSON: &str = r#"{
    "agents": [
        {
            "id": 7,
            "name": "Sova",
            "roles": ["Initiator"],
            "story": "Born in the Russian tundra.",
            "abilities": [
                {
                    "name": "Owl Drone",
                    "description": "Deploy a pilotable drone.",
                    "category": "Basic",
                    "price": 300,
                    "cooldown": 40
                },
                {
                    "name": "Hunter's Fury",
                    "description": "Fire up to three energy blasts.",
                    "category": "Ultimate",
                    "points": 8
                }
            ],
            "origin": "Russia",
            "release_patch": "Beta",
            "photos": ["sova.png"]
        }
    ]
}"#;

#[test]
fn test_find_by_id() {
    let store = sample_store();

    for id in [1, 2, 3] {
        let found = store.find_by_id(id).unwrap();
        assert_eq!(found.id, id);
    }
    assert!(store.find_by_id(9999).is_none());
    assert!(store.find_by_id(0).is_none());
}

#[test]
fn test_find_by_id_returns_first_duplicate() {
    let store = AgentStore::from_agents(vec![
        agent(5, "First", &["Duelist"], &[]),
        agent(5, "Second", &["Duelist"], &[]),
    ]);

    assert_eq!(store.find_by_id(5).unwrap().name, "First");
}

#[test]
fn test_list_photos_order() {
    let store = sample_store();
    let photos = store.list_photos();

    assert_eq!(photos.len(), 5);
    assert_eq!(
        photos,
        vec!["jett-1.png", "jett-2.png", "sage-1.png", "sage-2.png", "sage-3.png"]
    );
}

#[test]
fn test_photos_for() {
    let store = sample_store();

    assert_eq!(store.photos_for(2).unwrap().len(), 3);
    assert_eq!(store.photos_for(3).unwrap().len(), 0);
    assert!(store.photos_for(42).is_none());
}

#[test]
fn test_filter_by_role_case_insensitive() {
    let store = sample_store();

    let lower = store.filter_by_role("sentinel");
    let upper = store.filter_by_role("Sentinel");
    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].name, "Sage");
}

#[test]
fn test_filter_by_role_is_not_substring() {
    let store = sample_store();

    assert!(store.filter_by_role("Duel").is_empty());
    assert!(store.filter_by_role("").is_empty());
}

#[test]
fn test_role_parsing() {
    assert_eq!("duelist".parse::<Role>().unwrap(), Role::Duelist);
    assert_eq!("CONTROLLER".parse::<Role>().unwrap(), Role::Controller);
    assert_eq!(Role::Initiator.to_string(), "Initiator");

    let err = "healer".parse::<Role>().unwrap_err();
    assert!(matches!(err, CatalogError::UnknownRole(ref r) if r == "healer"));
}

#[tokio::test]
async fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG_JSON.as_bytes()).unwrap();

    let mut store = AgentStore::new(file.path());
    assert_eq!(store.source(), Some(file.path()));
    assert_eq!(store.load().await, 1);

    let sova = store.find_by_id(7).unwrap();
    assert_eq!(sova.abilities.len(), 2);
    assert_eq!(sova.abilities[0].price, Some(300.0));
    assert_eq!(sova.abilities[0].cooldown, Some(40.0));
    assert!(sova.abilities[0].points.is_none());
    assert_eq!(sova.abilities[1].points, Some(8.0));
    assert!(sova.abilities[1].range.is_none());
}

#[tokio::test]
async fn test_load_missing_file_leaves_store_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = AgentStore::new(dir.path().join("missing.json"));

    let err = store.try_load().await.unwrap_err();
    assert!(matches!(err, CatalogError::DataUnavailable(_)));

    assert_eq!(store.load().await, 0);
    assert!(store.is_empty());
    assert!(store.list_photos().is_empty());
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agents.json");
    std::fs::write(&path, CATALOG_JSON).unwrap();

    let mut store = AgentStore::new(&path);
    assert_eq!(store.load().await, 1);

    std::fs::write(&path, "{ not json").unwrap();
    let err = store.try_load().await.unwrap_err();
    assert!(matches!(err, CatalogError::Serialization(_)));
    assert_eq!(store.load().await, 1);
    assert!(store.find_by_id(7).is_some());
}

#[tokio::test]
async fn test_load_accepts_fractional_and_negative_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agents.json");
    std::fs::write(
        &path,
        r#"{"agents": [{"id": 9, "name": "Viper", "abilities": [
            {"name": "Toxic Screen", "category": "Signature", "price": 12.5, "points": -1}
        ]}]}"#,
    )
    .unwrap();

    let mut store = AgentStore::new(&path);
    assert_eq!(store.load().await, 1);

    let ability = &store.find_by_id(9).unwrap().abilities[0];
    assert_eq!(ability.price, Some(12.5));
    assert_eq!(ability.points, Some(-1.0));
}

#[test]
fn test_from_agents_has_no_source() {
    assert!(sample_store().source().is_none());
}

#[test]
fn test_optional_ability_fields_not_serialized() {
    let ability = Ability {
        name: "Cloudburst".to_string(),
        description: "Throw a cloud of fog.".to_string(),
        category: "Basic".to_string(),
        price: None,
        cooldown: None,
        duration: Some(4.5),
        range: None,
        points: None,
    };

    let json = serde_json::to_value(&ability).unwrap();
    assert!(json.get("price").is_none());
    assert!(json.get("cooldown").is_none());
    assert_eq!(json["duration"], 4.5);
}

#[test]
fn test_agent_list_accepts_both_shapes() {
    let agents = vec![agent(1, "Jett", &["Duelist"], &[])];

    let bare = serde_json::to_string(&AgentList::new(ListShape::Array, agents.clone())).unwrap();
    assert!(bare.starts_with('['));

    let wrapped =
        serde_json::to_string(&AgentList::new(ListShape::Wrapped, agents.clone())).unwrap();
    assert!(wrapped.starts_with("{\"agents\""));

    let parsed_bare: AgentList = serde_json::from_str(&bare).unwrap();
    let parsed_wrapped: AgentList = serde_json::from_str(&wrapped).unwrap();
    assert_eq!(parsed_bare.shape(), ListShape::Array);
    assert_eq!(parsed_wrapped.shape(), ListShape::Wrapped);
    assert_eq!(parsed_bare.into_agents(), agents);
    assert_eq!(parsed_wrapped.agents(), agents.as_slice());
}

#[test]
fn test_list_shape_parsing() {
    assert_eq!("array".parse::<ListShape>().unwrap(), ListShape::Array);
    assert_eq!("Wrapped".parse::<ListShape>().unwrap(), ListShape::Wrapped);
    assert!("nested".parse::<ListShape>().is_err());
}
