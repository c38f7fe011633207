use std::fs;

use sql_stencil::prelude::*;

fn write_city_file(dir: &std::path::Path) {
    fs::write(
        dir.join("city.sql"),
        "\
-- statements for the city service

-- name: CreateCityTable
create table city (
    id  bigint NOT NULL,
    name varchar(64) default null,
    primary key (id)
)

-- name: InsertCity
INSERT INTO city (name, age) VALUES ({Name}, {Age})

-- name: CountCity
SELECT COUNT(*) FROM city
",
    )
    .unwrap();
}

#[test]
fn manager_loads_annotated_files_from_preference() {
    let dir = tempfile::tempdir().unwrap();
    write_city_file(dir.path());

    let manager = StencilManager::new(StencilPreference::new(dir.path())).unwrap();
    assert_eq!(manager.registry().len(), 3);

    let mut params = BuildParams::new();
    params.insert("Name".to_string(), BindValue::Text("Oslo".to_string()));
    params.insert("Age".to_string(), BindValue::Int(970));

    let built = manager.build("INSERTCITY", &params).unwrap();
    assert_eq!(built, "INSERT INTO city (name, age) VALUES ('Oslo', 970)");

    // multi-line body survives with its inner layout intact
    let create = manager.build("CreateCityTable", &BuildParams::new()).unwrap();
    assert!(create.starts_with("create table city ("));
    assert!(create.ends_with(")"));
    assert!(create.contains("name varchar(64) default null,"));
}

#[test]
fn fileset_pattern_limits_which_files_register() {
    let dir = tempfile::tempdir().unwrap();
    write_city_file(dir.path());
    fs::write(
        dir.path().join("album.sql"),
        "-- name: CountAlbum\nSELECT COUNT(*) FROM album\n",
    )
    .unwrap();

    let preference = StencilPreference::new(dir.path()).with_fileset("album*.sql");
    let manager = StencilManager::new(preference).unwrap();
    assert_eq!(manager.registry().len(), 1);
    assert!(manager.find("CountAlbum").is_ok());
    assert!(manager.find("CountCity").is_err());
}

#[test]
fn duplicate_ids_across_files_abort_population() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a.sql"),
        "-- name: CountCity\nSELECT COUNT(*) FROM city\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("b.sql"),
        "-- name: countCITY\nSELECT 1 FROM city\n",
    )
    .unwrap();

    let err = StencilManager::new(StencilPreference::new(dir.path())).unwrap_err();
    assert!(matches!(err, SqlStencilError::DuplicateId(_)));
}

#[test]
fn malformed_template_in_a_file_aborts_population() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("bad.sql"),
        "-- name: Broken\nSELECT {Name FROM city\n",
    )
    .unwrap();

    let err = StencilManager::new(StencilPreference::new(dir.path())).unwrap_err();
    assert!(matches!(err, SqlStencilError::MalformedTemplate { .. }));
}

#[test]
fn custom_source_feeds_the_manager() {
    struct Fixed;
    impl TemplateSource for Fixed {
        fn load(&self) -> Result<Vec<RawTemplate>, SqlStencilError> {
            Ok(vec![RawTemplate::new("Ping", "SELECT 1")])
        }
    }

    let manager = StencilManager::from_source(StencilPreference::default(), &Fixed).unwrap();
    assert_eq!(
        manager.build("ping", &BuildParams::new()).unwrap(),
        "SELECT 1"
    );
}

#[test]
fn display_summarizes_path_fileset_and_keys() {
    let dir = tempfile::tempdir().unwrap();
    write_city_file(dir.path());

    let manager = StencilManager::new(StencilPreference::new(dir.path())).unwrap();
    let summary = manager.to_string();
    assert!(summary.contains("fileset=[*.sql]"));
    assert!(summary.contains("COUNTCITY"));
}
