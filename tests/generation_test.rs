//! End-to-end checks on generated projects through the public library API

use fastapi_scaffold::{
    Archetype, ArtifactKind, DatabaseBackend, DatabaseSpec, EndpointSpec, GenerationConfig,
    HttpMethod, Preset, generate, generate_project, parse_config,
    config::ConfigFormat,
};

#[test]
fn test_basic_preset_main_py() {
    let result = generate_project(&Preset::Basic.config()).unwrap();
    let main_py = &result.artifact(ArtifactKind::Source).unwrap().content;

    let expected_head = "\
from fastapi import FastAPI, HTTPException, Depends
from fastapi.middleware.cors import CORSMiddleware
from pydantic import BaseModel
import uvicorn

app = FastAPI(
    title=\"Basic-API\",
    description=\"Basic FastAPI server with essential endpoints\",
    version=\"1.0.0\",
)
";
    assert!(main_py.starts_with(expected_head), "{main_py}");
    assert!(main_py.contains("@app.get(\"/info\")"));
    assert!(main_py.ends_with("    uvicorn.run(app, host=\"0.0.0.0\", port=8000)\n"));
}

#[test]
fn test_basic_preset_manifest_is_exact() {
    let artifacts = generate(&Preset::Basic.config()).unwrap();
    assert_eq!(
        artifacts[1].content,
        "fastapi==0.104.1\nuvicorn[standard]==0.24.0\npydantic==2.5.0\n"
    );
}

#[test]
fn test_json_upload_round_trip() {
    let json = r#"{
        "name": "Orders Service",
        "description": "Order tracking",
        "port": 8100,
        "endpoints": [
            {"id": "a", "path": "/orders", "method": "GET", "description": "List orders"},
            {"id": "b", "path": "/orders", "method": "POST", "description": ""},
            {"id": "c", "path": "/orders/{id}", "method": "GET", "description": ""},
            {"id": "d", "path": "/stats", "method": "GET", "description": ""}
        ],
        "database": {"enabled": true, "type": "postgresql"},
        "middleware": ["cors", "logging"]
    }"#;

    let config = parse_config(json, ConfigFormat::Json).unwrap();
    let result = generate_project(&config).unwrap();

    // Four read/create endpoints and no hints classify as basic
    assert_eq!(result.archetype, Archetype::Basic);

    let main_py = &result.artifacts[0].content;
    assert!(main_py.contains("description=\"Order tracking\""));
    assert!(main_py.contains("# Configured middleware: cors, logging"));
    assert!(!main_py.contains("/orders"));

    let manifest = &result.artifacts[1].content;
    assert!(manifest.contains("sqlalchemy==2.0.23"));
    assert!(manifest.contains("psycopg2-binary==2.9.9"));
}

#[test]
fn test_custom_archetype_handlers() {
    let config = GenerationConfig::new("Reports")
        .with_endpoint(EndpointSpec::new("1", "/reports/daily", HttpMethod::Get, "Daily report"))
        .with_endpoint(EndpointSpec::new("2", "/reports", HttpMethod::Post, ""))
        .with_archetype(Archetype::Custom);

    let main_py = &generate(&config).unwrap()[0].content;
    assert!(main_py.contains(
        "@app.get(\"/reports/daily\")\ndef reports_daily():\n    \"\"\"Daily report\"\"\"\n"
    ));
    assert!(main_py.contains("@app.post(\"/reports\")\ndef reports(data: dict):"));
}

#[test]
fn test_database_disabled_crud_never_mentions_engine() {
    for backend in [DatabaseBackend::Sqlite, DatabaseBackend::Postgresql] {
        let config = GenerationConfig::new("CRUD-API").with_database(DatabaseSpec {
            enabled: false,
            backend,
        });
        let artifacts = generate(&config).unwrap();
        for artifact in &artifacts {
            assert!(!artifact.content.contains("create_engine"));
            assert!(!artifact.content.contains("psycopg2"));
        }
    }
}

#[test]
fn test_outputs_are_independent_of_call_order() {
    let first = generate(&Preset::Auth.config()).unwrap();
    generate(&Preset::Crud.config()).unwrap();
    let second = generate(&Preset::Auth.config()).unwrap();
    assert_eq!(first, second);
}
