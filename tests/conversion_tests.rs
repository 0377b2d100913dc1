#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::fixture_path;
use common::models::fixed_timestamp;
use jdl_json::converter::{convert_entities_with_applications, convert_entities_without_application, ConversionParameters};
use jdl_json::logger::RecordingLogger;
use jdl_json::model::{load_model, DatabaseType};
use serde_json::{json, Value};

fn keys(value: &Value) -> Vec<&str> {
    value.as_object().unwrap().keys().map(String::as_str).collect()
}

fn convert_library(logger: &RecordingLogger) -> Value {
    let jdl = load_model(&fixture_path("library.yaml")).unwrap();
    let parameters = ConversionParameters::new(&jdl)
        .application_name("bookshop")
        .database_type(DatabaseType::Sql)
        .creation_timestamp(fixed_timestamp());
    let converted = convert_entities_without_application(&parameters, logger).unwrap();
    serde_json::to_value(&converted).unwrap()
}

fn convert_microservices(logger: &RecordingLogger) -> Value {
    let jdl = load_model(&fixture_path("microservices.yaml")).unwrap();
    let converted = convert_entities_with_applications(Some(&jdl), logger).unwrap();
    serde_json::to_value(&converted).unwrap()
}

#[test]
fn test_library_model_skips_built_in_user() {
    let logger = RecordingLogger::new();
    let converted = convert_library(&logger);

    assert_eq!(keys(&converted), vec!["Author", "Book"]);
    let warnings = logger.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("'User'"));
}

#[test]
fn test_library_entity_keys_follow_document_order() {
    let logger = RecordingLogger::new();
    let converted = convert_library(&logger);

    assert_eq!(
        keys(&converted["Author"]),
        vec![
            "name",
            "entityTableName",
            "javadoc",
            "dto",
            "pagination",
            "service",
            "searchEngine",
            "embedded",
            "readOnly",
            "skipClient",
            "skipServer",
            "fluentMethods",
            "jpaMetamodelFiltering",
            "fields",
            "relationships",
            "applications",
            "changelogDate",
        ]
    );
}

#[test]
fn test_library_book_document() {
    let logger = RecordingLogger::new();
    let converted = convert_library(&logger);

    let expected = json!({
        "name": "Book",
        "entityTableName": "books",
        "dto": "mapstruct",
        "pagination": "infinite-scroll",
        "service": "serviceClass",
        "searchEngine": "elasticsearch",
        "embedded": false,
        "readOnly": false,
        "skipClient": false,
        "skipServer": false,
        "fluentMethods": true,
        "jpaMetamodelFiltering": false,
        "fields": [
            {
                "fieldName": "title",
                "fieldType": "String",
                "fieldValidateRules": ["required", "unique", "minlength", "maxlength", "pattern"],
                "fieldValidateRulesMinlength": 0,
                "fieldValidateRulesMaxlength": 10,
                "fieldValidateRulesPattern": "^d$"
            },
            {
                "fieldName": "cover",
                "fieldType": "byte[]",
                "fieldTypeBlobContent": "image"
            },
            {
                "fieldName": "summary",
                "fieldType": "byte[]",
                "fieldTypeBlobContent": "text"
            },
            {
                "fieldName": "genre",
                "fieldType": "Genre",
                "fieldValues": "FICTION,ESSAY,POETRY (poems)",
                "fieldTypeJavadoc": "Where the book is shelved",
                "fieldValuesJavadocs": { "FICTION": "Made-up stories" },
                "javadoc": "Shelf section"
            }
        ],
        "relationships": [
            {
                "relationshipName": "writer",
                "relationshipType": "many-to-one",
                "otherEntityName": "author",
                "otherEntityRelationshipName": "book",
                "otherEntityField": "name",
                "relationshipValidateRules": "required"
            },
            {
                "relationshipName": "addedBy",
                "relationshipType": "many-to-one",
                "otherEntityName": "user",
                "otherEntityRelationshipName": "book",
                "otherEntityField": "login"
            }
        ],
        "applications": "*",
        "changelogDate": "20190101093001"
    });
    assert_eq!(converted["Book"], expected);
}

#[test]
fn test_library_author_keeps_explicit_service_and_search_exclusion() {
    let logger = RecordingLogger::new();
    let converted = convert_library(&logger);
    let author = &converted["Author"];

    assert_eq!(author["javadoc"], "Somebody who writes books");
    assert_eq!(author["entityTableName"], "author");
    assert_eq!(author["dto"], "no");
    assert_eq!(author["service"], "serviceImpl");
    assert_eq!(author["searchEngine"], false);
    assert_eq!(author["jpaMetamodelFiltering"], true);
    assert_eq!(author["changelogDate"], "20190101093000");
    assert_eq!(
        author["relationships"],
        json!([{
            "relationshipName": "book",
            "relationshipType": "one-to-many",
            "otherEntityName": "book",
            "otherEntityRelationshipName": "writer",
            "javadoc": "Everything they wrote"
        }])
    );

    // only Book had its service inferred
    let infos = logger.infos();
    assert_eq!(infos.len(), 1);
    assert!(infos[0].contains("Book"));
    assert!(infos[0].contains("serviceClass"));
}

#[test]
fn test_microservices_layering_and_memberships() {
    let logger = RecordingLogger::new();
    let converted = convert_microservices(&logger);

    assert_eq!(keys(&converted), vec!["tata", "tutu"]);
    assert_eq!(keys(&converted["tata"]), vec!["A", "B", "C"]);
    assert_eq!(keys(&converted["tutu"]), vec!["C", "D", "E"]);

    let tata = &converted["tata"];
    assert_eq!(tata["A"]["pagination"], "pagination");
    assert_eq!(tata["B"]["pagination"], "infinite-scroll");
    assert_eq!(tata["C"]["pagination"], "pagination");
    assert_eq!(tata["C"]["skipClient"], false);
    assert!(tata["A"].get("microserviceName").is_none());
    assert!(tata["A"].get("changelogDate").is_none());

    let tutu = &converted["tutu"];
    assert_eq!(tutu["C"]["pagination"], "infinite-scroll");
    assert_eq!(tutu["C"]["skipClient"], true);
    assert_eq!(tutu["E"]["microserviceName"], "tutu");

    assert_eq!(tata["C"]["applications"], json!(["tata", "tutu"]));
    assert_eq!(tutu["C"]["applications"], json!(["tata", "tutu"]));
    assert_eq!(tata["A"]["applications"], json!(["tata"]));
    assert_eq!(tutu["D"]["applications"], json!(["tutu"]));
}

#[test]
fn test_microservices_relationships_per_application() {
    let logger = RecordingLogger::new();
    let converted = convert_microservices(&logger);

    assert_eq!(
        converted["tata"]["A"]["relationships"],
        json!([{
            "relationshipName": "c",
            "relationshipType": "many-to-many",
            "otherEntityName": "c",
            "otherEntityRelationshipName": "a",
            "ownerSide": true
        }])
    );
    let inverse = json!([{
        "relationshipName": "a",
        "relationshipType": "many-to-many",
        "otherEntityName": "a",
        "otherEntityRelationshipName": "c",
        "ownerSide": false
    }]);
    assert_eq!(converted["tata"]["C"]["relationships"], inverse);
    // A is not part of tutu, C still keeps its side
    assert_eq!(converted["tutu"]["C"]["relationships"], inverse);

    // one-to-one declared on D only: E gets no record
    assert_eq!(converted["tutu"]["D"]["relationships"][0]["ownerSide"], true);
    assert_eq!(converted["tutu"]["E"]["relationships"], json!([]));
}

#[test]
fn test_microservices_filter_on_mongodb() {
    let logger = RecordingLogger::new();
    let converted = convert_microservices(&logger);
    let d = &converted["tutu"]["D"];

    assert_eq!(d["jpaMetamodelFiltering"], true);
    assert_eq!(d["service"], "serviceClass");

    let warnings = logger.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("tutu"));
    assert!(warnings[0].contains("mongodb"));
}

#[test]
fn test_conversion_is_deterministic() {
    let first = convert_library(&RecordingLogger::new());
    let second = convert_library(&RecordingLogger::new());
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );

    let first = convert_microservices(&RecordingLogger::new());
    let second = convert_microservices(&RecordingLogger::new());
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_legacy_conversion_requires_database_type() {
    let jdl = load_model(&fixture_path("library.yaml")).unwrap();
    let parameters = ConversionParameters::new(&jdl).application_name("bookshop");
    let err = convert_entities_without_application(&parameters, &RecordingLogger::new()).unwrap_err();
    assert!(err.to_string().contains("mandatory"));
}
