//! Export of parsed search results to files

use std::fs;

use serde_json::{Value, json};
use stagemarkt_core::export::{Column, CsvExporter, ExportFormat, JsonExporter, XlsxExporter, export, to_csv, to_xlsx};
use stagemarkt_core::parser::parse_search_page;
use stagemarkt_core::{Internship, StagemarktError};

fn internships() -> Vec<Internship> {
    let body = json!({
        "totalCount": 2,
        "totalPages": 1,
        "pageNumber": 1,
        "items": [
            {
                "leerplaatsId": "a1",
                "titel": "Software developer",
                "leerweg": "BBL",
                "dagenPerWeek": 4,
                "organisatie": {"naam": "Acme BV", "website": "https://acme.nl"},
                "adres": {"straat": "Kade", "huisnummer": "1", "plaats": "Zwolle"}
            },
            {
                "leerplaatsId": "b2",
                "titel": "Medewerker ICT",
                "organisatie": {"naam": "Bakkerij De Korf", "emailadres": "info@dekorf.nl"},
                "adres": null
            }
        ]
    });
    parse_search_page(&body.to_string()).unwrap().items
}

fn columns() -> Vec<Column<Internship>> {
    vec![
        Column::new("Titel", "title"),
        Column::new("Bedrijf", "organisation.name"),
        Column::new("Plaats", "address.city"),
        Column::new("Contact", "organisation.website").fallback("organisation.email"),
        Column::computed("Leerweg", |i: &Internship| json!(format!("{:?}", i.learning_path))),
    ]
}

#[test]
fn test_csv_file_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stages.csv");

    let written = to_csv(&path, &internships(), &columns()).unwrap();
    assert_eq!(written, 2);

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Titel,Bedrijf,Plaats,Contact,Leerweg");
    assert_eq!(lines[1], "Software developer,Acme BV,Zwolle,https://acme.nl,Bbl");
    assert_eq!(lines[2], "Medewerker ICT,Bakkerij De Korf,,info@dekorf.nl,Bol");
}

#[test]
fn test_csv_semicolon_with_title() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stages.csv");

    CsvExporter::new()
        .delimiter(b';')
        .title("Stages Zwolle")
        .export(&path, &internships(), &[Column::path("title")])
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Stages Zwolle\ntitle\nSoftware developer\nMedewerker ICT\n");
}

#[test]
fn test_json_file_export_with_root_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stages.json");

    let written = JsonExporter::new()
        .root_key("stages")
        .include_empty(false)
        .export(&path, &internships(), &columns())
        .unwrap();
    assert_eq!(written, 2);

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let stages = value["stages"].as_array().unwrap();
    assert_eq!(stages.len(), 2);
    assert_eq!(stages[0]["Plaats"], "Zwolle");
    assert!(stages[1].get("Plaats").is_none());
    assert_eq!(stages[1]["Contact"], "info@dekorf.nl");
}

#[test]
fn test_export_dispatches_on_extension() {
    let dir = tempfile::tempdir().unwrap();
    let records = internships();
    let columns = [Column::path("internship_id")];

    export(dir.path().join("a.json"), &records, &columns).unwrap();
    export(dir.path().join("a.CSV"), &records, &columns).unwrap();

    let json_text = fs::read_to_string(dir.path().join("a.json")).unwrap();
    assert!(json_text.starts_with("[\n    {"));
    let csv_text = fs::read_to_string(dir.path().join("a.CSV")).unwrap();
    assert_eq!(csv_text, "internship_id\na1\nb2\n");

    assert_eq!(export(dir.path().join("a.xlsx"), &records, &columns).unwrap(), 2);
    assert!(fs::read(dir.path().join("a.xlsx")).unwrap().starts_with(b"PK"));

    let result = export(dir.path().join("a.txt"), &records, &columns);
    assert!(matches!(result, Err(StagemarktError::UnsupportedFormat(_))));
    assert_eq!(ExportFormat::from_extension(".csv").unwrap(), ExportFormat::Csv);
}

#[test]
fn test_xlsx_file_export_with_title() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stages_export.xlsx");

    let written = XlsxExporter::new()
        .title("Stages Zwolle")
        .sheet_name("Stages")
        .include_empty(false)
        .export(&path, &internships(), &columns())
        .unwrap();
    assert_eq!(written, 2);
    assert!(fs::metadata(&path).unwrap().len() > 0);

    assert_eq!(to_xlsx::<Internship>(dir.path().join("leeg.xlsx"), &[], &[]).unwrap(), 0);
    assert!(!dir.path().join("leeg.xlsx").exists());
}

#[derive(serde::Serialize)]
struct Flags {
    name: String,
    days: u32,
    often: bool,
}

#[test]
fn test_csv_and_json_drop_the_same_empty_values() {
    let dir = tempfile::tempdir().unwrap();
    let records = vec![Flags {
        name: "Acme".to_string(),
        days: 0,
        often: false,
    }];

    CsvExporter::new()
        .include_empty(false)
        .export(dir.path().join("flags.csv"), &records, &[])
        .unwrap();
    JsonExporter::new()
        .include_empty(false)
        .indent(None)
        .export(dir.path().join("flags.json"), &records, &[])
        .unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("flags.csv")).unwrap(), "name,days,often\nAcme,,\n");
    assert_eq!(fs::read_to_string(dir.path().join("flags.json")).unwrap(), "[{\"name\":\"Acme\"}]");
}

#[test]
fn test_inferred_columns_follow_record_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alles.csv");

    to_csv(&path, &internships(), &[]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let header = text.lines().next().unwrap();
    assert!(header.starts_with("internship_id,title,recruiting_title,"));
}

#[test]
fn test_empty_results() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("leeg.csv");
    let json_path = dir.path().join("leeg.json");

    assert_eq!(to_csv::<Internship>(&csv_path, &[], &[]).unwrap(), 0);
    assert!(!csv_path.exists());

    assert_eq!(export::<Internship>(&json_path, &[], &[]).unwrap(), 0);
    assert_eq!(fs::read_to_string(&json_path).unwrap(), "[]");
}
