mod common;

use common::{sample_files, write_csv};
use csv_reports::{
    render_table, DataLoader, LocalStorage, ReportError, ReportRegistry, ReportService,
    ReportTable,
};
use tempfile::TempDir;

fn service() -> ReportService<LocalStorage> {
    ReportService::new(LocalStorage::new(), ReportRegistry::builtin().unwrap())
}

#[test]
fn test_load_sample_files() {
    let (_dir, first, second) = sample_files();
    let loader = DataLoader::new(LocalStorage::new());

    let rows = loader.load(&[first.clone()]).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].name, "Alex Ivanov");
    assert_eq!(rows[0].skills, "Python, Django, PostgreSQL, Docker");
    assert_eq!(rows[3].completed_tasks, 52);

    let rows = loader.load(&[first, second]).unwrap();
    assert_eq!(rows.len(), 10);
    let backend = rows
        .iter()
        .filter(|r| r.position == "Backend Developer")
        .count();
    assert_eq!(backend, 3);
    assert_eq!(rows[9].name, "Zoe Adams");
}

#[test]
fn test_end_to_end_performance_report() {
    let (_dir, first, second) = sample_files();

    let table = service()
        .build_report("performance", &[first, second])
        .unwrap();
    let rendered = render_table(&table.headers, &table.rows);

    let expected = "\
| position           | performance |
|--------------------|-------------|
| DevOps Engineer    |        4.85 |
| Backend Developer  |        4.80 |
| Frontend Developer |        4.65 |
| Data Scientist     |        4.65 |
| QA Engineer        |        4.50 |";
    assert_eq!(rendered, expected);
}

fn sorted_means(table: &ReportTable) -> Vec<(String, String)> {
    let mut means: Vec<(String, String)> = table
        .rows
        .iter()
        .map(|r| {
            let position = r.get("position").unwrap().as_str().unwrap().to_string();
            let mean = r.get("performance").unwrap().as_f64().unwrap();
            (position, format!("{mean:.6}"))
        })
        .collect();
    means.sort();
    means
}

#[test]
fn test_file_order_only_affects_tie_order() {
    let (_dir, first, second) = sample_files();
    let service = service();

    let forward = service
        .build_report("performance", &[first.clone(), second.clone()])
        .unwrap();
    let backward = service.build_report("performance", &[second, first]).unwrap();

    assert_eq!(sorted_means(&forward), sorted_means(&backward));
}

#[test]
fn test_schema_error_names_missing_columns() {
    let dir = TempDir::new().unwrap();
    let broken = write_csv(
        &dir,
        "broken.csv",
        "name,position,completed_tasks,skills\nAnna,Dev,3,Go\n",
    );

    let err = service().build_report("performance", &[broken]).unwrap_err();
    match err {
        ReportError::SchemaError { message, .. } => {
            assert!(message.ends_with("experience_years, performance, team"));
        }
        other => panic!("expected SchemaError, got {other:?}"),
    }
}

#[test]
fn test_one_bad_file_discards_everything() {
    let (dir, first, _second) = sample_files();
    let bad = write_csv(
        &dir,
        "bad.csv",
        "name,position,completed_tasks,performance,skills,team,experience_years\n\
         Bob,QA Engineer,ten,4.1,Go,QA,2\n",
    );

    let err = service().build_report("performance", &[first, bad]).unwrap_err();
    assert!(matches!(err, ReportError::ValidationError { .. }));
}
