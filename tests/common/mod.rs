#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SAMPLE_1: &str = r#"name,position,completed_tasks,performance,skills,team,experience_years
Alex Ivanov,Backend Developer,45,4.8,"Python, Django, PostgreSQL, Docker",API Team,5
Maria Petrova,Frontend Developer,38,4.7,"React, TypeScript, Redux, CSS",Web Team,4
John Smith,Data Scientist,29,4.6,"Python, ML, SQL, Pandas",AI Team,3
Anna Lee,DevOps Engineer,52,4.9,"AWS, Kubernetes, Terraform, Ansible",Infrastructure Team,6
Mike Brown,QA Engineer,41,4.5,"Selenium, Jest, Cypress, Postman",Testing Team,4
"#;

pub const SAMPLE_2: &str = r#"name,position,completed_tasks,performance,skills,team,experience_years
Alex Ivanov,Backend Developer,30,4.9,"Python, Django, PostgreSQL, Docker",API Team,5
Maria Petrova,Frontend Developer,25,4.6,"React, TypeScript, Redux, CSS",Web Team,4
John Smith,Data Scientist,35,4.7,"Python, ML, SQL, Pandas",AI Team,3
Anna Lee,DevOps Engineer,40,4.8,"AWS, Kubernetes, Terraform, Ansible",Infrastructure Team,6
Zoe Adams,Backend Developer,50,4.7,"Python, FastAPI, Redis, Docker",API Team,7
"#;

pub fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Temp dir holding the two sample files; keep the dir alive while using the paths.
pub fn sample_files() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let first = write_csv(&dir, "sample_1.csv", SAMPLE_1);
    let second = write_csv(&dir, "sample_2.csv", SAMPLE_2);
    (dir, first, second)
}
