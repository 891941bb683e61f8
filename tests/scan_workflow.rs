use docker_detective::analyzer::{ScanSession, Severity};
use docker_detective::config::ScanConfig;
use std::fs;
use tempfile::TempDir;

fn project(compose: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("svc")).unwrap();
    fs::write(
        dir.path().join("svc/Dockerfile"),
        "FROM python:3.12\n# RUN sudo ignored\n\nRUN apt-get install -y gcc\nRUN pip install flask\n",
    )
    .unwrap();
    fs::write(dir.path().join("docker-compose.yml"), compose).unwrap();
    dir
}

#[test]
fn test_repeated_analysis_is_idempotent() {
    let dir = project("services:\n  web:\n    image: web:1.0\n");
    let mut session = ScanSession::default();
    session.discover(dir.path());
    let first = session.analyze();
    let first_issues = session.issues().to_vec();

    let second = session.analyze();
    assert_eq!(first, second);
    assert_eq!(session.issues().len(), first_issues.len());

    session.discover(dir.path());
    assert!(session.issues().is_empty());
    assert_eq!(session.files_scanned(), 0);
    assert_eq!(session.analyze(), first);
}

#[test]
fn test_privileged_service_costs_one_critical() {
    let safe = project("services:\n  web:\n    image: web:1.0\n");
    let risky = project("services:\n  web:\n    image: web:1.0\n    privileged: true\n");

    let mut session = ScanSession::default();
    session.discover(safe.path());
    let safe_stats = session.analyze();
    let safe_score = session.score();

    session.discover(risky.path());
    let risky_stats = session.analyze();

    assert_eq!(risky_stats.critical, safe_stats.critical + 1);
    assert_eq!(session.score(), safe_score - 15);
    let privileged = session
        .issues()
        .iter()
        .find(|i| i.message == "Privileged Mode.")
        .unwrap();
    assert_eq!(privileged.severity, Severity::Critical);
    assert_eq!(privileged.line_num, 4);
    assert_eq!(privileged.content, "privileged: true");
}

#[test]
fn test_build_file_scenario() {
    let dir = project("services:\n");
    let mut session = ScanSession::default();
    session.discover(dir.path());
    let stats = session.analyze();

    // apt lists, pip cache, root, healthcheck
    assert_eq!(stats.critical, 0);
    assert_eq!(stats.high, 1);
    assert_eq!(stats.medium, 1);
    assert_eq!(stats.low, 2);
    assert_eq!(session.score(), 100 - 5 - 2);

    let sorted = session.sorted_issues();
    assert_eq!(sorted[0].message, "Running as Root.");
    assert_eq!(sorted[1].message, "APT Lists not cleaned.");
    assert_eq!(sorted[1].line_num, 4);
}

#[test]
fn test_custom_ignore_dirs() {
    let dir = project("services:\n");
    let config = ScanConfig {
        ignore_dirs: vec!["svc".to_string()],
        ..ScanConfig::default()
    };
    let mut session = ScanSession::new(config);
    session.discover(dir.path());
    assert!(session.build_files().is_empty());
    assert_eq!(session.compose_files().len(), 1);
}
