use serial_test::serial;
use std::fs::{self, create_dir, File};
use std::path::Path;
use tempfile::tempdir;

use jenkins_onboard::config::GenerateConfig;
use jenkins_onboard::error::OnboardError;
use jenkins_onboard::generate::{generate_configs, GenerateOutcome};

const REPO: &str = "https://git.example.com/platform/services.git";

fn touch(dir: &Path, name: &str) {
    File::create(dir.join(name)).expect("create input file");
}

fn xml_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .filter(|n| n.ends_with(".xml"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_generates_one_document_per_jenkinsfile() {
    let tmp = tempdir().unwrap();
    let pipelines = tmp.path().join("pipelines");
    create_dir(&pipelines).unwrap();
    for name in ["Jenkinsfile.api", "Jenkinsfile.web", "Jenkinsfile", "README.md", "build.sh"] {
        touch(&pipelines, name);
    }

    let config = GenerateConfig::new(REPO, "develop", pipelines.clone());
    let mut seen = Vec::new();
    let report = generate_configs(&config, tmp.path(), |c| seen.push(c.jenkinsfile.clone()))
        .expect("generation should succeed");

    assert_eq!(report.configs.len(), 3);
    assert_eq!(report.written(), 3);
    assert_eq!(report.failed(), 0);
    assert_eq!(seen, vec!["Jenkinsfile", "Jenkinsfile.api", "Jenkinsfile.web"]);
    assert_eq!(
        xml_names(&pipelines),
        vec![
            "config_Jenkinsfile.api.xml",
            "config_Jenkinsfile.web.xml",
            "config_Jenkinsfile.xml",
        ]
    );
}

#[test]
fn test_document_fields_match_inputs() {
    let tmp = tempdir().unwrap();
    let pipelines = tmp.path().join("ci").join("jobs");
    fs::create_dir_all(&pipelines).unwrap();
    touch(&pipelines, "Jenkinsfile.deploy");

    let config = GenerateConfig::new(REPO, "release/2.x", pipelines.clone());
    let report = generate_configs(&config, tmp.path(), |_| {}).unwrap();

    let generated = &report.configs[0];
    assert_eq!(generated.script_path, "ci/jobs/Jenkinsfile.deploy");
    assert_eq!(generated.output, pipelines.join("config_Jenkinsfile.deploy.xml"));

    let doc = fs::read_to_string(&generated.output).unwrap();
    assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(doc.contains(&format!("<url>{REPO}</url>")), "{doc}");
    assert!(doc.contains("<name>*/release/2.x</name>"), "{doc}");
    assert!(doc.contains("<scriptPath>ci/jobs/Jenkinsfile.deploy</scriptPath>"), "{doc}");
}

#[test]
fn test_script_path_is_relative_to_working_dir_not_scanned_dir() {
    let tmp = tempdir().unwrap();
    let work = tmp.path().join("work");
    let pipelines = tmp.path().join("repo").join("pipelines");
    create_dir(&work).unwrap();
    fs::create_dir_all(&pipelines).unwrap();
    touch(&pipelines, "Jenkinsfile.lint");

    let config = GenerateConfig::new(REPO, "main", pipelines);
    let report = generate_configs(&config, &work, |_| {}).unwrap();

    assert_eq!(report.configs[0].script_path, "../repo/pipelines/Jenkinsfile.lint");
}

#[test]
fn test_no_jenkinsfiles_fails_without_writing() {
    let tmp = tempdir().unwrap();
    touch(tmp.path(), "README.md");
    touch(tmp.path(), "config_Jenkinsfile.old.xml");

    let config = GenerateConfig::new(REPO, "main", tmp.path().to_path_buf());
    let err = generate_configs(&config, tmp.path(), |_| panic!("nothing should be generated"))
        .unwrap_err();

    assert!(matches!(err, OnboardError::NoInputFilesFound { .. }), "got {err:?}");
    assert_eq!(xml_names(tmp.path()), vec!["config_Jenkinsfile.old.xml"]);
}

#[test]
fn test_missing_directory_is_fatal() {
    let tmp = tempdir().unwrap();
    let config = GenerateConfig::new(REPO, "main", tmp.path().join("absent"));
    let err = generate_configs(&config, tmp.path(), |_| {}).unwrap_err();
    assert!(matches!(err, OnboardError::DirectoryNotFound(_)), "got {err:?}");
}

#[test]
fn test_regeneration_is_byte_identical() {
    let tmp = tempdir().unwrap();
    touch(tmp.path(), "Jenkinsfile.a");
    touch(tmp.path(), "Jenkinsfile.b");
    let config = GenerateConfig::new(REPO, "main", tmp.path().to_path_buf());

    let first = generate_configs(&config, tmp.path(), |_| {}).unwrap();
    let first_bytes: Vec<Vec<u8>> = first
        .configs
        .iter()
        .map(|c| fs::read(&c.output).unwrap())
        .collect();

    let second = generate_configs(&config, tmp.path(), |_| {}).unwrap();
    let second_bytes: Vec<Vec<u8>> = second
        .configs
        .iter()
        .map(|c| fs::read(&c.output).unwrap())
        .collect();

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_existing_document_is_overwritten() {
    let tmp = tempdir().unwrap();
    touch(tmp.path(), "Jenkinsfile.a");
    fs::write(tmp.path().join("config_Jenkinsfile.a.xml"), "stale").unwrap();

    let config = GenerateConfig::new(REPO, "main", tmp.path().to_path_buf());
    generate_configs(&config, tmp.path(), |_| {}).unwrap();

    let doc = fs::read_to_string(tmp.path().join("config_Jenkinsfile.a.xml")).unwrap();
    assert!(doc.contains("<flow-definition"), "{doc}");
}

#[test]
fn test_one_failed_write_does_not_stop_the_batch() {
    let tmp = tempdir().unwrap();
    for name in ["Jenkinsfile.a", "Jenkinsfile.b", "Jenkinsfile.c"] {
        touch(tmp.path(), name);
    }
    // A directory where b's document should go makes that write fail.
    create_dir(tmp.path().join("config_Jenkinsfile.b.xml")).unwrap();

    let config = GenerateConfig::new(REPO, "main", tmp.path().to_path_buf());
    let report = generate_configs(&config, tmp.path(), |_| {}).unwrap();

    assert_eq!(report.written(), 2);
    assert_eq!(report.failed(), 1);
    let outcomes: Vec<(&str, bool)> = report
        .configs
        .iter()
        .map(|c| (c.jenkinsfile.as_str(), c.outcome == GenerateOutcome::Written))
        .collect();
    assert_eq!(
        outcomes,
        vec![("Jenkinsfile.a", true), ("Jenkinsfile.b", false), ("Jenkinsfile.c", true)]
    );
    assert!(tmp.path().join("config_Jenkinsfile.c.xml").is_file());
}

#[test]
fn test_untrusted_values_are_escaped_in_output() {
    let tmp = tempdir().unwrap();
    touch(tmp.path(), "Jenkinsfile.x");
    let config = GenerateConfig::new(
        "https://git.example.com/r.git?token=a&b=<c>",
        "feature/\"quoted\"",
        tmp.path().to_path_buf(),
    );
    let report = generate_configs(&config, tmp.path(), |_| {}).unwrap();
    let doc = fs::read_to_string(&report.configs[0].output).unwrap();

    assert!(doc.contains("<url>https://git.example.com/r.git?token=a&amp;b=&lt;c&gt;</url>"), "{doc}");
    assert!(doc.contains("<name>*/feature/\"quoted\"</name>"), "{doc}");
}

#[test]
#[serial]
fn test_run_generate_uses_process_working_directory() {
    use jenkins_onboard::cli::{run_generate, GenerateCli};

    let tmp = tempdir().unwrap();
    let pipelines = tmp.path().join("jobs");
    create_dir(&pipelines).unwrap();
    touch(&pipelines, "Jenkinsfile.nightly");

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(tmp.path()).unwrap();
    let result = run_generate(GenerateCli {
        repo: REPO.to_string(),
        branch: "main".to_string(),
        path: "jobs".into(),
    });
    std::env::set_current_dir(original).unwrap();

    let report = result.expect("generation should succeed");
    assert_eq!(report.configs[0].script_path, "jobs/Jenkinsfile.nightly");
    assert!(pipelines.join("config_Jenkinsfile.nightly.xml").is_file());
}
