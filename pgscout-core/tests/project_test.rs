//! Tests for project root discovery.

use pgscout_core::errors::ProjectError;
use pgscout_core::project;

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[test]
fn test_root_found_from_nested_directory() {
    let dir = tempdir();
    let root = dir.path();
    std::fs::create_dir_all(root.join("config")).unwrap();
    std::fs::write(root.join("config/application.rb"), "").unwrap();
    let nested = root.join("app/models/concerns");
    std::fs::create_dir_all(&nested).unwrap();

    let found = project::find_project_root(&nested).unwrap();
    assert_eq!(found, root.canonicalize().unwrap());
}

#[test]
fn test_root_found_at_start_directory() {
    let dir = tempdir();
    std::fs::create_dir_all(dir.path().join("config")).unwrap();
    std::fs::write(dir.path().join("config/application.rb"), "").unwrap();

    let found = project::find_project_root(dir.path()).unwrap();
    assert_eq!(found, dir.path().canonicalize().unwrap());
}

#[test]
fn test_root_not_found() {
    let dir = tempdir();
    let result = project::find_project_root(dir.path());
    match result.unwrap_err() {
        ProjectError::RootNotFound { .. } => {}
    }
}

#[test]
fn test_fixed_paths_hang_off_root() {
    let root = std::path::Path::new("/srv/app");
    assert_eq!(
        project::schema_path(root),
        std::path::PathBuf::from("/srv/app/db/schema.rb")
    );
    assert_eq!(
        project::database_config_path(root),
        std::path::PathBuf::from("/srv/app/config/database.yml")
    );
}
