use cfgkit_fs::{Error, ProjectLayout};
use cfgkit_test_utils::project::ProjectFixture;
use std::path::Path;

#[test]
fn detect_anchors_on_main() {
    let project = ProjectFixture::new();
    let start = project.subdir("tools/scripts");

    let layout = ProjectLayout::detect(&start).unwrap();

    assert_eq!(layout.root(), project.root());
}

#[test]
fn detect_without_main_fails() {
    let temp = tempfile::tempdir().unwrap();

    let result = ProjectLayout::detect(temp.path());

    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn config_file_lives_under_config_dir() {
    let layout = ProjectLayout::at("/srv/app/main");

    assert_eq!(layout.config_dir(), Path::new("/srv/app/main/config"));
    assert_eq!(
        layout.config_file("app.ini"),
        Path::new("/srv/app/main/config/app.ini")
    );
}
