use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "storeframe_pipeline_{}_{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn dirs(root: &Path) -> SourceDirs {
    SourceDirs {
        assets_dir: root.join("assets"),
        screenshots_dir: root.join("desktop"),
    }
}

#[test]
fn missing_base_is_reported_before_screenshot() {
    let root = scratch("missing_base");
    let job = Job::new("Base.png", "shot.png", "h", "Base-ES.png").resolve(&dirs(&root));

    let err = ensure_inputs_exist(&job).unwrap_err();
    assert!(matches!(err, MockupError::NotFound { what: "base mockup", .. }));
    assert_eq!(err.missing_path(), Some(job.base_path.as_path()));
}

#[test]
fn missing_screenshot_is_reported_when_base_exists() {
    let root = scratch("missing_shot");
    let d = dirs(&root);
    std::fs::create_dir_all(&d.assets_dir).unwrap();
    std::fs::write(d.assets_dir.join("Base.png"), b"x").unwrap();
    let job = Job::new("Base.png", "shot.png", "h", "Base-ES.png").resolve(&d);

    let err = ensure_inputs_exist(&job).unwrap_err();
    assert!(matches!(err, MockupError::NotFound { what: "screenshot", .. }));
    assert_eq!(err.missing_path(), Some(job.screenshot_path.as_path()));
}

#[test]
fn missing_inputs_lists_each_path_once() {
    let root = scratch("missing_all");
    let d = dirs(&root);
    std::fs::create_dir_all(&d.screenshots_dir).unwrap();
    std::fs::write(d.screenshots_dir.join("ok.png"), b"x").unwrap();

    let jobs = vec![
        Job::new("A.png", "shared.png", "h", "A-ES.png"),
        Job::new("B.png", "shared.png", "h", "B-ES.png"),
        Job::new("A.png", "ok.png", "h", "A2-ES.png"),
    ];
    let missing = missing_inputs(&jobs, &d);
    let paths: Vec<PathBuf> = missing
        .iter()
        .filter_map(|e| e.missing_path())
        .map(Path::to_path_buf)
        .collect();
    assert_eq!(
        paths,
        vec![
            d.assets_dir.join("A.png"),
            d.screenshots_dir.join("shared.png"),
            d.assets_dir.join("B.png"),
        ]
    );
}
