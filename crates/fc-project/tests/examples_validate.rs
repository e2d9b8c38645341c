use std::path::PathBuf;

#[test]
fn bundled_scenario_files_validate() {
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root = crate_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root");

    let files = [
        "projects/reference_columns.yaml",
        "projects/reflux_study.yaml",
        "projects/reference_columns.json",
    ];

    for rel in files {
        let path = root.join(rel);
        let result = fc_project::load_file(&path);
        assert!(
            result.is_ok(),
            "scenario file failed validation: {} => {:?}",
            path.display(),
            result.err()
        );
    }
}

#[test]
fn bundled_reference_file_matches_builtin_set() {
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let path = crate_dir
        .join("../../projects/reference_columns.yaml")
        .canonicalize()
        .expect("reference file");
    let file = fc_project::load_file(&path).unwrap();
    assert_eq!(file, fc_project::reference_scenarios());
}
