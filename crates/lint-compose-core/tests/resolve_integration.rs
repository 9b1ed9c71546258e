//! Integration test: request → registry → resolved config.
//!
//! Exercises the ordering, auto-include, and allowlist guarantees of
//! `resolve` against a small registry and a temporary project directory.

use lint_compose_core::{
    resolve, CallerLocation, ComposeConfig, ComposeError, ConfigEntry, DependencyAllowlist,
    FilesDirective, FragmentRegistry, ResolveOptions, SelectionRequest,
};
use std::fs;
use tempfile::TempDir;

fn registry() -> FragmentRegistry {
    FragmentRegistry::builder()
        .fragment(
            "node-ts",
            [
                ConfigEntry::new().plugin("n", "eslint-plugin-n"),
                ConfigEntry::new().plugin("@typescript-eslint", "@typescript-eslint/eslint-plugin"),
                ConfigEntry::new().rule("n/no-missing-import", "off"),
            ],
        )
        .fragment(
            "react",
            [
                ConfigEntry::new().plugin("react", "eslint-plugin-react"),
                ConfigEntry::new().rule("react/jsx-key", "error"),
            ],
        )
        .fragment(
            "esm",
            [ConfigEntry::new().rule("import/extensions", ["error", "ignorePackages"].as_slice())],
        )
        .build()
        .expect("registry should build")
}

fn request(tmp: &TempDir, names: &[&str]) -> SelectionRequest {
    SelectionRequest::with_names(CallerLocation::from_dir(tmp.path()), names)
        .expect("names should be valid")
}

fn esm_count(entries: &[ConfigEntry], esm: &[ConfigEntry]) -> usize {
    entries.windows(esm.len()).filter(|w| *w == esm).count()
}

// ── Ordering ──

#[test]
fn extends_concatenates_in_selection_order() {
    let tmp = TempDir::new().unwrap();
    let registry = registry();
    let node_ts = registry.get("node-ts").unwrap().entries();
    let react = registry.get("react").unwrap().entries();

    let config = resolve(&registry, &request(&tmp, &["node-ts", "react"])).unwrap();

    assert_eq!(&config.extends[..node_ts.len()], node_ts);
    assert_eq!(
        &config.extends[node_ts.len()..node_ts.len() + react.len()],
        react
    );
}

#[test]
fn reversed_selection_reverses_fragments_not_entries() {
    let tmp = TempDir::new().unwrap();
    let registry = registry();
    let node_ts = registry.get("node-ts").unwrap().entries();
    let react = registry.get("react").unwrap().entries();

    let config = resolve(&registry, &request(&tmp, &["react", "node-ts"])).unwrap();

    assert_eq!(&config.extends[..react.len()], react);
    assert_eq!(&config.extends[react.len()..react.len() + node_ts.len()], node_ts);
}

// ── Module-system auto-include ──

#[test]
fn module_system_fragment_appears_exactly_once() {
    let tmp = TempDir::new().unwrap();
    let registry = registry();
    let esm = registry.get("esm").unwrap().entries();

    let implicit = resolve(&registry, &request(&tmp, &["node-ts"])).unwrap();
    let explicit = resolve(&registry, &request(&tmp, &["node-ts", "esm"])).unwrap();

    assert_eq!(esm_count(&implicit.extends, esm), 1);
    assert_eq!(esm_count(&explicit.extends, esm), 1);
    assert_eq!(implicit.extends, explicit.extends);
}

#[test]
fn explicit_module_system_keeps_its_position() {
    let tmp = TempDir::new().unwrap();
    let registry = registry();
    let esm = registry.get("esm").unwrap().entries();

    let config = resolve(&registry, &request(&tmp, &["esm", "react"])).unwrap();
    assert_eq!(&config.extends[..esm.len()], esm);
    assert_eq!(esm_count(&config.extends, esm), 1);
}

#[test]
fn module_system_can_be_disabled() {
    let tmp = TempDir::new().unwrap();
    let registry = registry();
    let esm = registry.get("esm").unwrap().entries();

    let req = request(&tmp, &["node-ts"])
        .options(ResolveOptions::default().include_module_system_fragment(false));
    let config = resolve(&registry, &req).unwrap();

    assert_eq!(esm_count(&config.extends, esm), 0);
    assert_eq!(config.extends.len(), registry.get("node-ts").unwrap().entries().len());
}

// ── Dependency allowlist ──

#[test]
fn absent_or_empty_allowlist_appends_nothing() {
    let tmp = TempDir::new().unwrap();
    let registry = registry();

    let baseline = resolve(&registry, &request(&tmp, &["node-ts"])).unwrap();
    let empty = resolve(
        &registry,
        &request(&tmp, &["node-ts"]).options(
            ResolveOptions::default().extraneous_dependency_allowlist(DependencyAllowlist::default()),
        ),
    )
    .unwrap();

    assert_eq!(baseline.extends, empty.extends);
}

#[test]
fn allowlist_appends_one_scoped_override_last() {
    let tmp = TempDir::new().unwrap();
    let registry = registry();

    let baseline = resolve(&registry, &request(&tmp, &["node-ts"])).unwrap();
    let config = resolve(
        &registry,
        &request(&tmp, &["node-ts"]).options(
            ResolveOptions::default()
                .extraneous_dependency_allowlist(DependencyAllowlist::new(["pkg-a", "pkg-b"])),
        ),
    )
    .unwrap();

    assert_eq!(config.extends.len(), baseline.extends.len() + 1);
    assert_eq!(&config.extends[..baseline.extends.len()], baseline.extends.as_slice());

    let last = config.extends.last().unwrap();
    let value = serde_json::to_value(last).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "rules": {
                "n/no-extraneous-import": ["error", { "allowModules": ["pkg-a", "pkg-b"] }]
            }
        })
    );
}

// ── Files, ignores, project ──

#[test]
fn files_and_project_are_resolved_relative_to_caller() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("config")).unwrap();

    let req = request(&tmp, &["react"]).options(
        ResolveOptions::default()
            .files(FilesDirective::AllInside("tests".to_string()))
            .project_descriptor_dir("./config")
            .project_descriptor_name("tsconfig.eslint.json"),
    );
    let config = resolve(&registry(), &req).unwrap();

    assert!(config.files.iter().all(|g| g.starts_with("tests/")));
    assert!(config.ignores.is_empty());
    assert_eq!(
        config.language_options.parser_options.tsconfig_root_dir,
        fs::canonicalize(tmp.path().join("config")).unwrap()
    );
    assert_eq!(
        config.project_path(),
        fs::canonicalize(tmp.path().join("config"))
            .unwrap()
            .join("tsconfig.eslint.json")
    );
}

#[test]
fn unresolvable_project_dir_surfaces_filesystem_error() {
    let tmp = TempDir::new().unwrap();
    let req = request(&tmp, &["react"])
        .options(ResolveOptions::default().project_descriptor_dir("./missing"));

    match resolve(&registry(), &req) {
        Err(ComposeError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected filesystem error, got {other:?}"),
    }
}

// ── Purity ──

#[test]
fn resolution_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let registry = registry();
    let req = request(&tmp, &["node-ts", "react"]).options(
        ResolveOptions::default()
            .extraneous_dependency_allowlist(DependencyAllowlist::new(["pkg-a"])),
    );

    let first = resolve(&registry, &req).unwrap();
    let second = resolve(&registry, &req).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn unknown_fragment_is_named() {
    let tmp = TempDir::new().unwrap();
    let err = resolve(&registry(), &request(&tmp, &["does-not-exist"])).unwrap_err();
    assert!(err.to_string().contains("does-not-exist"));
}

// ── TOML-driven requests ──

#[test]
fn toml_config_resolves_relative_to_its_own_location() {
    let tmp = TempDir::new().unwrap();
    let pkg = tmp.path().join("packages/web");
    fs::create_dir_all(&pkg).unwrap();
    let path = pkg.join("lint-compose.toml");
    fs::write(
        &path,
        r#"
select = ["node-ts", "react"]
files = "all-inside:./src"
ignores = ["dist/**"]
"#,
    )
    .unwrap();

    let config = ComposeConfig::from_file(&path).unwrap();
    let resolved = resolve(&registry(), &config.request().unwrap()).unwrap();

    assert_eq!(
        resolved.language_options.parser_options.tsconfig_root_dir,
        fs::canonicalize(&pkg).unwrap()
    );
    assert!(resolved.files.iter().all(|g| g.starts_with("src/")));
    assert_eq!(resolved.ignores, ["dist/**"]);
}
