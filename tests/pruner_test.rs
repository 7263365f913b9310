use create_base_app::config::{Feature, FeatureSet, ProjectConfiguration};
use create_base_app::manifest::Manifest;
use create_base_app::pruner::{prune_features, PRUNE_RULES};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A project holding every artifact any rule can remove.
fn full_project() -> (TempDir, Manifest) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for rule in PRUNE_RULES.iter() {
        for file in rule.files {
            write(root, file, "{}");
        }
        for dir in rule.dirs {
            write(root, &format!("{dir}/index.ts"), "export {}");
        }
    }
    write(root, "next.config.js", "module.exports = {\n  i18n: { locales: ['en'] },\n}\n");

    let mut manifest = Manifest::new("demo");
    for rule in PRUNE_RULES.iter() {
        for package in rule.dev_dependencies {
            manifest.dev_dependencies.insert(package.to_string(), "*".to_string());
        }
        for script in rule.scripts {
            manifest.scripts.insert(script.to_string(), "run".to_string());
        }
    }
    manifest.dev_dependencies.insert("typescript".to_string(), "^5".to_string());
    manifest.scripts.insert("dev".to_string(), "next dev".to_string());
    (temp_dir, manifest)
}

fn config_with(features: FeatureSet) -> ProjectConfiguration {
    let mut config = ProjectConfiguration::new("demo").unwrap();
    config.features = features;
    config
}

fn artifacts_present(root: &Path, manifest: &Manifest, feature: Feature) -> bool {
    let rule = PRUNE_RULES.iter().find(|rule| rule.feature == feature).unwrap();
    let paths = rule
        .files
        .iter()
        .chain(rule.dirs.iter())
        .all(|p| root.join(p).exists());
    let deps = rule
        .dev_dependencies
        .iter()
        .all(|d| manifest.dev_dependencies.contains_key(*d));
    let scripts = rule
        .scripts
        .iter()
        .all(|s| manifest.scripts.contains_key(*s));
    paths && deps && scripts
}

fn artifacts_absent(root: &Path, manifest: &Manifest, feature: Feature) -> bool {
    let rule = PRUNE_RULES.iter().find(|rule| rule.feature == feature).unwrap();
    let paths = rule
        .files
        .iter()
        .chain(rule.dirs.iter())
        .all(|p| !root.join(p).exists());
    let deps = rule
        .dev_dependencies
        .iter()
        .all(|d| !manifest.dev_dependencies.contains_key(*d));
    let scripts = rule
        .scripts
        .iter()
        .all(|s| !manifest.scripts.contains_key(*s));
    paths && deps && scripts
}

#[test]
fn test_each_feature_prunes_only_itself() {
    for rule in PRUNE_RULES.iter() {
        // Everything selected except the feature under test.
        let features: FeatureSet =
            Feature::ALL.into_iter().filter(|f| *f != rule.feature).collect();
        let (project, mut manifest) = full_project();
        prune_features(project.path(), &config_with(features), &mut manifest).unwrap();

        assert!(
            artifacts_absent(project.path(), &manifest, rule.feature),
            "{:?}",
            rule.feature
        );
        for other in PRUNE_RULES.iter().filter(|other| other.feature != rule.feature) {
            assert!(
                artifacts_present(project.path(), &manifest, other.feature),
                "pruning {:?} touched {:?}",
                rule.feature,
                other.feature
            );
        }
    }
}

#[test]
fn test_all_selected_prunes_nothing() {
    let (project, mut manifest) = full_project();
    let before = manifest.clone();
    let config = config_with(Feature::ALL.into_iter().collect());
    let report = prune_features(project.path(), &config, &mut manifest).unwrap();

    assert_eq!(manifest, before);
    assert!(report.removed_paths.is_empty());
    assert!(report.edited_configs.is_empty());
}

#[test]
fn test_none_selected_prunes_everything_and_keeps_other_keys() {
    let (project, mut manifest) = full_project();
    let config = config_with(FeatureSet::empty());
    let report = prune_features(project.path(), &config, &mut manifest).unwrap();

    for rule in PRUNE_RULES.iter() {
        assert!(artifacts_absent(project.path(), &manifest, rule.feature));
    }
    assert_eq!(
        manifest.dev_dependencies.get("typescript").map(String::as_str),
        Some("^5")
    );
    assert!(manifest.scripts.contains_key("dev"));
    assert!(report.removed_scripts.contains(&"lint".to_string()));

    let next_config = fs::read_to_string(project.path().join("next.config.js")).unwrap();
    assert_eq!(next_config, "module.exports = {\n  }\n");
}

#[test]
fn test_missing_artifacts_are_a_no_op() {
    let project = TempDir::new().unwrap();
    let mut manifest = Manifest::new("demo");
    let config = config_with(FeatureSet::empty());
    let report = prune_features(project.path(), &config, &mut manifest).unwrap();

    assert!(report.removed_paths.is_empty());
    assert!(report.removed_dev_dependencies.is_empty());
}
