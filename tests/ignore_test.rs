use create_base_app::ignore::ExclusionPolicy;

#[test]
fn test_default_policy_excludes_dirs_at_any_depth() {
    let policy = ExclusionPolicy::default();

    assert!(policy.is_excluded("node_modules", true));
    assert!(policy.is_excluded("node_modules/react/index.js", false));
    assert!(policy.is_excluded("packages/ui/node_modules/x.js", false));
    assert!(policy.is_excluded("src/.next/cache", true));
    assert!(policy.is_excluded("create-base-app/bin/cli.js", false));
    assert!(policy.is_excluded(".git/HEAD", false));
    assert!(!policy.is_excluded("src/app/page.tsx", false));
    assert!(!policy.is_excluded("src/builder/index.ts", false));
}

#[test]
fn test_default_policy_excludes_files_by_base_name() {
    let policy = ExclusionPolicy::default();

    assert!(policy.is_excluded("pnpm-lock.yaml", false));
    assert!(policy.is_excluded("apps/web/yarn.lock", false));
    assert!(policy.is_excluded(".env.local", false));
    assert!(!policy.is_excluded(".env.example", false));
    assert!(!policy.is_excluded("package.json", false));
}

#[test]
fn test_custom_policy() {
    let policy = ExclusionPolicy::new(["vendor"], ["secret.txt"]).exclude_dir("tmp");

    assert!(policy.is_excluded("a/vendor/b", false));
    assert!(policy.is_excluded("tmp", true));
    assert!(policy.is_excluded("docs/secret.txt", false));
    assert!(!policy.is_excluded("node_modules/x.js", false));
}
