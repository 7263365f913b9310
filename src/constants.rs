//! Common constants used throughout create-base-app.

/// Name of the scaffolding tool's own directory inside the source tree.
pub const TOOL_DIR: &str = "create-base-app";

/// Project manifest file name
pub const MANIFEST_FILE: &str = "package.json";

/// Version-control ignore rules file name
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Environment-variable template file name
pub const ENV_EXAMPLE_FILE: &str = ".env.example";

/// Framework configuration file written on every run
pub const FRAMEWORK_CONFIG_FILE: &str = "next.config.js";

/// Every framework configuration file name the pruner edits
pub const FRAMEWORK_CONFIG_FILES: [&str; 3] =
    ["next.config.js", "next.config.mjs", "next.config.ts"];

/// Directories never copied from the source tree, at any depth
pub const EXCLUDED_DIRS: [&str; 8] = [
    "node_modules",
    ".next",
    "dist",
    "build",
    TOOL_DIR,
    ".git",
    "coverage",
    ".turbo",
];

/// Files never copied from the source tree: local env overrides and lock files
pub const EXCLUDED_FILES: [&str; 7] = [
    ".env.local",
    ".env.development.local",
    ".env.test.local",
    ".env.production.local",
    "pnpm-lock.yaml",
    "yarn.lock",
    "package-lock.json",
];

/// Scripts every generated manifest carries, independent of the package manager
pub const CANONICAL_SCRIPTS: [(&str, &str); 4] = [
    ("dev", "next dev"),
    ("build", "next build"),
    ("start", "next start"),
    ("lint", "next lint"),
];

/// Version written into a freshly synthesized manifest
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Description used when none is supplied interactively
pub const DEFAULT_DESCRIPTION: &str = "A Next.js project with base-framework";

/// Project name proposed by the interactive prompt
pub const DEFAULT_PROJECT_NAME: &str = "my-base-app";
