//! Derived configuration files written into the generated project.
//!
//! Pure templating: identical configurations always produce byte-identical
//! files. Nothing here merges with files copied from the source tree.

use crate::config::{Feature, ProjectConfiguration};
use crate::constants::{ENV_EXAMPLE_FILE, FRAMEWORK_CONFIG_FILE, GITIGNORE_FILE};
use crate::error::{BaseAppError, BaseAppResult};
use crate::renderer::{to_context, TemplateRenderer};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const GITIGNORE_TEMPLATE: &str = r#"# dependencies
/node_modules
/.pnp
.pnp.js

# testing
/coverage

# next.js
/.next/
/out/

# production
/build

# misc
.DS_Store
*.pem

# debug
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# local env files
.env*.local
.env

# vercel
.vercel

# typescript
*.tsbuildinfo
next-env.d.ts
"#;

const ENV_EXAMPLE_TEMPLATE: &str = r#"# Database
# DATABASE_URL=

# Authentication
# NEXTAUTH_URL=http://localhost:3000
# NEXTAUTH_SECRET=

# API Keys
# API_KEY=

"#;

const FRAMEWORK_CONFIG_TEMPLATE: &str = r#"/** @type {import('next').NextConfig} */
const nextConfig = {
  reactStrictMode: true,
{%- if variant.router == "pages" %}
  experimental: { appDir: false },
{%- endif %}
}

module.exports = nextConfig
"#;

/// A file the emitter may write, with the feature that gates it.
struct EmittedFile {
    name: &'static str,
    template: &'static str,
    requires: Option<Feature>,
}

const EMITTED_FILES: [EmittedFile; 3] = [
    EmittedFile {
        name: GITIGNORE_FILE,
        template: GITIGNORE_TEMPLATE,
        requires: Some(Feature::Git),
    },
    EmittedFile {
        name: ENV_EXAMPLE_FILE,
        template: ENV_EXAMPLE_TEMPLATE,
        requires: Some(Feature::Env),
    },
    EmittedFile {
        name: FRAMEWORK_CONFIG_FILE,
        template: FRAMEWORK_CONFIG_TEMPLATE,
        requires: None,
    },
];

/// Renders the framework configuration text for a configuration.
pub fn render_framework_config(
    renderer: &dyn TemplateRenderer,
    config: &ProjectConfiguration,
) -> BaseAppResult<String> {
    renderer.render(FRAMEWORK_CONFIG_TEMPLATE, &render_context(config)?)
}

fn render_context(config: &ProjectConfiguration) -> BaseAppResult<serde_json::Value> {
    Ok(serde_json::json!({
        "variant": to_context(&config.template_variant())?,
        "config": to_context(config)?,
    }))
}

/// Writes `.gitignore` (with `git`), `.env.example` (with `env`) and a fresh
/// `next.config.js` into `target_root`.
///
/// # Returns
/// * `BaseAppResult<Vec<PathBuf>>` - Paths written, in emission order
pub fn emit_config_files<P: AsRef<Path>>(
    target_root: P,
    config: &ProjectConfiguration,
    renderer: &dyn TemplateRenderer,
) -> BaseAppResult<Vec<PathBuf>> {
    let target_root = target_root.as_ref();
    let context = render_context(config)?;
    let mut written = Vec::new();

    for file in EMITTED_FILES.iter() {
        if let Some(feature) = file.requires {
            if !config.has_feature(feature) {
                debug!(
                    "Skipping '{}': feature '{}' not selected",
                    file.name, feature
                );
                continue;
            }
        }
        let path = target_root.join(file.name);
        let content = renderer.render(file.template, &context)?;
        debug!("Writing file: '{}'", path.display());
        fs::write(&path, content).map_err(|e| BaseAppError::WriteError {
            path: path.clone(),
            source: e,
        })?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MiniJinjaRenderer;

    #[test]
    fn test_app_router_omits_compat_flag() {
        let config = ProjectConfiguration::new("demo").unwrap();
        let renderer = MiniJinjaRenderer::new();
        let text = render_framework_config(&renderer, &config).unwrap();
        assert!(!text.contains("appDir"));
        assert!(text.contains("reactStrictMode: true,"));
        assert!(text.ends_with("module.exports = nextConfig\n"));
    }

    #[test]
    fn test_pages_router_embeds_compat_flag() {
        let mut config = ProjectConfiguration::new("demo").unwrap();
        config.use_app_router = false;
        let renderer = MiniJinjaRenderer::new();
        let text = render_framework_config(&renderer, &config).unwrap();
        assert!(text.contains("  experimental: { appDir: false },\n}"));
    }

    #[test]
    fn test_static_templates_render_verbatim() {
        let config = ProjectConfiguration::new("demo").unwrap();
        let context = render_context(&config).unwrap();
        let renderer = MiniJinjaRenderer::new();
        assert_eq!(
            renderer.render(GITIGNORE_TEMPLATE, &context).unwrap(),
            GITIGNORE_TEMPLATE
        );
        assert_eq!(
            renderer.render(ENV_EXAMPLE_TEMPLATE, &context).unwrap(),
            ENV_EXAMPLE_TEMPLATE
        );
    }
}
