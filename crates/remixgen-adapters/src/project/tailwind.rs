//! Tailwind CSS add-on: PostCSS pipeline plus a starter theme.

use remixgen_core::domain::{Dependency, GeneratedFile, RelativePath, RenderContext};

const TAILWIND_CONFIG_TEMPLATE: &str = r#"module.exports = {
  purge: ["./{{APP_DIRECTORY}}/**/*.{js,jsx,ts,tsx}"],
  darkMode: false,
  theme: {
    extend: {},
  },
  variants: {
    extend: {},
  },
  plugins: [],
};
"#;

const POSTCSS_CONFIG: &str = r#"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};
"#;

pub fn tailwind_dependencies() -> Vec<Dependency> {
    vec![
        Dependency::dev("tailwindcss"),
        Dependency::dev("postcss"),
        Dependency::dev("autoprefixer"),
    ]
}

/// `tailwind.config.js`, purging classes from the app directory.
///
/// Writable: the theme is meant to be edited.
#[derive(Debug, Clone)]
pub struct TailwindConfigFile {
    path: RelativePath,
    app_directory: String,
}

impl TailwindConfigFile {
    pub fn new(app_directory: impl Into<String>) -> Self {
        Self {
            path: RelativePath::new("tailwind.config.js"),
            app_directory: app_directory.into(),
        }
    }
}

impl GeneratedFile for TailwindConfigFile {
    fn path(&self) -> &RelativePath {
        &self.path
    }

    fn synthesize(&self) -> Option<String> {
        let context =
            RenderContext::new().with_variable("APP_DIRECTORY", self.app_directory.as_str());
        Some(context.render(TAILWIND_CONFIG_TEMPLATE))
    }

    fn readonly(&self) -> bool {
        false
    }
}

/// `postcss.config.js`.
#[derive(Debug, Clone)]
pub struct PostCssConfigFile {
    path: RelativePath,
}

impl PostCssConfigFile {
    pub fn new() -> Self {
        Self {
            path: RelativePath::new("postcss.config.js"),
        }
    }
}

impl Default for PostCssConfigFile {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratedFile for PostCssConfigFile {
    fn path(&self) -> &RelativePath {
        &self.path
    }

    fn synthesize(&self) -> Option<String> {
        Some(POSTCSS_CONFIG.to_string())
    }
}
