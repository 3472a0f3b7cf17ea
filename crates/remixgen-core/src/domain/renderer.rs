//! Config renderer: pure functions from resolved options to file text.
//!
//! Templates use `{{VARIABLE}}` placeholders filled from a [`RenderContext`].
//! Values are substituted verbatim, with no escaping, in a single left-to-right
//! pass, so a value that itself contains `{{...}}` is never expanded again.

use std::collections::HashMap;

use crate::domain::options::LayoutOptions;

pub const FRAMEWORK_CONFIG_PATH: &str = "remix.config.js";
pub const PROCESS_MANAGER_CONFIG_PATH: &str = "pm2.config.js";

/// Variable map for placeholder substitution.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{KEY}}` with its value.
    ///
    /// - `{{UNKNOWN}}` stays as the literal `{{UNKNOWN}}`
    /// - an unterminated `{{` is copied through unchanged
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after_open[..end];
            match self.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

impl From<&LayoutOptions> for RenderContext {
    fn from(layout: &LayoutOptions) -> Self {
        Self::new()
            .with_variable("APP_DIRECTORY", layout.app_directory.as_str())
            .with_variable(
                "BROWSER_BUILD_DIRECTORY",
                layout.browser_build_directory.as_str(),
            )
            .with_variable("PUBLIC_PATH", layout.public_path.as_str())
            .with_variable(
                "SERVER_BUILD_DIRECTORY",
                layout.server_build_directory.as_str(),
            )
            .with_variable("DEV_SERVER_PORT", layout.dev_server_port.to_string())
    }
}

const FRAMEWORK_CONFIG_TEMPLATE: &str = r#"module.exports = {
  /**
   * The path to the `app` directory, relative to remix.config.js. Defaults to
   * "app". All code in this directory is part of your app unless it is
   * imported by a route module.
   */
  appDirectory: "{{APP_DIRECTORY}}",

  /**
   * A hook for defining custom routes based on your own file conventions. This
   * is not required, but may be useful if you have custom/advanced routing
   * requirements.
   */
  // routes(defineRoutes) {
  //   return defineRoutes(route => {
  //     route(
  //       // The URL path for this route.
  //       "/pages/one",
  //       // The path to this route's component file, relative to `appDirectory`.
  //       "pages/one.tsx",
  //       // Options:
  //       {
  //         // The route id, defaults to the filename without extension
  //         id: "pages/one",
  //         // Whether or not this route should use a loader
  //         loader: "",
  //       }
  //     );
  //   });
  // },

  /**
   * The path to the browser build, relative to remix.config.js. Defaults to
   * "public/build".
   */
  browserBuildDirectory: "{{BROWSER_BUILD_DIRECTORY}}",

  /**
   * The URL prefix of the browser build with a trailing slash. Defaults to
   * "/build/".
   */
  publicPath: "{{PUBLIC_PATH}}",

  /**
   * The path to the server build directory, relative to remix.config.js.
   * Defaults to "build".
   */
  serverBuildDirectory: "{{SERVER_BUILD_DIRECTORY}}",

  /**
   * The port to use when running `remix run`. Defaults to 8002.
   */
  devServerPort: {{DEV_SERVER_PORT}}
};
"#;

const PROCESS_MANAGER_CONFIG: &str = r#"module.exports = {
  apps: [
    {
      name: "Express",
      script: "server.js",
      watch: ["remix.config.js", "app"],
      watch_options: {
        followSymlinks: false
      },
      env: {
        NODE_ENV: "development"
      }
    },
    {
      name: "Remix",
      script: "remix run",
      watch: false,
      ignore_watch: ["."],
      env: {
        NODE_ENV: "development"
      }
    }
  ]
};
"#;

/// Text of `remix.config.js` for the given layout.
pub fn render_framework_config(layout: &LayoutOptions) -> String {
    RenderContext::from(layout).render(FRAMEWORK_CONFIG_TEMPLATE)
}

/// Text of `pm2.config.js`. Independent of options.
pub fn render_process_manager_config() -> String {
    PROCESS_MANAGER_CONFIG.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::ProjectOptions;

    fn layout() -> LayoutOptions {
        ProjectOptions::default().resolve().layout
    }

    #[test]
    fn framework_config_contains_default_values() {
        let text = render_framework_config(&layout());

        assert!(text.contains(r#"appDirectory: "app","#));
        assert!(text.contains(r#"browserBuildDirectory: "public/build","#));
        assert!(text.contains(r#"publicPath: "/build/","#));
        assert!(text.contains(r#"serverBuildDirectory: "build","#));
        assert!(text.contains("devServerPort: 8002\n"));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn only_port_line_changes_when_only_port_changes() {
        let a = render_framework_config(&layout());
        let b = render_framework_config(&LayoutOptions {
            dev_server_port: 0,
            ..layout()
        });

        let diff: Vec<_> = a
            .lines()
            .zip(b.lines())
            .filter(|(left, right)| left != right)
            .collect();

        assert_eq!(a.lines().count(), b.lines().count());
        assert_eq!(diff, [("  devServerPort: 8002", "  devServerPort: 0")]);
    }

    #[test]
    fn values_are_substituted_verbatim() {
        let text = render_framework_config(&LayoutOptions {
            app_directory: r#"a"b"#.into(),
            public_path: "{{APP_DIRECTORY}}".into(),
            ..layout()
        });

        assert!(text.contains(r#"appDirectory: "a"b","#));
        assert!(text.contains(r#"publicPath: "{{APP_DIRECTORY}}","#));
    }

    #[test]
    fn process_manager_config_declares_both_apps() {
        let text = render_process_manager_config();

        assert!(text.contains(r#"script: "server.js""#));
        assert!(text.contains(r#"watch: ["remix.config.js", "app"]"#));
        assert!(text.contains(r#"script: "remix run""#));
        assert!(text.contains("watch: false"));
        assert_eq!(text.matches(r#"NODE_ENV: "development""#).count(), 2);
    }

    #[test]
    fn render_context_leaves_unknown_and_unterminated_placeholders() {
        let ctx = RenderContext::new().with_variable("A", "1");
        assert_eq!(ctx.render("{{A}}-{{B}}-{{A"), "1-{{B}}-{{A");
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(
            render_framework_config(&layout()),
            render_framework_config(&layout())
        );
    }
}
