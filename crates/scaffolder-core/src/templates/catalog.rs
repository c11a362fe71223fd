//! The fixed catalog of files that make up a taujs project
//!
//! Each entry pairs a relative output path with a render function. Text payloads
//! are embedded from `templates/taujs/` at compile time; JSON payloads are built
//! in memory and pretty-printed.

use crate::config::ProjectConfig;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Directories created before any file is written
pub const DIRECTORIES: &[&str] = &["src/server/services", "src/client/public"];

/// Placeholder replaced with the project name in text templates
const PROJECT_NAME: &str = "{{project_name}}";
const INSTALL_COMMAND: &str = "{{install_command}}";
const DEV_COMMAND: &str = "{{dev_command}}";

const DEPENDENCIES: &[(&str, &str)] = &[
    ("@taujs/react", "^0.3.0"),
    ("@taujs/server", "^0.3.0"),
    ("react", "^19.1.0"),
    ("react-dom", "^19.1.0"),
];

const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@types/node", "^22.15.0"),
    ("@types/react", "^19.1.0"),
    ("@types/react-dom", "^19.1.0"),
    ("@vitejs/plugin-react", "^4.4.0"),
    ("tsx", "^4.19.0"),
    ("typescript", "^5.8.0"),
    ("vite", "^6.3.0"),
];

/// Rendered file content
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Written exactly as produced
    Text(String),
    /// Serialized as pretty-printed JSON
    Json(Value),
}

impl Content {
    /// Serialize to the bytes written on disk
    pub fn into_bytes(self) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            Content::Text(text) => Ok(text.into_bytes()),
            Content::Json(value) => {
                let mut out = serde_json::to_string_pretty(&value)?;
                out.push('\n');
                Ok(out.into_bytes())
            }
        }
    }
}

/// A single catalog entry
#[derive(Clone, Copy)]
pub struct Template {
    /// Output path relative to the project root, `/`-separated
    pub path: &'static str,
    render: fn(&ProjectConfig) -> serde_json::Result<Content>,
}

impl Template {
    /// Produce this entry's content for a project
    pub fn render(&self, config: &ProjectConfig) -> serde_json::Result<Content> {
        (self.render)(config)
    }

    /// Whether the entry is serialized from structured data
    pub fn is_structured(&self, config: &ProjectConfig) -> bool {
        matches!(self.render(config), Ok(Content::Json(_)))
    }
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Template").field("path", &self.path).finish()
    }
}

macro_rules! text {
    ($path:literal, $file:literal) => {
        Template {
            path: $path,
            render: |config| Ok(Content::Text(fill(include_str!($file), config))),
        }
    };
}

/// Every file in a generated project, in write order
pub const CATALOG: &[Template] = &[
    Template {
        path: "package.json",
        render: package_json,
    },
    Template {
        path: "tsconfig.json",
        render: tsconfig_json,
    },
    text!("taujs.config.ts", "../../templates/taujs/taujs.config.ts"),
    text!("build.ts", "../../templates/taujs/build.ts"),
    text!(".gitignore", "../../templates/taujs/gitignore"),
    text!("README.md", "../../templates/taujs/README.md"),
    text!("src/server/index.ts", "../../templates/taujs/src/server/index.ts"),
    text!("src/server/types.d.ts", "../../templates/taujs/src/server/types.d.ts"),
    Template {
        path: "src/server/tsconfig.json",
        render: server_tsconfig_json,
    },
    text!(
        "src/server/services/registry.ts",
        "../../templates/taujs/src/server/services/registry.ts"
    ),
    text!(
        "src/server/services/example.service.ts",
        "../../templates/taujs/src/server/services/example.service.ts"
    ),
    text!("src/client/index.html", "../../templates/taujs/src/client/index.html"),
    text!("src/client/App.tsx", "../../templates/taujs/src/client/App.tsx"),
    text!(
        "src/client/entry-client.tsx",
        "../../templates/taujs/src/client/entry-client.tsx"
    ),
    text!(
        "src/client/entry-server.tsx",
        "../../templates/taujs/src/client/entry-server.tsx"
    ),
    text!("src/client/styles.css", "../../templates/taujs/src/client/styles.css"),
    text!("src/client/vite-env.d.ts", "../../templates/taujs/src/client/vite-env.d.ts"),
    text!(
        "src/client/public/favicon.svg",
        "../../templates/taujs/src/client/public/favicon.svg"
    ),
];

/// Substitute configuration values into a text template
fn fill(template: &str, config: &ProjectConfig) -> String {
    template
        .replace(PROJECT_NAME, &config.project_name)
        .replace(
            INSTALL_COMMAND,
            &config.package_manager.install_command(),
        )
        .replace(DEV_COMMAND, &config.package_manager.run_command("dev"))
}

#[derive(Serialize)]
struct PackageManifest<'a> {
    name: &'a str,
    version: &'static str,
    private: bool,
    #[serde(rename = "type")]
    module_type: &'static str,
    scripts: Scripts,
    dependencies: Map<String, Value>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: Map<String, Value>,
    engines: Map<String, Value>,
}

/// Script bodies never depend on the chosen package manager
#[derive(Serialize)]
struct Scripts {
    dev: &'static str,
    build: &'static str,
    start: &'static str,
    typecheck: &'static str,
}

fn version_map(entries: &[(&str, &str)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(name, version)| (name.to_string(), Value::from(*version)))
        .collect()
}

fn package_json(config: &ProjectConfig) -> serde_json::Result<Content> {
    let manifest = PackageManifest {
        name: &config.project_name,
        version: "0.1.0",
        private: true,
        module_type: "module",
        scripts: Scripts {
            dev: "tsx watch src/server/index.ts",
            build: "tsx build.ts",
            start: "node dist/server/index.js",
            typecheck: "tsc --noEmit -p . && tsc --noEmit -p src/server",
        },
        dependencies: version_map(DEPENDENCIES),
        dev_dependencies: version_map(DEV_DEPENDENCIES),
        engines: version_map(&[("node", ">=20.0.0")]),
    };

    serde_json::to_value(manifest).map(Content::Json)
}

fn tsconfig_json(_config: &ProjectConfig) -> serde_json::Result<Content> {
    Ok(Content::Json(json!({
        "compilerOptions": {
            "target": "ES2022",
            "lib": ["ES2022", "DOM", "DOM.Iterable"],
            "module": "ESNext",
            "moduleResolution": "Bundler",
            "jsx": "react-jsx",
            "strict": true,
            "noEmit": true,
            "isolatedModules": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "resolveJsonModule": true,
            "types": ["vite/client"]
        },
        "include": ["src/client", "taujs.config.ts", "build.ts"]
    })))
}

fn server_tsconfig_json(_config: &ProjectConfig) -> serde_json::Result<Content> {
    Ok(Content::Json(json!({
        "extends": "../../tsconfig.json",
        "compilerOptions": {
            "lib": ["ES2022"],
            "moduleResolution": "Bundler",
            "types": ["node"]
        },
        "include": ["./**/*.ts", "../../taujs.config.ts"]
    })))
}
