//! Dependency manifest readers
//!
//! Every reader is total: malformed input yields an empty list, never an error.
//! Returned names are lowercased and deduplicated in first-seen order.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static SPECIFIER_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[<>=\[\](),~!;]| ").expect("valid specifier pattern"));

static POM_DEPENDENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<dependency>[\s\S]*?</dependency>").expect("valid dependency pattern")
});

static POM_ARTIFACT_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<artifactId>\s*([^<]+?)\s*</artifactId>").expect("valid artifactId pattern")
});

const PACKAGE_JSON_SECTIONS: &[&str] = &["dependencies", "devDependencies", "peerDependencies"];

/// Strip version specifiers, extras and markers from a requirement
///
/// `"FastAPI[all]>=0.100"` becomes `"fastapi"`. Returns `None` for a blank name.
pub fn normalize_requirement(spec: &str) -> Option<String> {
    let name = SPECIFIER_SPLIT.split(spec.trim()).next()?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_lowercase())
    }
}

fn push_unique(out: &mut Vec<String>, name: String) {
    if !out.contains(&name) {
        out.push(name);
    }
}

/// Dependency names declared in a `package.json`
///
/// `None` when the document is not JSON at all.
pub fn package_json_dependencies(content: &str) -> Option<Vec<String>> {
    let document: serde_json::Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(e) => {
            debug!("Unreadable package.json: {}", e);
            return None;
        }
    };

    let mut out = Vec::new();
    for section in PACKAGE_JSON_SECTIONS {
        if let Some(deps) = document.get(section).and_then(|v| v.as_object()) {
            for name in deps.keys() {
                push_unique(&mut out, name.to_lowercase());
            }
        }
    }
    Some(out)
}

/// Dependency names declared in a `pyproject.toml`
///
/// Reads the PEP 621 `[project].dependencies` list, `[tool.poetry.dependencies]`
/// and every `[tool.poetry.group.<name>.dependencies]` table. Poetry's `python`
/// entry is an interpreter constraint and is skipped.
pub fn pyproject_dependencies(content: &str) -> Vec<String> {
    let document: toml::Table = match content.parse() {
        Ok(t) => t,
        Err(e) => {
            debug!("Unreadable pyproject.toml: {}", e);
            return Vec::new();
        }
    };

    let mut out = Vec::new();

    let pep621 = document
        .get("project")
        .and_then(|p| p.get("dependencies"))
        .and_then(|d| d.as_array());
    for spec in pep621.into_iter().flatten().filter_map(|v| v.as_str()) {
        if let Some(name) = normalize_requirement(spec) {
            push_unique(&mut out, name);
        }
    }

    let poetry = document.get("tool").and_then(|t| t.get("poetry"));
    let mut poetry_tables: Vec<&toml::Table> = Vec::new();
    if let Some(deps) = poetry
        .and_then(|p| p.get("dependencies"))
        .and_then(|d| d.as_table())
    {
        poetry_tables.push(deps);
    }
    if let Some(groups) = poetry.and_then(|p| p.get("group")).and_then(|g| g.as_table()) {
        poetry_tables.extend(
            groups
                .values()
                .filter_map(|group| group.get("dependencies"))
                .filter_map(|d| d.as_table()),
        );
    }
    for table in poetry_tables {
        for key in table.keys() {
            if key.eq_ignore_ascii_case("python") {
                continue;
            }
            if let Some(name) = normalize_requirement(key) {
                push_unique(&mut out, name);
            }
        }
    }

    out
}

/// Requirement names listed in a `requirements*.txt`
///
/// Blank lines, comments and pip options (`-r`, `-e`, `--index-url`) are ignored.
pub fn requirements_dependencies(content: &str) -> Vec<String> {
    let mut out = Vec::new();
    for line in content.lines() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() || line.starts_with('-') {
            continue;
        }
        if let Some(name) = normalize_requirement(line) {
            push_unique(&mut out, name);
        }
    }
    out
}

/// `artifactId` of every `<dependency>` in a `pom.xml`
///
/// Only dependency blocks are read, so the project's own artifactId and its
/// plugins are not reported.
pub fn pom_artifact_ids(content: &str) -> Vec<String> {
    let mut out = Vec::new();
    for block in POM_DEPENDENCY.find_iter(content) {
        if let Some(caps) = POM_ARTIFACT_ID.captures(block.as_str()) {
            push_unique(&mut out, caps[1].to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_requirement() {
        assert_eq!(normalize_requirement("FastAPI[all]>=0.100"), Some("fastapi".into()));
        assert_eq!(normalize_requirement("pandas==2.1.0"), Some("pandas".into()));
        assert_eq!(normalize_requirement("requests ~= 2.31"), Some("requests".into()));
        assert_eq!(
            normalize_requirement("pywin32; sys_platform == 'win32'"),
            Some("pywin32".into())
        );
        assert_eq!(normalize_requirement("  "), None);
        assert_eq!(normalize_requirement(">=1.0"), None);
    }

    #[test]
    fn test_package_json() {
        let content = r#"{
            "name": "web",
            "dependencies": { "React": "^18.2.0", "next": "14.0.0" },
            "devDependencies": { "typescript": "^5.0.0", "react": "^18.2.0" },
            "peerDependencies": { "@angular/core": "^17.0.0" }
        }"#;
        assert_eq!(
            package_json_dependencies(content),
            Some(vec![
                "react".to_string(),
                "next".to_string(),
                "typescript".to_string(),
                "@angular/core".to_string(),
            ])
        );
    }

    #[test]
    fn test_package_json_malformed() {
        assert_eq!(package_json_dependencies("{ not json"), None);
        assert_eq!(
            package_json_dependencies(r#"{"dependencies": ["react"]}"#),
            Some(Vec::new())
        );
    }

    #[test]
    fn test_pyproject_pep621() {
        let content = r#"
[project]
name = "api"
dependencies = ["FastAPI>=0.110", "pandas[performance]", "uvicorn ; python_version >= '3.9'"]
"#;
        assert_eq!(pyproject_dependencies(content), vec!["fastapi", "pandas", "uvicorn"]);
    }

    #[test]
    fn test_pyproject_poetry_groups() {
        let content = r#"
[tool.poetry.dependencies]
python = "^3.11"
Django = "^5.0"

[tool.poetry.group.dev.dependencies]
pytest = "^8.0"
ruff = { version = "^0.4" }
"#;
        let deps = pyproject_dependencies(content);
        assert_eq!(deps.len(), 3);
        assert!(deps.contains(&"django".to_string()));
        assert!(deps.contains(&"pytest".to_string()));
        assert!(deps.contains(&"ruff".to_string()));
    }

    #[test]
    fn test_pyproject_malformed() {
        assert!(pyproject_dependencies("[project\ndependencies = ").is_empty());
        assert!(pyproject_dependencies("[project]\ndependencies = \"fastapi\"").is_empty());
    }

    #[test]
    fn test_requirements() {
        let content = "\
# web
fastapi==0.110.0
-r base.txt
--index-url https://example.invalid/simple

Pandas>=2  # analytics
pytest
";
        assert_eq!(requirements_dependencies(content), vec!["fastapi", "pandas", "pytest"]);
    }

    #[test]
    fn test_pom_artifact_ids() {
        let content = r#"
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <artifactId>my-service</artifactId>
  <dependencies>
    <dependency>
      <groupId>org.springframework.boot</groupId>
      <artifactId>spring-boot-starter-web</artifactId>
    </dependency>
    <dependency>
      <groupId>junit</groupId>
      <artifactId> junit </artifactId>
      <scope>test</scope>
    </dependency>
  </dependencies>
</project>
"#;
        assert_eq!(pom_artifact_ids(content), vec!["spring-boot-starter-web", "junit"]);
    }

    #[test]
    fn test_pom_malformed() {
        assert!(pom_artifact_ids("<project><dependency><artifactId>").is_empty());
    }
}
