//! Signal catalog
//!
//! Immutable tables mapping detectable tokens (file paths, dependency names,
//! language names) to canonical skill names and base weights. Purely
//! declarative: the scoring logic lives in the extractor.

use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::LazyLock;

/// `(pattern, skill, base weight)`; patterns are matched case-insensitively.
///
/// A zero weight marks presence only and never scores on its own.
const FILE_HINT_RULES: &[(&str, &str, f64)] = &[
    // Containers & orchestration
    (r"(^|/)Dockerfile$", "Docker", 2.0),
    (r"(^|/)dockerfiles?/.*", "Docker", 1.6),
    (r"(^|/)docker-compose(\.[a-zA-Z0-9_-]+)?\.ya?ml$", "Docker Compose", 2.0),
    (r"(^|/)(compose|docker)\.ya?ml$", "Docker Compose", 1.8),
    (r"\.(k8s|kubernetes)\.ya?ml$", "Kubernetes", 1.6),
    (r"(^|/)k8s/.+\.ya?ml$", "Kubernetes", 2.0),
    (r"(^|/)manifests?/.+\.ya?ml$", "Kubernetes", 1.6),
    (r"(^|/)kustomization\.ya?ml$", "Kustomize", 1.8),
    (r"(^|/)charts/.*/Chart\.ya?ml$", "Helm", 2.0),
    (r"(^|/)charts/.*/values\.ya?ml$", "Helm", 1.6),
    (r"(^|/)skaffold\.ya?ml$", "Skaffold", 1.6),
    (r"(^|/)Tiltfile$", "Tilt", 1.4),
    // IaC
    (r"\.(tf|tfvars)$", "Terraform", 2.0),
    (r"(^|/)tofu\.(tf|tfvars)$", "OpenTofu", 1.8),
    (r"(^|/)terragrunt\.hcl$", "Terragrunt", 1.8),
    (r"\.bicep$", "Azure", 1.6),
    (r"(^|/)pulumi\.(ya?ml|json|ts|py|go)$", "Pulumi", 1.6),
    (r"(^|/)crossplane/.+\.ya?ml$", "Crossplane", 1.6),
    // CI/CD
    (r"(^|/)\.github/workflows/.*\.ya?ml$", "GitHub Actions", 2.2),
    (r"(^|/)Jenkinsfile$", "Jenkins", 2.1),
    (r"(^|/)\.gitlab-ci\.ya?ml$", "GitLab CI", 2.1),
    (r"(^|/)\.circleci/config\.ya?ml$", "CircleCI", 2.0),
    (r"(^|/)\.travis\.ya?ml$", "Travis CI", 1.6),
    (r"(^|/)azure-pipelines\.ya?ml$", "Azure Pipelines", 2.0),
    (r"(^|/)argocd/.+\.ya?ml$", "ArgoCD", 1.8),
    (r"(^|/)\.flux/.+\.ya?ml$", "FluxCD", 1.8),
    // Python packaging / env
    (r"(^|/)requirements(\..+)?\.txt$", "Python", 0.0),
    (r"(^|/)pyproject\.toml$", "Python", 0.5),
    (r"(^|/)Pipfile(\.lock)?$", "Python", 0.3),
    (r"(^|/)environment\.ya?ml$", "Conda", 1.2),
    (r"(^|/)setup\.(cfg|py)$", "Python", 0.3),
    (r"(^|/)noxfile\.py$", "nox", 1.0),
    (r"(^|/)tox\.ini$", "tox", 1.0),
    // JS/TS packaging
    (r"(^|/)package\.json$", "Node.js", 0.4),
    (r"(^|/)package-lock\.json$", "Node.js", 0.4),
    (r"(^|/)yarn\.lock$", "Node.js", 0.4),
    (r"(^|/)pnpm-lock\.ya?ml$", "Node.js", 0.4),
    (r"(^|/)tsconfig(\.base)?\.json$", "TypeScript", 0.9),
    // Java / JVM
    (r"(^|/)pom\.xml$", "Java", 1.5),
    (r"(^|/)build\.gradle(\.kts)?$", "Java", 1.2),
    (r"(^|/)settings\.gradle(\.kts)?$", "Java", 0.8),
    // Go / Rust / C / C++
    (r"(^|/)go\.mod$", "Go", 1.5),
    (r"(^|/)go\.sum$", "Go", 0.8),
    (r"(^|/)Cargo\.toml$", "Rust", 1.5),
    (r"(^|/)Cargo\.lock$", "Rust", 0.8),
    (r"(^|/)CMakeLists\.txt$", "C++", 1.0),
    // Databases / BI
    (r"\.(sql|db|sqlite)$", "SQL", 0.8),
    (r"(^|/)(schema|migrations?)/.*\.(sql|ya?ml)$", "SQL", 0.8),
    (r"(^|/)dbt_project\.ya?ml$", "dbt", 1.2),
    (r"(^|/)models/.+\.sql$", "dbt", 1.0),
    // Security / lint / policy
    (r"(^|/)\.pre-commit-config\.ya?ml$", "pre-commit", 1.0),
    (r"(^|/)\.bandit$", "Bandit", 1.0),
    (r"(^|/)semgrep\.ya?ml$", "Semgrep", 1.0),
    (r"(^|/)\.hadolint\.ya?ml$", "Hadolint", 1.0),
    (r"(^|/)\.tflint\.hcl$", "Terraform", 0.8),
    (r"(^|/)\.opa/.*", "OPA", 1.0),
    (r"(^|/)kyverno/.+\.ya?ml$", "Kyverno", 1.0),
    // Observability
    (r"(^|/)otel-collector\.ya?ml$", "OpenTelemetry", 1.4),
    (r"(^|/)prometheus(\.ya?ml|/.*\.ya?ml)$", "Prometheus", 1.2),
    (r"(^|/)grafana/.*\.(json|ya?ml)$", "Grafana", 1.2),
    (r"(^|/)loki\.ya?ml$", "Loki", 1.0),
    (r"(^|/)tempo\.ya?ml$", "Tempo", 1.0),
    // REST / API docs
    (r"(^|/)openapi(\.ya?ml|\.json)$", "OpenAPI", 1.2),
    (r"(^|/)swagger\.(ya?ml|json)$", "OpenAPI", 1.0),
    // Make & tasks
    (r"(^|/)Makefile$", "Makefile", 1.0),
    (r"(^|/)Taskfile\.ya?ml$", "Taskfile", 1.0),
    (r"(^|/)Justfile$", "Justfile", 1.0),
    // Shell
    (r"\.(sh|bash)$", "Shell", 0.8),
    (r"(^|/)scripts?/.*\.(sh|bash)$", "Shell", 0.9),
    // Mobile / desktop
    (r"(^|/)app\.json$", "React Native", 0.8),
    (r"(^|/)app\.config\.(js|ts)$", "Expo", 0.9),
    (r"(^|/)pubspec\.ya?ml$", "Flutter", 1.2),
    (r"(^|/)package\.swift$", "Swift", 1.0),
    // Cloud vendors
    (r"(^|/)template\.yaml$", "AWS SAM", 1.4),
    (r"(^|/)serverless\.ya?ml$", "Serverless Framework", 1.6),
    (r"(^|/)cdk\.json$", "CDK", 1.2),
    (r"(^|/)cloudbuild\.ya?ml$", "GCP", 1.4),
    (r"(^|/)app\.yaml$", "GCP", 1.0),
    (r"(^|/)firebase\.(json|rc)$", "Firebase", 1.2),
    // Edge / hosting
    (r"(^|/)vercel\.json$", "Vercel", 1.0),
    (r"(^|/)netlify\.toml$", "Netlify", 1.0),
    (r"(^|/)wrangler\.toml$", "Cloudflare", 1.0),
];

const PYTHON_DEPENDENCIES: &[(&str, &str)] = &[
    // Data & ML
    ("pandas", "Pandas"),
    ("numpy", "NumPy"),
    ("scikit-learn", "scikit-learn"),
    ("torch", "PyTorch"),
    ("pytorch", "PyTorch"),
    ("tensorflow", "TensorFlow"),
    ("keras", "TensorFlow"),
    ("xgboost", "XGBoost"),
    ("lightgbm", "LightGBM"),
    ("catboost", "CatBoost"),
    ("ray", "Ray"),
    // MLOps / orchestration
    ("mlflow", "MLflow"),
    ("wandb", "Weights & Biases"),
    ("apache-airflow", "Airflow"),
    ("airflow", "Airflow"),
    ("prefect", "Prefect"),
    ("dagster", "Dagster"),
    ("dvc", "DVC"),
    ("great-expectations", "Great Expectations"),
    ("ge", "Great Expectations"),
    ("dbt", "dbt"),
    // Web / APIs
    ("fastapi", "FastAPI"),
    ("uvicorn", "FastAPI"),
    ("starlette", "FastAPI"),
    ("pydantic", "FastAPI"),
    ("django", "Django"),
    ("djangorestframework", "Django"),
    ("flask", "Flask"),
    ("connexion", "OpenAPI"),
    ("gunicorn", "Python"),
    ("hypercorn", "Python"),
    // Data access / ORMs
    ("sqlalchemy", "SQLAlchemy"),
    ("alembic", "Alembic"),
    ("psycopg2", "PostgreSQL"),
    ("asyncpg", "PostgreSQL"),
    ("pymysql", "MySQL"),
    ("mysqlclient", "MySQL"),
    ("pymongo", "MongoDB"),
    ("redis", "Redis"),
    ("elasticsearch", "Elasticsearch"),
    ("opensearch-py", "OpenSearch"),
    ("kafka-python", "Kafka"),
    ("confluent-kafka", "Kafka"),
    ("pika", "RabbitMQ"),
    // Cloud SDKs
    ("boto3", "AWS"),
    ("botocore", "AWS"),
    ("awscli", "AWS"),
    ("google-cloud-storage", "GCP"),
    ("google-cloud-bigquery", "BigQuery"),
    ("google-cloud-pubsub", "GCP"),
    ("azure-storage-blob", "Azure"),
    ("azure-identity", "Azure"),
    ("azure-core", "Azure"),
    // Observability
    ("opentelemetry-api", "OpenTelemetry"),
    ("opentelemetry-sdk", "OpenTelemetry"),
    ("sentry-sdk", "Sentry"),
    // Tests / quality
    ("pytest", "PyTest"),
    ("pytest-cov", "PyTest"),
    ("tox", "tox"),
    ("nox", "nox"),
    ("coverage", "coverage.py"),
    ("black", "Black"),
    ("ruff", "Ruff"),
    ("isort", "isort"),
    ("flake8", "Flake8"),
    ("pylint", "Pylint"),
    ("mypy", "Mypy"),
    ("bandit", "Bandit"),
    ("semgrep", "Semgrep"),
    ("pre-commit", "pre-commit"),
    // Tooling / packaging
    ("poetry", "poetry"),
    ("pip-tools", "pip-tools"),
    ("pipenv", "pipenv"),
    ("conda", "Conda"),
    ("setuptools", "Python"),
    ("nuitka", "Python"),
    // HTTP clients, weak hints
    ("requests", "Python"),
    ("httpx", "Python"),
    ("aiohttp", "Python"),
];

const NPM_DEPENDENCIES: &[(&str, &str)] = &[
    // Runtimes / tooling
    ("typescript", "TypeScript"),
    ("ts-node", "TypeScript"),
    ("tsx", "TypeScript"),
    // Back-end & APIs
    ("express", "Express"),
    ("nestjs", "NestJS"),
    ("@nestjs/core", "NestJS"),
    ("fastify", "Node.js"),
    ("hapi", "Node.js"),
    // Front-end
    ("react", "React"),
    ("next", "Next.js"),
    ("vue", "Vue"),
    ("nuxt", "Nuxt.js"),
    ("@angular/core", "Angular"),
    ("svelte", "Svelte"),
    ("@sveltejs/kit", "SvelteKit"),
    // State / UI
    ("redux", "React"),
    ("zustand", "React"),
    ("react-query", "React"),
    ("@tanstack/react-query", "React"),
    // ORMs / data
    ("prisma", "Prisma"),
    ("typeorm", "TypeORM"),
    ("sequelize", "Sequelize"),
    ("mongoose", "Mongoose"),
    // Build / bundlers / monorepos
    ("vite", "Vite"),
    ("webpack", "Webpack"),
    ("rollup", "Rollup"),
    ("esbuild", "esbuild"),
    ("turbo", "Turborepo"),
    ("@nrwl/workspace", "Nx"),
    ("nx", "Nx"),
    // Tests / quality
    ("jest", "Jest"),
    ("vitest", "Vitest"),
    ("mocha", "Mocha"),
    ("chai", "Chai"),
    ("cypress", "Cypress"),
    ("playwright", "Playwright"),
    ("prettier", "Prettier"),
    ("eslint", "ESLint"),
    ("stylelint", "Stylelint"),
    ("lint-staged", "pre-commit"),
    // Observability
    ("opentelemetry-api", "OpenTelemetry"),
    ("@sentry/browser", "Sentry"),
    ("@sentry/node", "Sentry"),
    ("@sentry/react", "Sentry"),
    // Cloud SDKs
    ("aws-sdk", "AWS"),
    ("@aws-sdk/client-s3", "AWS"),
    ("@aws-sdk/client-dynamodb", "AWS"),
    ("@aws-cdk/core", "CDK"),
    ("aws-cdk", "CDK"),
    ("firebase", "Firebase"),
    ("firebase-admin", "Firebase"),
    ("@google-cloud/storage", "GCP"),
    ("@google-cloud/pubsub", "GCP"),
    ("@azure/identity", "Azure"),
    ("@azure/storage-blob", "Azure"),
    // GraphQL / API tooling
    ("graphql", "GraphQL"),
    ("apollo-server", "GraphQL"),
    ("@apollo/server", "GraphQL"),
    ("apollo-client", "GraphQL"),
    ("@graphql-codegen/cli", "GraphQL"),
    ("swagger-ui-express", "OpenAPI"),
    ("swagger-jsdoc", "OpenAPI"),
    ("redocly", "OpenAPI"),
    // Serverless
    ("serverless", "Serverless Framework"),
    ("@serverless/cli", "Serverless Framework"),
    // Realtime / MQ
    ("socket.io", "Node.js"),
    ("kafkajs", "Kafka"),
    ("amqplib", "RabbitMQ"),
    ("nats", "NATS"),
];

/// Report categories, in display order. A skill belongs to the first category listing it.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Languages",
        &[
            "Python", "TypeScript", "JavaScript", "Go", "Java", "C", "C++", "C#", "Rust", "Scala",
            "Kotlin", "PHP", "Ruby", "R", "SQL", "NoSQL", "Shell", "Bash", "PowerShell", "HCL",
        ],
    ),
    (
        "Frameworks & Libraries",
        &[
            "Node.js", "Express", "NestJS", "FastAPI", "Django", "Flask", "Spring Boot", "Quarkus",
            "Micronaut", "Gin", "Fiber", "React", "Next.js", "Vue", "Nuxt.js", "Angular", "Svelte",
            "SvelteKit", "Pandas", "NumPy", "scikit-learn", "PyTorch", "TensorFlow", "XGBoost",
            "LightGBM", "CatBoost", "SQLAlchemy", "Alembic", "Prisma", "TypeORM", "Sequelize",
            "Mongoose", "Hibernate", "JPA", "Vite", "Webpack", "Rollup", "esbuild", "Turborepo",
        ],
    ),
    (
        "Data & MLOps",
        &[
            "Jupyter", "MLflow", "Weights & Biases", "Airflow", "Prefect", "Dagster", "DVC",
            "Great Expectations", "dbt", "Apache Spark", "Hadoop", "Kafka Streams", "Beam", "Ray",
        ],
    ),
    (
        "DevOps & Cloud",
        &[
            "Docker", "Docker Compose", "Kubernetes", "Helm", "Kustomize", "Terraform", "OpenTofu",
            "Terragrunt", "Pulumi", "Ansible", "Packer", "Nix", "Skaffold", "Tilt",
            "GitHub Actions", "GitLab CI", "Jenkins", "CircleCI", "Travis CI", "Azure Pipelines",
            "ArgoCD", "FluxCD", "Vault", "Consul", "Nomad", "Prometheus", "Grafana", "Loki",
            "Tempo", "Jaeger", "Zipkin", "OpenTelemetry", "NGINX", "Traefik", "Caddy",
            "Serverless Framework", "AWS SAM", "CDK", "Crossplane", "AWS", "GCP", "Azure",
            "Firebase", "Vercel", "Netlify", "Cloudflare",
        ],
    ),
    (
        "Databases & Messaging",
        &[
            "PostgreSQL", "MySQL", "MariaDB", "MongoDB", "Redis", "SQLite", "Elasticsearch",
            "OpenSearch", "Cassandra", "DynamoDB", "Snowflake", "BigQuery", "Redshift", "RabbitMQ",
            "Kafka", "NATS", "SQS", "SNS", "Kinesis",
        ],
    ),
    (
        "Quality & Testing",
        &[
            "PyTest", "unittest", "tox", "nox", "coverage.py", "Jest", "Vitest", "Mocha", "Chai",
            "Cypress", "Playwright", "Prettier", "ESLint", "TSLint", "Stylelint", "Black", "Ruff",
            "isort", "Flake8", "Pylint", "Mypy", "Bandit", "Semgrep", "Snyk", "Trivy", "Hadolint",
            "pre-commit",
        ],
    ),
    (
        "Build & Tooling",
        &[
            "poetry", "pip-tools", "pipenv", "Conda", "Makefile", "Taskfile", "Justfile", "Gradle",
            "Maven", "Bazel", "Yarn", "npm", "pnpm", "Turbo", "Nx", "OpenAPI", "Swagger", "Postman",
            "Hoppscotch",
        ],
    ),
    (
        "Security & Observability",
        &[
            "OpenAPI", "Sentry", "OpenTelemetry", "Falco", "Kyverno", "OPA", "Sigstore", "Cosign",
            "Clair", "Datadog", "New Relic", "Elastic APM", "Jaeger", "Zipkin",
        ],
    ),
    (
        "Mobile & Desktop",
        &[
            "React Native", "Expo", "Flutter", "Swift", "SwiftUI", "Kotlin Android", "Electron",
            "Tauri",
        ],
    ),
    (
        "BI & Visualization",
        &[
            "Power BI", "Tableau", "Metabase", "Superset", "Plotly", "Matplotlib", "Seaborn",
            "Altair", "ggplot2",
        ],
    ),
];

static STANDARD: LazyLock<SignalCatalog> = LazyLock::new(SignalCatalog::build);

/// A compiled file-hint rule
#[derive(Debug, Clone)]
pub struct FileHint {
    /// Case-insensitive path pattern
    pub pattern: Regex,
    /// Skill the rule points to
    pub skill: &'static str,
    /// Base weight before repository multipliers
    pub weight: f64,
}

/// Compiled signal tables
#[derive(Debug)]
pub struct SignalCatalog {
    file_hints: Vec<FileHint>,
    python: HashMap<&'static str, &'static str>,
    npm: HashMap<&'static str, &'static str>,
}

impl SignalCatalog {
    /// Shared catalog with the built-in rules
    pub fn standard() -> &'static SignalCatalog {
        &STANDARD
    }

    fn build() -> Self {
        let file_hints = FILE_HINT_RULES
            .iter()
            .map(|&(pattern, skill, weight)| FileHint {
                pattern: RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("built-in file hint pattern must compile"),
                skill,
                weight,
            })
            .collect();

        Self {
            file_hints,
            python: PYTHON_DEPENDENCIES.iter().copied().collect(),
            npm: NPM_DEPENDENCIES.iter().copied().collect(),
        }
    }

    /// Every file-hint rule in authoring order
    pub fn file_hints(&self) -> &[FileHint] {
        &self.file_hints
    }

    /// Rules whose pattern matches `path`; several may fire for one path
    pub fn matching_hints<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a FileHint> + 'a {
        self.file_hints
            .iter()
            .filter(move |hint| hint.pattern.is_match(path))
    }

    /// Skill for a lowercased PyPI distribution name
    pub fn python_skill(&self, dependency: &str) -> Option<&'static str> {
        self.python.get(dependency).copied()
    }

    /// Skill for a lowercased npm package name
    pub fn npm_skill(&self, dependency: &str) -> Option<&'static str> {
        self.npm.get(dependency).copied()
    }

    /// Skill for a language name from the hosting API
    pub fn language_skill(&self, language: &str) -> Option<&'static str> {
        map_language(language)
    }

    /// Report categories in display order
    pub fn categories(&self) -> &'static [(&'static str, &'static [&'static str])] {
        CATEGORIES
    }

    /// First category listing `skill`
    pub fn category_of(&self, skill: &str) -> Option<&'static str> {
        CATEGORIES
            .iter()
            .find(|(_, skills)| skills.contains(&skill))
            .map(|(name, _)| *name)
    }
}

/// Normalize a hosting API language name into a skill
///
/// Prose and markup languages are explicitly unmapped.
pub fn map_language(language: &str) -> Option<&'static str> {
    match language {
        "Python" => Some("Python"),
        "JavaScript" => Some("JavaScript"),
        "TypeScript" => Some("TypeScript"),
        "Go" => Some("Go"),
        "Rust" => Some("Rust"),
        "C" => Some("C"),
        "C++" => Some("C++"),
        "C#" => Some("C#"),
        "Java" => Some("Java"),
        "Scala" => Some("Scala"),
        "Kotlin" => Some("Kotlin"),
        "PHP" => Some("PHP"),
        "Ruby" => Some("Ruby"),
        "R" => Some("R"),
        "Shell" => Some("Shell"),
        "PowerShell" => Some("PowerShell"),
        "Jupyter Notebook" => Some("Jupyter"),
        "HTML" => Some("HTML"),
        "CSS" | "SCSS" | "Less" => Some("CSS"),
        "SQLPL" | "PLpgSQL" | "PLSQL" | "TSQL" => Some("SQL"),
        "HCL" => Some("HCL"),
        "Nix" => Some("Nix"),
        "Makefile" => Some("Makefile"),
        "CMake" => Some("C++"),
        "Dockerfile" => Some("Docker"),
        "TeX" | "Markdown" | "MDX" => None,
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills_for(path: &str) -> Vec<&'static str> {
        SignalCatalog::standard()
            .matching_hints(path)
            .filter(|h| h.weight > 0.0)
            .map(|h| h.skill)
            .collect()
    }

    #[test]
    fn test_python_dependencies() {
        let catalog = SignalCatalog::standard();
        assert_eq!(catalog.python_skill("fastapi"), Some("FastAPI"));
        assert_eq!(catalog.python_skill("pytest"), Some("PyTest"));
        assert_eq!(catalog.python_skill("pandas"), Some("Pandas"));
        assert_eq!(catalog.python_skill("left-pad"), None);
    }

    #[test]
    fn test_npm_dependencies() {
        let catalog = SignalCatalog::standard();
        assert_eq!(catalog.npm_skill("react"), Some("React"));
        assert_eq!(catalog.npm_skill("next"), Some("Next.js"));
        assert_eq!(catalog.npm_skill("@angular/core"), Some("Angular"));
    }

    #[test]
    fn test_all_rules_compile() {
        assert_eq!(SignalCatalog::standard().file_hints().len(), FILE_HINT_RULES.len());
    }

    #[test]
    fn test_container_hints() {
        assert_eq!(skills_for("Dockerfile"), vec!["Docker"]);
        assert_eq!(skills_for("services/api/Dockerfile"), vec!["Docker"]);
        assert_eq!(skills_for("docker-compose.prod.yml"), vec!["Docker Compose"]);
        assert_eq!(skills_for("charts/app/Chart.yaml"), vec!["Helm"]);
        assert_eq!(skills_for("k8s/deploy.yaml"), vec!["Kubernetes"]);
    }

    #[test]
    fn test_hints_are_case_insensitive() {
        assert_eq!(skills_for("dockerfile"), vec!["Docker"]);
        assert_eq!(skills_for("MAKEFILE"), vec!["Makefile"]);
    }

    #[test]
    fn test_multiple_rules_fire() {
        let skills = skills_for("scripts/deploy.sh");
        assert_eq!(skills, vec!["Shell", "Shell"]);
    }

    #[test]
    fn test_presence_marker_has_no_weight() {
        let hints: Vec<_> = SignalCatalog::standard()
            .matching_hints("requirements.dev.txt")
            .collect();
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].weight, 0.0);
        assert!(skills_for("requirements.txt").is_empty());
    }

    #[test]
    fn test_no_false_positive_on_similar_names() {
        assert!(skills_for("src/dockerfile_parser.rs").is_empty());
        assert!(skills_for("docs/Chart.yaml.md").is_empty());
    }

    #[test]
    fn test_language_mapping() {
        assert_eq!(map_language("Jupyter Notebook"), Some("Jupyter"));
        assert_eq!(map_language("SCSS"), Some("CSS"));
        assert_eq!(map_language("CMake"), Some("C++"));
        assert_eq!(map_language("TeX"), None);
        assert_eq!(map_language("Brainfuck"), None);
    }

    #[test]
    fn test_category_lookup() {
        let catalog = SignalCatalog::standard();
        assert_eq!(catalog.category_of("Rust"), Some("Languages"));
        assert_eq!(catalog.category_of("Helm"), Some("DevOps & Cloud"));
        // Listed twice: the first category wins
        assert_eq!(catalog.category_of("OpenAPI"), Some("Build & Tooling"));
        assert_eq!(catalog.category_of("GraphQL"), None);
    }
}
