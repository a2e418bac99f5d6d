//! Common constants used throughout docker-scaffold.

/// Output path of the container build file
pub const DOCKERFILE: &str = "Dockerfile";

/// Output path of the multi-service compose file
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// Output path of the Docker ignore-patterns file
pub const DOCKERIGNORE_FILE: &str = ".dockerignore";

/// Output path of the GitHub Actions workflow
pub const WORKFLOW_FILE: &str = ".github/workflows/deploy.yml";
