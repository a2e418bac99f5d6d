//! Configuration records for docker-scaffold.
//! [`Config`] is the total record handed to the templates, [`ExplicitOptions`]
//! is the partial record built from command line flags.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project name used when neither a flag nor an answer provides one.
pub const DEFAULT_PROJECT_NAME: &str = "my-app";

/// Main branch used when neither a flag nor an answer provides one.
pub const DEFAULT_MAIN_BRANCH: &str = "main";

/// Keyword in the EC2 build command that enables the container-copy questions.
pub const CONTAINER_KEYWORD: &str = "docker";

/// The fully resolved configuration. Every field is always set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub project_name: String,
    pub container_port: String,
    pub host_port: String,
    #[serde(rename = "includeDB")]
    pub include_db: bool,
    pub db_type: String,
    pub node_version: String,
    pub production: bool,

    pub include_workflow: bool,
    pub main_branch: String,

    pub use_docker_registry: bool,
    pub docker_registry: String,
    pub docker_username: String,

    pub deployment_target: String,

    pub ssh_host: String,
    pub ssh_user: String,
    pub ssh_path: String,

    pub aws_region: String,
    pub aws_cluster: String,

    pub azure_resource_group: String,

    pub ec2_user: String,
    pub ec2_host: String,
    pub ec2_repo_path: String,
    pub ec2_repo_url: String,
    pub ec2_repo_branch: String,
    pub ec2_build_command: String,
    pub ec2_ssh_key_name: String,
    pub ec2_use_custom_container: bool,
    pub ec2_container_path: String,
    pub ec2_local_path: String,
}

impl Config {
    /// Hardcoded defaults. Fields derived from other fields (`awsCluster`,
    /// `azureResourceGroup`, `ec2RepoBranch`) follow the given project name
    /// and main branch.
    pub fn defaults_for(project_name: &str, main_branch: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            container_port: "3000".to_string(),
            host_port: "3000".to_string(),
            include_db: true,
            db_type: "postgres".to_string(),
            node_version: "18".to_string(),
            production: false,
            include_workflow: true,
            main_branch: main_branch.to_string(),
            use_docker_registry: true,
            docker_registry: "dockerhub".to_string(),
            docker_username: "yourusername".to_string(),
            deployment_target: "vps".to_string(),
            ssh_host: "example.com".to_string(),
            ssh_user: "deploy".to_string(),
            ssh_path: "/var/www/app".to_string(),
            aws_region: "us-east-1".to_string(),
            aws_cluster: format!("{project_name}-cluster"),
            azure_resource_group: format!("{project_name}-resources"),
            ec2_user: "ec2-user".to_string(),
            ec2_host: "your-ec2-instance.example.com".to_string(),
            ec2_repo_path: "/var/www/app".to_string(),
            ec2_repo_url: "git@github.com:username/repo.git".to_string(),
            ec2_repo_branch: main_branch.to_string(),
            ec2_build_command: "docker-compose up --build -d".to_string(),
            ec2_ssh_key_name: "EC2_SSH_KEY".to_string(),
            ec2_use_custom_container: false,
            ec2_container_path: "/usr/share/nginx/html".to_string(),
            ec2_local_path: "./dist".to_string(),
        }
    }

    /// Which target-specific field group applies to this configuration.
    pub fn target_shape(&self) -> TargetShape {
        shape_of(&self.deployment_target)
    }

    /// The JSON object the templates are rendered against.
    pub fn to_context(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Builds a record from a JSON object, failing if any field is missing.
    pub fn from_context(context: serde_json::Value) -> Result<Self> {
        serde_json::from_value(context)
            .map_err(|e| Error::ConfigError(format!("incomplete configuration: {e}")))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::defaults_for(DEFAULT_PROJECT_NAME, DEFAULT_MAIN_BRANCH)
    }
}

/// Values supplied explicitly on the command line. These are authoritative
/// and never re-prompted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplicitOptions {
    pub project_name: Option<String>,
    pub container_port: Option<String>,
    pub host_port: Option<String>,
    #[serde(rename = "includeDB")]
    pub include_db: Option<bool>,
    pub db_type: Option<String>,
    pub node_version: Option<String>,
    pub production: Option<bool>,

    pub include_workflow: Option<bool>,
    pub main_branch: Option<String>,

    pub use_docker_registry: Option<bool>,
    pub docker_registry: Option<String>,
    pub docker_username: Option<String>,

    pub deployment_target: Option<String>,

    pub ssh_host: Option<String>,
    pub ssh_user: Option<String>,
    pub ssh_path: Option<String>,

    pub aws_region: Option<String>,
    pub aws_cluster: Option<String>,

    pub azure_resource_group: Option<String>,

    pub ec2_user: Option<String>,
    pub ec2_host: Option<String>,
    pub ec2_repo_path: Option<String>,
    pub ec2_repo_url: Option<String>,
    pub ec2_repo_branch: Option<String>,
    pub ec2_build_command: Option<String>,
    pub ec2_ssh_key_name: Option<String>,
    pub ec2_use_custom_container: Option<bool>,
    pub ec2_container_path: Option<String>,
    pub ec2_local_path: Option<String>,
}

impl ExplicitOptions {
    /// Supplied options keyed by their camelCase field name. Unset fields and
    /// empty strings are left out.
    pub fn to_map(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        let mut map = match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(Error::ConfigError(format!(
                    "explicit options serialized to {other}, expected an object"
                )))
            }
        };
        map.retain(|_, value| match value {
            serde_json::Value::Null => false,
            serde_json::Value::String(s) => !s.is_empty(),
            _ => true,
        });
        Ok(map)
    }
}

/// Recognized deployment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentTarget {
    Aws,
    DigitalOcean,
    Vps,
    Azure,
    Local,
    Ec2,
    Other,
}

/// Target-specific field group selected by a deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetShape {
    /// Host, user and path reached over SSH
    Ssh,
    /// Region and ECS cluster
    Aws,
    /// Resource group
    Azure,
    /// Repository checkout and build on an EC2 instance
    Ec2,
    /// No target-specific fields
    None,
}

impl DeploymentTarget {
    /// All targets, in the order they are offered.
    pub const ALL: [DeploymentTarget; 7] = [
        DeploymentTarget::Aws,
        DeploymentTarget::DigitalOcean,
        DeploymentTarget::Vps,
        DeploymentTarget::Azure,
        DeploymentTarget::Local,
        DeploymentTarget::Ec2,
        DeploymentTarget::Other,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|target| target.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DeploymentTarget::Aws => "aws",
            DeploymentTarget::DigitalOcean => "digitalocean",
            DeploymentTarget::Vps => "vps",
            DeploymentTarget::Azure => "azure",
            DeploymentTarget::Local => "local",
            DeploymentTarget::Ec2 => "ec2",
            DeploymentTarget::Other => "other",
        }
    }

    pub fn shape(&self) -> TargetShape {
        match self {
            DeploymentTarget::Vps | DeploymentTarget::DigitalOcean | DeploymentTarget::Other => {
                TargetShape::Ssh
            }
            DeploymentTarget::Aws => TargetShape::Aws,
            DeploymentTarget::Azure => TargetShape::Azure,
            DeploymentTarget::Ec2 => TargetShape::Ec2,
            DeploymentTarget::Local => TargetShape::None,
        }
    }
}

/// Shape for a raw target name; unrecognized names have no extra fields.
pub fn shape_of(target: &str) -> TargetShape {
    DeploymentTarget::from_name(target)
        .map(|target| target.shape())
        .unwrap_or(TargetShape::None)
}
