//! Command-line interface implementation for docker-scaffold.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser, Subcommand};

use crate::config::ExplicitOptions;

/// Command-line arguments structure for docker-scaffold.
#[derive(Parser, Debug)]
#[command(
    name = "docker-scaffold",
    author,
    version,
    about = "CLI to scaffold Docker and CI/CD setup",
    long_about = None
)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate Docker, Compose, and GitHub Actions workflow
    #[command(disable_help_flag = true)]
    Init(InitArgs),
}

/// Parses a boolean flag value. Only `true` and `false` are accepted.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("expected 'true' or 'false', got '{other}'")),
    }
}

/// Flags of the `init` subcommand. `-h` sets the host port, so help is
/// only available as `--help`.
#[derive(clap::Args, Debug, Default)]
#[command(disable_help_flag = true)]
pub struct InitArgs {
    /// Name of your project
    #[arg(short = 'p', long = "projectName", value_name = "NAME")]
    pub project_name: Option<String>,

    /// Port exposed inside container
    #[arg(short = 'c', long = "containerPort", value_name = "PORT")]
    pub container_port: Option<String>,

    /// Port mapped on host machine
    #[arg(short = 'h', long = "hostPort", value_name = "PORT")]
    pub host_port: Option<String>,

    /// Include database service
    #[arg(
        short = 'd',
        long = "includeDB",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    pub include_db: Option<bool>,

    /// Database type (postgres, mysql, mongodb)
    #[arg(long = "dbType", value_name = "TYPE")]
    pub db_type: Option<String>,

    /// Node.js version to use
    #[arg(long = "nodeVersion", value_name = "VERSION")]
    pub node_version: Option<String>,

    /// Generate production-ready configuration
    #[arg(
        long = "production",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    pub production: Option<bool>,

    /// Include GitHub Actions workflow
    #[arg(
        long = "includeWorkflow",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    pub include_workflow: Option<bool>,

    /// Main branch to trigger deployment
    #[arg(long = "mainBranch", value_name = "BRANCH")]
    pub main_branch: Option<String>,

    /// Use a Docker image registry
    #[arg(
        long = "useDockerRegistry",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    pub use_docker_registry: Option<bool>,

    /// Docker registry to use (dockerhub, local, other)
    #[arg(long = "dockerRegistry", value_name = "REGISTRY")]
    pub docker_registry: Option<String>,

    /// Docker Hub username for pushing images
    #[arg(long = "dockerUsername", value_name = "USERNAME")]
    pub docker_username: Option<String>,

    /// Deployment target (aws, digitalocean, vps, azure, local, ec2, other)
    #[arg(long = "deploymentTarget", value_name = "TARGET")]
    pub deployment_target: Option<String>,

    /// SSH host for deployment
    #[arg(long = "sshHost", value_name = "HOST")]
    pub ssh_host: Option<String>,

    /// SSH user for deployment
    #[arg(long = "sshUser", value_name = "USER")]
    pub ssh_user: Option<String>,

    /// Path on server to deploy to
    #[arg(long = "sshPath", value_name = "PATH")]
    pub ssh_path: Option<String>,

    /// AWS region for deployment
    #[arg(long = "awsRegion", value_name = "REGION")]
    pub aws_region: Option<String>,

    /// AWS ECS cluster name
    #[arg(long = "awsCluster", value_name = "CLUSTER")]
    pub aws_cluster: Option<String>,

    /// Azure resource group name
    #[arg(long = "azureResourceGroup", value_name = "GROUP")]
    pub azure_resource_group: Option<String>,

    /// EC2 instance user (e.g., ec2-user)
    #[arg(long = "ec2User", value_name = "USER")]
    pub ec2_user: Option<String>,

    /// EC2 instance hostname or IP
    #[arg(long = "ec2Host", value_name = "HOST")]
    pub ec2_host: Option<String>,

    /// Path on EC2 where the repo will be cloned
    #[arg(long = "ec2RepoPath", value_name = "PATH")]
    pub ec2_repo_path: Option<String>,

    /// Git repository URL for EC2 deployment
    #[arg(long = "ec2RepoUrl", value_name = "URL")]
    pub ec2_repo_url: Option<String>,

    /// Git branch to deploy on EC2
    #[arg(long = "ec2RepoBranch", value_name = "BRANCH")]
    pub ec2_repo_branch: Option<String>,

    /// Custom build command for EC2 deployment
    #[arg(long = "ec2BuildCommand", value_name = "COMMAND")]
    pub ec2_build_command: Option<String>,

    /// Name of the SSH key secret for EC2 deployment
    #[arg(long = "ec2SshKeyName", value_name = "NAME")]
    pub ec2_ssh_key_name: Option<String>,

    /// Whether to copy files from Docker container after deployment
    #[arg(
        long = "ec2UseCustomContainer",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    pub ec2_use_custom_container: Option<bool>,

    /// Path inside container to copy files from
    #[arg(long = "ec2ContainerPath", value_name = "PATH")]
    pub ec2_container_path: Option<String>,

    /// Local path on EC2 to copy files to
    #[arg(long = "ec2LocalPath", value_name = "PATH")]
    pub ec2_local_path: Option<String>,

    /// Skip confirmation prompts when overwriting existing files.
    /// Existing output files are overwritten without asking.
    #[arg(long)]
    pub skip_overwrite_check: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl InitArgs {
    /// The flags that were actually supplied, as a partial configuration.
    pub fn explicit_options(&self) -> ExplicitOptions {
        ExplicitOptions {
            project_name: self.project_name.clone(),
            container_port: self.container_port.clone(),
            host_port: self.host_port.clone(),
            include_db: self.include_db,
            db_type: self.db_type.clone(),
            node_version: self.node_version.clone(),
            production: self.production,
            include_workflow: self.include_workflow,
            main_branch: self.main_branch.clone(),
            use_docker_registry: self.use_docker_registry,
            docker_registry: self.docker_registry.clone(),
            docker_username: self.docker_username.clone(),
            deployment_target: self.deployment_target.clone(),
            ssh_host: self.ssh_host.clone(),
            ssh_user: self.ssh_user.clone(),
            ssh_path: self.ssh_path.clone(),
            aws_region: self.aws_region.clone(),
            aws_cluster: self.aws_cluster.clone(),
            azure_resource_group: self.azure_resource_group.clone(),
            ec2_user: self.ec2_user.clone(),
            ec2_host: self.ec2_host.clone(),
            ec2_repo_path: self.ec2_repo_path.clone(),
            ec2_repo_url: self.ec2_repo_url.clone(),
            ec2_repo_branch: self.ec2_repo_branch.clone(),
            ec2_build_command: self.ec2_build_command.clone(),
            ec2_ssh_key_name: self.ec2_ssh_key_name.clone(),
            ec2_use_custom_container: self.ec2_use_custom_container,
            ec2_container_path: self.ec2_container_path.clone(),
            ec2_local_path: self.ec2_local_path.clone(),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if no subcommand is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let _ = Args::command().print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
