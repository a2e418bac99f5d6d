//! Console output around a generation run.

use console::style;

use crate::config::{Config, TargetShape};
use crate::generator::TEMPLATES;

/// A GitHub secret the generated workflow reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    pub name: String,
    pub description: &'static str,
}

impl Secret {
    fn new(name: impl Into<String>, description: &'static str) -> Self {
        Self { name: name.into(), description }
    }
}

/// Secrets the workflow for `config` expects in the repository settings.
/// Empty when no workflow is included.
pub fn required_secrets(config: &Config) -> Vec<Secret> {
    let mut secrets = Vec::new();
    if !config.include_workflow {
        return secrets;
    }

    if config.use_docker_registry {
        match config.docker_registry.as_str() {
            "dockerhub" => {
                secrets.push(Secret::new("DOCKER_USERNAME", "Your Docker Hub username"));
                secrets.push(Secret::new("DOCKER_PASSWORD", "Your Docker Hub password or token"));
            }
            "other" => {
                secrets.push(Secret::new("REGISTRY_URL", "Your container registry host"));
                secrets.push(Secret::new("REGISTRY_USERNAME", "Your registry username"));
                secrets.push(Secret::new("REGISTRY_PASSWORD", "Your registry password or token"));
            }
            _ => {}
        }
    }

    match config.target_shape() {
        TargetShape::Ssh => {
            secrets.push(Secret::new("SSH_PRIVATE_KEY", "Your private SSH key for deployment"))
        }
        TargetShape::Aws => {
            secrets.push(Secret::new("AWS_ACCESS_KEY_ID", "Your AWS access key"));
            secrets.push(Secret::new("AWS_SECRET_ACCESS_KEY", "Your AWS secret key"));
        }
        TargetShape::Azure => {
            secrets.push(Secret::new("AZURE_CREDENTIALS", "Your Azure credentials JSON"))
        }
        TargetShape::Ec2 => secrets.push(Secret::new(
            config.ec2_ssh_key_name.clone(),
            "Private SSH key for the EC2 instance",
        )),
        TargetShape::None => {}
    }

    secrets
}

pub fn print_banner() {
    println!("{}", style("\nDocker Scaffold CLI").blue().bold());
    println!("{}", style("Generate Docker configuration files for your project").blue());
    println!("{}\n", style("-".repeat(50)).dim());
}

pub fn print_generating() {
    println!("{}", style("\nGenerating Docker configuration files...").yellow());
}

pub fn print_cancelled() {
    println!("{}", style("Operation cancelled. No files were modified.").yellow());
}

/// Prints created files, next steps and workflow setup instructions.
pub fn print_summary(config: &Config) {
    println!("{}", style("\nAll files generated successfully!").green());
    println!("\nFiles created:");
    for target in TEMPLATES {
        println!("{}", style(format!("  - {}", target.dest)).cyan());
    }

    println!("{}", style("\nNext steps:").yellow());
    println!("  1. Review the generated files and make any necessary adjustments");
    println!("  2. Build your Docker image: {}", style("docker compose build").bold());
    println!("  3. Start your containers: {}", style("docker compose up").bold());

    let secrets = required_secrets(config);
    if config.include_workflow {
        println!("{}", style("\nGitHub Actions setup:").yellow());
        if secrets.is_empty() {
            println!("  1. No repository secrets are needed");
        } else {
            println!("  1. Add these secrets to your GitHub repository:");
            for secret in &secrets {
                println!("     - {}: {}", style(&secret.name).bold(), secret.description);
            }
        }
        println!("  2. Push your code to GitHub to trigger the workflow");
    }
}
