//! The ordered list of questions asked by `init`.
//!
//! Static questions come first. Deployment-target questions cannot be listed
//! until the target is known, so the list ends with an [`Step::Expand`]
//! placeholder that computes them from the answers collected so far.

use crate::config::{shape_of, TargetShape, CONTAINER_KEYWORD, DEFAULT_MAIN_BRANCH};
use crate::question::{Choice, Context, Question, Step};

/// Project name fallback for derived defaults when no name is known yet.
const FALLBACK_APP_NAME: &str = "app";

fn workflow_included(ctx: &Context<'_>) -> bool {
    ctx.flag("includeWorkflow")
}

fn database_included(ctx: &Context<'_>) -> bool {
    ctx.flag("includeDB")
}

fn registry_used(ctx: &Context<'_>) -> bool {
    workflow_included(ctx) && ctx.flag("useDockerRegistry")
}

fn docker_hub_used(ctx: &Context<'_>) -> bool {
    registry_used(ctx) && ctx.text("dockerRegistry") == Some("dockerhub")
}

fn build_uses_containers(ctx: &Context<'_>) -> bool {
    ctx.text("ec2BuildCommand")
        .is_some_and(|command| command.contains(CONTAINER_KEYWORD))
}

fn custom_container_used(ctx: &Context<'_>) -> bool {
    ctx.flag("ec2UseCustomContainer")
}

fn app_name<'a>(ctx: &Context<'a>) -> &'a str {
    ctx.text("projectName").unwrap_or(FALLBACK_APP_NAME)
}

/// Questions that apply to every run, in the order they are asked.
///
/// `directory_name` is offered as the default project name.
pub fn base_questions(directory_name: &str) -> Vec<Question> {
    vec![
        Question::text("projectName", "Project name:", directory_name),
        Question::text("containerPort", "Port inside container:", "3000"),
        Question::text("hostPort", "Port on host machine:", "3000"),
        Question::confirm("includeDB", "Include database service?", true),
        Question::select(
            "dbType",
            "Choose database type:",
            vec![Choice::plain("postgres"), Choice::plain("mysql"), Choice::plain("mongodb")],
            "postgres",
        )
        .when(database_included),
        Question::select(
            "nodeVersion",
            "Node.js version:",
            vec![Choice::plain("18"), Choice::plain("20"), Choice::plain("latest")],
            "18",
        ),
        Question::confirm("production", "Generate production-ready configuration?", false),
        Question::confirm("includeWorkflow", "Include GitHub Actions workflow?", true),
        Question::confirm("useDockerRegistry", "Use Docker image registry?", true)
            .when(workflow_included),
        Question::select(
            "dockerRegistry",
            "Choose Docker registry type:",
            vec![
                Choice::new("Docker Hub", "dockerhub"),
                Choice::new("Local (no registry, build locally only)", "local"),
                Choice::new("Other registry (AWS ECR, GitHub, etc.)", "other"),
            ],
            "dockerhub",
        )
        .when(registry_used),
        Question::text("mainBranch", "Main branch to trigger deployment:", DEFAULT_MAIN_BRANCH)
            .when(workflow_included),
        Question::text(
            "dockerUsername",
            "Docker Hub username (for pushing images):",
            "yourusername",
        )
        .when(docker_hub_used),
        Question::select(
            "deploymentTarget",
            "Choose deployment target:",
            ["aws", "digitalocean", "vps", "azure", "local", "ec2", "other"]
                .into_iter()
                .map(Choice::plain)
                .collect(),
            "vps",
        )
        .when(workflow_included),
    ]
}

/// Questions specific to the deployment target known in `ctx`.
///
/// Nothing is returned when the workflow is excluded or the target has no
/// dedicated fields.
pub fn target_questions(ctx: &Context<'_>) -> Vec<Question> {
    if !workflow_included(ctx) {
        return Vec::new();
    }
    let Some(target) = ctx.text("deploymentTarget") else {
        return Vec::new();
    };

    match shape_of(target) {
        TargetShape::Ssh => vec![
            Question::text("sshHost", "SSH host for deployment (e.g., example.com):", "example.com"),
            Question::text("sshUser", "SSH user for deployment:", "deploy"),
            Question::text("sshPath", "Path on server to deploy to:", "/var/www/app"),
        ],
        TargetShape::Aws => vec![
            Question::text("awsRegion", "AWS region for deployment:", "us-east-1"),
            Question::derived_text("awsCluster", "AWS ECS cluster name:", |ctx| {
                format!("{}-cluster", app_name(ctx))
            }),
        ],
        TargetShape::Azure => vec![Question::derived_text(
            "azureResourceGroup",
            "Azure resource group name:",
            |ctx| format!("{}-resources", app_name(ctx)),
        )],
        TargetShape::Ec2 => ec2_questions(),
        TargetShape::None => Vec::new(),
    }
}

/// EC2 questions. The container-copy questions depend on the build command
/// and then on the custom-container answer, so their order matters.
fn ec2_questions() -> Vec<Question> {
    vec![
        Question::text("ec2User", "EC2 instance user:", "ec2-user"),
        Question::text("ec2Host", "EC2 instance hostname or IP:", "your-ec2-instance.example.com"),
        Question::text("ec2RepoPath", "Path on EC2 to deploy to:", "/var/www/app"),
        Question::text(
            "ec2RepoUrl",
            "Git repository URL for EC2 deployment:",
            "git@github.com:username/repo.git",
        ),
        Question::derived_text("ec2RepoBranch", "Git branch to deploy on EC2:", |ctx| {
            ctx.text("mainBranch").unwrap_or(DEFAULT_MAIN_BRANCH).to_string()
        }),
        Question::text(
            "ec2BuildCommand",
            "Build command to run on EC2 (docker-compose or other build command):",
            "docker-compose up --build -d",
        ),
        Question::text("ec2SshKeyName", "Name of GitHub secret for the SSH key:", "EC2_SSH_KEY"),
        Question::confirm(
            "ec2UseCustomContainer",
            "Do you need to access files from the Docker container after build? (useful for static sites)",
            false,
        )
        .when(build_uses_containers),
        Question::text(
            "ec2ContainerPath",
            "Path inside container to copy files from (e.g., /app/build):",
            "/usr/share/nginx/html",
        )
        .when(custom_container_used),
        Question::text("ec2LocalPath", "Local path on EC2 to copy files to (e.g., ./dist):", "./dist")
            .when(custom_container_used),
    ]
}

/// The full question queue: every base question not explicitly supplied,
/// followed by the deferred target expansion.
pub fn build_steps(directory_name: &str, is_explicit: impl Fn(&str) -> bool) -> Vec<Step> {
    let mut steps: Vec<Step> = base_questions(directory_name)
        .into_iter()
        .filter(|question| !is_explicit(question.name))
        .map(Step::Ask)
        .collect();
    steps.push(Step::Expand(target_questions));
    steps
}
