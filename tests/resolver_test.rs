mod common;

use std::collections::HashSet;

use common::ScriptedPrompter;
use docker_scaffold::config::{Config, ExplicitOptions};
use docker_scaffold::resolver::resolve;

const SSH_FIELDS: [&str; 3] = ["sshHost", "sshUser", "sshPath"];
const AWS_FIELDS: [&str; 2] = ["awsRegion", "awsCluster"];
const EC2_FIELDS: [&str; 10] = [
    "ec2User",
    "ec2Host",
    "ec2RepoPath",
    "ec2RepoUrl",
    "ec2RepoBranch",
    "ec2BuildCommand",
    "ec2SshKeyName",
    "ec2UseCustomContainer",
    "ec2ContainerPath",
    "ec2LocalPath",
];

fn assert_no_duplicates(asked: &[String]) {
    let unique: HashSet<&String> = asked.iter().collect();
    assert_eq!(unique.len(), asked.len(), "asked twice: {asked:?}");
}

#[test]
fn test_all_defaults_asks_full_questionnaire() {
    let prompter = ScriptedPrompter::new();
    let config = resolve(&prompter, &ExplicitOptions::default(), "shop").unwrap();

    assert_eq!(
        prompter.asked(),
        vec![
            "projectName",
            "containerPort",
            "hostPort",
            "includeDB",
            "dbType",
            "nodeVersion",
            "production",
            "includeWorkflow",
            "useDockerRegistry",
            "dockerRegistry",
            "mainBranch",
            "dockerUsername",
            "deploymentTarget",
            "sshHost",
            "sshUser",
            "sshPath",
        ]
    );
    assert_eq!(config, Config::defaults_for("shop", "main"));
}

#[test]
fn test_explicit_options_are_never_asked() {
    let combinations = vec![
        ExplicitOptions {
            project_name: Some("demo".to_string()),
            host_port: Some("8080".to_string()),
            ..Default::default()
        },
        ExplicitOptions {
            include_db: Some(true),
            db_type: Some("mysql".to_string()),
            include_workflow: Some(true),
            deployment_target: Some("vps".to_string()),
            ssh_host: Some("deploy.example.org".to_string()),
            ..Default::default()
        },
        ExplicitOptions {
            use_docker_registry: Some(true),
            docker_registry: Some("dockerhub".to_string()),
            docker_username: Some("octo".to_string()),
            deployment_target: Some("ec2".to_string()),
            ec2_build_command: Some("docker compose up -d".to_string()),
            ec2_use_custom_container: Some(true),
            ec2_local_path: Some("./public".to_string()),
            ..Default::default()
        },
        ExplicitOptions {
            deployment_target: Some("aws".to_string()),
            aws_cluster: Some("prod".to_string()),
            main_branch: Some("trunk".to_string()),
            ..Default::default()
        },
    ];

    for options in combinations {
        let prompter = ScriptedPrompter::new();
        let config = resolve(&prompter, &options, "shop").unwrap();

        let explicit = options.to_map().unwrap();
        let asked = prompter.asked();
        assert_no_duplicates(&asked);
        for name in &asked {
            assert!(!explicit.contains_key(name), "'{name}' was supplied but asked");
        }

        let resolved = config.to_context().unwrap();
        for (name, value) in &explicit {
            assert_eq!(&resolved[name], value, "'{name}' was overridden");
        }
    }
}

#[test]
fn test_database_type_skipped_when_database_excluded() {
    let options = ExplicitOptions {
        include_db: Some(false),
        ..Default::default()
    };
    let prompter = ScriptedPrompter::new();
    let config = resolve(&prompter, &options, "shop").unwrap();
    assert!(!prompter.was_asked("dbType"));
    assert!(!config.include_db);

    let options = ExplicitOptions {
        include_db: Some(false),
        db_type: Some("mongodb".to_string()),
        ..Default::default()
    };
    let prompter = ScriptedPrompter::new();
    resolve(&prompter, &options, "shop").unwrap();
    assert!(!prompter.was_asked("dbType"));

    let prompter = ScriptedPrompter::new().with("includeDB", false);
    let config = resolve(&prompter, &ExplicitOptions::default(), "shop").unwrap();
    assert!(!prompter.was_asked("dbType"));
    assert_eq!(config.db_type, "postgres");
}

#[test]
fn test_ec2_custom_container_confirmed() {
    let options = ExplicitOptions {
        deployment_target: Some("ec2".to_string()),
        ..Default::default()
    };
    let prompter = ScriptedPrompter::new()
        .with("ec2BuildCommand", "docker compose up --build -d")
        .with("ec2UseCustomContainer", true)
        .with("ec2ContainerPath", "/app/build");
    let config = resolve(&prompter, &options, "shop").unwrap();

    let asked = prompter.asked();
    let tail: Vec<&str> = asked.iter().rev().take(EC2_FIELDS.len()).rev().map(String::as_str).collect();
    assert_eq!(tail, EC2_FIELDS);
    assert!(config.ec2_use_custom_container);
    assert_eq!(config.ec2_container_path, "/app/build");
    assert_eq!(config.ec2_local_path, "./dist");
}

#[test]
fn test_ec2_custom_container_declined() {
    let options = ExplicitOptions {
        deployment_target: Some("ec2".to_string()),
        ..Default::default()
    };
    let prompter = ScriptedPrompter::new().with("ec2UseCustomContainer", false);
    let config = resolve(&prompter, &options, "shop").unwrap();

    assert!(prompter.was_asked("ec2UseCustomContainer"));
    assert!(!prompter.was_asked("ec2ContainerPath"));
    assert!(!prompter.was_asked("ec2LocalPath"));
    assert!(!config.ec2_use_custom_container);
}

#[test]
fn test_ec2_without_container_build_skips_copy_questions() {
    let options = ExplicitOptions {
        deployment_target: Some("ec2".to_string()),
        ..Default::default()
    };
    let prompter = ScriptedPrompter::new()
        .with("ec2BuildCommand", "npm ci && npm run build")
        .with("ec2UseCustomContainer", true);
    let config = resolve(&prompter, &options, "shop").unwrap();

    assert!(prompter.was_asked("ec2BuildCommand"));
    assert!(!prompter.was_asked("ec2UseCustomContainer"));
    assert!(!prompter.was_asked("ec2ContainerPath"));
    assert!(!prompter.was_asked("ec2LocalPath"));
    assert!(!config.ec2_use_custom_container);
}

#[test]
fn test_ec2_explicit_custom_container_asks_paths_only() {
    let options = ExplicitOptions {
        deployment_target: Some("ec2".to_string()),
        ec2_use_custom_container: Some(true),
        ..Default::default()
    };
    let prompter = ScriptedPrompter::new();
    resolve(&prompter, &options, "shop").unwrap();

    assert!(!prompter.was_asked("ec2UseCustomContainer"));
    assert!(prompter.was_asked("ec2ContainerPath"));
    assert!(prompter.was_asked("ec2LocalPath"));
}

#[test]
fn test_ec2_branch_defaults_to_main_branch_answer() {
    let options = ExplicitOptions {
        deployment_target: Some("ec2".to_string()),
        ..Default::default()
    };
    let prompter = ScriptedPrompter::new().with("mainBranch", "develop");
    let config = resolve(&prompter, &options, "shop").unwrap();

    assert_eq!(config.main_branch, "develop");
    assert_eq!(config.ec2_repo_branch, "develop");
}

#[test]
fn test_ssh_targets_append_only_ssh_questions() {
    for target in ["vps", "digitalocean", "other"] {
        let prompter = ScriptedPrompter::new()
            .with("deploymentTarget", target)
            .with("sshHost", "203.0.113.10");
        let config = resolve(&prompter, &ExplicitOptions::default(), "shop").unwrap();

        let asked = prompter.asked();
        let position = asked.iter().position(|name| name == "deploymentTarget").unwrap();
        assert_eq!(&asked[position + 1..], SSH_FIELDS);

        let defaults = Config::defaults_for("shop", "main");
        assert_eq!(config.deployment_target, target);
        assert_eq!(config.ssh_host, "203.0.113.10");
        assert_eq!(config.aws_region, defaults.aws_region);
        assert_eq!(config.aws_cluster, defaults.aws_cluster);
        assert_eq!(config.azure_resource_group, defaults.azure_resource_group);
        assert_eq!(config.ec2_host, defaults.ec2_host);
    }
}

#[test]
fn test_workflow_excluded_skips_dependent_questions() {
    let options = ExplicitOptions {
        project_name: Some("demo".to_string()),
        include_workflow: Some(false),
        ..Default::default()
    };
    let prompter = ScriptedPrompter::new();
    let config = resolve(&prompter, &options, "shop").unwrap();

    assert_eq!(
        prompter.asked(),
        vec!["containerPort", "hostPort", "includeDB", "dbType", "nodeVersion", "production"]
    );
    assert!(!config.include_workflow);
    assert_eq!(config.project_name, "demo");
    assert_eq!(config.main_branch, "main");
    assert_eq!(config.deployment_target, "vps");
    assert!(config.use_docker_registry);
    assert_eq!(config.docker_registry, "dockerhub");
    assert_eq!(config.docker_username, "yourusername");
    assert_eq!(config.ssh_host, "example.com");
}

#[test]
fn test_workflow_answered_no_ignores_explicit_target() {
    let options = ExplicitOptions {
        deployment_target: Some("aws".to_string()),
        ..Default::default()
    };
    let prompter = ScriptedPrompter::new().with("includeWorkflow", false);
    let config = resolve(&prompter, &options, "shop").unwrap();

    for name in AWS_FIELDS {
        assert!(!prompter.was_asked(name));
    }
    assert_eq!(config.deployment_target, "aws");
    assert_eq!(config.aws_cluster, "shop-cluster");
}

#[test]
fn test_aws_cluster_defaults_to_resolved_project_name() {
    let options = ExplicitOptions {
        deployment_target: Some("aws".to_string()),
        aws_region: Some("eu-west-1".to_string()),
        ..Default::default()
    };
    let prompter = ScriptedPrompter::new();
    let config = resolve(&prompter, &options, "shop").unwrap();

    assert!(prompter.was_asked("includeWorkflow"));
    assert!(!prompter.was_asked("awsRegion"));
    assert!(prompter.was_asked("awsCluster"));
    assert!(config.include_workflow);
    assert_eq!(config.aws_region, "eu-west-1");
    assert_eq!(config.aws_cluster, "shop-cluster");

    let prompter = ScriptedPrompter::new().with("projectName", "billing");
    let config = resolve(&prompter, &options, "shop").unwrap();
    assert_eq!(config.aws_cluster, "billing-cluster");
}

#[test]
fn test_azure_resource_group_defaults_to_project_name() {
    let options = ExplicitOptions {
        project_name: Some("portal".to_string()),
        deployment_target: Some("azure".to_string()),
        ..Default::default()
    };
    let prompter = ScriptedPrompter::new();
    let config = resolve(&prompter, &options, "shop").unwrap();

    assert!(prompter.was_asked("azureResourceGroup"));
    assert_eq!(config.azure_resource_group, "portal-resources");
}

#[test]
fn test_unrecognized_and_local_targets_ask_nothing_extra() {
    for target in ["local", "heroku"] {
        let options = ExplicitOptions {
            deployment_target: Some(target.to_string()),
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new();
        let config = resolve(&prompter, &options, "shop").unwrap();

        assert_eq!(prompter.asked().last().map(String::as_str), Some("dockerUsername"));
        assert_eq!(config.deployment_target, target);
    }
}

#[test]
fn test_registry_questions_follow_registry_choice() {
    let prompter = ScriptedPrompter::new().with("dockerRegistry", "local");
    let config = resolve(&prompter, &ExplicitOptions::default(), "shop").unwrap();
    assert!(prompter.was_asked("dockerRegistry"));
    assert!(!prompter.was_asked("dockerUsername"));
    assert_eq!(config.docker_registry, "local");

    let prompter = ScriptedPrompter::new().with("useDockerRegistry", false);
    resolve(&prompter, &ExplicitOptions::default(), "shop").unwrap();
    assert!(!prompter.was_asked("dockerRegistry"));
    assert!(!prompter.was_asked("dockerUsername"));
}
