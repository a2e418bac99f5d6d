use std::io;

use docker_scaffold::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::PromptError("not a terminal".to_string());
    assert_eq!(err.to_string(), "Prompt error: not a terminal.");
}

#[test]
fn test_generation_error_names_file() {
    let err = Error::GenerationError {
        file: "docker-compose.yml".to_string(),
        source: Box::new(Error::IoError(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "permission denied",
        ))),
    };
    assert_eq!(
        err.to_string(),
        "Error generating docker-compose.yml: IO error: permission denied."
    );
}
