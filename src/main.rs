//! docker-scaffold's main application entry point and orchestration logic.

use docker_scaffold::{
    cli::{get_args, Command, InitArgs},
    error::{default_error_handler, Result},
    generator::{Generator, Outcome},
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    report,
    resolver::{directory_name, resolve},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let result = match args.command {
        Command::Init(init_args) => run_init(init_args),
    };
    if let Err(err) = result {
        default_error_handler(err);
    }
}

/// Runs the `init` subcommand.
///
/// # Flow
/// 1. Resolves the configuration from flags and prompts
/// 2. Confirms overwriting existing outputs
/// 3. Renders and writes every template into the current directory
fn run_init(args: InitArgs) -> Result<()> {
    report::print_banner();

    let engine = MiniJinjaRenderer::new()?;
    let prompt = DialoguerPrompter::new();
    let output_root = std::env::current_dir()?;

    let options = args.explicit_options();
    let config = resolve(&prompt, &options, &directory_name(&output_root))?;
    log::debug!("Resolved configuration: {:?}", config);

    report::print_generating();
    let generator = Generator::new(&engine, &prompt, &output_root, args.skip_overwrite_check);
    match generator.generate(&config)? {
        Outcome::Written(_) => report::print_summary(&config),
        Outcome::Cancelled => report::print_cancelled(),
    }
    Ok(())
}
