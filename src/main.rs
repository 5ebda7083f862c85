//! resolve-ref CLI entry point.
//!
//! Parses arguments (falling back to the GitHub Actions environment), sets up
//! logging, and runs the resolver.

use clap::{Args, CommandFactory, Parser, Subcommand};
use resolve_ref::commands::{resolve_command, ResolveOptions};
use resolve_ref::completion::{generate_completion_script, ShellType, SUPPORTED_SHELLS};
use resolve_ref::output::print_error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "resolve-ref")]
#[command(
    version,
    about = "Resolve the checkout ref and baseline branch for a CI lint job",
    after_help = "EXAMPLES:
    # Inside a GitHub Actions step, every input comes from the environment
    resolve-ref

    # Reproduce a run locally
    resolve-ref --event-name pull_request --event-path event.json \\
        --sha abc123 --repository acme/widgets --output-file out.txt

OUTPUTS:
    $GITHUB_ENV     DEFAULT_BRANCH
    $GITHUB_OUTPUT  default_branch, checkout_repository, checkout_ref"
)]
struct Cli {
    #[command(flatten)]
    resolve: ResolveArgs,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug)]
struct ResolveArgs {
    /// Name of the triggering event (pull_request, workflow_dispatch, push, ...)
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    event_name: Option<String>,

    /// Path to the event payload JSON
    #[arg(long, env = "GITHUB_EVENT_PATH", value_hint = clap::ValueHint::FilePath)]
    event_path: Option<PathBuf>,

    /// Short name of the ref that triggered the run
    #[arg(long, env = "GITHUB_REF_NAME")]
    ref_name: Option<String>,

    /// Type of the triggering ref (branch or tag)
    #[arg(long, env = "GITHUB_REF_TYPE")]
    ref_type: Option<String>,

    /// Full ref path, e.g. refs/heads/main
    #[arg(long = "ref", env = "GITHUB_REF")]
    full_ref: Option<String>,

    /// Commit SHA that triggered the run
    #[arg(long, env = "GITHUB_SHA")]
    sha: Option<String>,

    /// Repository (owner/name) the workflow runs in
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// File receiving exported environment variables
    #[arg(long, env = "GITHUB_ENV", value_hint = clap::ValueHint::FilePath)]
    env_file: Option<PathBuf>,

    /// File receiving step outputs
    #[arg(long, env = "GITHUB_OUTPUT", value_hint = clap::ValueHint::FilePath)]
    output_file: Option<PathBuf>,

    /// Config file (defaults to .github/resolve-ref.toml if present)
    #[arg(long, env = "RESOLVE_REF_CONFIG", value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Continue with an empty payload when the event file is not valid JSON
    #[arg(long)]
    lenient_payload: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Output shell completion script to stdout (hidden utility command)
    #[command(hide = true)]
    Completions {
        /// Shell type to generate completions for (bash, zsh, or fish)
        shell: String,
    },
}

impl ResolveArgs {
    fn into_options(self, workspace: PathBuf) -> ResolveOptions {
        ResolveOptions {
            event_name: self.event_name.unwrap_or_default(),
            event_path: self.event_path,
            ref_name: self.ref_name.unwrap_or_default(),
            ref_type: self.ref_type.unwrap_or_default(),
            full_ref: self.full_ref.unwrap_or_default(),
            sha: self.sha.unwrap_or_default(),
            repository: self.repository.unwrap_or_default(),
            env_file: self.env_file,
            output_file: self.output_file,
            config: self.config,
            lenient_payload: self.lenient_payload,
            workspace,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(Commands::Completions { shell }) = &cli.command {
        match ShellType::from_name(shell) {
            Ok(shell_type) => {
                print!(
                    "{}",
                    generate_completion_script(shell_type, &mut Cli::command())
                );
                return;
            }
            Err(e) => {
                print_error(&format!(
                    "{}\nSupported shells: {}",
                    e,
                    SUPPORTED_SHELLS.join(", ")
                ));
                std::process::exit(1);
            }
        }
    }

    let workspace = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            print_error(&format!("Failed to determine working directory: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = resolve_command(&cli.resolve.into_options(workspace)) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
