use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use branch_bump::cli::{run_bump_workflow, BumpArgs};
use branch_bump::config;
use branch_bump::git::Git2Repository;
use branch_bump::ui;

#[derive(Parser)]
#[command(
    name = "branch-bump",
    version,
    about = "Upgrade the version of package.json and package-lock.json based on the current git branch"
)]
struct Cli {
    #[arg(long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Print debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bump the version on a feature (minor) or fix (patch) branch
    #[command(
        long_about = "Upgrade the version of package.json and package-lock.json.\n\
        A branch whose name contains \"feature\" upgrades the minor number, \
        one containing \"fix\" upgrades the patch number."
    )]
    Bump(BumpCommand),
}

#[derive(Args)]
struct BumpCommand {
    #[arg(short, long, help = "Commit the changes to git")]
    commit: bool,

    #[arg(long, help = "Preview the new version without changing any file")]
    dry_run: bool,

    #[arg(
        short = 'C',
        long = "dir",
        default_value = ".",
        help = "Directory containing package.json"
    )]
    dir: PathBuf,
}

fn main() {
    if let Err(err) = try_main() {
        ui::display_error(&err.to_string());
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Bump(cmd) => {
            let config = config::load_config(cli.config.as_deref(), &cmd.dir)?;
            let repo = Git2Repository::open(&cmd.dir)?;
            let args = BumpArgs {
                root: cmd.dir,
                commit: cmd.commit,
                dry_run: cmd.dry_run,
            };

            let outcome = run_bump_workflow(&args, &config, &repo)?;
            if outcome.dry_run {
                ui::display_success(&format!("New version would be {}", outcome.new_version));
            }
        }
    }

    Ok(())
}
