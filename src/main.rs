use clap::{Parser, Subcommand};
use ctxclip::copy::CopierConfig;
use ctxclip::copy_selection_to_clipboard;
use ctxclip::logger::initialize_logger;
use ctxclip::settings::load_settings;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[command(subcommand)]
    cmd: SubCommands,
}

#[derive(Subcommand, Debug, Clone)]
enum SubCommands {
    Copy(CopyArgs),
}

#[derive(Parser, Debug, Clone)]
struct CopyArgs {
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    #[arg(
        short = 'x',
        long = "exclude",
        help = "Extra exclude patterns (e.g. '**/target/**', '**/*.lock')"
    )]
    exclude_patterns: Vec<String>,
    #[arg(
        short = 'r',
        long = "root",
        help = "Project roots; files under one get relative labels"
    )]
    roots: Vec<PathBuf>,
    #[arg(long, help = "JSON settings file with an excludeGlobPatterns list")]
    settings: Option<PathBuf>,
    #[arg(short = 'M', long, default_value = "gpt-4o")]
    model: String,
    #[arg(short = 's', long, default_value = "false")]
    no_stats: bool,
}

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();
    initialize_logger();

    match cli_args.cmd {
        SubCommands::Copy(args) => {
            let settings = match load_settings(args.settings.as_deref()).await {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error loading settings: {}", e);
                    std::process::exit(1);
                }
            };

            let mut exclude_patterns = settings.exclude_glob_patterns;
            exclude_patterns.extend(args.exclude_patterns);

            let copier_config = CopierConfig {
                exclude_patterns,
                project_roots: args.roots,
                model: args.model,
                no_stats: args.no_stats,
            };
            if let Err(e) = copy_selection_to_clipboard(copier_config, args.paths).await {
                eprintln!("Error copying selection to clipboard: {}", e);
                std::process::exit(1);
            }
        }
    }
}
