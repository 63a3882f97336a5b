use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cxx_codemod::{
    NamespaceConfig, SourceConfig, Summary, SystemRunner, TidyConfig, run_namespaces, run_tidy,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cxx-codemod")]
#[command(about = "Namespace injection and clang-tidy passes over C/C++ source trees", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Source extensions to process instead of the defaults (repeatable)
    #[arg(long = "ext", value_name = "EXT", global = true)]
    extensions: Vec<String>,

    /// Use the extended C/C++ extension set and skip build/third_party dirs
    #[arg(long, global = true)]
    extended: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wrap each source file in a namespace derived from its directory
    Namespace {
        /// Root directory (e.g. PokerTraining/src)
        #[arg(value_name = "ROOT")]
        root: PathBuf,

        /// Subdirectory to exclude, relative to ROOT (repeatable)
        #[arg(long, value_name = "DIR")]
        exclude: Vec<PathBuf>,

        /// Outermost namespace
        #[arg(long, default_value = "pkt")]
        root_namespace: String,

        /// Formatter invoked as `<formatter> -i <file>` after each rewrite
        #[arg(long, default_value = "clang-format")]
        formatter: String,

        /// Skip the formatter step
        #[arg(long)]
        no_format: bool,
    },
    /// Run clang-tidy on every source file in a directory
    Tidy {
        /// Directory to search for source files
        #[arg(value_name = "SOURCE_DIR")]
        source_dir: PathBuf,

        /// Build directory containing compile_commands.json
        #[arg(long, default_value = "build/debug-widgets")]
        build_dir: PathBuf,

        /// Checks to apply
        #[arg(long, default_value = "readability-identifier-naming")]
        checks: String,

        /// Report findings without applying fixes
        #[arg(long)]
        no_fix: bool,

        /// clang-tidy executable
        #[arg(long = "clang-tidy", default_value = "clang-tidy")]
        program: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn entrypoint() -> Result<Summary> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let base = if cli.extended {
        SourceConfig::cxx_extended()
    } else {
        SourceConfig::cxx()
    };
    let source = base.with_extensions(&cli.extensions);

    match cli.command {
        Commands::Namespace {
            root,
            exclude,
            root_namespace,
            formatter,
            no_format,
        } => {
            let root = std::path::absolute(&root)
                .with_context(|| format!("resolving {}", root.display()))?;
            let mut config = NamespaceConfig::pkt().exclude_relative(&root, &exclude);
            config.root_namespace = root_namespace;
            config.formatter = if no_format { None } else { Some(formatter) };
            config.source = source;
            run_namespaces(&config, &root, &SystemRunner)
        }
        Commands::Tidy {
            source_dir,
            build_dir,
            checks,
            no_fix,
            program,
        } => {
            let config = TidyConfig {
                program,
                build_dir,
                checks,
                fix: !no_fix,
            };
            run_tidy(&config, &source, &source_dir, &SystemRunner)
        }
    }
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(summary) if summary.has_failures() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
    }
}
