//! LLM Significance CLI
//!
//! Command-line interface for testing whether model score differences are
//! statistically significant.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use llm_significance_cli::commands::{analyze, config, CommandContext};
use llm_significance_cli::config::Config;
use llm_significance_cli::output::{colors, OutputFormat};
use llm_significance_domain::CorrectionMethod;

/// Output format for CLI commands
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CliOutputFormat {
    /// JSON output
    Json,
    /// Table output
    Table,
    /// Plain text output
    Plain,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "llm-significance")]
#[command(author, version, about = "Statistical significance testing for model scores")]
#[command(long_about = "Compare per-item scores of several models against a baseline.\n\n\
    Computes descriptive statistics, pairwise and baseline significance tests, and picks the best model.")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format (overrides preferences)
    #[arg(short = 'o', long, global = true, value_enum)]
    format: Option<CliOutputFormat>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a score table
    #[command(alias = "a")]
    Analyze {
        /// JSON file with an object of column name to scores (`-` reads stdin)
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Baseline column
        #[arg(short, long)]
        baseline: String,

        /// Comparison columns, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        columns: Vec<String>,

        /// Test type (wilcoxon, ttest, mannwhitney)
        #[arg(short, long = "test")]
        test_type: Option<String>,

        /// Significance level
        #[arg(long)]
        alpha: Option<f64>,

        /// Multiple-comparison correction (none, bonferroni, holm)
        #[arg(long)]
        correction: Option<CorrectionMethod>,

        /// Leave the baseline out of the best-model ranking
        #[arg(long)]
        exclude_baseline_from_ranking: bool,
    },

    /// Show or reset preferences
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current preferences
    Show,
    /// Print the preferences file path
    Path,
    /// Reset preferences to defaults
    Reset,
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "llm-significance", &mut std::io::stdout());
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(format) = cli.format {
        config.output_format = format.into();
    }
    if cli.no_color {
        config.colored = false;
    }
    if !config.colored {
        colored::control::set_override(false);
    }

    let mut ctx = CommandContext::new(config);

    match cli.command {
        Commands::Analyze {
            input,
            baseline,
            columns,
            test_type,
            alpha,
            correction,
            exclude_baseline_from_ranking,
        } => analyze::run(
            &ctx,
            analyze::AnalyzeOptions {
                input,
                baseline,
                columns,
                test_type,
                alpha,
                correction,
                exclude_baseline_from_ranking,
            },
        ),

        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => config::show(&ctx),
            Some(ConfigCommands::Path) => config::path(),
            Some(ConfigCommands::Reset) => config::reset(&mut ctx),
        },

        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let verbose = cli.verbose;
    if let Err(e) = run(cli) {
        use colored::Colorize;
        eprintln!("{} {}", colors::error("Error:").bold(), e);
        if verbose {
            eprintln!("\n{}", "Details:".dimmed());
            eprintln!("{:?}", e);
        }
        std::process::exit(1);
    }
}
