//! Command-line interface for the treeprint utility
//!
//! Reads a tree in bracket or level-order notation and prints it as ASCII
//! art, validates it, or renders the built-in demo tree.

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

use treeprint::core::logging::init_logging;
use treeprint::tree::TreeNotationParser;
use treeprint::{DigitWidth, Node, RenderConfig, TreePrinter, TreeSyntax, DEFAULT_MAX_LEVELS};

/// Tree used by the `demo` command
pub const DEMO_TREE: &str = "80(44(11(10,12),16),7(,15(1,4)))";

/// Treeprint - Render binary trees as ASCII art
#[derive(Parser)]
#[command(name = "treeprint")]
#[command(about = "Render binary trees with slash and backslash edges")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error); overrides
    /// TREEPRINT_LOG_LEVEL and RUST_LOG, otherwise warn
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json); overrides TREEPRINT_LOG_FORMAT,
    /// otherwise compact
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a tree as ASCII art
    Render {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Output file for the rendered tree (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit the rendered lines and tree shape as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that a tree can be rendered
    Validate {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Render the built-in demo tree
    Demo {
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Where the tree comes from and how it is written
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SourceArgs {
    /// Tree given inline, e.g. "50(30,70)"
    #[arg(short, long, conflicts_with = "input")]
    pub tree: Option<String>,

    /// Input file containing the tree (use - for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input syntax
    #[arg(long, value_enum, default_value_t = SyntaxChoice::Notation)]
    pub syntax: SyntaxChoice,
}

/// Layout knobs shared by every command
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutArgs {
    /// Digits reserved per key
    #[arg(short, long, value_enum, default_value_t = DigitChoice::Two)]
    pub digits: DigitChoice,

    /// Deepest tree (in levels) the printer accepts
    #[arg(short, long, default_value_t = DEFAULT_MAX_LEVELS)]
    pub max_levels: usize,
}

impl LayoutArgs {
    pub fn config(&self) -> RenderConfig {
        RenderConfig::new(self.digits.into(), self.max_levels)
    }
}

/// Supported key widths
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum DigitChoice {
    /// Keys 0..=99
    #[default]
    #[value(name = "2")]
    Two,
    /// Keys 0..=999
    #[value(name = "3")]
    Three,
    /// Keys 0..=9999
    #[value(name = "4")]
    Four,
}

impl From<DigitChoice> for DigitWidth {
    fn from(value: DigitChoice) -> Self {
        match value {
            DigitChoice::Two => DigitWidth::Two,
            DigitChoice::Three => DigitWidth::Three,
            DigitChoice::Four => DigitWidth::Four,
        }
    }
}

/// Supported input syntaxes
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum SyntaxChoice {
    /// `key(left,right)` bracket notation
    #[default]
    Notation,
    /// Comma-separated level-order keys, `null` for holes
    LevelOrder,
}

impl From<SyntaxChoice> for TreeSyntax {
    fn from(value: SyntaxChoice) -> Self {
        match value {
            SyntaxChoice::Notation => TreeSyntax::Notation,
            SyntaxChoice::LevelOrder => TreeSyntax::LevelOrder,
        }
    }
}

/// Level handed to `init_logging`
///
/// A flag always wins. Without one, a level set in the environment is left
/// for `init_logging` to resolve, and `warn` applies otherwise.
pub fn log_level_directive(flag: Option<LogLevel>, env_configured: bool) -> Option<&'static str> {
    match flag {
        Some(level) => Some(level.as_str()),
        None if env_configured => None,
        None => Some(LogLevel::Warn.as_str()),
    }
}

/// JSON shape of `render --json`
#[derive(Debug, Serialize)]
pub struct RenderReport {
    pub digit_width: usize,
    pub max_levels: usize,
    pub node_count: usize,
    pub height: usize,
    pub lines: Vec<String>,
}

/// Main CLI application
#[derive(Debug, Default)]
pub struct TreeprintApp {
    parser: TreeNotationParser,
}

impl TreeprintApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        let env_configured = std::env::var_os("TREEPRINT_LOG_LEVEL").is_some()
            || std::env::var_os("RUST_LOG").is_some();
        let log_level = log_level_directive(cli.log_level, env_configured);
        let log_format = cli.log_format.map(|format| format.as_str());

        if let Err(e) = init_logging(log_level, log_format) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Treeprint v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render {
                source,
                layout,
                output,
                json,
            } => self.render_command(&source, layout, output, json, cli.verbose),
            Commands::Validate { source, layout } => {
                self.validate_command(&source, layout, cli.verbose)
            }
            Commands::Demo { layout } => self.demo_command(layout, cli.verbose),
        }
    }

    fn render_command(
        &self,
        source: &SourceArgs,
        layout: LayoutArgs,
        output: Option<PathBuf>,
        json: bool,
        verbose: bool,
    ) -> Result<()> {
        let tree = self.load_tree(source, verbose)?;
        let text = self.render_text(tree.as_ref(), layout.config(), json)?;

        if verbose {
            eprintln!("Rendered tree with {}", layout.config());
        }
        self.write_output(output, &text)
    }

    fn validate_command(&self, source: &SourceArgs, layout: LayoutArgs, verbose: bool) -> Result<()> {
        let printer = TreePrinter::with_config(layout.config());
        let checked = self
            .load_tree(source, verbose)
            .and_then(|tree| Ok(printer.validate(tree.as_ref())?));

        match checked {
            Ok(Some(stats)) => {
                println!(
                    "✓ Valid tree ({} nodes, height {}, effective height {})",
                    stats.node_count, stats.height, stats.effective_height
                );
                Ok(())
            }
            Ok(None) => {
                println!("✓ Valid tree (empty)");
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid tree: {}", e);
                Err(e)
            }
        }
    }

    fn demo_command(&self, layout: LayoutArgs, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Rendering demo tree {}", DEMO_TREE);
        }
        let tree = self.parser.parse(DEMO_TREE)?;
        let text = self.render_text(tree.as_ref(), layout.config(), false)?;
        self.write_output(None, &text)
    }

    /// Parse the tree named by `source`
    pub fn load_tree(&self, source: &SourceArgs, verbose: bool) -> Result<Option<Node>> {
        let content = match &source.tree {
            Some(tree) => tree.clone(),
            None => self.read_input(source.input.clone())?,
        };

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }
        debug!(syntax = %TreeSyntax::from(source.syntax), bytes = content.len(), "Loading tree");

        Ok(self.parser.parse_with(source.syntax.into(), &content)?)
    }

    /// Render `root` as plain text or as a JSON report
    pub fn render_text(&self, root: Option<&Node>, config: RenderConfig, json: bool) -> Result<String> {
        let printer = TreePrinter::with_config(config);
        if !json {
            return Ok(printer.render_to_string(root)?);
        }

        let stats = printer.validate(root)?;
        let report = RenderReport {
            digit_width: config.digit_width.width(),
            max_levels: config.max_levels,
            node_count: stats.map_or(0, |s| s.node_count),
            height: stats.map_or(0, |s| s.height),
            lines: printer.render(root)?,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout, always newline-terminated
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, &content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
