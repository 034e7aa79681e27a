pub mod browse;
pub mod extensions;
pub mod folders;
pub mod scan;

use std::{
    io::{Stderr, Stdout},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand};
use fileshelf_runtime::{expand_home, storage_root};
use fileshelf_views::{SortConfig, SortDirection, SortKey};
use log::{error, info};

pub use browse::BrowseArgs;
pub use extensions::ExtensionsArgs;
pub use folders::FoldersArgs;
pub use scan::ScanArgs;

use crate::printer::{
    ColorChoice, HumanPrinter, JsonPrinter, OutputFormat, PrinterConfig, ViewPrinter,
};

#[derive(Parser, Debug)]
#[command(
    name = "fileshelf",
    version,
    about = "Browse and search a static file archive",
    propagate_version = true
)]
pub struct Cli {
    /// Directory to index. Defaults to $FILESHELF_ROOT, then ./public/files.
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every indexed file, sorted by name.
    Scan(ScanArgs),

    /// Show one folder, or search file names across the archive.
    ///
    /// Example:
    ///   fileshelf browse docs/2024
    ///   fileshelf browse --search report --sort date --desc
    Browse(BrowseArgs),

    /// Show files grouped by extension.
    Extensions(ExtensionsArgs),

    /// List every browsable folder route.
    Folders(FoldersArgs),
}

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output results as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Suppress the summary line
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl OutputOptions {
    /// Create a printer based on the output options.
    pub fn make_printer(&self) -> Box<dyn ViewPrinter> {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        let color = match self.color.as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        };

        let cfg = PrinterConfig {
            format,
            color,
            show_summary: !self.quiet,
        };

        match format {
            OutputFormat::Human => Box::new(HumanPrinter::<Stdout, Stderr>::stdout(cfg)),
            OutputFormat::Json => Box::new(JsonPrinter::<Stdout, Stderr>::stdout(cfg)),
        }
    }
}

#[derive(Debug, Args)]
pub struct SortOptions {
    /// Column to sort files by: name, size, date
    #[arg(long, value_name = "KEY", default_value = "name")]
    pub sort: SortKey,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,
}

impl SortOptions {
    pub fn to_config(&self) -> SortConfig {
        let direction = if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        SortConfig::new(self.sort, direction)
    }
}

/// Storage root from `--root`, falling back to the configured default.
pub fn resolve_root(cli_root: Option<PathBuf>) -> PathBuf {
    let root = match cli_root {
        Some(path) => expand_home(&path),
        None => storage_root(),
    };
    info!("[fileshelf] storage root {}", root.display());
    root
}

/// Map a command's outcome to the process exit code.
pub fn finish(kind: &str, result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[{kind}] {e:#}");
            eprintln!("[{kind}] {e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
