use std::io::{self, Write};

use chrono::{DateTime, Local};
use fileshelf_fs::FileRecord;
use fileshelf_views::is_image;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with optional colors.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Automatically detect TTY and enable colors if appropriate.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub format: OutputFormat,
    pub color: ColorChoice,
    /// Whether to print the trailing summary line.
    pub show_summary: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: ColorChoice::Auto,
            show_summary: true,
        }
    }
}

/// Static context about one printed view.
#[derive(Debug)]
pub struct PrintContext<'a> {
    /// Label for the view, e.g. "browse"
    pub kind: &'a str,
    /// Heading line, e.g. the breadcrumb trail
    pub heading: Option<&'a str>,
    /// Number of files in the view
    pub total: usize,
    /// Shown instead of rows when the view is empty
    pub empty_message: Option<&'a str>,
}

/// One row in the output stream.
#[derive(Debug)]
pub enum Row<'a> {
    /// Link to the enclosing folder.
    Parent { href: &'a str },
    Folder { name: &'a str, href: &'a str },
    /// Start of an extension group.
    Group { label: &'a str, count: usize },
    File {
        record: &'a FileRecord,
        /// Append the containing folder, for views that mix folders.
        show_folder: bool,
    },
}

pub trait ViewPrinter {
    /// Called once before any rows are printed.
    fn begin(&mut self, ctx: &PrintContext) -> io::Result<()>;

    fn print_row(&mut self, row: &Row<'_>, ctx: &PrintContext) -> io::Result<()>;

    /// Called once after all rows are printed.
    fn finish(&mut self, ctx: &PrintContext, printed_rows: usize) -> io::Result<()>;
}

/// Human-readable printer with optional color support.
pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
    use_color: bool,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    /// `ColorChoice::Auto` means no color here, since arbitrary writers
    /// cannot be probed for a terminal.
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        let use_color = matches!(cfg.color, ColorChoice::Always);

        Self {
            out,
            err,
            cfg,
            use_color,
        }
    }

    /// Create a printer that writes to stdout and stderr with TTY detection.
    pub fn stdout(cfg: PrinterConfig) -> HumanPrinter<io::Stdout, io::Stderr> {
        use std::io::IsTerminal;

        let use_color = match cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };

        HumanPrinter {
            out: io::stdout(),
            err: io::stderr(),
            cfg,
            use_color,
        }
    }

    #[inline]
    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_owned()
        }
    }
}

/// Modification time in local time, or the raw value if it does not parse.
pub fn local_time(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso)
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|_| iso.to_owned())
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        Self { out, err, cfg }
    }

    /// Create a printer that writes to stdout and stderr.
    pub fn stdout(cfg: PrinterConfig) -> JsonPrinter<io::Stdout, io::Stderr> {
        JsonPrinter {
            out: io::stdout(),
            err: io::stderr(),
            cfg,
        }
    }
}

impl<W: Write, E: Write> ViewPrinter for HumanPrinter<W, E> {
    fn begin(&mut self, ctx: &PrintContext) -> io::Result<()> {
        if let Some(heading) = ctx.heading {
            let heading = self.paint("1", heading);
            writeln!(self.out, "{heading}")?;
        }
        Ok(())
    }

    fn print_row(&mut self, row: &Row<'_>, _ctx: &PrintContext) -> io::Result<()> {
        match row {
            Row::Parent { href } => {
                writeln!(self.out, "..  Previous Directory  {href}")
            }
            Row::Folder { name, href } => {
                let name = self.paint("34", &format!("{name}/"));
                writeln!(self.out, "{name}  {href}")
            }
            Row::Group { label, count } => {
                let label = self.paint("1", label);
                writeln!(self.out, "\n{label} ({count} items)")
            }
            Row::File {
                record,
                show_folder,
            } => {
                let tag = if is_image(record) { "img" } else { "   " };
                let name = self.paint("32", &record.name);
                write!(
                    self.out,
                    "{tag} {name}  {:>12}  {}  {}",
                    record.size_display,
                    local_time(&record.modified_at),
                    record.url
                )?;
                if *show_folder {
                    write!(self.out, "  (/{})", record.relative_folder)?;
                }
                writeln!(self.out)
            }
        }
    }

    fn finish(&mut self, ctx: &PrintContext, printed_rows: usize) -> io::Result<()> {
        if printed_rows == 0
            && let Some(msg) = ctx.empty_message
        {
            writeln!(self.out, "{msg}")?;
        }

        if self.cfg.show_summary {
            writeln!(self.err, "\n[{}] total: {} files", ctx.kind, ctx.total)?;
        }

        Ok(())
    }
}

impl<W: Write, E: Write> ViewPrinter for JsonPrinter<W, E> {
    fn begin(&mut self, _ctx: &PrintContext) -> io::Result<()> {
        Ok(())
    }

    fn print_row(&mut self, row: &Row<'_>, ctx: &PrintContext) -> io::Result<()> {
        let obj = match row {
            Row::Parent { href } => serde_json::json!({
                "kind": ctx.kind,
                "type": "parent",
                "href": href,
            }),
            Row::Folder { name, href } => serde_json::json!({
                "kind": ctx.kind,
                "type": "folder",
                "name": name,
                "href": href,
            }),
            Row::Group { label, count } => serde_json::json!({
                "kind": ctx.kind,
                "type": "group",
                "label": label,
                "count": count,
            }),
            Row::File { record, .. } => serde_json::json!({
                "kind": ctx.kind,
                "type": "file",
                "image": is_image(record),
                "record": record,
            }),
        };
        writeln!(self.out, "{obj}")
    }

    fn finish(&mut self, ctx: &PrintContext, _printed_rows: usize) -> io::Result<()> {
        if self.cfg.show_summary {
            let obj = serde_json::json!({
                "type": "summary",
                "kind": ctx.kind,
                "total": ctx.total,
            });
            writeln!(self.err, "{obj}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
