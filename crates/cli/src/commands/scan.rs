use std::{io, path::Path, process::ExitCode};

use anyhow::Result;
use clap::Args;
use fileshelf_fs::{FileRecord, ScanOptions, scan_with};

use crate::{
    commands::{OutputOptions, finish},
    printer::{PrintContext, Row, ViewPrinter},
};

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Do not descend more than N folder levels below the root
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: ScanArgs, root: &Path) -> ExitCode {
    finish("scan", execute(&args, root))
}

fn execute(args: &ScanArgs, root: &Path) -> Result<()> {
    let opts = ScanOptions {
        max_depth: args.max_depth,
        ..ScanOptions::default()
    };
    let records = scan_with(root, &opts);

    let mut printer = args.output.make_printer();
    render(&records, printer.as_mut())?;

    Ok(())
}

/// Print the whole index in index order.
pub fn render(records: &[FileRecord], printer: &mut dyn ViewPrinter) -> io::Result<()> {
    let ctx = PrintContext {
        kind: "scan",
        heading: None,
        total: records.len(),
        empty_message: Some("No files indexed."),
    };

    printer.begin(&ctx)?;
    for record in records {
        let row = Row::File {
            record,
            show_folder: true,
        };
        printer.print_row(&row, &ctx)?;
    }
    printer.finish(&ctx, records.len())
}
