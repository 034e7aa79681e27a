use std::{io, path::Path, process::ExitCode};

use anyhow::Result;
use clap::Args;
use fileshelf_fs::{FileRecord, scan};
use fileshelf_views::{SortConfig, group_by_extension};

use crate::{
    commands::{OutputOptions, SortOptions, finish},
    printer::{PrintContext, Row, ViewPrinter},
};

#[derive(Debug, Args)]
pub struct ExtensionsArgs {
    #[command(flatten)]
    pub sort: SortOptions,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: ExtensionsArgs, root: &Path) -> ExitCode {
    finish("extensions", execute(&args, root))
}

fn execute(args: &ExtensionsArgs, root: &Path) -> Result<()> {
    let records = scan(root);

    let mut printer = args.output.make_printer();
    render(&records, args.sort.to_config(), printer.as_mut())?;

    Ok(())
}

pub fn render(
    records: &[FileRecord],
    sort: SortConfig,
    printer: &mut dyn ViewPrinter,
) -> io::Result<()> {
    let groups = group_by_extension(records, sort);

    let ctx = PrintContext {
        kind: "extensions",
        heading: Some("Grouped by Extension"),
        total: records.len(),
        empty_message: Some("No files indexed."),
    };

    printer.begin(&ctx)?;

    let mut rows = 0;
    for group in &groups {
        let label = group.label();
        printer.print_row(
            &Row::Group {
                label: &label,
                count: group.len(),
            },
            &ctx,
        )?;
        rows += 1;

        for record in &group.files {
            let row = Row::File {
                record,
                show_folder: true,
            };
            printer.print_row(&row, &ctx)?;
            rows += 1;
        }
    }

    printer.finish(&ctx, rows)
}
