use std::{io, path::Path, process::ExitCode};

use anyhow::Result;
use clap::Args;
use fileshelf_fs::{FileRecord, scan};
use fileshelf_views::{folder_href, folder_routes};

use crate::{
    commands::{OutputOptions, finish},
    printer::{PrintContext, Row, ViewPrinter},
};

#[derive(Debug, Args)]
pub struct FoldersArgs {
    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: FoldersArgs, root: &Path) -> ExitCode {
    finish("folders", execute(&args, root))
}

fn execute(args: &FoldersArgs, root: &Path) -> Result<()> {
    let records = scan(root);

    let mut printer = args.output.make_printer();
    render(&records, printer.as_mut())?;

    Ok(())
}

pub fn render(records: &[FileRecord], printer: &mut dyn ViewPrinter) -> io::Result<()> {
    let routes = folder_routes(records);

    let ctx = PrintContext {
        kind: "folders",
        heading: None,
        total: records.len(),
        empty_message: Some("No folders."),
    };

    printer.begin(&ctx)?;
    for route in &routes {
        let href = folder_href(route);
        printer.print_row(&Row::Folder { name: route, href: &href }, &ctx)?;
    }
    printer.finish(&ctx, routes.len())
}
