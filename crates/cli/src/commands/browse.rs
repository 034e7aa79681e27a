use std::{io, path::Path, process::ExitCode};

use anyhow::Result;
use clap::Args;
use fileshelf_fs::{FileRecord, scan};
use fileshelf_views::{
    FolderEntry, FolderListing, SortConfig, breadcrumbs, child_href, list_folder, parent_href,
};
use log::debug;

use crate::{
    commands::{OutputOptions, SortOptions, finish},
    printer::{PrintContext, Row, ViewPrinter},
};

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Folder to show, relative to the root (e.g. docs/2024)
    #[arg(default_value = "")]
    pub folder: String,

    /// Search file names across the whole archive instead
    #[arg(long, short = 's', value_name = "TERM", default_value = "")]
    pub search: String,

    #[command(flatten)]
    pub sort: SortOptions,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: BrowseArgs, root: &Path) -> ExitCode {
    finish("browse", execute(&args, root))
}

fn execute(args: &BrowseArgs, root: &Path) -> Result<()> {
    let records = scan(root);
    debug!("[browse] {} files in index", records.len());

    let mut printer = args.output.make_printer();
    render(
        &records,
        &args.folder,
        &args.search,
        args.sort.to_config(),
        printer.as_mut(),
    )?;

    Ok(())
}

/// Breadcrumb trail for the heading, e.g. `/ > docs > 2024`.
fn heading_for(listing: &FolderListing<'_>) -> String {
    if let Some(term) = &listing.search_term {
        return format!("Search: \"{term}\"");
    }

    std::iter::once("/".to_owned())
        .chain(breadcrumbs(&listing.current).into_iter().map(|c| c.label))
        .collect::<Vec<_>>()
        .join(" > ")
}

pub fn render(
    records: &[FileRecord],
    folder: &str,
    search: &str,
    sort: SortConfig,
    printer: &mut dyn ViewPrinter,
) -> io::Result<()> {
    let listing = list_folder(records, folder, search, sort);
    let heading = heading_for(&listing);
    let empty_message = listing.empty_message();

    let ctx = PrintContext {
        kind: "browse",
        heading: Some(heading.as_str()),
        total: listing.files().count(),
        empty_message: Some(empty_message.as_str()),
    };

    printer.begin(&ctx)?;

    if !listing.is_searching()
        && let Some(href) = parent_href(&listing.current)
    {
        printer.print_row(&Row::Parent { href: &href }, &ctx)?;
    }

    for entry in &listing.entries {
        match entry {
            FolderEntry::Folder(name) => {
                let href = child_href(&listing.current, name);
                printer.print_row(&Row::Folder { name, href: &href }, &ctx)?;
            }
            FolderEntry::File(record) => {
                let row = Row::File {
                    record,
                    show_folder: listing.is_searching(),
                };
                printer.print_row(&row, &ctx)?;
            }
        }
    }

    printer.finish(&ctx, listing.entries.len())
}
