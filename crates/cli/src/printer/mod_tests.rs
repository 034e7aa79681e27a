use super::*;

use std::time::{Duration, UNIX_EPOCH};

fn cfg(show_summary: bool) -> PrinterConfig {
    PrinterConfig {
        format: OutputFormat::Human,
        color: ColorChoice::Never,
        show_summary,
    }
}

fn sample(web_path: &str) -> FileRecord {
    FileRecord::new(
        web_path.to_owned(),
        1536,
        Some(UNIX_EPOCH + Duration::from_secs(1_714_558_830)),
        "/files",
    )
}

fn ctx<'a>(heading: Option<&'a str>, total: usize, empty: Option<&'a str>) -> PrintContext<'a> {
    PrintContext {
        kind: "browse",
        heading,
        total,
        empty_message: empty,
    }
}

#[test]
fn human_printer_renders_rows() {
    let rec = sample("docs/photo.png");
    let ctx = ctx(Some("/ > docs"), 1, None);
    let mut out = Vec::new();
    let mut err = Vec::new();

    {
        let mut printer = HumanPrinter::new(&mut out, &mut err, cfg(true));
        printer.begin(&ctx).unwrap();
        printer
            .print_row(&Row::Parent { href: "/" }, &ctx)
            .unwrap();
        printer
            .print_row(
                &Row::Folder {
                    name: "2024",
                    href: "/folder/docs/2024",
                },
                &ctx,
            )
            .unwrap();
        printer
            .print_row(
                &Row::File {
                    record: &rec,
                    show_folder: true,
                },
                &ctx,
            )
            .unwrap();
        printer.finish(&ctx, 3).unwrap();
    }

    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "/ > docs");
    assert_eq!(lines[1], "..  Previous Directory  /");
    assert_eq!(lines[2], "2024/  /folder/docs/2024");
    assert!(lines[3].starts_with("img photo.png"), "got {:?}", lines[3]);
    assert!(lines[3].contains("1.50 KB"));
    assert!(lines[3].contains("/files/docs/photo.png"));
    assert!(lines[3].ends_with("(/docs)"));
    assert!(!out.contains('\x1b'), "no color codes expected");

    let err = String::from_utf8(err).unwrap();
    assert!(err.contains("[browse] total: 1 files"));
}

#[test]
fn human_printer_prints_empty_message_without_rows() {
    let ctx = ctx(None, 0, Some("This folder is empty."));
    let mut out = Vec::new();
    let mut err = Vec::new();

    {
        let mut printer = HumanPrinter::new(&mut out, &mut err, cfg(false));
        printer.begin(&ctx).unwrap();
        printer.finish(&ctx, 0).unwrap();
    }

    assert_eq!(String::from_utf8(out).unwrap(), "This folder is empty.\n");
    assert!(err.is_empty(), "summary suppressed");
}

#[test]
fn human_printer_colors_when_forced() {
    let ctx = ctx(None, 0, None);
    let mut out = Vec::new();
    let config = PrinterConfig {
        color: ColorChoice::Always,
        ..cfg(false)
    };

    {
        let mut printer = HumanPrinter::new(&mut out, io::sink(), config);
        printer
            .print_row(
                &Row::Folder {
                    name: "docs",
                    href: "/folder/docs",
                },
                &ctx,
            )
            .unwrap();
    }

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("\x1b[34mdocs/\x1b[0m"));
}

#[test]
fn group_rows_show_label_and_count() {
    let ctx = ctx(None, 2, None);
    let mut out = Vec::new();

    {
        let mut printer = HumanPrinter::new(&mut out, io::sink(), cfg(false));
        printer
            .print_row(
                &Row::Group {
                    label: ".MD FILES",
                    count: 2,
                },
                &ctx,
            )
            .unwrap();
    }

    assert_eq!(String::from_utf8(out).unwrap(), "\n.MD FILES (2 items)\n");
}

#[test]
fn json_printer_emits_ndjson_rows_and_summary() {
    let rec = sample("a.txt");
    let ctx = ctx(None, 1, None);
    let mut out = Vec::new();
    let mut err = Vec::new();

    {
        let mut printer = JsonPrinter::new(&mut out, &mut err, cfg(true));
        printer.begin(&ctx).unwrap();
        printer
            .print_row(
                &Row::File {
                    record: &rec,
                    show_folder: false,
                },
                &ctx,
            )
            .unwrap();
        printer.finish(&ctx, 1).unwrap();
    }

    let out = String::from_utf8(out).unwrap();
    let line: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(line["type"], "file");
    assert_eq!(line["image"], false);
    assert_eq!(line["record"]["id"], "a.txt");
    assert_eq!(line["record"]["sizeDisplay"], "1.50 KB");
    assert_eq!(line["record"]["relativeFolder"], "");

    let summary: serde_json::Value =
        serde_json::from_str(String::from_utf8(err).unwrap().trim()).unwrap();
    assert_eq!(summary["type"], "summary");
    assert_eq!(summary["total"], 1);
}

#[test]
fn local_time_falls_back_to_raw_value() {
    assert_eq!(local_time("not a date"), "not a date");
    assert_eq!(local_time("2024-05-01T10:20:30.000Z").len(), 19);
}
