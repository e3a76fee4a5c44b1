//! Integration tests for plan export.

use tempfile::tempdir;

use tecgas_core::GasPlan;
use tecgas_model::gas_planning_sheet;
use tecgas_report::{ExportOptions, ReportDocument, export_plan, paginate, render_report};

fn outline(document: &ReportDocument) -> String {
    document
        .pages
        .iter()
        .enumerate()
        .map(|(index, page)| {
            let blocks: Vec<String> = page
                .blocks
                .iter()
                .map(|block| {
                    let suffix = if block.continued { " (continued)" } else { "" };
                    format!("{}{} x{}", block.heading, suffix, block.rows.len())
                })
                .collect();
            format!("page {}: {}", index + 1, blocks.join(" | "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn long_sections_split_across_pages() {
    // Leaves a 12pt x 192pt printable area on a Letter page.
    let options = ExportOptions {
        margin_pt: 300.0,
        ..ExportOptions::default()
    };
    let document = paginate(&gas_planning_sheet(), &options).expect("paginate");

    insta::assert_snapshot!(outline(&document), @r"
    page 1: General Info x6 | Gas Reserve / Rock Bottom x3
    page 2: Gas Reserve (Emergency) x3 | Bottom Gas Requirements x1 | Deco Stops x3
    page 3: Deco Stops (continued) x3 | Deco Gas Requirements x7
    ");

    let first = &document.pages[1].blocks[2];
    let rest = &document.pages[2].blocks[0];
    assert_eq!(rest.header, first.header);
    assert_eq!(rest.column_width_pt, first.column_width_pt);
    assert_eq!(rest.rows[0], vec!["40", ""]);
}

#[test]
fn column_widths_split_printable_width_evenly() {
    let options = ExportOptions::default();
    let (width, _) = options.content_area_pt();
    let document = paginate(&gas_planning_sheet(), &options).expect("paginate");
    for block in document.pages.iter().flat_map(|page| &page.blocks) {
        let total = block.column_width_pt * block.column_count() as f64;
        assert!((total - width).abs() < 1e-9, "{}", block.heading);
        for row in &block.rows {
            assert_eq!(row.len(), block.column_count(), "{}", block.heading);
        }
    }
}

#[test]
fn export_writes_calculated_values() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("out").join("plan.xhtml");

    let mut plan = GasPlan::new().expect("plan");
    plan.edit_path("General Info/Max Depth", "120").expect("edit");
    plan.edit_path("Deco Stops/1/Time", "10").expect("edit");
    export_plan(plan.form(), &ExportOptions::default(), &path).expect("export");

    let markup = std::fs::read_to_string(&path).expect("read");
    assert!(markup.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(markup.contains("<td>4.64</td>"));
    assert!(markup.contains("<td>18.60</td>"));

    let document = paginate(plan.form(), &ExportOptions::default()).expect("paginate");
    assert_eq!(render_report(&document).expect("render"), markup);
}
