//! XHTML rendering of a paginated report.

use std::fs;
use std::io::Write;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tecgas_model::FormModel;

use crate::error::{ReportError, Result};
use crate::layout::{ReportBlock, ReportDocument, paginate};
use crate::options::ExportOptions;

const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
const DEFAULT_TITLE: &str = "Gas Plan";

/// Render the document as a standalone XHTML page set.
pub fn render_report(document: &ReportDocument) -> Result<String> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_document(&mut xml, document).map_err(ReportError::Markup)?;
    Ok(String::from_utf8(xml.into_inner())?)
}

/// Render and write to `path`, creating parent directories.
pub fn write_report(document: &ReportDocument, path: &Path) -> Result<()> {
    let markup = render_report(document)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, markup).map_err(|source| ReportError::Io {
        operation: "write",
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(pages = document.pages.len(), "Exported plan to {}", path.display());
    Ok(())
}

/// Paginate the form and write the export in one step.
pub fn export_plan(form: &FormModel, options: &ExportOptions, path: &Path) -> Result<()> {
    let document = paginate(form, options)?;
    write_report(&document, path)
}

fn write_document<W: Write>(xml: &mut Writer<W>, document: &ReportDocument) -> std::io::Result<()> {
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut html = BytesStart::new("html");
    html.push_attribute(("xmlns", XHTML_NS));
    html.push_attribute(("lang", "en"));
    xml.write_event(Event::Start(html))?;

    xml.write_event(Event::Start(BytesStart::new("head")))?;
    let mut meta = BytesStart::new("meta");
    meta.push_attribute(("charset", "UTF-8"));
    xml.write_event(Event::Empty(meta))?;
    write_text_element(
        xml,
        "title",
        document.title.as_deref().unwrap_or(DEFAULT_TITLE),
    )?;
    write_text_element(xml, "style", &stylesheet(document))?;
    xml.write_event(Event::End(BytesEnd::new("head")))?;

    xml.write_event(Event::Start(BytesStart::new("body")))?;
    for (index, page) in document.pages.iter().enumerate() {
        let mut div = BytesStart::new("div");
        div.push_attribute(("class", "page"));
        xml.write_event(Event::Start(div))?;

        if index == 0 {
            if let Some(title) = &document.title {
                write_text_element(xml, "h1", title)?;
            }
            if let Some(generated_at) = document.generated_at {
                let mut p = BytesStart::new("p");
                p.push_attribute(("class", "generated"));
                xml.write_event(Event::Start(p))?;
                let stamp = generated_at.format("Generated %Y-%m-%d %H:%M").to_string();
                xml.write_event(Event::Text(BytesText::new(&stamp)))?;
                xml.write_event(Event::End(BytesEnd::new("p")))?;
            }
        }

        for block in &page.blocks {
            write_block(xml, block)?;
        }
        xml.write_event(Event::End(BytesEnd::new("div")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("body")))?;
    xml.write_event(Event::End(BytesEnd::new("html")))?;
    Ok(())
}

fn write_block<W: Write>(xml: &mut Writer<W>, block: &ReportBlock) -> std::io::Result<()> {
    let heading = if block.continued {
        format!("{} (continued)", block.heading)
    } else {
        block.heading.clone()
    };
    write_text_element(xml, "h2", &heading)?;

    xml.write_event(Event::Start(BytesStart::new("table")))?;
    xml.write_event(Event::Start(BytesStart::new("colgroup")))?;
    let width = format!("width: {:.2}pt", block.column_width_pt);
    for _ in 0..block.column_count() {
        let mut col = BytesStart::new("col");
        col.push_attribute(("style", width.as_str()));
        xml.write_event(Event::Empty(col))?;
    }
    xml.write_event(Event::End(BytesEnd::new("colgroup")))?;

    xml.write_event(Event::Start(BytesStart::new("thead")))?;
    write_row(xml, "th", &block.header)?;
    xml.write_event(Event::End(BytesEnd::new("thead")))?;

    xml.write_event(Event::Start(BytesStart::new("tbody")))?;
    for row in &block.rows {
        write_row(xml, "td", row)?;
    }
    xml.write_event(Event::End(BytesEnd::new("tbody")))?;
    xml.write_event(Event::End(BytesEnd::new("table")))?;
    Ok(())
}

fn write_row<W: Write>(xml: &mut Writer<W>, cell: &str, values: &[String]) -> std::io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new("tr")))?;
    for value in values {
        write_text_element(xml, cell, value)?;
    }
    xml.write_event(Event::End(BytesEnd::new("tr")))?;
    Ok(())
}

fn write_text_element<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    text: &str,
) -> std::io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn stylesheet(document: &ReportDocument) -> String {
    let font = document.font_size_pt;
    let margin = document.margin_pt;
    let size = document.page_size.css_size();
    format!(
        "@page {{ size: {size}; margin: {margin}pt; }}\n\
         body {{ font-family: Helvetica, Arial, sans-serif; margin: 0; }}\n\
         .page {{ page-break-after: always; }}\n\
         .page:last-child {{ page-break-after: auto; }}\n\
         h1 {{ font-size: 16pt; margin: 0 0 6pt 0; }}\n\
         h2 {{ font-size: 12pt; margin: 6pt 0 2pt 0; }}\n\
         .generated {{ font-size: {font}pt; margin: 0 0 6pt 0; }}\n\
         table {{ border-collapse: collapse; table-layout: fixed; margin-bottom: 6pt; }}\n\
         th, td {{ border: 0.5pt solid black; padding: 1pt; text-align: center; font-size: {font}pt; }}\n\
         th {{ background-color: grey; color: whitesmoke; }}\n"
    )
}
