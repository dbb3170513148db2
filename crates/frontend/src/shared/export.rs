//! Export of list rows: CSV for Excel, printable HTML for PDF and print
//!
//! Rendering is pure; only the last step (download or new window) touches
//! the browser.

use contracts::domain::common::MasterRecord;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Blob URLs opened in a new window stay alive this long
const PRINT_URL_LIFETIME_MS: u32 = 60_000;

/// One exported column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportColumn {
    /// Field name passed to `MasterRecord::field_value`
    pub key: &'static str,
    pub header: &'static str,
}

/// Columns of the list table for `T`
pub fn columns_for<T: MasterRecord>() -> Vec<ExportColumn> {
    T::field_metadata()
        .iter()
        .filter(|f| f.ui.visible_in_list)
        .map(|f| ExportColumn {
            key: f.name,
            header: f.ui.label,
        })
        .collect()
}

/// Cell text of every record for the given columns
pub fn rows_for<T: MasterRecord>(records: &[T], columns: &[ExportColumn]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|c| record.field_value(c.key).unwrap_or_default())
                .collect()
        })
        .collect()
}

/// CSV with UTF-8 BOM and `;` separator (what Excel expects for this locale)
pub fn render_csv(columns: &[ExportColumn], rows: &[Vec<String>]) -> String {
    let mut csv = String::from('\u{FEFF}');
    let headers: Vec<String> = columns.iter().map(|c| escape_csv_cell(c.header)).collect();
    csv.push_str(&headers.join(";"));
    csv.push('\n');
    for row in rows {
        let cells: Vec<String> = row.iter().map(|cell| escape_csv_cell(cell)).collect();
        csv.push_str(&cells.join(";"));
        csv.push('\n');
    }
    csv
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Standalone HTML document with one table; prints itself once loaded
pub fn render_html_document(
    document_title: &str,
    heading: &str,
    columns: &[ExportColumn],
    rows: &[Vec<String>],
) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    html.push_str(&format!("<title>{}</title>", escape_html(document_title)));
    html.push_str(
        "<style>\
         body{font-family:sans-serif;font-size:12px;margin:24px}\
         h1{font-size:18px}\
         table{border-collapse:collapse;width:100%}\
         th,td{border:1px solid #999;padding:4px 6px;text-align:left}\
         th{background:#eee}\
         </style>",
    );
    html.push_str("</head><body>");
    html.push_str(&format!("<h1>{}</h1>", escape_html(heading)));
    html.push_str("<table><thead><tr>");
    for column in columns {
        html.push_str(&format!("<th>{}</th>", escape_html(column.header)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html.push_str("<script>window.onload=function(){window.print();};</script>");
    html.push_str("</body></html>");
    html
}

/// Download rows as `{file_name}.csv`
pub fn export_excel(
    file_name: &str,
    columns: &[ExportColumn],
    rows: &[Vec<String>],
) -> Result<(), String> {
    let blob = create_blob(&render_csv(columns, rows), "text/csv;charset=utf-8;")?;
    download_blob(&blob, &format!("{}.csv", file_name))
}

/// Open a print view whose document title is the PDF file name
pub fn export_pdf(
    file_name: &str,
    title: &str,
    columns: &[ExportColumn],
    rows: &[Vec<String>],
) -> Result<(), String> {
    open_print_window(&render_html_document(file_name, title, columns, rows))
}

pub fn print_table(title: &str, columns: &[ExportColumn], rows: &[Vec<String>]) -> Result<(), String> {
    open_print_window(&render_html_document(title, title, columns, rows))
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))
}

fn open_print_window(html: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let blob = create_blob(html, "text/html;charset=utf-8")?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let opened = window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("Failed to open window: {:?}", e))?;
    if opened.is_none() {
        let _ = Url::revoke_object_url(&url);
        return Err("The browser blocked the print window".to_string());
    }

    // The new window loads the blob asynchronously
    spawn_local(async move {
        TimeoutFuture::new(PRINT_URL_LIFETIME_MS).await;
        let _ = Url::revoke_object_url(&url);
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_role::aggregate::Role;

    fn sample() -> (Vec<ExportColumn>, Vec<Vec<String>>) {
        let records = vec![
            Role {
                role_id: Some(1),
                role_name: "Lead; QA".into(),
                role_code: "QA".into(),
                description: "hidden in list".into(),
            },
            Role {
                role_id: Some(2),
                role_name: "Say \"hi\"".into(),
                role_code: "<b>".into(),
                ..Default::default()
            },
        ];
        let columns = columns_for::<Role>();
        let rows = rows_for(&records, &columns);
        (columns, rows)
    }

    #[test]
    fn test_columns_follow_list_visibility() {
        let headers: Vec<_> = columns_for::<Role>().iter().map(|c| c.header).collect();
        assert_eq!(headers, vec!["Role Name", "Role Code"]);
    }

    #[test]
    fn test_csv_has_bom_and_escapes() {
        let (columns, rows) = sample();
        let csv = render_csv(&columns, &rows);
        let expected = "\u{FEFF}Role Name;Role Code\n\"Lead; QA\";QA\n\"Say \"\"hi\"\"\";<b>\n";
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_html_escapes_cells_and_prints_on_load() {
        let (columns, rows) = sample();
        let html = render_html_document("roles", "Roles", &columns, &rows);
        assert!(html.contains("<title>roles</title>"));
        assert!(html.contains("<td>&lt;b&gt;</td>"));
        assert!(html.contains("<td>Say &quot;hi&quot;</td>"));
        assert!(html.contains("window.print()"));
        assert!(!html.contains("hidden in list"));
    }
}
