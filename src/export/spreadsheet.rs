//! SpreadsheetML 2003 workbook export
//!
//! Plain XML, so no zip container is involved. Excel and LibreOffice open it
//! as a regular workbook: role per column, shade per row, each cell filled
//! with its swatch.

use crate::color::Rgb;
use crate::palette::{Palette, ShadeKey};

/// 30 characters at the default font
const COLUMN_WIDTH_PT: u32 = 165;
const ROW_HEIGHT_PT: u32 = 100;

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            _ => out.push(c),
        }
    }
    out
}

fn excel_color(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

fn style_id(column: usize, row: usize) -> String {
    format!("c{}r{}", column, row)
}

pub(super) fn render(palette: &Palette) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<?mso-application progid=\"Excel.Sheet\"?>\n");
    out.push_str(
        "<Workbook xmlns=\"urn:schemas-microsoft-com:office:spreadsheet\" \
         xmlns:ss=\"urn:schemas-microsoft-com:office:spreadsheet\">\n",
    );

    // One style per swatch: fill and legible font color
    out.push_str(" <Styles>\n");
    out.push_str("  <Style ss:ID=\"header\"><Font ss:Bold=\"1\"/><Alignment ss:Horizontal=\"Center\"/></Style>\n");
    for (column, ramp) in palette.ramps().iter().enumerate() {
        for (row, shade) in ramp.shades().iter().enumerate() {
            let swatch = shade.swatch();
            out.push_str(&format!(
                "  <Style ss:ID=\"{}\">\
                 <Alignment ss:Horizontal=\"Center\" ss:Vertical=\"Center\" ss:WrapText=\"1\"/>\
                 <Font ss:Color=\"{}\"/>\
                 <Interior ss:Color=\"{}\" ss:Pattern=\"Solid\"/>\
                 </Style>\n",
                style_id(column, row),
                excel_color(swatch.text),
                swatch.hex.to_uppercase()
            ));
        }
    }
    out.push_str(" </Styles>\n");

    out.push_str(" <Worksheet ss:Name=\"Color Palette\">\n");
    out.push_str("  <Table>\n");
    // Column A stays empty
    out.push_str(&format!(
        "   <Column ss:Index=\"2\" ss:Width=\"{}\" ss:Span=\"{}\"/>\n",
        COLUMN_WIDTH_PT,
        palette.len().saturating_sub(1)
    ));

    out.push_str("   <Row>\n");
    for (column, role) in palette.roles().enumerate() {
        let index = if column == 0 { " ss:Index=\"2\"" } else { "" };
        out.push_str(&format!(
            "    <Cell{} ss:StyleID=\"header\"><Data ss:Type=\"String\">{}</Data></Cell>\n",
            index,
            escape_xml(role.name())
        ));
    }
    out.push_str("   </Row>\n");

    for row in 0..ShadeKey::ALL.len() {
        out.push_str(&format!("   <Row ss:Height=\"{}\">\n", ROW_HEIGHT_PT));
        for (column, ramp) in palette.ramps().iter().enumerate() {
            let index = if column == 0 { " ss:Index=\"2\"" } else { "" };
            let swatch = ramp.shades()[row].swatch();
            out.push_str(&format!(
                "    <Cell{} ss:StyleID=\"{}\"><Data ss:Type=\"String\">{}</Data></Cell>\n",
                index,
                style_id(column, row),
                escape_xml(&swatch.label())
            ));
        }
        out.push_str("   </Row>\n");
    }

    out.push_str("  </Table>\n");
    out.push_str(" </Worksheet>\n");
    out.push_str("</Workbook>\n");
    out
}
