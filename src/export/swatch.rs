//! Swatch sheet image (one column per role, one swatch per shade)

use std::path::Path;

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Title},
    datatype::DataPointItem,
    element::{
        AxisLabel, AxisType, Color, ItemStyle, Label, LabelPosition, LineStyle, SplitLine,
        TextStyle,
    },
    renderer::ImageFormat,
    series::Bar,
};

use super::ExportError;
use crate::color::Rgb;
use crate::palette::{Palette, ShadeKey};

/// A4 landscape at 300 dpi
const SHEET_WIDTH: u32 = 3508;
const SHEET_HEIGHT: u32 = 2480;

const COLOR_BACKGROUND: &str = "#FFFFFF";
const COLOR_TEXT: &str = "#000000";
/// Gap between neighbouring swatches
const COLOR_GAP: &str = "#FFFFFF";

const STACK: &str = "swatches";

/// Build the sheet as a stacked bar chart.
///
/// Each category is a role; each shade contributes one unit-height bar,
/// 900 at the bottom and 100 on top. Label color can only be set per
/// series, so every shade gets one series per text color, and swatches that
/// belong to the other text color are zero-height and unnamed.
pub(super) fn build_sheet(palette: &Palette, title: &str) -> Chart {
    let role_names: Vec<String> = palette.roles().map(|r| r.name().to_string()).collect();

    // Grid spans ~96% of the width
    let column_width = (f64::from(SHEET_WIDTH) * 0.96) / palette.len().max(1) as f64;
    let bar_width = column_width * 0.96;

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(title)
                .left("center")
                .top("1%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(48)),
        )
        .grid(
            Grid::new()
                .left("2%")
                .right("2%")
                .bottom("4%")
                .top("7%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(role_names)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(32)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .max(ShadeKey::ALL.len() as i32)
                .axis_label(AxisLabel::new().show(false))
                .split_line(SplitLine::new().line_style(LineStyle::new().width(0))),
        );

    for row in (0..ShadeKey::ALL.len()).rev() {
        for text in [Rgb::BLACK, Rgb::WHITE] {
            let data: Vec<DataPointItem> = palette
                .ramps()
                .iter()
                .map(|ramp| {
                    let swatch = ramp.shades()[row].swatch();
                    if swatch.text == text {
                        DataPointItem::new(1)
                            .name(swatch.label())
                            .item_style(
                                ItemStyle::new()
                                    .color(swatch.hex.as_str())
                                    .border_color(COLOR_GAP)
                                    .border_width(4),
                            )
                    } else {
                        DataPointItem::new(0).name("")
                    }
                })
                .collect();

            let text_color = text.to_hex();
            chart = chart.series(
                Bar::new()
                    .name(format!("{} {}", ShadeKey::ALL[row], text_color))
                    .stack(STACK)
                    .bar_width(bar_width)
                    .data(data)
                    .label(
                        Label::new()
                            .show(true)
                            .position(LabelPosition::Inside)
                            .color(text_color.as_str())
                            .font_size(26)
                            .formatter("{b}"),
                    ),
            );
        }
    }

    chart
}

/// Render the swatch sheet to a PNG file
pub(super) fn render_swatch_sheet(
    palette: &Palette,
    title: &str,
    path: &Path,
) -> Result<(), ExportError> {
    let chart = build_sheet(palette, title);
    let output_path = path.to_string_lossy();

    let mut renderer = ImageRenderer::new(SHEET_WIDTH, SHEET_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, &*output_path)
        .map_err(|e| ExportError::Image(e.to_string()))?;

    Ok(())
}
