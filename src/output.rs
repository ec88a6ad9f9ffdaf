use colored::*;

use crate::color::Hsb;
use crate::library::IndexEntry;
use crate::palette::{Palette, Role, ShadeKey};

/// Width of one swatch column in the terminal table
const CELL_WIDTH: usize = 10;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_separator(columns: usize, prefix_width: usize) {
    println!("{}", "-".repeat(prefix_width + columns * CELL_WIDTH));
}

pub(crate) fn print_header(palette: &Palette, prefix: &str) {
    print!("{}", prefix);
    for role in palette.roles() {
        print!("{}", style_label(&format!("{:>width$}", role.name(), width = CELL_WIDTH)));
    }
    println!();
}

/// Role x shade table, each hex on its own color with a legible foreground
pub(crate) fn print_palette(palette: &Palette) {
    print_header(palette, "      ");
    print_separator(palette.len(), 6);
    for key in ShadeKey::ALL {
        print!("{:<6}", key.to_string());
        for ramp in palette.ramps() {
            let swatch = ramp.shade(key).swatch();
            let cell = format!(" {:^width$}", swatch.hex, width = CELL_WIDTH - 1);
            print!(
                "{}",
                cell.truecolor(swatch.text.r, swatch.text.g, swatch.text.b)
                    .on_truecolor(swatch.rgb.r, swatch.rgb.g, swatch.rgb.b)
            );
        }
        println!();
    }
}

pub(crate) fn print_seeds(seeds: &[(Role, &str, Hsb)]) {
    println!("Seeds:");
    for (role, hex, hsb) in seeds {
        println!("  {:>9}: {} HSB {}", role.name(), hex, hsb);
    }
    println!();
}

pub(crate) fn print_index(entries: &[IndexEntry]) {
    println!(
        "{:<24} {:<8} {:<8} {:<8} {:>5}",
        "NAME", "PRIMARY", "SECOND", "THIRD", "FILES"
    );
    println!("{}", "-".repeat(57));
    for entry in entries {
        println!(
            "{:<24} {:<8} {:<8} {:<8} {:>5}",
            style_label(&entry.name),
            entry.primary,
            entry.secondary.as_deref().unwrap_or("-"),
            entry.tertiary.as_deref().unwrap_or("-"),
            entry.files.len()
        );
    }
}

pub(crate) fn print_legend() {
    println!("Weights: 100 (lightest) to 900 (darkest); 500 is the seed color.");
    println!("Neutral: primary hue at 15% saturation, 70% brightness.");
    println!("Green/Orange/Red/Blue: fixed hues at the primary's saturation -10 and brightness -2.");
}
