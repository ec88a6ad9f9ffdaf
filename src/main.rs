mod color;
mod export;
mod library;
mod mode;
mod output;
mod palette;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use export::ExportFormat;
use mode::{Seeds, run_delete, run_generate, run_list, run_preview};
use output::print_error;

const DEFAULT_OUT_DIR: &str = "palettes";

#[derive(Parser)]
#[command(
    name = "palettegen",
    version,
    about = "Brand color palette generator with shade ramps and supporting colors",
    after_help = "Examples:
  palettegen preview '#3366CC'                          Preview ramps in the terminal
  palettegen preview 3366cc ff68a8 48f89c               Primary, secondary and tertiary seeds
  palettegen generate Acme '#3366CC'                    Write all formats to palettes/acme/
  palettegen generate Acme 3366cc -f css,json -o out    Selected formats, custom directory
  palettegen list                                       Palettes recorded in palettes/
  palettegen delete Acme                                Remove a palette and its files"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Suppress explanations (show data only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print the palette as colored swatches
    Preview {
        #[command(flatten)]
        seeds: SeedArgs,
    },

    /// Generate palette files and record them in the index
    Generate {
        /// Palette name (also used for the directory and file names)
        name: String,

        #[command(flatten)]
        seeds: SeedArgs,

        /// Output root directory
        #[arg(short, long, default_value = DEFAULT_OUT_DIR, value_name = "DIR")]
        out: PathBuf,

        /// Formats to write (default: all)
        #[arg(short, long, value_delimiter = ',', value_name = "FORMAT")]
        format: Vec<ExportFormat>,
    },

    /// List recorded palettes
    List {
        /// Output root directory
        #[arg(short, long, default_value = DEFAULT_OUT_DIR, value_name = "DIR")]
        out: PathBuf,
    },

    /// Delete a recorded palette and its files
    Delete {
        /// Palette name or slug
        name: String,

        /// Output root directory
        #[arg(short, long, default_value = DEFAULT_OUT_DIR, value_name = "DIR")]
        out: PathBuf,
    },
}

#[derive(clap::Args)]
struct SeedArgs {
    /// Primary seed color, e.g. "#3366CC" or 3366cc
    primary: String,

    /// Secondary seed color
    secondary: Option<String>,

    /// Tertiary seed color
    tertiary: Option<String>,
}

impl From<SeedArgs> for Seeds {
    fn from(args: SeedArgs) -> Self {
        Seeds {
            primary: args.primary,
            secondary: args.secondary,
            tertiary: args.tertiary,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn exit_with_error(msg: &str) -> ! {
    print_error(msg);
    std::process::exit(1);
}

/// Output parent must exist; the output directory itself is created on demand
fn validate_out_dir(out: &Path) {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        exit_with_error(&format!("Directory does not exist: {}", parent.display()));
    }
    if out.exists() && !out.is_dir() {
        exit_with_error(&format!("Not a directory: {}", out.display()));
    }
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    init_logging(args.verbose);

    let result = match args.command {
        Command::Preview { seeds } => run_preview(&seeds.into(), args.quiet),
        Command::Generate {
            name,
            seeds,
            out,
            format,
        } => {
            if name.trim().is_empty() {
                exit_with_error("Palette name must not be empty");
            }
            validate_out_dir(&out);

            // Canonical order, no duplicates
            let formats: Vec<ExportFormat> = ExportFormat::ALL
                .into_iter()
                .filter(|f| format.is_empty() || format.contains(f))
                .collect();

            run_generate(&name, &seeds.into(), &out, &formats, args.quiet)
        }
        Command::List { out } => run_list(&out, args.quiet),
        Command::Delete { name, out } => run_delete(&name, &out, args.quiet),
    };

    if let Err(e) = result {
        exit_with_error(&e);
    }
}
