//! tftfont CLI - inspect, measure and render embedded TFT bitmap fonts
//!
//! This binary works directly on the C font sources shipped with Arduino
//! and Teensy display libraries, or on a JSON manifest cataloguing them.

use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;

use tftfont_cli::commands;
use tftfont_cli::commands::catalog::CatalogSource;
use tftfont_cli::commands::render::Placement;
use tftfont_cli::commands::{parse_size, FontSource};
use tftfont_core::{FontFormat, MAX_TEXT_SIZE};
use tftfont_render::{Align, CanvasSize, Color, TextStyle};

/// tftfont - Bitmap fonts for embedded TFT displays
#[derive(Parser)]
#[command(name = "tftfont")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Font source selection shared by the font commands.
#[derive(Args)]
struct FontArgs {
    /// Font encoding (gfx, glcd, t3, utft)
    #[arg(short, long)]
    format: FontFormat,

    /// Path to the font source (.h or .c)
    #[arg(long)]
    file: String,

    /// C symbol the font is declared under (e.g. FreeSans9pt7b)
    #[arg(short, long, default_value = "font")]
    name: String,

    /// Scale multiplier for GFX and GLCD fonts
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TEXT_SIZE)))]
    text_size: Option<u32>,
}

impl FontArgs {
    fn source(&self) -> FontSource<'_> {
        FontSource {
            format: self.format,
            file: &self.file,
            name: &self.name,
            text_size: self.text_size,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a font and print its ranges, glyph count and cell sizes
    Inspect {
        #[command(flatten)]
        font: FontArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Measure the bounding box of a string
    Measure {
        #[command(flatten)]
        font: FontArgs,

        /// Text to measure; newlines start new lines
        #[arg(short, long)]
        text: String,

        /// Clip each line against a canvas of this size (WxH)
        #[arg(long, value_parser = parse_size)]
        clip: Option<CanvasSize>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a string to PNG
    Render {
        #[command(flatten)]
        font: FontArgs,

        /// Text to render; newlines need --rect
        #[arg(short, long)]
        text: String,

        /// Output PNG path
        #[arg(short, long)]
        out: String,

        /// Foreground colour (#RRGGBB or #RRGGBBAA)
        #[arg(long, default_value = "#FFFFFF")]
        fg: Color,

        /// Background colour (#RRGGBB or #RRGGBBAA)
        #[arg(long, default_value = "#000000")]
        bg: Color,

        /// Paint the background behind each glyph
        #[arg(long)]
        opaque: bool,

        /// Render into a canvas of this size (WxH) instead of a tight box
        #[arg(long, value_parser = parse_size)]
        rect: Option<CanvasSize>,

        /// Alignment inside --rect (e.g. mid-mid, GSLC_ALIGN_TOP_LEFT)
        #[arg(long, default_value = "mid-mid", requires = "rect")]
        align: Align,

        /// Margin in pixels inside --rect
        #[arg(long, default_value_t = 0, requires = "rect")]
        margin: i32,
    },

    /// Font manifest commands
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}

/// Manifest location shared by the catalog commands.
#[derive(Args)]
struct CatalogArgs {
    /// Path to the JSON font manifest
    #[arg(short, long)]
    manifest: String,

    /// Directory font paths are relative to
    #[arg(short, long, default_value = ".")]
    root: String,

    /// Only show fonts of this platform
    #[arg(short, long)]
    platform: Option<String>,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    json: bool,
}

impl CatalogArgs {
    fn source(&self) -> CatalogSource<'_> {
        CatalogSource {
            manifest: &self.manifest,
            root: &self.root,
            platform: self.platform.as_deref(),
        }
    }
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// List the fonts a manifest registers
    List {
        #[command(flatten)]
        args: CatalogArgs,
    },
    /// Parse every registered font; exits 1 if any fails
    Check {
        #[command(flatten)]
        args: CatalogArgs,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Inspect { font, json } => commands::inspect::run(&font.source(), json),
        Commands::Measure {
            font,
            text,
            clip,
            json,
        } => commands::measure::run(&font.source(), &text, clip, json),
        Commands::Render {
            font,
            text,
            out,
            fg,
            bg,
            opaque,
            rect,
            align,
            margin,
        } => {
            let style = TextStyle::new(fg, bg, opaque);
            let placement = rect.map(|canvas| Placement {
                canvas,
                align,
                margin,
            });
            commands::render::run(&font.source(), &text, &out, &style, placement)
        }
        Commands::Catalog { command } => match command {
            CatalogCommands::List { args } => commands::catalog::list(&args.source(), args.json),
            CatalogCommands::Check { args } => commands::catalog::check(&args.source(), args.json),
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
