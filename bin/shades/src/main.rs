//! Command line front end for tonal.
//!
//! Subcommands:
//! - `shades <HEX>...`: print shade lists as text, CSS or a JSON theme
//! - `gradient <FROM> <TO>`: write a PNG with one blend band per color space
//! - `inspect <HEX>`: print a color in every space

mod error;

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use image::{Rgb, RgbImage};
use tonal::{
    export,
    shades::{Distribution, NamedShadeList, ShadeList, ShadeOptions},
    Color, Component, Space,
};

#[derive(Parser)]
#[command(name = "tonal-shades", about = "Color shades, gradients and conversions")]
struct Cli {
    /// Log debug output, overriding RUST_LOG.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Css,
    Theme,
}

#[derive(Subcommand)]
enum Command {
    /// Print the shades of one or more base colors.
    Shades {
        /// Base colors as #RGB or #RRGGBB.
        #[arg(required = true)]
        colors: Vec<Color>,

        /// Number of shades per color.
        #[arg(short, long, default_value_t = ShadeOptions::default().count)]
        count: i32,

        /// How shade lightnesses are spread (even, enforced, predefined).
        #[arg(short, long, default_value_t = Distribution::default())]
        distribution: Distribution,

        /// Lowest shade lightness, 1/(count+1) when not given.
        #[arg(long)]
        min: Option<Component>,

        /// Highest shade lightness, count/(count+1) when not given.
        #[arg(long)]
        max: Option<Component>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Name of each list, in the order of the colors. Unnamed lists are
        /// called color-1, color-2 and so on.
        #[arg(short, long = "name")]
        names: Vec<String>,
    },
    /// Write a PNG with one horizontal blend band per color space.
    Gradient {
        /// Left end of the blend.
        from: Color,

        /// Right end of the blend.
        to: Color,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 1000)]
        width: u32,

        /// Height of each band in pixels.
        #[arg(short = 'H', long, default_value_t = 60)]
        band_height: u32,

        /// Output file path.
        #[arg(short, long, default_value = "gradient.png")]
        output: PathBuf,
    },
    /// Print a color in every space and its contrast against white and black.
    Inspect {
        /// The color as #RGB or #RRGGBB.
        color: Color,
    },
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn shades(
    colors: Vec<Color>,
    options: &ShadeOptions,
    format: Format,
    names: Vec<String>,
) -> Result<String, CliError> {
    if names.len() > colors.len() {
        log::warn!(
            "{} names given for {} colors, ignoring the rest",
            names.len(),
            colors.len()
        );
    }

    let mut names = names.into_iter();
    let lists = colors
        .into_iter()
        .enumerate()
        .map(|(i, color)| {
            let name = names.next().unwrap_or_else(|| format!("color-{}", i + 1));
            Ok(NamedShadeList::new(name, ShadeList::with_options(color, options)?))
        })
        .collect::<Result<Vec<_>, CliError>>()?;

    Ok(match format {
        Format::Text => export::text(&lists),
        Format::Css => export::css(&lists),
        Format::Theme => export::theme(&lists)?,
    })
}

fn gradient(from: Color, to: Color, width: u32, band_height: u32) -> RgbImage {
    let bands = Space::ALL.len() as u32;
    let mut img = RgbImage::new(width, bands * band_height);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let t = x as Component / (width.max(2) - 1) as Component;
        let space = Space::ALL[(y / band_height) as usize];
        let (red, green, blue) = from.blend(&to, t, space).clamped().rgb255();
        *pixel = Rgb([red, green, blue]);
    }

    img
}

fn inspect(color: Color) -> String {
    let mut out = format!("{color}\n");
    for space in Space::ALL {
        let c = color.components_in(space);
        out.push_str(&format!(
            "{:<12} {:>10.6} {:>10.6} {:>10.6}\n",
            space.name(),
            c.0,
            c.1,
            c.2
        ));
    }
    out.push_str(&format!(
        "contrast     white {:.1}  black {:.1}\n",
        color.contrast_ratio(&Color::WHITE),
        color.contrast_ratio(&Color::BLACK)
    ));
    out
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Shades {
            colors,
            count,
            distribution,
            min,
            max,
            format,
            names,
        } => {
            let options = ShadeOptions {
                count,
                distribution,
                min,
                max,
            };
            let out = shades(colors, &options, format, names)?;
            std::io::stdout().write_all(out.as_bytes())?;
        }
        Command::Gradient {
            from,
            to,
            width,
            band_height,
            output,
        } => {
            if width == 0 || band_height == 0 {
                return Err(CliError::Io(format!(
                    "can not write a {width}x{band_height} band image"
                )));
            }
            gradient(from, to, width, band_height).save(&output)?;
            eprintln!("{from} -> {to} written to {}", output.display());
        }
        Command::Inspect { color } => {
            print!("{}", inspect(color));
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(e.exit_code());
    }
}
