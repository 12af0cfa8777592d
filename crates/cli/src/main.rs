//! U-Cuboid command-line driver

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use u_cuboid_cli::{demo_samples, CuboidReport};
use u_cuboid_core::{sort_by_volume, Cuboid, ParseOptions, Unit};

#[derive(Parser)]
#[command(name = "cuboid")]
#[command(about = "Build, parse, stack and compress rectangular boxes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Construct a cuboid from edge lengths (omitted edges default to 10 cm)
    Show {
        /// Edge a
        #[arg(allow_negative_numbers = true)]
        a: Option<f64>,

        /// Edge b
        #[arg(allow_negative_numbers = true)]
        b: Option<f64>,

        /// Edge c
        #[arg(allow_negative_numbers = true)]
        c: Option<f64>,

        /// Unit the edges are given in
        #[arg(short, long, value_enum, default_value = "m")]
        unit: UnitArg,

        /// Unit used for output
        #[arg(short, long, value_enum, default_value = "m")]
        format: UnitArg,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a cuboid such as "1.000 m × 2.000 m × 3.000 m"
    Parse {
        /// Text to parse
        text: String,

        /// Treat malformed numbers as zero instead of failing
        #[arg(long)]
        lenient: bool,

        /// Unit used for output
        #[arg(short, long, value_enum, default_value = "m")]
        format: UnitArg,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Stack two cuboids along their shortest edges
    Combine {
        /// First cuboid
        first: String,

        /// Second cuboid
        second: String,

        /// Unit used for output
        #[arg(short, long, value_enum, default_value = "m")]
        format: UnitArg,
    },

    /// Reduce a cuboid to the cube of equal volume
    Compress {
        /// Cuboid to compress
        text: String,

        /// Unit used for output
        #[arg(short, long, value_enum, default_value = "m")]
        format: UnitArg,
    },

    /// Print a sample collection before and after sorting by size
    Demo,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    /// Meters
    #[value(name = "m")]
    Meter,
    /// Centimeters
    #[value(name = "cm")]
    Centimeter,
    /// Millimeters
    #[value(name = "mm")]
    Millimeter,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Meter => Unit::Meter,
            UnitArg::Centimeter => Unit::Centimeter,
            UnitArg::Millimeter => Unit::Millimeter,
        }
    }
}

fn print_report(cuboid: &Cuboid, unit: Unit, json: bool) -> anyhow::Result<()> {
    let report = CuboidReport::new(cuboid, unit);
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}

fn parse_arg(text: &str) -> anyhow::Result<Cuboid> {
    Cuboid::parse(text).with_context(|| format!("Failed to parse cuboid {:?}", text))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            a,
            b,
            c,
            unit,
            format,
            json,
        } => {
            let cuboid = Cuboid::new(a, b, c, unit.into())?;
            print_report(&cuboid, format.into(), json)?;
        }

        Commands::Parse {
            text,
            lenient,
            format,
            json,
        } => {
            let options = ParseOptions::new().with_lenient_numbers(lenient);
            let cuboid = Cuboid::parse_with(&text, &options)
                .with_context(|| format!("Failed to parse cuboid {:?}", text))?;
            print_report(&cuboid, format.into(), json)?;
        }

        Commands::Combine {
            first,
            second,
            format,
        } => {
            let first = parse_arg(&first)?;
            let second = parse_arg(&second)?;
            let combined = first.combine(&second)?;
            print_report(&combined, format.into(), false)?;
        }

        Commands::Compress { text, format } => {
            let cuboid = parse_arg(&text)?;
            let cube = cuboid.compress()?;
            print_report(&cube, format.into(), false)?;
        }

        Commands::Demo => {
            let mut samples = demo_samples()?;
            log::debug!("built {} sample cuboids", samples.len());

            println!("Samples:");
            println!("{:-<40}", "");
            for cuboid in &samples {
                println!("  {}", cuboid);
            }

            sort_by_volume(&mut samples);

            println!("\nSorted by volume, area, edge sum:");
            println!("{:-<40}", "");
            for cuboid in &samples {
                println!(
                    "  {:<32} V={:<12} A={}",
                    cuboid.to_string(),
                    cuboid.volume(),
                    cuboid.surface_area()
                );
            }
        }
    }

    Ok(())
}
