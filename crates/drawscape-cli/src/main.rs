use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "drawscape", about = "Factorio blueprint SVG renderer", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a blueprint JSON export to a paginated SVG drawing
    Create {
        /// Input JSON file (Factorio mod export)
        #[arg(short, long)]
        input: PathBuf,

        /// Output SVG file
        #[arg(short, long, default_value = "output.svg")]
        output: PathBuf,

        /// Page orientation
        #[arg(long, default_value = "landscape", value_enum)]
        orientation: OrientationArg,

        /// Rendering theme
        #[arg(long, default_value = "default", value_enum)]
        template: TemplateArg,

        /// Optimize the saved SVG (keeps the original only on failure)
        #[arg(long)]
        optimize: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Landscape,
    Portrait,
}

#[derive(Clone, Copy, ValueEnum)]
enum TemplateArg {
    Default,
    Circles,
}

impl From<OrientationArg> for drawscape::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Landscape => Self::Landscape,
            OrientationArg::Portrait => Self::Portrait,
        }
    }
}

impl From<TemplateArg> for drawscape::Template {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Default => Self::Default,
            TemplateArg::Circles => Self::Circles,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Create {
            input,
            output,
            orientation,
            template,
            optimize,
        } => {
            let options = drawscape::CreateOptions {
                orientation: orientation.into(),
                template: template.into(),
                output_file: output,
                optimize,
            };

            let summary = drawscape::create(&input, &options)?;

            println!("Created SVG drawing:");
            println!(
                "  Size: {}mm x {}mm (A4)",
                summary.page_width_mm, summary.page_height_mm
            );
            println!(
                "  ViewBox: {} {} {} {}",
                summary.viewbox.x, summary.viewbox.y, summary.viewbox.width, summary.viewbox.height
            );
            println!("  Scale: {:.4} mm per tile", summary.scale);
            for (category, count) in &summary.entity_counts {
                if *count > 0 {
                    println!("  {}: {} entities", category.name(), count);
                }
            }

            match (&summary.optimized_file, &summary.optimize_failure) {
                (Some(optimized), _) => println!("Optimized → {}", optimized.display()),
                (None, Some(failure)) => {
                    eprintln!("SVG optimization failed ({failure}). Original file retained.");
                    println!("Saved → {}", summary.output_file.display());
                }
                (None, None) => println!("Saved → {}", summary.output_file.display()),
            }
        }
    }

    Ok(())
}
