use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use pdf_assemble::{CandidateImage, ImageCollection, PageSettings, Severity};
use pdf_split::PageSet;

#[derive(Parser)]
#[command(name = "pdfc", about = "Image and PDF convert tools CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble images into a single PDF, one page per image
    Assemble {
        /// Input image file(s), in page order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file (defaults to a timestamp-derived name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page orientation
        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Uniform page margin in mm (0-30)
        #[arg(long, default_value = "10.0")]
        margin: f32,

        /// JPEG quality in percent (50-100)
        #[arg(long, default_value = "80")]
        quality: u8,
    },

    /// Extract a page selection from a PDF
    Split {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Page selection, e.g. "1,3-5,8"
        #[arg(short, long)]
        pages: String,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for pdf_assemble::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assemble {
            input,
            output,
            orientation,
            margin,
            quality,
        } => {
            let mut batch = Vec::new();
            for path in &input {
                let data = tokio::fs::read(path).await?;
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("image")
                    .to_string();
                batch.push(CandidateImage { name, data });
            }

            // Route the inputs through the same intake the GUI uses, so
            // the allow-list and the collection cap apply identically.
            let offered = batch.len();
            let mut collection: ImageCollection<()> = ImageCollection::new();
            let notification = collection.add_images(batch, |_, _| ());
            if notification.severity == Severity::Error {
                anyhow::bail!(notification.message);
            }
            if collection.len() < offered {
                eprintln!("Warning: {}", notification.message);
            }

            let settings = PageSettings {
                orientation: orientation.into(),
                margin_mm: margin,
                quality,
            };

            let output =
                output.unwrap_or_else(|| PathBuf::from(pdf_assemble::default_output_name()));
            let pages =
                pdf_assemble::assemble_to_file(collection.to_sources(), &settings, &output).await?;
            println!("Assembled {} page(s) → {}", pages, output.display());
        }

        Commands::Split {
            input,
            pages,
            output,
        } => {
            let selection = PageSet::parse(&pages)?;
            let written = pdf_split::split_file(&input, &selection, &output).await?;
            println!("Extracted {} page(s) → {}", written, output.display());
        }
    }

    Ok(())
}
