use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use pdf_images::{
    ConvertOptions, ImageCollection, ImageFile, LopdfEncoder, NullPreviewer, WebpEmbedding,
};
use std::path::{Path, PathBuf};

mod logger;

#[derive(Parser)]
#[command(name = "img2pdf", about = "Combine images into one PDF, one page per image", version)]
struct Cli {
    /// Log every step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert images into a single PDF, pages in argument order
    Convert {
        /// Input images; non-image files are skipped
        #[arg(required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Directory the PDF is written into
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Output file name (defaults to converted.pdf)
        #[arg(long)]
        name: Option<String>,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// How WEBP images are embedded
        #[arg(long, value_enum)]
        webp: Option<WebpArg>,

        /// JSON options file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the page each image would produce, without writing a PDF
    Plan {
        #[arg(required = true, num_args = 1..)]
        input: Vec<PathBuf>,
    },

    /// Write the default options to a JSON file
    InitConfig {
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum WebpArg {
    Decode,
    Jpeg,
}

impl From<WebpArg> for WebpEmbedding {
    fn from(arg: WebpArg) -> Self {
        match arg {
            WebpArg::Decode => Self::Decode,
            WebpArg::Jpeg => Self::LabelAsJpeg,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Convert {
            input,
            output_dir,
            name,
            title,
            webp,
            config,
        } => {
            let mut options = match config {
                Some(path) => ConvertOptions::load(&path)
                    .await
                    .with_context(|| format!("Failed to load options from {}", path.display()))?,
                None => ConvertOptions::default(),
            };
            if let Some(name) = name {
                options.output_filename = name;
            }
            if let Some(title) = title {
                options.title = title;
            }
            if let Some(webp) = webp {
                options.webp_embedding = webp.into();
            }

            let collection = load_collection(&input).await?;
            let mut encoder = LopdfEncoder::new(options.title.clone());

            let output = match pdf_images::convert_with_progress(
                &collection.snapshot(),
                &mut encoder,
                &options,
                |done, total| log::info!("Page {}/{}", done, total),
            )
            .await
            {
                Ok(output) => output,
                Err(e) => {
                    log::error!("Conversion failed: {}", e);
                    bail!("{}", e.user_message());
                }
            };

            let page_count = output.page_count();
            let path = output.deliver(&output_dir).await.with_context(|| {
                format!("Failed to write PDF into {}", output_dir.display())
            })?;
            println!("Converted {} image(s) → {}", page_count, path.display());
        }

        Commands::Plan { input } => {
            let collection = load_collection(&input).await?;

            let planned = match pdf_images::plan_pages(&collection.snapshot()).await {
                Ok(planned) => planned,
                Err(e) => {
                    log::error!("Planning failed: {}", e);
                    bail!("{}", e.user_message());
                }
            };

            println!("Page plan:");
            for (index, page) in planned.iter().enumerate() {
                println!(
                    "  {:>3}. {}: {}x{} px → {:.1} x {:.1} mm, {}",
                    index + 1,
                    page.name,
                    page.width_px,
                    page.height_px,
                    page.page.width_mm,
                    page.page.height_mm,
                    page.page.orientation.name()
                );
            }
        }

        Commands::InitConfig { path } => {
            ConvertOptions::default().save(&path).await?;
            println!("Wrote default options → {}", path.display());
        }
    }

    Ok(())
}

/// Build the ordered collection from command-line paths
async fn load_collection(paths: &[PathBuf]) -> Result<ImageCollection<NullPreviewer>> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(load_file(path).await?);
    }

    let mut collection = ImageCollection::new(NullPreviewer);
    let accepted = collection.add(files);
    log::debug!("{} of {} input(s) are images", accepted, paths.len());
    Ok(collection)
}

async fn load_file(path: &Path) -> Result<ImageFile> {
    ImageFile::from_path(path)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))
}
