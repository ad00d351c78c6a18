mod filemanager;
mod script;
mod session;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lib_bitsketch::{Editor, EditorConfig, Fit};
use log::LevelFilter;

use crate::session::Session;

#[derive(Parser)]
#[command(
    name = "bitsketch",
    version,
    about = "Pixel art editor that exports RGB565 PROGMEM arrays"
)]
struct Cli {
    #[arg(help = "TOML file with editor settings.", long, global = true)]
    config: Option<PathBuf>,

    #[arg(help = "Log verbosity.", long, global = true, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    #[arg(help = "Write logs to this file instead of stderr.", long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Convert an image file to a hex array")]
    Convert {
        #[arg(help = "PNG, JPEG or BMP file to convert.")]
        input: PathBuf,

        #[arg(help = "Output file, defaults to INPUT with a .txt extension.", short, long)]
        output: Option<PathBuf>,

        #[arg(help = "Target grid width.", long, requires = "height")]
        width: Option<u32>,

        #[arg(help = "Target grid height.", long, requires = "width")]
        height: Option<u32>,

        #[arg(
            help = "How to map the image onto the target size: crop or resize.",
            long,
            default_value_t = Fit::default()
        )]
        fit: Fit,
    },

    #[command(about = "Run an edit script, read from stdin when no file is given")]
    Edit {
        #[arg(help = "Script with one command per line.")]
        script: Option<PathBuf>,

        #[arg(help = "Initial canvas width.", long)]
        width: Option<u32>,

        #[arg(help = "Initial canvas height.", long)]
        height: Option<u32>,

        #[arg(help = "Start from this image instead of a blank canvas.", long)]
        open: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    lib_bitsketch::init_logging(cli.log_level, cli.log_file.as_deref())
        .context("Failed to set up logging")?;

    let mut config = match &cli.config {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EditorConfig::default(),
    };

    match cli.command {
        Commands::Convert {
            input,
            output,
            width,
            height,
            fit,
        } => {
            let target = width.zip(height);
            let output = filemanager::convert_image(
                &input,
                output.as_deref(),
                target,
                fit,
                config.limits(),
            )
            .with_context(|| format!("Failed to convert {}", input.display()))?;
            println!("Saved hex code: {}", output.display());
        }
        Commands::Edit {
            script: script_path,
            width,
            height,
            open,
        } => {
            config.default_width = width.unwrap_or(config.default_width);
            config.default_height = height.unwrap_or(config.default_height);

            let mut editor = Editor::new(&config).context("Failed to create canvas")?;
            if let Some(path) = &open {
                editor
                    .load_image(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
            }

            let text = filemanager::read_script(script_path.as_deref())
                .context("Failed to read edit script")?;
            let commands = script::parse(&text)?;

            let stdout = io::stdout();
            let mut session = Session::new(editor, stdout.lock());
            session.run(&commands)?;
            eprintln!("{}", session::describe(session.editor()));
        }
    }

    Ok(())
}
