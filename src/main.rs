use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use png_chunks::{ChunkFilter, is_additional, is_ancillary, is_critical, split_chunks, write_png};

#[derive(Parser)]
#[command(name = "png-chunks")]
#[command(about = "Inspect and rewrite the chunk structure of PNG files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a listing of the chunks in a PNG file
    List {
        /// Path to the PNG file
        file: PathBuf,

        /// Chunk selection: all, critical, ancillary, or additional
        #[arg(short, long, default_value = "all")]
        filter: String,
    },

    /// Validate the full chunk structure of a PNG file
    Verify {
        /// Path to the PNG file
        file: PathBuf,
    },

    /// Rewrite a PNG keeping only its critical chunks
    Strip {
        /// Path to the input PNG file
        file: PathBuf,

        /// Path for the stripped output file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn parse_filter(name: &str) -> Result<ChunkFilter> {
    match name {
        "all" => Ok(ChunkFilter::All),
        "critical" => Ok(ChunkFilter::CriticalOnly),
        "ancillary" => Ok(ChunkFilter::AncillaryOnly),
        "additional" => Ok(ChunkFilter::AdditionalOnly),
        other => bail!("unknown filter '{other}', expected all, critical, ancillary, or additional"),
    }
}

const HEX_DUMP_LIMIT: usize = 16;

fn hex_dump(data: &[u8]) -> String {
    let shown: Vec<String> = data
        .iter()
        .take(HEX_DUMP_LIMIT)
        .map(|b| format!("{b:02x}"))
        .collect();
    let mut out = shown.join(" ");
    if data.len() > HEX_DUMP_LIMIT {
        out.push_str(" ..");
    }
    out
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { file, filter } => {
            let filter = parse_filter(&filter)?;
            let bytes = fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
            let chunks = split_chunks(&bytes, filter)
                .with_context(|| format!("parsing {}", file.display()))?;

            for (index, chunk) in chunks.iter().enumerate() {
                println!(
                    "{index:>4}  {:<4}  {:>10}  {}",
                    chunk.type_string(),
                    chunk.data_len(),
                    hex_dump(chunk.data_part()),
                );
            }
        }
        Commands::Verify { file } => {
            let bytes = fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
            let chunks = split_chunks(&bytes, ChunkFilter::All)
                .with_context(|| format!("parsing {}", file.display()))?;

            let critical = chunks.iter().filter(|c| is_critical(&c.chunk_type())).count();
            let ancillary = chunks.iter().filter(|c| is_ancillary(&c.chunk_type())).count();
            let additional = chunks.iter().filter(|c| is_additional(&c.chunk_type())).count();

            println!(
                "{}: {} chunks ({critical} critical, {ancillary} ancillary, {additional} additional)",
                file.display(),
                chunks.len(),
            );
        }
        Commands::Strip { file, output } => {
            let bytes = fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
            let chunks = split_chunks(&bytes, ChunkFilter::CriticalOnly)
                .with_context(|| format!("parsing {}", file.display()))?;
            let stripped = write_png(&chunks)?;
            fs::write(&output, &stripped)
                .with_context(|| format!("writing {}", output.display()))?;

            println!(
                "kept {} critical chunks, wrote {} bytes to {}",
                chunks.len(),
                stripped.len(),
                output.display(),
            );
        }
    }

    Ok(())
}
