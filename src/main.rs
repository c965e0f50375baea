use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use qvmove::prelude::*;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "qvmove")]
#[command(author, version, about = "Explore and classify quiver move classes")]
#[command(propagate_version = true)]
struct Cli {
    /// CBOR catalogue to use instead of the built-in one
    #[arg(long, global = true)]
    catalogue: Option<PathBuf>,

    /// Class size above which a mutation-finiteness check gives up
    #[arg(long, global = true, default_value_t = DEFAULT_CLASS_LIMIT)]
    class_limit: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every matrix of the input, one per line
    Check {
        /// Input file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print every member of a matrix's move class with its depth
    Class {
        /// Seed matrix, e.g. "{ { 0 1 } { -1 0 } }"
        #[arg(short, long)]
        matrix: String,
    },

    /// Write the active catalogue as CBOR
    Export {
        /// Destination file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let catalogue = load_catalogue(cli.catalogue.as_deref())?;

    match cli.command {
        Commands::Check { input, output } => {
            check(catalogue, cli.class_limit, input.as_deref(), output.as_deref())
        }
        Commands::Class { matrix } => class(&catalogue, cli.class_limit, &matrix),
        Commands::Export { output } => {
            catalogue
                .save_to_file(&output)
                .with_context(|| format!("failed to write catalogue to {}", output.display()))?;
            info!(path = %output.display(), "catalogue written");
            Ok(())
        }
    }
}

fn load_catalogue(path: Option<&Path>) -> Result<Catalogue> {
    match path {
        Some(path) => Catalogue::load_from_file(path)
            .with_context(|| format!("failed to load catalogue from {}", path.display())),
        None => Catalogue::try_standard().context("built-in catalogue is malformed"),
    }
}

fn check(
    catalogue: Catalogue,
    class_limit: usize,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let checker = Checker::builder()
        .catalogue(catalogue)
        .class_limit(class_limit)
        .build();

    let reader: Box<dyn io::BufRead> = match input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    checker.run(reader, writer).context("check aborted")?;
    Ok(())
}

fn class(catalogue: &Catalogue, class_limit: usize, matrix: &str) -> Result<()> {
    let seed: QuiverMatrix = matrix
        .parse()
        .with_context(|| format!("invalid matrix {:?}", matrix))?;
    let finite = MutationFiniteCheck::with_limit(class_limit);
    let mut loader = MoveClassLoader::new(seed, catalogue.moves(), &finite);
    let mut out = BufWriter::new(io::stdout().lock());
    while let Some(member) = loader.next() {
        writeln!(out, "{}: {}", loader.depth(), member)?;
    }
    out.flush()?;
    info!(members = loader.visited(), "class exhausted");
    Ok(())
}
