use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bytepin::{DirectView, IoStream, PinnedView, StructView, ViewError};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{LevelFilter, debug, error, info};
use snafu::{ResultExt, Snafu};

mod record;

use record::SliceHeader;

/// Writes and reads a voxel slice header as raw native bytes.
#[derive(Parser, Debug)]
#[command(name = "bytepin-demo", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print execution details.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the header of the middle slice of a voxel field.
    Write {
        /// Output file.
        path: PathBuf,

        /// Voxel field size as X Y Z.
        #[arg(long, num_args = 3, action = ArgAction::Set, default_values_t = [160u32, 40, 53])]
        dims: Vec<u32>,

        /// Voxel edge length in millimetres.
        #[arg(long, default_value_t = 0.5)]
        voxel_size: f32,

        #[arg(long, value_enum, default_value_t = Strategy::Direct)]
        strategy: Strategy,
    },
    /// Read a header back and print it.
    Read {
        /// Input file.
        path: PathBuf,

        #[arg(long, value_enum, default_value_t = Strategy::Direct)]
        strategy: Strategy,
    },
}

/// How the header's bytes are moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Alias the header's memory.
    Direct,
    /// Pin the header and copy through a scratch buffer.
    Pinned,
}

#[derive(Debug, Snafu)]
enum DemoError {
    #[snafu(display("cannot create {}: {source}", path.display()))]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("cannot open {}: {source}", path.display()))]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("cannot flush {}: {source}", path.display()))]
    Flush {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("header transfer failed for {}: {source}", path.display()))]
    Transfer { path: PathBuf, source: ViewError },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::builder().filter_level(level).init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to run demo: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), DemoError> {
    match command {
        Command::Write {
            path,
            dims,
            voxel_size,
            strategy,
        } => {
            let dims = [dims[0], dims[1], dims[2]];
            let header = SliceHeader::centered(dims, voxel_size);
            write_header(&path, header, strategy)?;
            info!(
                "Wrote slice {} of {:?} ({} pixels) to {}",
                header.slice_index,
                header.dims,
                header.pixel_count(),
                path.display()
            );
        }
        Command::Read { path, strategy } => {
            let header = read_header(&path, strategy)?;
            info!("{header:#?}");
        }
    }
    Ok(())
}

fn write_header(path: &Path, mut header: SliceHeader, strategy: Strategy) -> Result<(), DemoError> {
    let file = File::create(path).context(CreateSnafu { path })?;
    let mut sink = IoStream::new(BufWriter::new(file));

    debug!("writing {} bytes via {strategy:?}", bytepin::plain_size::<SliceHeader>());
    let written = match strategy {
        Strategy::Direct => DirectView::new(&mut header).write_to(&mut sink),
        Strategy::Pinned => PinnedView::new(&mut header).write_to(&mut sink),
    };
    written.context(TransferSnafu { path })?;

    sink.get_mut().flush().context(FlushSnafu { path })
}

fn read_header(path: &Path, strategy: Strategy) -> Result<SliceHeader, DemoError> {
    let file = File::open(path).context(OpenSnafu { path })?;
    let mut source = IoStream::new(BufReader::new(file));

    let mut header = SliceHeader::centered([0; 3], 0.0);
    debug!("reading {} bytes via {strategy:?}", bytepin::plain_size::<SliceHeader>());
    let read = match strategy {
        Strategy::Direct => DirectView::new(&mut header).read_from(&mut source),
        Strategy::Pinned => PinnedView::new(&mut header).read_from(&mut source),
    };
    read.context(TransferSnafu { path })?;

    Ok(header)
}
