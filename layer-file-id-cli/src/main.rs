//! file-id — inspect and re-encode Bot API / TDLib file ids.
//!
//! ```text
//! file-id decode  <FILE_ID>...                         print the decoded location
//! file-id unique  <FILE_ID>...                         print file_unique_id values
//! file-id encode  <FILE_ID> [--legacy | --subversion N] re-encode in another framing
//! ```
//!
//! Enable logging with `RUST_LOG=layer_file_id=debug`.

use clap::{Parser, Subcommand};
use layer_file_id::{FileId, FileIdVersion, PhotoSizeSource, RemoteLocation};

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        // SAFETY: single-threaded at this point, no other threads reading env
        unsafe { std::env::set_var("RUST_LOG", "layer_file_id=info,file_id=info"); }
    }
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {
        Command::Decode { ids } => {
            for text in ids {
                let (file_id, version) = FileId::decode_versioned(&text)?;
                print_file_id(&text, &file_id, version);
            }
        }
        Command::Unique { ids } => {
            for text in ids {
                println!("{}", FileId::decode(&text)?.unique_id()?);
            }
        }
        Command::Encode { id, legacy, subversion } => {
            let version = target_version(legacy, subversion);
            let decoded = FileId::decode(&id)?;
            log::info!("[file_id] Re-encoding as {version:?}");
            println!("{}", decoded.encode_with(version)?);
        }
    }
    Ok(())
}

// ─── Arguments ────────────────────────────────────────────────────────────────

/// Inspect and re-encode Bot API / TDLib file ids.
#[derive(Parser, Debug)]
#[command(name = "file-id", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Print the decoded location of each file id
    Decode {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Print the file_unique_id of each file id
    Unique {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Re-encode a file id in another framing
    Encode {
        id: String,
        /// Write the old marker-2 framing
        #[arg(long)]
        legacy: bool,
        /// Persistent framing with this subversion (default: current)
        #[arg(long, conflicts_with = "legacy")]
        subversion: Option<u8>,
    },
}

fn target_version(legacy: bool, subversion: Option<u8>) -> FileIdVersion {
    match (legacy, subversion) {
        (true, _) => FileIdVersion::Legacy,
        (false, Some(subversion)) => FileIdVersion::Persistent { subversion },
        (false, None) => FileIdVersion::CURRENT,
    }
}

// ─── Output ───────────────────────────────────────────────────────────────────

fn print_file_id(text: &str, file_id: &FileId, version: FileIdVersion) {
    println!("{text}");
    println!("  version:        {version:?}");
    println!("  type:           {:?}", file_id.file_type);
    println!("  dc:             {}", file_id.dc_id);
    println!("  file reference: {}", describe_reference(file_id.file_reference.as_deref()));
    match &file_id.location {
        RemoteLocation::Web { url, access_hash } => {
            println!("  web:            {url} (access_hash={access_hash})");
        }
        RemoteLocation::Common { id, access_hash } => {
            println!("  common:         id={id} access_hash={access_hash}");
        }
        RemoteLocation::Photo { id, access_hash, source } => {
            println!("  photo:          id={id} access_hash={access_hash}");
            println!("  source:         {}", describe_source(source));
        }
    }
    match file_id.unique_id() {
        Ok(unique) => println!("  unique id:      {unique}"),
        Err(e)     => println!("  unique id:      ✗ {e}"),
    }
}

fn describe_reference(reference: Option<&[u8]>) -> String {
    reference.map_or_else(|| "(none)".into(), hex::encode)
}

fn describe_source(source: &PhotoSizeSource) -> String {
    match source {
        PhotoSizeSource::Thumbnail { file_type, thumbnail_type } => {
            format!("Thumbnail '{}' of {file_type:?}", char::from(*thumbnail_type))
        }
        other => format!("{other:?}"),
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
