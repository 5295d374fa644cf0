use std::io::Write;

use log::{info, warn};

pub mod album;
pub mod cli;
pub mod composition;
pub mod error;
pub mod export;
mod fs;
pub mod utils;

pub use album::Album;
pub use cli::Cli;
pub use composition::{Composition, Style};
pub use error::{CatalogError, Result};

/// The fixed five-track album the program demonstrates with.
pub fn sample_album() -> Result<Album> {
    Album::new(vec![
        Composition::rock("Numb", 185)?,
        Composition::pop("Blinding Lights", 200)?,
        Composition::jazz("Autumn Leaves", 240)?,
        Composition::pop("Levitating", 205)?,
        Composition::rock("In the End", 215)?,
    ])
}

fn output_error(e: std::io::Error) -> CatalogError {
    CatalogError::io_with("Could not write output", e)
}

/// Builds the sample album, sorts, sums and searches it, then saves it to
/// `cli.output` and prints the reloaded copy. A failed search is reported on
/// `err` and the run carries on; any other error is returned.
pub fn run<W: Write, E: Write>(cli: &Cli, out: &mut W, err: &mut E) -> Result<()> {
    let mut album = sample_album()?;

    writeln!(out, "Album:").map_err(output_error)?;
    write!(out, "{}", album).map_err(output_error)?;

    album.sort_by_style();
    writeln!(out, "\nAlbum after sorting:").map_err(output_error)?;
    write!(out, "{}", album).map_err(output_error)?;

    writeln!(out, "\nTotal duration: {} seconds", album.total_duration()).map_err(output_error)?;

    writeln!(
        out,
        "\nSearching for track with duration {}-{}...",
        cli.min, cli.max
    )
    .map_err(output_error)?;
    match album.find_by_duration(cli.min, cli.max) {
        Ok(found) => writeln!(out, "Found: {}", found).map_err(output_error)?,
        Err(e) if e.is_not_found() => {
            warn!("Search came back empty");
            writeln!(err, "{}", e.user_message()).map_err(output_error)?;
        }
        Err(e) => return Err(e),
    }

    album.save_to_file(&cli.output)?;
    writeln!(out, "\nAlbum saved to file: {}", cli.output.display()).map_err(output_error)?;

    if let Some(ref csv_path) = cli.csv {
        album.export_csv(csv_path)?;
        writeln!(out, "Album exported to CSV: {}", csv_path.display()).map_err(output_error)?;
    }

    let loaded = Album::load_from_file(&cli.output)?;
    writeln!(out, "\nLoaded album from file:").map_err(output_error)?;
    write!(out, "{}", loaded).map_err(output_error)?;

    info!("Run finished with {} tracks", loaded.len());
    Ok(())
}
