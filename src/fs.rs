use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::composition::Composition;
use crate::error::{CatalogError, Result};

/// Writes the track count followed by one serialized record per line.
/// The whole file is assembled in memory and written in one call.
pub fn write_album_file(path: &Path, compositions: &[Composition]) -> Result<()> {
    let mut content = format!("{}\n", compositions.len());
    for track in compositions {
        content.push_str(&track.serialize());
        content.push('\n');
    }

    fs::write(path, content)
        .map_err(|e| CatalogError::io_with(format!("Could not write {}", path.display()), e))?;

    debug!("Wrote {} records to {}", compositions.len(), path.display());
    Ok(())
}

/// Reads an album file. The first line declares how many record lines follow;
/// anything after them is ignored.
pub fn read_album_file(path: &Path) -> Result<Vec<Composition>> {
    let file = File::open(path)
        .map_err(|e| CatalogError::io_with(format!("Could not open {}", path.display()), e))?;
    let mut lines = BufReader::new(file).lines();

    let header = next_line(&mut lines, path)?.ok_or_else(|| CatalogError::io("File is empty."))?;
    let count = parse_track_count(&header)?;
    debug!("{} declares {} tracks", path.display(), count);

    let mut compositions = Vec::with_capacity(count.min(1024));
    for index in 0..count {
        let line = next_line(&mut lines, path)?
            .ok_or_else(|| CatalogError::io("Unexpected end of file."))?;

        let track = line.parse::<Composition>().map_err(|e| {
            CatalogError::io(format!("Invalid record on line {}: {}", index + 2, e))
        })?;
        compositions.push(track);
    }

    Ok(compositions)
}

fn next_line<B: BufRead>(lines: &mut std::io::Lines<B>, path: &Path) -> Result<Option<String>> {
    lines
        .next()
        .transpose()
        .map_err(|e| CatalogError::io_with(format!("Could not read {}", path.display()), e))
}

fn parse_track_count(header: &str) -> Result<usize> {
    let header = header.trim();
    let count = header
        .parse::<i64>()
        .map_err(|_| CatalogError::io(format!("Invalid track count: {}", header)))?;

    if count <= 0 {
        return Err(CatalogError::io(format!("Invalid track count: {}", count)));
    }

    usize::try_from(count).map_err(|_| CatalogError::io(format!("Invalid track count: {}", count)))
}
