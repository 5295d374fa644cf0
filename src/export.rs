use std::path::Path;

use csv::WriterBuilder;
use log::info;
use serde::Serialize;

use crate::{album::Album, composition::Style, error::Result};

/// One row of the CSV export.
#[derive(Debug, Serialize)]
struct TrackRow<'a> {
    title: &'a str,
    style: Style,
    duration_seconds: i64,

    /// Offset of the track inside the album, in seconds
    starts_at: i64,
}

impl Album {
    /// Writes the album, in its current order, as a CSV sheet with a header row.
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;

        let mut offset = 0;
        for track in self {
            writer.serialize(TrackRow {
                title: track.title(),
                style: track.style(),
                duration_seconds: track.duration_seconds(),
                starts_at: offset,
            })?;
            offset += track.duration_seconds();
        }
        writer.flush().map_err(csv::Error::from)?;

        info!("Exported {} tracks to {}", self.len(), path.display());
        Ok(())
    }
}
