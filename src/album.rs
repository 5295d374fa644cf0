use std::{fmt, path::Path};

use log::{debug, info};

use crate::composition::Composition;
use crate::error::{CatalogError, Result};
use crate::fs::{read_album_file, write_album_file};

/// A non-empty, ordered collection of compositions. Membership is fixed at
/// construction; only the order can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    compositions: Vec<Composition>,
}

impl Album {
    pub fn new(compositions: Vec<Composition>) -> Result<Self> {
        if compositions.is_empty() {
            return Err(CatalogError::validation(
                "Album must contain at least one composition.",
            ));
        }
        Ok(Album { compositions })
    }

    pub fn compositions(&self) -> &[Composition] {
        &self.compositions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Composition> {
        self.compositions.iter()
    }

    pub fn len(&self) -> usize {
        self.compositions.len()
    }

    /// Always false, an album holds at least one track.
    pub fn is_empty(&self) -> bool {
        self.compositions.is_empty()
    }

    pub fn total_duration(&self) -> i64 {
        self.compositions
            .iter()
            .map(Composition::duration_seconds)
            .sum()
    }

    /// Stable sort by style: pop, rock, then jazz.
    pub fn sort_by_style(&mut self) {
        self.compositions.sort_by_key(Composition::style);
    }

    /// Returns the first composition, in current order, whose duration lies in
    /// `[min, max]`.
    pub fn find_by_duration(&self, min: i64, max: i64) -> Result<&Composition> {
        if min < 0 || max < 0 || min > max {
            return Err(CatalogError::validation(format!(
                "Invalid duration range: {}-{}.",
                min, max
            )));
        }

        self.compositions
            .iter()
            .find(|track| (min..=max).contains(&track.duration_seconds()))
            .ok_or(CatalogError::NotFound { min, max })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        write_album_file(path, &self.compositions)?;
        info!("Album saved to {}", path.display());
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let compositions = read_album_file(path)?;
        debug!("Loaded {} tracks from {}", compositions.len(), path.display());
        Album::new(compositions)
    }
}

impl TryFrom<Vec<Composition>> for Album {
    type Error = CatalogError;

    fn try_from(compositions: Vec<Composition>) -> Result<Self> {
        Album::new(compositions)
    }
}

impl<'a> IntoIterator for &'a Album {
    type Item = &'a Composition;
    type IntoIter = std::slice::Iter<'a, Composition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for track in &self.compositions {
            writeln!(f, "{}", track)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::Style;
    use tempfile::tempdir;

    fn sample() -> Album {
        Album::new(vec![
            Composition::rock("Numb", 185).unwrap(),
            Composition::pop("Blinding Lights", 200).unwrap(),
            Composition::jazz("Autumn Leaves", 240).unwrap(),
            Composition::pop("Levitating", 205).unwrap(),
            Composition::rock("In the End", 215).unwrap(),
        ])
        .unwrap()
    }

    fn titles(album: &Album) -> Vec<&str> {
        album.iter().map(Composition::title).collect()
    }

    #[test]
    fn empty_album_is_rejected() {
        let err = Album::new(Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::Validation { .. }));
        assert!(Album::try_from(Vec::new()).is_err());
    }

    #[test]
    fn total_duration_sums_every_track() {
        let mut album = sample();
        assert_eq!(album.total_duration(), 1045);

        album.sort_by_style();
        assert_eq!(album.total_duration(), 1045);
    }

    #[test]
    fn sort_by_style_is_stable() {
        let mut album = sample();
        album.sort_by_style();

        assert_eq!(
            titles(&album),
            vec![
                "Blinding Lights",
                "Levitating",
                "Numb",
                "In the End",
                "Autumn Leaves"
            ]
        );
        let styles: Vec<Style> = album.iter().map(Composition::style).collect();
        assert!(styles.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(album.len(), 5);
    }

    #[test]
    fn find_returns_first_match_in_current_order() {
        let mut album = sample();
        let found = album.find_by_duration(190, 210).unwrap();
        assert_eq!(found.to_string(), "Blinding Lights (Pop, 200 sec)");

        album.sort_by_style();
        assert_eq!(album.find_by_duration(205, 300).unwrap().title(), "Levitating");
    }

    #[test]
    fn find_bounds_are_inclusive() {
        let album = sample();
        assert_eq!(album.find_by_duration(185, 185).unwrap().title(), "Numb");
        assert_eq!(album.find_by_duration(240, 240).unwrap().title(), "Autumn Leaves");
    }

    #[test]
    fn find_rejects_bad_ranges() {
        let album = sample();
        for (min, max) in [(-1, 10), (10, -1), (300, 200)] {
            let err = album.find_by_duration(min, max).unwrap_err();
            assert!(matches!(err, CatalogError::Validation { .. }));
        }
    }

    #[test]
    fn find_reports_missing_range() {
        let err = sample().find_by_duration(1, 60).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { min: 1, max: 60 }));
    }

    #[test]
    fn display_prints_one_track_per_line() {
        let album = Album::new(vec![
            Composition::rock("Numb", 185).unwrap(),
            Composition::jazz("Autumn Leaves", 240).unwrap(),
        ])
        .unwrap();
        assert_eq!(
            album.to_string(),
            "Numb (Rock, 185 sec)\nAutumn Leaves (Jazz, 240 sec)\n"
        );
    }

    #[test]
    fn save_then_load_keeps_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("album.txt");

        let mut album = sample();
        album.sort_by_style();
        album.save_to_file(&path).unwrap();

        assert_eq!(Album::load_from_file(&path).unwrap(), album);
    }

    #[test]
    fn load_propagates_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("album.txt");
        std::fs::write(&path, "5\nNumb|ROCK|185\n").unwrap();

        let err = Album::load_from_file(&path).unwrap_err();
        assert_eq!(err.category(), "I/O error");
    }
}
