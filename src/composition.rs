use std::{fmt, str::FromStr};

use log::trace;
use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::utils::{SEPARATOR, escape_title, split_record, unescape_title};

/// Genre tag of a composition. Declaration order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Style {
    Pop,
    Rock,
    Jazz,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Pop, Style::Rock, Style::Jazz];

    /// Canonical name used in serialized records.
    pub fn name(&self) -> &'static str {
        match self {
            Style::Pop => "POP",
            Style::Rock => "ROCK",
            Style::Jazz => "JAZZ",
        }
    }
}

impl FromStr for Style {
    type Err = CatalogError;

    /// Exact, case-sensitive match on the canonical name.
    fn from_str(s: &str) -> Result<Self> {
        Style::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| CatalogError::validation(format!("Unknown style: {}", s)))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Pop => write!(f, "Pop"),
            Style::Rock => write!(f, "Rock"),
            Style::Jazz => write!(f, "Jazz"),
        }
    }
}

/// A single track. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Composition {
    title: String,
    duration_seconds: i64,
    style: Style,
}

impl Composition {
    /// Builds a composition, rejecting a blank title or a non-positive duration.
    pub fn new<S: Into<String>>(title: S, duration_seconds: i64, style: Style) -> Result<Self> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err(CatalogError::validation("Title must be non-empty."));
        }
        if duration_seconds <= 0 {
            return Err(CatalogError::validation("Duration must be positive."));
        }

        Ok(Composition {
            title,
            duration_seconds,
            style,
        })
    }

    pub fn pop<S: Into<String>>(title: S, duration_seconds: i64) -> Result<Self> {
        Self::new(title, duration_seconds, Style::Pop)
    }

    pub fn rock<S: Into<String>>(title: S, duration_seconds: i64) -> Result<Self> {
        Self::new(title, duration_seconds, Style::Rock)
    }

    pub fn jazz<S: Into<String>>(title: S, duration_seconds: i64) -> Result<Self> {
        Self::new(title, duration_seconds, Style::Jazz)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration_seconds(&self) -> i64 {
        self.duration_seconds
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Encodes the record as `title|STYLE|duration`.
    pub fn serialize(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            escape_title(&self.title),
            self.style.name(),
            self.duration_seconds,
            sep = SEPARATOR
        )
    }

    /// Rebuilds a composition from exactly three fields: title, style name, duration.
    pub fn deserialize(parts: &[&str]) -> Result<Self> {
        let [title, style, duration] = parts else {
            return Err(CatalogError::validation(format!(
                "Invalid serialized composition format: expected 3 fields, got {}.",
                parts.len()
            )));
        };

        let style: Style = style.parse()?;
        let duration = duration.parse::<i64>().map_err(|_| {
            CatalogError::validation(format!("Invalid duration: {}", duration))
        })?;

        trace!("Deserialized {:?} ({}, {})", title, style.name(), duration);
        Self::new(unescape_title(title), duration, style)
    }
}

impl FromStr for Composition {
    type Err = CatalogError;

    fn from_str(line: &str) -> Result<Self> {
        Self::deserialize(&split_record(line))
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} sec)",
            self.title, self.style, self.duration_seconds
        )
    }
}
