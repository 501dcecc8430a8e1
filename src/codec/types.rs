use crate::error::{Error, Result};

/// Which release of the game wrote a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Edition {
    Classic,
    AddedAttractions,
    LoopyLandscapes,
}

impl Edition {
    pub fn as_str(self) -> &'static str {
        match self {
            Edition::Classic => "classic",
            Edition::AddedAttractions => "added_attractions",
            Edition::LoopyLandscapes => "loopy_landscapes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Scenario,
    SavedGame,
}

impl FileKind {
    /// Pick the file kind from a path's extension (`.sc4` / `.sv4`, any case)
    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "sc4" => Ok(FileKind::Scenario),
            "sv4" => Ok(FileKind::SavedGame),
            _ => Err(Error::UnknownExtension(ext)),
        }
    }
}

/// Classify a version number. Saved games carry a positive value and
/// scenarios the negated one.
pub fn classify_version(version: i32) -> Result<(Edition, FileKind)> {
    let kind = if version < 0 { FileKind::Scenario } else { FileKind::SavedGame };
    let edition = edition_from_version(version).ok_or(Error::UnknownVersion(version))?;
    Ok((edition, kind))
}

pub fn edition_from_version(version: i32) -> Option<Edition> {
    match version.unsigned_abs() {
        108_000..=109_999 => Some(Edition::Classic),
        110_000..=119_999 => Some(Edition::AddedAttractions),
        0 | 120_000..=129_999 => Some(Edition::LoopyLandscapes),
        _ => None,
    }
}

/// Version numbers written by each edition
pub const VERSION_CLASSIC: i32 = 108_000;
pub const VERSION_ADDED_ATTRACTIONS: i32 = 110_018;
pub const VERSION_LOOPY_LANDSCAPES: i32 = 120_001;

impl Edition {
    pub fn version(self) -> i32 {
        match self {
            Edition::Classic => VERSION_CLASSIC,
            Edition::AddedAttractions => VERSION_ADDED_ATTRACTIONS,
            Edition::LoopyLandscapes => VERSION_LOOPY_LANDSCAPES,
        }
    }
}

/// Tile coordinate pair as stored by rides (`0xFF` x means none)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileXY {
    pub x: u8,
    pub y: u8,
}

impl TileXY {
    pub const NULL: TileXY = TileXY { x: 0xFF, y: 0xFF };

    pub fn is_null(self) -> bool {
        self.x == 0xFF
    }
}

/// String id referencing the park's user string table
pub const USER_STRING_START: u16 = 0x8000;
pub const USER_STRING_COUNT: usize = 1024;
pub const USER_STRING_LENGTH: usize = 32;

pub fn user_string_index(string_id: u16) -> Option<usize> {
    if string_id < USER_STRING_START {
        return None;
    }
    let index = (string_id - USER_STRING_START) as usize;
    (index < USER_STRING_COUNT).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_classify_version() {
        assert_eq!(classify_version(108_000).unwrap(), (Edition::Classic, FileKind::SavedGame));
        assert_eq!(classify_version(-110_018).unwrap(), (Edition::AddedAttractions, FileKind::Scenario));
        assert_eq!(classify_version(120_001).unwrap(), (Edition::LoopyLandscapes, FileKind::SavedGame));
        assert_eq!(classify_version(0).unwrap().0, Edition::LoopyLandscapes);
        assert!(matches!(classify_version(5), Err(Error::UnknownVersion(5))));
        assert!(matches!(classify_version(-130_000), Err(Error::UnknownVersion(-130_000))));
    }

    #[test]
    fn test_file_kind_from_path() {
        assert_eq!(FileKind::from_path(Path::new("sc0.SC4")).unwrap(), FileKind::Scenario);
        assert_eq!(FileKind::from_path(Path::new("a/b/saved.sv4")).unwrap(), FileKind::SavedGame);
        assert!(matches!(FileKind::from_path(Path::new("park.sv6")), Err(Error::UnknownExtension(e)) if e == "sv6"));
        assert!(FileKind::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_user_strings() {
        assert_eq!(user_string_index(0x8000), Some(0));
        assert_eq!(user_string_index(0x83FF), Some(1023));
        assert_eq!(user_string_index(0x8400), None);
        assert_eq!(user_string_index(0x1234), None);
    }
}
