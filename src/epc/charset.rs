use serde::{Deserialize, Serialize};

/// Character sets an EPC QR payload can declare (payload element 3).
///
/// The wire format is a single digit in `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterSet {
    /// UTF-8 (code 1).
    Utf8,
    /// ISO 8859-1 (code 2).
    Iso8859_1,
    /// ISO 8859-2 (code 3).
    Iso8859_2,
    /// ISO 8859-4 (code 4).
    Iso8859_4,
    /// ISO 8859-5 (code 5).
    Iso8859_5,
    /// ISO 8859-7 (code 6).
    Iso8859_7,
    /// ISO 8859-10 (code 7).
    Iso8859_10,
    /// ISO 8859-15 (code 8).
    Iso8859_15,
}

impl CharacterSet {
    /// Single-digit code used in the payload.
    pub fn code(&self) -> u8 {
        match self {
            CharacterSet::Utf8 => 1,
            CharacterSet::Iso8859_1 => 2,
            CharacterSet::Iso8859_2 => 3,
            CharacterSet::Iso8859_4 => 4,
            CharacterSet::Iso8859_5 => 5,
            CharacterSet::Iso8859_7 => 6,
            CharacterSet::Iso8859_10 => 7,
            CharacterSet::Iso8859_15 => 8,
        }
    }

    /// Parse from the single-digit payload code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(CharacterSet::Utf8),
            2 => Some(CharacterSet::Iso8859_1),
            3 => Some(CharacterSet::Iso8859_2),
            4 => Some(CharacterSet::Iso8859_4),
            5 => Some(CharacterSet::Iso8859_5),
            6 => Some(CharacterSet::Iso8859_7),
            7 => Some(CharacterSet::Iso8859_10),
            8 => Some(CharacterSet::Iso8859_15),
            _ => None,
        }
    }

    /// Human-readable encoding name.
    pub fn name(&self) -> &'static str {
        match self {
            CharacterSet::Utf8 => "UTF-8",
            CharacterSet::Iso8859_1 => "ISO 8859-1",
            CharacterSet::Iso8859_2 => "ISO 8859-2",
            CharacterSet::Iso8859_4 => "ISO 8859-4",
            CharacterSet::Iso8859_5 => "ISO 8859-5",
            CharacterSet::Iso8859_7 => "ISO 8859-7",
            CharacterSet::Iso8859_10 => "ISO 8859-10",
            CharacterSet::Iso8859_15 => "ISO 8859-15",
        }
    }
}

impl Default for CharacterSet {
    fn default() -> Self {
        CharacterSet::Utf8
    }
}
