//! # Delimiter Token Types

use crate::types::TokenTypeId;

const DELIM_TYPES: &[TokenTypeId] = &[SplitTokenType::Delim as TokenTypeId];
const TEXT_TYPES: &[TokenTypeId] = &[SplitTokenType::Text as TokenTypeId];

/// The token kinds reported by the delimiter tokenizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum SplitTokenType {
    /// A single delimiter byte.
    Delim = 0,

    /// The (possibly empty) run of bytes before a delimiter.
    Text = 1,
}

impl SplitTokenType {
    /// All kinds, by type index.
    pub const ALL: [SplitTokenType; 2] = [Self::Delim, Self::Text];

    /// The type index.
    pub const fn id(self) -> TokenTypeId {
        self as TokenTypeId
    }

    /// The single-element type list carried by tokens of this kind.
    pub const fn types(self) -> &'static [TokenTypeId] {
        match self {
            Self::Delim => DELIM_TYPES,
            Self::Text => TEXT_TYPES,
        }
    }

    /// Look up a kind by type index.
    pub fn from_id(id: TokenTypeId) -> Option<Self> {
        Self::ALL.get(id).copied()
    }

    /// A short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Delim => "DELIM",
            Self::Text => "TEXT",
        }
    }
}
