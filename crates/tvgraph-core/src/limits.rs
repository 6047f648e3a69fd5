//! Input validation limits and traversal bounds

/// Levels walked when checking inherited facts (Episode -> Season -> Series)
pub const MAX_INHERITANCE_DEPTH: usize = 3;

/// Maximum length for item identifiers (64 chars)
pub const MAX_ITEM_ID_LEN: usize = 64;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyItemId,
    ItemIdTooLong { len: usize, max: usize },
    ItemIdHasWhitespace,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyItemId => write!(f, "Item id cannot be empty"),
            Self::ItemIdTooLong { len, max } => {
                write!(f, "Item id too long: {} chars (max {})", len, max)
            }
            Self::ItemIdHasWhitespace => write!(f, "Item id cannot contain whitespace"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate the shape of an item identifier before it reaches the store
pub fn validate_item_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyItemId);
    }
    if id.len() > MAX_ITEM_ID_LEN {
        return Err(ValidationError::ItemIdTooLong {
            len: id.len(),
            max: MAX_ITEM_ID_LEN,
        });
    }
    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::ItemIdHasWhitespace);
    }
    Ok(())
}
