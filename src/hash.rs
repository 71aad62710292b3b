//! Short content hash used to key checklist state.

/// Initial djb2 state.
const DJB2_SEED: u32 = 5381;

/// Returns the djb2 hash of `text` as lowercase hex.
///
/// Hashes UTF-16 code units rather than bytes, the same units a browser
/// sees through `charCodeAt`. Arithmetic wraps at 32 bits and the result is
/// not zero padded.
///
/// # Arguments
///
/// * `text`: Markdown source to hash
///
/// # Returns
///
/// Hex string of the unsigned 32 bit hash
///
/// # Examples
///
/// ```
/// use planpage::content_hash;
///
/// assert_eq!(content_hash(""), "1505");
/// assert_eq!(content_hash("a"), "2b606");
/// ```
pub fn content_hash(text: &str) -> String {
    let hash = text.encode_utf16().fold(DJB2_SEED, |h, unit| {
        h.wrapping_shl(5).wrapping_add(h).wrapping_add(u32::from(unit))
    });
    format!("{:x}", hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_seed() {
        assert_eq!(content_hash(""), "1505");
    }

    #[test]
    fn test_known_values() {
        assert_eq!(content_hash("a"), "2b606");
        // 177670 * 33 + 98
        assert_eq!(content_hash("ab"), format!("{:x}", 177670u32 * 33 + 98));
    }

    #[test]
    fn test_deterministic() {
        // Arrange
        let markdown = "# Plan\n\n- [ ] Order printers\n- [x] Book room\n";

        // Act
        let first = content_hash(markdown);
        let second = content_hash(markdown);

        // Assert
        assert_eq!(first, second, "Same input should give same hash");
    }

    #[test]
    fn test_changed_input_changes_hash() {
        // Arrange
        let original = "- [ ] Order printers\n";
        let edited = "- [ ] Order printers!\n";

        // Act & Assert
        assert_ne!(content_hash(original), content_hash(edited));
    }

    #[test]
    fn test_wraps_on_long_input() {
        // Arrange
        let long = "x".repeat(10_000);

        // Act
        let hash = content_hash(&long);

        // Assert
        assert!(hash.len() <= 8, "Hash should fit in 32 bits: {}", hash);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hashes_utf16_units() {
        // Arrange: one astral char is two UTF-16 units
        let emoji = "\u{1F600}";
        let expected = [0xD83Du32, 0xDE00]
            .iter()
            .fold(DJB2_SEED, |h, u| h.wrapping_mul(33).wrapping_add(*u));

        // Act
        let hash = content_hash(emoji);

        // Assert
        assert_eq!(hash, format!("{:x}", expected));
    }
}
