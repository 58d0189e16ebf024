//! Entity identifier classification
//!
//! Exons and proteins can be looked up by surrogate integer key or by
//! business key (Ensembl exon id, UniProt id) interchangeably. A purely
//! numeric identifier targets the surrogate key; anything else targets the
//! business key.

/// A parsed lookup identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKey {
    /// Surrogate integer primary key
    Surrogate(i32),
    /// Natural/business key such as an Ensembl or UniProt id
    Business(String),
}

impl EntityKey {
    pub fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(id) = raw.parse::<i32>() {
                return EntityKey::Surrogate(id);
            }
        }
        EntityKey::Business(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_identifier_is_surrogate() {
        assert_eq!(EntityKey::parse("42"), EntityKey::Surrogate(42));
    }

    #[test]
    fn test_ensembl_identifier_is_business() {
        assert_eq!(
            EntityKey::parse("ENSE00003527892"),
            EntityKey::Business("ENSE00003527892".to_string())
        );
    }

    #[test]
    fn test_uniprot_identifier_is_business() {
        assert_eq!(
            EntityKey::parse("P04637"),
            EntityKey::Business("P04637".to_string())
        );
    }

    #[test]
    fn test_overflowing_digits_fall_back_to_business() {
        let raw = "99999999999999999999";
        assert_eq!(EntityKey::parse(raw), EntityKey::Business(raw.to_string()));
    }

    #[test]
    fn test_empty_string_is_business() {
        assert_eq!(EntityKey::parse(""), EntityKey::Business(String::new()));
    }
}
