use crate::{common::error::AppError, domain::ledger::Ledger};

/// Appends a new buddy to the roster and returns the stored name for the
/// acknowledgement message.
pub fn handle(ledger: &mut Ledger, name: &str) -> Result<String, AppError> {
    ledger.buddies.add(name)
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::{common::error::AppError, domain::ledger::Ledger};

    #[test]
    fn adds_trimmed_names_in_entry_order() {
        let mut ledger = Ledger::new();

        assert_eq!(handle(&mut ledger, "  Ana  ").unwrap(), "Ana");
        assert_eq!(handle(&mut ledger, "Bo").unwrap(), "Bo");

        assert_eq!(
            ledger.buddies.names(),
            &["Ana".to_string(), "Bo".to_string()]
        );
    }

    #[test]
    fn rejects_duplicate_names_without_effect() {
        let mut ledger = Ledger::new();
        handle(&mut ledger, "Ana").unwrap();

        let err = handle(&mut ledger, " Ana ").unwrap_err();
        assert!(matches!(err, AppError::DuplicateName(name) if name == "Ana"));
        assert_eq!(ledger.buddies.len(), 1);
    }

    #[test]
    fn rejects_empty_and_whitespace_names() {
        let mut ledger = Ledger::new();

        assert!(matches!(handle(&mut ledger, ""), Err(AppError::EmptyName)));
        assert!(matches!(handle(&mut ledger, "   "), Err(AppError::EmptyName)));
        assert!(ledger.buddies.is_empty());
    }

    #[test]
    fn keeps_names_as_entered() {
        let mut ledger = Ledger::new();

        handle(&mut ledger, "José").unwrap();
        handle(&mut ledger, "ana").unwrap();

        // Case matters: "ana" and "Ana" are different buddies.
        assert!(ledger.buddies.contains("José"));
        assert!(ledger.buddies.contains("ana"));
        assert!(!ledger.buddies.contains("Ana"));
    }
}
