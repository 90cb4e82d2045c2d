use tracing::warn;

use crate::domain::ledger::Ledger;

pub mod file;
pub mod memory;

pub use file::FileMedium;
pub use memory::MemoryMedium;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A backing medium holding the ledger document as one opaque text blob.
/// A local file here; the original deployment kept it in a single
/// spreadsheet cell. The medium never looks inside the text.
pub trait Medium {
    /// Current blob content, `None` when nothing has been written yet.
    fn read(&self) -> Result<Option<String>, StoreError>;

    /// Overwrites the blob wholesale.
    fn write(&self, text: &str) -> Result<(), StoreError>;
}

/// JSON document store over a [`Medium`].
///
/// Loads fail soft: an absent, unreadable or unparsable blob yields the
/// empty ledger, so a fresh or damaged store never blocks startup. Saves
/// report their errors; a failed save leaves the medium untouched.
///
/// # Examples
/// ```
/// use buddy_ledger::store::{DocumentStore, MemoryMedium};
///
/// let store = DocumentStore::new(MemoryMedium::new());
/// let mut ledger = store.load();
/// ledger.buddies.add("Ana").unwrap();
/// store.save(&ledger).unwrap();
/// assert_eq!(store.load(), ledger);
/// ```
pub struct DocumentStore<M> {
    medium: M,
}

impl<M: Medium> DocumentStore<M> {
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    /// Loads the whole document, or the empty ledger when the medium has
    /// nothing usable.
    pub fn load(&self) -> Ledger {
        let text = match self.medium.read() {
            Ok(Some(text)) => text,
            Ok(None) => return Ledger::new(),
            Err(err) => {
                warn!(error = %err, "could not read ledger document, starting empty");
                return Ledger::new();
            }
        };

        match serde_json::from_str(&text) {
            Ok(ledger) => ledger,
            Err(err) => {
                warn!(error = %err, "ledger document did not parse, starting empty");
                Ledger::new()
            }
        }
    }

    /// Serializes the whole document and overwrites the medium. Compact
    /// JSON; non-ASCII names stay unescaped.
    pub fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        let text = serde_json::to_string(ledger)?;
        self.medium.write(&text)
    }
}
