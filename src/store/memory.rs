use std::cell::RefCell;
use std::rc::Rc;

use super::{Medium, StoreError};

/// In-memory medium: one shared text cell, the same shape a remote
/// single-cell backend exposes. Clones share the cell, which lets tests
/// keep a handle on what a store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryMedium {
    cell: Rc<RefCell<Option<String>>>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(text: impl Into<String>) -> Self {
        Self {
            cell: Rc::new(RefCell::new(Some(text.into()))),
        }
    }

    /// Raw cell content, for assertions on the persisted form.
    pub fn content(&self) -> Option<String> {
        self.cell.borrow().clone()
    }
}

impl Medium for MemoryMedium {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.cell.borrow().clone())
    }

    fn write(&self, text: &str) -> Result<(), StoreError> {
        *self.cell.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
