// Descriptor Support
//
// Descriptors modify the behavior of a reduction.
// Descriptor fields:
// - Terminal exit: stop as soon as the running value equals the monoid's terminal
// - Chunk: fold stored entries in fixed-size pieces and combine the partials

use crate::core::error::{GraphBlasError, Result};

/// Descriptor for modifying reduction behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Stop at the first terminal match (enabled by default)
    pub terminal_exit: bool,

    /// Fold stored entries in chunks of this many values
    pub chunk: Option<usize>,
}

impl Descriptor {
    /// Create a new descriptor with default settings
    pub fn new() -> Self {
        Self {
            terminal_exit: true,
            chunk: None,
        }
    }

    /// Create descriptor that always folds every stored entry
    pub fn full_fold() -> Self {
        Self {
            terminal_exit: false,
            ..Self::new()
        }
    }

    /// Create descriptor with chunked evaluation
    pub fn with_chunk(chunk: usize) -> Self {
        Self {
            chunk: Some(chunk),
            ..Self::new()
        }
    }

    /// Set terminal exit
    pub fn set_terminal_exit(&mut self, value: bool) -> &mut Self {
        self.terminal_exit = value;
        self
    }

    /// Set chunk size
    pub fn set_chunk(&mut self, value: Option<usize>) -> &mut Self {
        self.chunk = value;
        self
    }

    /// Validate descriptor for reductions
    pub fn validate_for_reduce(&self) -> Result<()> {
        if self.chunk == Some(0) {
            return Err(GraphBlasError::InvalidValue(
                "chunk size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Descriptor {
    fn default() -> Self {
        Self::new()
    }
}

/// Descriptor fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorField {
    /// Terminal early exit
    TerminalExit,
    /// Chunked evaluation
    Chunk,
}

/// Descriptor values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorValue {
    /// Default behavior
    Default,
    /// Disable the feature
    Disable,
    /// Chunk size
    Chunk(usize),
}

impl Descriptor {
    /// Set a descriptor field to a value
    pub fn set_field(&mut self, field: DescriptorField, value: DescriptorValue) -> Result<()> {
        match (field, value) {
            (DescriptorField::TerminalExit, DescriptorValue::Default) => {
                self.terminal_exit = true;
                Ok(())
            }
            (DescriptorField::TerminalExit, DescriptorValue::Disable) => {
                self.terminal_exit = false;
                Ok(())
            }
            (DescriptorField::Chunk, DescriptorValue::Default) => {
                self.chunk = None;
                Ok(())
            }
            (DescriptorField::Chunk, DescriptorValue::Chunk(0)) => Err(
                GraphBlasError::InvalidValue("chunk size must be positive".to_string()),
            ),
            (DescriptorField::Chunk, DescriptorValue::Chunk(n)) => {
                self.chunk = Some(n);
                Ok(())
            }
            (field, value) => Err(GraphBlasError::InvalidValue(format!(
                "{:?} cannot be set to {:?}",
                field, value
            ))),
        }
    }

    /// Get a descriptor field value
    pub fn get_field(&self, field: DescriptorField) -> DescriptorValue {
        match field {
            DescriptorField::TerminalExit => {
                if self.terminal_exit {
                    DescriptorValue::Default
                } else {
                    DescriptorValue::Disable
                }
            }
            DescriptorField::Chunk => match self.chunk {
                Some(n) => DescriptorValue::Chunk(n),
                None => DescriptorValue::Default,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_creation() {
        let desc = Descriptor::new();
        assert!(desc.terminal_exit);
        assert_eq!(desc.chunk, None);
        assert_eq!(desc, Descriptor::default());
    }

    #[test]
    fn test_descriptor_full_fold() {
        let desc = Descriptor::full_fold();
        assert!(!desc.terminal_exit);
        assert_eq!(desc.chunk, None);
    }

    #[test]
    fn test_descriptor_chaining() {
        let mut desc = Descriptor::new();
        desc.set_terminal_exit(false).set_chunk(Some(16));

        assert!(!desc.terminal_exit);
        assert_eq!(desc.chunk, Some(16));
    }

    #[test]
    fn test_descriptor_validation() {
        assert!(Descriptor::with_chunk(4).validate_for_reduce().is_ok());
        assert!(Descriptor::with_chunk(0).validate_for_reduce().is_err());
    }

    #[test]
    fn test_descriptor_field_set_get() {
        let mut desc = Descriptor::new();

        desc.set_field(DescriptorField::TerminalExit, DescriptorValue::Disable)
            .unwrap();
        assert_eq!(
            desc.get_field(DescriptorField::TerminalExit),
            DescriptorValue::Disable
        );

        desc.set_field(DescriptorField::Chunk, DescriptorValue::Chunk(8))
            .unwrap();
        assert_eq!(desc.get_field(DescriptorField::Chunk), DescriptorValue::Chunk(8));

        desc.set_field(DescriptorField::Chunk, DescriptorValue::Default)
            .unwrap();
        assert_eq!(desc.get_field(DescriptorField::Chunk), DescriptorValue::Default);
    }

    #[test]
    fn test_descriptor_invalid_field_value() {
        let mut desc = Descriptor::new();

        assert!(desc
            .set_field(DescriptorField::TerminalExit, DescriptorValue::Chunk(3))
            .is_err());
        assert!(desc
            .set_field(DescriptorField::Chunk, DescriptorValue::Chunk(0))
            .is_err());
        assert!(desc
            .set_field(DescriptorField::Chunk, DescriptorValue::Disable)
            .is_err());
    }
}
