use tracing::warn;

use crate::error::{Result, XmlError};

/// Default nesting limit: unbounded, the parser keeps open elements on the heap
pub const DEFAULT_MAX_DEPTH: usize = usize::MAX;
/// Default input size limit: unbounded
pub const DEFAULT_MAX_SIZE: usize = usize::MAX;

/// Configuration for parser limits
///
/// The default accepts any well-formed document. Callers handling untrusted
/// input opt into tighter limits through [`XmlParser::with_config`].
///
/// [`XmlParser::with_config`]: crate::parser::XmlParser::with_config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth of open elements
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
}

/// Tracks nesting depth during parsing
#[derive(Debug)]
pub struct ParsingContext {
    current_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl ParserConfig {
    pub fn validate_input_size(&self, size: usize) -> Result<()> {
        if size > self.max_size {
            warn!(size, max = self.max_size, "input rejected");
            return Err(XmlError::parse_failure(format!(
                "input size ({} bytes) exceeds maximum allowed ({})",
                size, self.max_size
            )));
        }
        Ok(())
    }
}

impl Default for ParsingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ParsingContext {
    pub fn new() -> Self {
        Self { current_depth: 0 }
    }

    pub fn depth(&self) -> usize {
        self.current_depth
    }

    pub fn enter_nested(&mut self, config: &ParserConfig) -> Result<()> {
        self.current_depth = self.current_depth.saturating_add(1);
        if self.current_depth > config.max_depth {
            warn!(max = config.max_depth, "nesting limit reached");
            return Err(XmlError::parse_failure(format!(
                "maximum nesting depth ({}) exceeded",
                config.max_depth
            )));
        }
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }
}
