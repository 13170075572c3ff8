//! Command registry
//!
//! Maps protocol codes to their command schemas. A registry is populated
//! once, before the first lookup, and read-only afterwards; encode and
//! decode are then pure functions of `(code, bytes)`.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::commands;
use crate::error::{MspError, Result};
use crate::protocol::Command;

/// Registry of command schemas, keyed by protocol code
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: BTreeMap<u8, Command>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the standard MSP v1 command table
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for command in commands::ALL {
            registry
                .register(*command)
                .expect("standard command table holds unique codes");
        }
        registry
    }

    /// Register a command schema.
    ///
    /// Fails with `DuplicateCommand` if the code is already present.
    pub fn register(&mut self, command: Command) -> Result<()> {
        if self.commands.contains_key(&command.code()) {
            return Err(MspError::DuplicateCommand {
                code: command.code(),
            });
        }

        tracing::debug!(code = command.code(), name = command.name(), "registered command");
        self.commands.insert(command.code(), command);
        Ok(())
    }

    /// Look up the command schema for a protocol code.
    ///
    /// Fails with `UnknownCommand` if no entry matches.
    pub fn lookup(&self, code: u8) -> Result<&Command> {
        self.commands
            .get(&code)
            .ok_or(MspError::UnknownCommand { code })
    }

    /// Whether a code is registered
    pub fn contains(&self, code: u8) -> bool {
        self.commands.contains_key(&code)
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over registered commands in code order
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }
}

/// Process-wide registry holding the standard MSP v1 command table.
///
/// Initialized on first use and immutable thereafter; safe to share across
/// threads without locking.
pub fn default_registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::standard)
}
