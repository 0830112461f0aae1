// Command catalog: the TV's remote-control name -> IRCC code mapping.
//
// Rebuilt wholesale on each successful update, never partially merged.
// Keys are pre-lowercased, so BTreeMap byte order doubles as
// case-insensitive lexicographic order for display.

use std::collections::BTreeMap;

use tracing::debug;

use bravia_api::models::RemoteCommand;

use crate::error::CoreError;
use crate::session::DeviceSession;

/// Cached name -> code mapping. Empty until the first successful update.
#[derive(Debug, Default)]
pub struct CommandCatalog {
    commands: BTreeMap<String, String>,
}

impl CommandCatalog {
    /// Refresh the catalog from the device, returning the entry count.
    ///
    /// On any failure the existing entries are left unchanged and the
    /// error propagates for reporting.
    pub async fn update(&mut self, session: &DeviceSession) -> Result<usize, CoreError> {
        let descriptors = session.remote_controller_info().await?;
        Ok(self.rebuild(descriptors))
    }

    /// Replace the mapping wholesale. Duplicate names (case-insensitive)
    /// overwrite earlier entries without warning.
    fn rebuild(&mut self, descriptors: Vec<RemoteCommand>) -> usize {
        let mut next = BTreeMap::new();
        for descriptor in descriptors {
            next.insert(descriptor.name.to_lowercase(), descriptor.value);
        }
        self.commands = next;
        debug!(count = self.commands.len(), "command catalog rebuilt");
        self.commands.len()
    }

    /// All command names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Names containing `needle` as a substring, in lexicographic order.
    ///
    /// Case-sensitive over the stored lowercase keys: the operator must
    /// type lowercase to match. Intentional behavior, not a bug.
    pub fn search<'a>(&'a self, needle: &str) -> Vec<&'a str> {
        self.commands
            .keys()
            .filter(|name| name.contains(needle))
            .map(String::as_str)
            .collect()
    }

    /// Look up the IRCC code for a name; exact, case-normalized match.
    pub fn code(&self, name: &str) -> Option<&str> {
        self.commands.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
