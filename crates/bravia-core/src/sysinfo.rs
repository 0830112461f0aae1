// System info cache: device identification/status attributes.
//
// Attributes are kept in the order the device sent them; the required
// `model` attribute doubles as the console's prompt label.

use indexmap::IndexMap;
use tracing::debug;

use bravia_api::models::SystemInformation;

use crate::error::CoreError;
use crate::session::DeviceSession;

/// Cached system attributes. Empty until the first successful update.
#[derive(Debug, Default)]
pub struct SystemInfoCache {
    attributes: IndexMap<String, String>,
    model: Option<String>,
}

impl SystemInfoCache {
    /// Refresh the cache from the device, returning the model name.
    ///
    /// Requires a resolved address (precondition error otherwise). On
    /// failure the cache is left unchanged.
    pub async fn update(&mut self, session: &DeviceSession) -> Result<String, CoreError> {
        let info = session.system_information().await?;
        Ok(self.apply(info))
    }

    fn apply(&mut self, info: SystemInformation) -> String {
        debug!(model = %info.model, "system info cache rebuilt");
        self.attributes = info.attributes;
        self.model = Some(info.model.clone());
        info.model
    }

    /// Cached attributes in received order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The model attribute from the last successful update.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
