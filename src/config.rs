/// Popup configuration: backend address, notice text and control ids

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::PopupError;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5001";
pub const DEFAULT_NOTICE: &str = "Ruby is listening! You can talk to her now.";
pub const DEFAULT_OPEN_ID: &str = "open-ruby";
pub const DEFAULT_TALK_ID: &str = "talk-ruby";

/// Browsing context every tab is opened in
pub const TAB_TARGET: &str = "_blank";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PopupConfig {
    pub backend_url: String,
    pub notice: String,
    pub open_id: String,
    pub talk_id: String,
}

impl PopupConfig {
    pub fn new() -> Self {
        PopupConfig {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            notice: DEFAULT_NOTICE.to_string(),
            open_id: DEFAULT_OPEN_ID.to_string(),
            talk_id: DEFAULT_TALK_ID.to_string(),
        }
    }

    /// Check the backend address and the control ids.
    ///
    /// The address must be an absolute http(s) URL with a host. The ids must be
    /// non-empty, free of surrounding whitespace and distinct, otherwise a control
    /// could never find its element or both would bind the same one.
    pub fn validate(&self) -> Result<(), PopupError> {
        let url = Url::parse(&self.backend_url)
            .map_err(|e| PopupError::InvalidConfig(format!("backendUrl {:?}: {}", self.backend_url, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(PopupError::InvalidConfig(format!(
                "backendUrl must use http or https, got {}",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(PopupError::InvalidConfig("backendUrl has no host".to_string()));
        }

        if self.open_id.trim().is_empty() || self.talk_id.trim().is_empty() {
            return Err(PopupError::InvalidConfig("control ids must not be empty".to_string()));
        }
        for id in [&self.open_id, &self.talk_id] {
            if id.trim() != id.as_str() {
                return Err(PopupError::InvalidConfig(format!(
                    "control id {:?} has surrounding whitespace",
                    id
                )));
            }
        }
        if self.open_id == self.talk_id {
            return Err(PopupError::InvalidConfig(format!(
                "openId and talkId are both {:?}",
                self.open_id
            )));
        }

        Ok(())
    }
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self::new()
    }
}
