//! Status bar configuration.
//!
//! ```toml
//! hidden = ["editor.encoding", "status.git"]
//! duplicate_ids = "reject"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;


/// What [`add_entry`](crate::StatusbarService::add_entry) does when a live
/// entry already uses the requested id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
	/// Register alongside the existing entry. Both follow the id's visibility.
	#[default]
	Share,
	/// Fail with [`StatusbarError::DuplicateId`](crate::StatusbarError::DuplicateId).
	Reject,
}

/// Startup configuration for a [`StatusbarService`](crate::StatusbarService).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatusbarConfig {
	/// Entry ids hidden until shown again.
	pub hidden: Vec<String>,
	/// Duplicate id handling.
	pub duplicate_ids: DuplicatePolicy,
}

impl StatusbarConfig {
	/// Parses a TOML document.
	pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(src)?)
	}

	/// Reads and parses the TOML file at `path`.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let config = Self::from_toml_str(&src)?;
		tracing::debug!(path = %path.display(), hidden = config.hidden.len(), "Loaded status bar config");
		Ok(config)
	}

	pub fn with_hidden<I, S>(mut self, hidden: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.hidden.extend(hidden.into_iter().map(Into::into));
		self
	}

	pub fn with_duplicate_ids(mut self, policy: DuplicatePolicy) -> Self {
		self.duplicate_ids = policy;
		self
	}
}
