use std::path::PathBuf;

/// Errors returned by [`StatusbarService`](crate::StatusbarService).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusbarError {
	/// Entries need an id so users can hide them.
	#[error("status bar entry id must not be empty")]
	EmptyId,
	/// A live entry already uses this id and duplicates are rejected.
	#[error("duplicate status bar entry id: {id}")]
	DuplicateId { id: String },
}

/// Errors loading a [`StatusbarConfig`](crate::StatusbarConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid status bar config: {0}")]
	Parse(#[from] toml::de::Error),
}
