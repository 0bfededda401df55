//! Status bar entry registry.
//!
//! Components register small entries (text, tooltip, colors, click command)
//! that a host renders along the bottom of the window, grouped by
//! [`Alignment`] and ordered by [`Priority`]. Users hide and show entries by
//! id, independently of whether an entry with that id is currently
//! registered.
//!
//! ```
//! use workbench_statusbar::{Alignment, StatusEntry, StatusbarService};
//!
//! let service = StatusbarService::new();
//! let cursor = service
//! 	.add_entry(StatusEntry::new("Ln 1, Col 1"), "editor.cursor", "Cursor Position", Alignment::Right, Some(100.0))
//! 	.unwrap();
//! cursor.update(StatusEntry::new("Ln 2, Col 5"));
//!
//! let right = service.entries(Alignment::Right);
//! assert_eq!(right[0].entry.text, "Ln 2, Col 5");
//! ```
//!
//! Rendering, icon substitution, theme color resolution and command dispatch
//! belong to the host.

pub mod color;
pub mod config;
pub mod emitter;
pub mod entry;
pub mod error;
pub mod key;
pub mod service;
pub mod visibility;

pub use color::{EntryColor, ThemeColor};
pub use config::{DuplicatePolicy, StatusbarConfig};
pub use emitter::{Emitter, Subscription};
pub use entry::{Alignment, Priority, StatusEntry};
pub use error::{ConfigError, StatusbarError};
pub use key::EntryKey;
pub use service::{EntryAccessor, EntryEvent, EntrySnapshot, StatusbarService, VisibilityChange};
pub use visibility::VisibilityPrefs;
