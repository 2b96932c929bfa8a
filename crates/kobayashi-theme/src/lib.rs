//! Kobayashi Theme Utilities
//!
//! Dark/light mode switching for the Kobayashi site: class-token toggles on
//! the document root and mode persistence under the fixed storage key.
//!
//! The document root and the store are passed in as capabilities
//! ([`RootClasses`], [`ModeStore`]), so every operation runs against fakes
//! outside a browser. [`DocumentRoot`] and [`LocalStorage`] are the browser
//! implementations.
//!
//! # Example
//!
//! ```ignore
//! use kobayashi_theme::{DocumentRoot, LocalStorage, apply_mode, resolve_mode, store_mode};
//!
//! let root = DocumentRoot::attach().expect("browser environment");
//! let store = LocalStorage::open().expect("storage available");
//!
//! let mode = resolve_mode(&store);
//! apply_mode(&root, mode);
//! store_mode(&store, mode);
//! ```

pub mod dom;
pub mod mode;
pub mod store;

pub use dom::{DocumentRoot, RootClasses};
pub use mode::{
    add_dark, add_light, apply_mode, mode_from_store, remove_dark, remove_light, resolve_mode,
    store_mode, system_preference, toggle_mode,
};
pub use store::{LocalStorage, MemoryStore, ModeStore};
