//! Theme mode operations over the DOM and storage capabilities.
//!
//! The add/remove pairs leave `dark` and `light` independently
//! addressable, matching the class-based styling contract; [`apply_mode`]
//! is the explicit two-state toggle built on top of them.

use kobayashi_core::{MODE_STORAGE_KEY, ThemeMode};

use crate::{dom::RootClasses, store::ModeStore};

/// Add the `dark` class token to the root element.
pub fn add_dark(root: &impl RootClasses) {
    root.add(ThemeMode::Dark.class_token());
}

/// Remove the `dark` class token from the root element.
pub fn remove_dark(root: &impl RootClasses) {
    root.remove(ThemeMode::Dark.class_token());
}

/// Add the `light` class token to the root element.
pub fn add_light(root: &impl RootClasses) {
    root.add(ThemeMode::Light.class_token());
}

/// Remove the `light` class token from the root element.
pub fn remove_light(root: &impl RootClasses) {
    root.remove(ThemeMode::Light.class_token());
}

/// Read the persisted mode.
///
/// Returns `None` when no mode was ever stored. An unrecognized stored
/// value also reads as absent, since only `dark` and `light` can be
/// written through [`store_mode`].
pub fn mode_from_store(store: &impl ModeStore) -> Option<ThemeMode> {
    let raw = store.get(MODE_STORAGE_KEY)?;
    let mode = ThemeMode::from_token(&raw);
    if mode.is_none() {
        log::warn!("ignoring unrecognized stored theme mode: {raw}");
    }
    mode
}

/// Persist the mode under [`MODE_STORAGE_KEY`], overwriting any prior
/// value.
pub fn store_mode(store: &impl ModeStore, mode: ThemeMode) {
    store.set(MODE_STORAGE_KEY, mode.class_token());
}

/// Apply a mode exclusively: add its class token and remove the other.
pub fn apply_mode(root: &impl RootClasses, mode: ThemeMode) {
    root.add(mode.class_token());
    root.remove(mode.opposite().class_token());
}

/// System color-scheme preference, when the browser exposes one.
pub fn system_preference() -> Option<ThemeMode> {
    #[cfg(target_arch = "wasm32")]
    {
        let query = web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()?;
        Some(if query.matches() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Resolve the effective mode: stored preference first, then the system
/// preference, then light.
pub fn resolve_mode(store: &impl ModeStore) -> ThemeMode {
    mode_from_store(store)
        .or_else(system_preference)
        .unwrap_or(ThemeMode::Light)
}

/// Flip the resolved mode, apply it exclusively and persist it.
pub fn toggle_mode(root: &impl RootClasses, store: &impl ModeStore) -> ThemeMode {
    let next = resolve_mode(store).opposite();
    apply_mode(root, next);
    store_mode(store, next);
    next
}
