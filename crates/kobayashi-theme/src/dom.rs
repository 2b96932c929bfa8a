//! Document-root class list capability.

use web_sys::DomTokenList;

/// Class list of the single root element the theme layer mutates.
///
/// Adding a present token or removing an absent one must be a no-op, per
/// `DOMTokenList` semantics. Implementations keep that contract so the mode
/// operations stay idempotent.
pub trait RootClasses {
    /// Add a class token.
    fn add(&self, token: &str);

    /// Remove a class token.
    fn remove(&self, token: &str);

    /// Whether a class token is present.
    fn contains(&self, token: &str) -> bool;
}

/// The `<html>` element's class list.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    classes: DomTokenList,
}

impl DocumentRoot {
    /// Attach to the document root.
    ///
    /// Returns `None` outside a browser environment.
    pub fn attach() -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            let document = web_sys::window()?.document()?;
            let root = document.document_element()?;
            Some(Self {
                classes: root.class_list(),
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }
}

impl RootClasses for DocumentRoot {
    fn add(&self, token: &str) {
        let _ = self.classes.add_1(token);
    }

    fn remove(&self, token: &str) {
        let _ = self.classes.remove_1(token);
    }

    fn contains(&self, token: &str) -> bool {
        self.classes.contains(token)
    }
}
