// SPDX-License-Identifier: MPL-2.0
//! Navigation menu selection.
//!
//! Exactly one item is selected after any selection of a known id; an
//! unknown id deselects everything and leaves the visible page alone.

/// Content pages hosted by the stacked area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Widgets,
    Create,
}

/// A navigation entry mapping to one content page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    id: &'static str,
    label_key: &'static str,
    glyph: &'static str,
    page: Page,
    selected: bool,
}

impl MenuItem {
    #[must_use]
    pub const fn new(id: &'static str, label_key: &'static str, glyph: &'static str, page: Page) -> Self {
        Self {
            id,
            label_key,
            glyph,
            page,
            selected: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub fn label_key(&self) -> &'static str {
        self.label_key
    }

    /// Short symbol shown when the menu is collapsed.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        self.glyph
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

#[derive(Debug, Clone)]
pub struct MenuSelection {
    items: Vec<MenuItem>,
    current_page: Page,
    /// Human-readable name of the page last switched to.
    viewing: Option<String>,
}

impl MenuSelection {
    /// Creates a menu with nothing selected.
    ///
    /// The stacked area shows the first item's page until a selection lands,
    /// matching a freshly built page stack.
    #[must_use]
    pub fn new(items: Vec<MenuItem>) -> Self {
        let current_page = items.first().map_or(Page::Home, MenuItem::page);
        Self {
            items,
            current_page,
            viewing: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    #[must_use]
    pub fn current_page(&self) -> Page {
        self.current_page
    }

    #[must_use]
    pub fn viewing(&self) -> Option<&str> {
        self.viewing.as_deref()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.selected)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Selects `id` and switches to its page.
    ///
    /// Every item's flag is recomputed as `item.id == id`. The page and the
    /// "viewing" title only change when `id` names a known item. Returns
    /// whether the page switched.
    pub fn select(&mut self, id: &str) -> bool {
        for item in &mut self.items {
            item.selected = item.id == id;
        }

        match self.items.iter().find(|item| item.id == id) {
            Some(item) => {
                self.current_page = item.page;
                self.viewing = Some(humanize(id));
                true
            }
            None => {
                tracing::warn!(menu = id, "unknown menu item; page left unchanged");
                false
            }
        }
    }
}

/// Underscores become spaces and each word is title-cased.
///
/// A letter is upper-cased when it follows a non-letter and lower-cased
/// otherwise, so `"new_item"` reads `"New Item"`.
#[must_use]
pub fn humanize(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut previous_is_letter = false;
    for ch in id.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if previous_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(ch);
            previous_is_letter = false;
        }
    }
    out
}
