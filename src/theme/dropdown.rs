//! Style switcher dropdown
//!
//! Explicit two-state machine replacing document-wide click listeners:
//!
//! ```text
//!            ButtonClick               ButtonClick
//!   Closed ──────────────▶ Open ──────────────────▶ Closed
//!                           │ ItemClick(key)  → Closed, yields key
//!                           │ OutsideClick    → Closed
//! ```
//!
//! Item clicks never count as button clicks, even though items live inside
//! the button's subtree.

/// Dropdown visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// User input routed to the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    /// Click directly on the switcher button
    ButtonClick,
    /// Click on the dropdown item for a style key
    ItemClick(String),
    /// Click anywhere outside the button's subtree
    OutsideClick,
}

/// One dropdown item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownItem {
    pub key: String,
    pub label: String,
    pub active: bool,
}

/// Dropdown of available styles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDropdown {
    state: DropdownState,
    items: Vec<DropdownItem>,
}

impl StyleDropdown {
    /// Closed dropdown with one item per `(key, label)`, none active
    pub fn new<K, L>(items: impl IntoIterator<Item = (K, L)>) -> Self
    where
        K: Into<String>,
        L: Into<String>,
    {
        Self {
            state: DropdownState::Closed,
            items: items
                .into_iter()
                .map(|(key, label)| DropdownItem {
                    key: key.into(),
                    label: label.into(),
                    active: false,
                })
                .collect(),
        }
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    pub fn items(&self) -> &[DropdownItem] {
        &self.items
    }

    /// Key of the item carrying the active marker
    pub fn active(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.active)
            .map(|item| item.key.as_str())
    }

    /// Move the active marker to `key`; every other item is cleared
    pub fn mark_active(&mut self, key: &str) {
        for item in &mut self.items {
            item.active = item.key == key;
        }
    }

    /// Apply one event; an item click yields the chosen key
    pub fn handle(&mut self, event: DropdownEvent) -> Option<String> {
        match event {
            DropdownEvent::ButtonClick => {
                self.state = match self.state {
                    DropdownState::Closed => DropdownState::Open,
                    DropdownState::Open => DropdownState::Closed,
                };
                None
            }
            DropdownEvent::ItemClick(key) => {
                self.state = DropdownState::Closed;
                Some(key)
            }
            DropdownEvent::OutsideClick => {
                self.state = DropdownState::Closed;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dropdown() -> StyleDropdown {
        StyleDropdown::new([("default", "Default"), ("paper", "Paper")])
    }

    #[test]
    fn test_button_click_toggles() {
        let mut dd = dropdown();
        assert_eq!(dd.state(), DropdownState::Closed);
        dd.handle(DropdownEvent::ButtonClick);
        assert!(dd.is_open());
        dd.handle(DropdownEvent::ButtonClick);
        assert!(!dd.is_open());
    }

    #[test]
    fn test_item_click_closes_and_yields_key() {
        let mut dd = dropdown();
        dd.handle(DropdownEvent::ButtonClick);
        let chosen = dd.handle(DropdownEvent::ItemClick("paper".to_string()));
        assert_eq!(chosen.as_deref(), Some("paper"));
        assert!(!dd.is_open());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut dd = dropdown();
        dd.handle(DropdownEvent::OutsideClick);
        assert!(!dd.is_open());
        dd.handle(DropdownEvent::ButtonClick);
        dd.handle(DropdownEvent::OutsideClick);
        assert!(!dd.is_open());
    }

    #[test]
    fn test_exactly_one_active() {
        let mut dd = dropdown();
        assert_eq!(dd.active(), None);
        dd.mark_active("default");
        dd.mark_active("paper");
        assert_eq!(dd.active(), Some("paper"));
        assert_eq!(dd.items().iter().filter(|i| i.active).count(), 1);
    }
}
