//! Ordered menu tree
//!
//! Entries keep insertion order, which defines the navigation sequence.
//! A label lookup table gives direct access by name.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::option::{MenuOption, OptionContext};

/// One-shot callback run when its entry is selected
pub type Action = Box<dyn FnMut()>;

/// A node of the menu tree
pub enum MenuEntry {
    /// Nested menu
    Submenu(MenuTree),
    /// Callback invoked on select
    Action(Action),
    /// Interactive option adjusted in place
    Option(Box<dyn MenuOption>),
}

impl MenuEntry {
    pub const fn is_submenu(&self) -> bool {
        matches!(self, Self::Submenu(_))
    }

    pub const fn is_action(&self) -> bool {
        matches!(self, Self::Action(_))
    }

    pub const fn is_option(&self) -> bool {
        matches!(self, Self::Option(_))
    }
}

impl fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submenu(tree) => f.debug_tuple("Submenu").field(tree).finish(),
            Self::Action(_) => f.write_str("Action"),
            Self::Option(_) => f.write_str("Option"),
        }
    }
}

/// Ordered mapping from label to entry
#[derive(Debug, Default)]
pub struct MenuTree {
    entries: Vec<(String, MenuEntry)>,
    positions: BTreeMap<String, usize>,
}

impl MenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry.
    ///
    /// An existing label keeps its position and gets the new entry.
    pub fn insert(&mut self, label: impl Into<String>, entry: MenuEntry) {
        let label = label.into();
        if let Some(&index) = self.positions.get(&label) {
            self.entries[index].1 = entry;
            return;
        }
        self.positions.insert(label.clone(), self.entries.len());
        self.entries.push((label, entry));
    }

    /// Add a nested menu
    #[must_use]
    pub fn submenu(mut self, label: impl Into<String>, tree: MenuTree) -> Self {
        self.insert(label, MenuEntry::Submenu(tree));
        self
    }

    /// Add a callback entry
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, action: impl FnMut() + 'static) -> Self {
        self.insert(label, MenuEntry::Action(Box::new(action)));
        self
    }

    /// Add an interactive option
    #[must_use]
    pub fn option(mut self, label: impl Into<String>, option: impl MenuOption + 'static) -> Self {
        self.insert(label, MenuEntry::Option(Box::new(option)));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(label, _)| label.as_str())
    }

    pub fn entry(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index).map(|(_, entry)| entry)
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut MenuEntry> {
        self.entries.get_mut(index).map(|(_, entry)| entry)
    }

    /// Index of the entry with `label`
    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    pub fn get(&self, label: &str) -> Option<&MenuEntry> {
        self.position(label).and_then(|index| self.entry(index))
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut MenuEntry> {
        self.position(label).and_then(|index| self.entry_mut(index))
    }

    /// Entries in navigation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MenuEntry)> {
        self.entries.iter().map(|(label, entry)| (label.as_str(), entry))
    }

    /// Follow a path of submenu indices
    ///
    /// Returns `None` if any index is not a submenu.
    pub fn descend(&self, path: &[usize]) -> Option<&MenuTree> {
        match path.split_first() {
            None => Some(self),
            Some((&index, rest)) => match self.entry(index) {
                Some(MenuEntry::Submenu(tree)) => tree.descend(rest),
                _ => None,
            },
        }
    }

    pub fn descend_mut(&mut self, path: &[usize]) -> Option<&mut MenuTree> {
        match path.split_first() {
            None => Some(self),
            Some((&index, rest)) => match self.entry_mut(index) {
                Some(MenuEntry::Submenu(tree)) => tree.descend_mut(rest),
                _ => None,
            },
        }
    }

    /// Run `setup` on every option in this tree and all nested trees
    pub(crate) fn setup_options(&mut self, ctx: &mut OptionContext<'_>) {
        for (_, entry) in &mut self.entries {
            match entry {
                MenuEntry::Submenu(tree) => tree.setup_options(ctx),
                MenuEntry::Option(option) => option.setup(ctx),
                MenuEntry::Action(_) => {}
            }
        }
    }
}
