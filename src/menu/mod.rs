//! Menu engine
//!
//! Walks the menu tree and switches between navigating and adjusting an
//! option. Commands either move through the tree or are forwarded to the
//! option being adjusted. Call [`Menu::redraw`] after each command to update
//! the display.

mod tree;

use alloc::vec::Vec;

pub use tree::{Action, MenuEntry, MenuTree};

use crate::CharDisplay;
use crate::bounds::{next_index, previous_index};
use crate::command::Command;
use crate::config::ConfigStore;
#[cfg(feature = "std")]
use crate::error::ConfigError;
use crate::option::{MenuOption, OptionContext};
use crate::renderer::{Canvas, ROW_COUNT, SELECTION_GLYPH};

/// Interaction mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Commands move the cursor, enter submenus and run actions
    #[default]
    Navigate,
    /// Commands are forwarded to the selected option
    Adjust,
}

/// Menu engine - owns the tree, the display and the settings store
pub struct Menu<D: CharDisplay> {
    tree: MenuTree,
    display: D,
    config: ConfigStore,

    /// Index of each entered submenu, root first
    path: Vec<usize>,
    /// Cursor within the current submenu
    position: usize,
    mode: Mode,

    #[cfg(feature = "std")]
    flushed: bool,
}

impl<D: CharDisplay> Menu<D> {
    /// Create the menu and set up every option from `config`
    pub fn new(tree: MenuTree, display: D, config: ConfigStore) -> Self {
        let mut menu = Self {
            tree,
            display,
            config,
            path: Vec::new(),
            position: 0,
            mode: Mode::Navigate,
            #[cfg(feature = "std")]
            flushed: false,
        };
        let mut ctx = OptionContext {
            config: &mut menu.config,
            display: &mut menu.display,
        };
        menu.tree.setup_options(&mut ctx);
        menu
    }

    /// Create the menu with settings loaded from the default config files
    #[cfg(feature = "std")]
    pub fn with_default_config(tree: MenuTree, display: D) -> Self {
        Self::new(tree, display, ConfigStore::load_default())
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    /// Submenu indices from the root to the current submenu
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ConfigStore {
        &mut self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Submenu the cursor is in
    pub fn current_submenu(&self) -> Option<&MenuTree> {
        self.tree.descend(&self.path)
    }

    pub fn current_label(&self) -> Option<&str> {
        self.current_submenu()?.label(self.position)
    }

    pub fn current_entry(&self) -> Option<&MenuEntry> {
        self.current_submenu()?.entry(self.position)
    }

    /// Dispatch a button command
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Up => self.up(),
            Command::Down => self.down(),
            Command::Left => self.left(),
            Command::Right => self.right(),
            Command::Select => self.select(),
        }
    }

    pub fn up(&mut self) {
        match self.mode {
            Mode::Navigate => self.move_cursor(previous_index),
            Mode::Adjust => {
                self.with_option(|option, ctx| option.up(ctx));
            }
        }
    }

    pub fn down(&mut self) {
        match self.mode {
            Mode::Navigate => self.move_cursor(next_index),
            Mode::Adjust => {
                self.with_option(|option, ctx| option.down(ctx));
            }
        }
    }

    pub fn left(&mut self) {
        match self.mode {
            Mode::Navigate => self.leave_submenu(),
            Mode::Adjust => {
                let stay = self
                    .with_option(|option, ctx| option.left(ctx))
                    .unwrap_or(false);
                if !stay {
                    self.set_mode(Mode::Navigate);
                }
            }
        }
    }

    pub fn right(&mut self) {
        match self.mode {
            Mode::Navigate => self.select_entry(),
            Mode::Adjust => {
                self.with_option(|option, ctx| option.right(ctx));
            }
        }
    }

    pub fn select(&mut self) {
        match self.mode {
            Mode::Navigate => self.select_entry(),
            Mode::Adjust => {
                let exit = self
                    .with_option(|option, ctx| option.select(ctx))
                    .unwrap_or(true);
                if exit {
                    self.set_mode(Mode::Navigate);
                }
            }
        }
    }

    /// Render the current state to the display
    pub fn redraw(&mut self) {
        match self.mode {
            Mode::Navigate => self.redraw_navigation(),
            Mode::Adjust => {
                let entry = self
                    .tree
                    .descend(&self.path)
                    .and_then(|menu| menu.entry(self.position));
                if let Some(MenuEntry::Option(option)) = entry {
                    option.redraw(&mut Canvas::new(&mut self.display));
                }
            }
        }
    }

    /// Flush settings to the primary config file and consume the menu
    #[cfg(feature = "std")]
    pub fn shutdown(mut self) -> Result<(), ConfigError> {
        self.flushed = true;
        self.config.flush()
    }

    fn redraw_navigation(&mut self) {
        let Some(menu) = self.tree.descend(&self.path) else {
            return;
        };
        let mut canvas = Canvas::new(&mut self.display);
        let len = menu.len();
        if len == 0 {
            for row in 0..ROW_COUNT {
                canvas.clear_row(row);
            }
            return;
        }

        let label = move |index| menu.label(index).unwrap_or_default();
        canvas.write_entry(1, label(self.position), SELECTION_GLYPH);

        if len > 2 {
            canvas.write_entry(0, label(previous_index(self.position, len)), ' ');
        } else {
            canvas.clear_row(0);
        }

        if len > 1 {
            canvas.write_entry(2, label(next_index(self.position, len)), ' ');
        } else {
            canvas.clear_row(2);
        }
    }

    fn move_cursor(&mut self, step: fn(usize, usize) -> usize) {
        let len = self.current_submenu().map_or(0, MenuTree::len);
        if len > 0 {
            self.position = step(self.position, len);
        }
    }

    fn leave_submenu(&mut self) {
        if let Some(position) = self.path.pop() {
            log::debug!("leaving submenu, back to entry {}", position);
            self.position = position;
        }
    }

    /// Enter a submenu, start adjusting an option or run an action
    fn select_entry(&mut self) {
        let Some(menu) = self.tree.descend_mut(&self.path) else {
            return;
        };
        let adjust = match menu.entry_mut(self.position) {
            Some(MenuEntry::Submenu(_)) => {
                log::debug!("entering submenu {}", self.position);
                self.path.push(self.position);
                self.position = 0;
                false
            }
            Some(MenuEntry::Action(action)) => {
                log::debug!("running action {}", self.position);
                action();
                false
            }
            Some(MenuEntry::Option(_)) => true,
            None => false,
        };
        if adjust {
            self.set_mode(Mode::Adjust);
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::debug!("menu mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Run `f` on the selected option, if the cursor is on one
    fn with_option<R>(
        &mut self,
        f: impl FnOnce(&mut dyn MenuOption, &mut OptionContext<'_>) -> R,
    ) -> Option<R> {
        let menu = self.tree.descend_mut(&self.path)?;
        let Some(MenuEntry::Option(option)) = menu.entry_mut(self.position) else {
            return None;
        };
        let mut ctx = OptionContext {
            config: &mut self.config,
            display: &mut self.display,
        };
        Some(f(option.as_mut(), &mut ctx))
    }
}

#[cfg(feature = "std")]
impl<D: CharDisplay> Drop for Menu<D> {
    fn drop(&mut self) {
        if self.flushed {
            return;
        }
        if let Err(err) = self.config.flush() {
            log::error!("{}", err);
        }
    }
}
