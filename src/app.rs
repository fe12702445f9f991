//! src/app.rs

use crate::git::{CommitRecord, GitRepo};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Signals whether the main loop should keep running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppReturn {
    Continue,
    Exit,
}

/// Final result of an interactive session, set at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded(CommitRecord),
    Failed(String),
}

/// Cursor over the immutable commit list.
///
/// The list is never empty; the caller bails out before constructing the
/// state when there is nothing to select.
#[derive(Debug)]
pub struct SelectionState {
    items: Vec<CommitRecord>,
    cursor: usize,
}

impl SelectionState {
    pub fn new(items: Vec<CommitRecord>) -> Self {
        debug_assert!(!items.is_empty(), "selection over an empty commit list");
        Self { items, cursor: 0 }
    }

    pub fn items(&self) -> &[CommitRecord] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> &CommitRecord {
        &self.items[self.cursor]
    }

    /// Moves the cursor up one row, stopping at the first item.
    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Moves the cursor down one row, stopping at the last item.
    pub fn move_down(&mut self) {
        if self.cursor < self.items.len() - 1 {
            self.cursor += 1;
        }
    }
}

/// The main application state.
pub struct App {
    repo: GitRepo,
    selection: SelectionState,
    outcome: Option<Outcome>,
    viewport: (u16, u16),
}

impl App {
    pub fn new(repo: GitRepo, commits: Vec<CommitRecord>, viewport: (u16, u16)) -> Self {
        Self {
            repo,
            selection: SelectionState::new(commits),
            outcome: None,
            viewport,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn viewport_width(&self) -> u16 {
        self.viewport.0
    }

    /// Applies one key event to the state machine.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> AppReturn {
        log::debug!("key pressed: {:?}", key.code);

        if self.outcome.is_some() {
            // Terminal states take no further input; the loop is already
            // on its way out.
            return AppReturn::Exit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.selection.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.selection.move_down(),
            KeyCode::Enter => return self.confirm(),
            KeyCode::Char('q') | KeyCode::Esc => return AppReturn::Exit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return AppReturn::Exit;
            }
            _ => {}
        }
        AppReturn::Continue
    }

    /// Stores the new viewport dimensions used for wrap width computation.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        if self.outcome.is_none() {
            log::debug!("window resized: {}x{}", width, height);
            self.viewport = (width, height);
        }
    }

    /// Creates a fixup commit targeting the commit under the cursor and
    /// enters a terminal state with the result.
    fn confirm(&mut self) -> AppReturn {
        let commit = self.selection.selected().clone();
        log::debug!("creating fixup for {}", commit.display_label());
        self.outcome = Some(match self.repo.create_fixup(&commit.id) {
            Ok(()) => Outcome::Succeeded(commit),
            Err(err) => Outcome::Failed(err.to_string()),
        });
        AppReturn::Exit
    }
}
