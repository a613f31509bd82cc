//! Navigation collaborator and in-memory history

/// Where navigation happens
///
/// The host implements this over its real location (a browser history, a
/// desktop router). [`History`] is an in-memory implementation.
pub trait Navigator {
    /// Current location path
    fn current_path(&self) -> &str;

    /// Move to `path`
    fn navigate(&mut self, path: &str);
}

/// Outcome of [`DecoratedRoute::go_to`](crate::DecoratedRoute::go_to)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NavigationOutcome {
    /// The navigator moved to `path`
    Navigated { path: String },
    /// Already at `path`; the navigator was not touched
    Unchanged { path: String },
    /// Absolute route: nothing happened, `path` is its literal url
    Absolute { path: String },
    /// Off-site route: the caller opens `url` itself
    External { url: String },
}

impl NavigationOutcome {
    /// Path or url the outcome refers to
    pub fn target(&self) -> &str {
        match self {
            NavigationOutcome::Navigated { path }
            | NavigationOutcome::Unchanged { path }
            | NavigationOutcome::Absolute { path } => path,
            NavigationOutcome::External { url } => url,
        }
    }

    /// Check if the navigator moved
    pub fn is_navigated(&self) -> bool {
        matches!(self, NavigationOutcome::Navigated { .. })
    }
}

/// In-memory navigation history
#[derive(Debug, Clone)]
pub struct History {
    /// Navigation history stack
    entries: Vec<String>,
    /// Current position in history
    current: usize,
}

impl History {
    /// Create a history positioned at `/`
    pub fn new() -> Self {
        Self::starting_at("/")
    }

    /// Create a history positioned at `path`
    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            entries: vec![path.into()],
            current: 0,
        }
    }

    /// Navigate to a new path, dropping forward history
    pub fn push(&mut self, path: String) {
        self.entries.truncate(self.current + 1);
        self.entries.push(path);
        self.current += 1;
    }

    /// Replace current path
    pub fn replace(&mut self, path: String) {
        self.entries[self.current] = path;
    }

    /// Go back in history, returning the new current path
    pub fn back(&mut self) -> Option<&str> {
        if self.can_go_back() {
            self.current -= 1;
            Some(&self.entries[self.current])
        } else {
            None
        }
    }

    /// Go forward in history, returning the new current path
    pub fn forward(&mut self) -> Option<&str> {
        if self.can_go_forward() {
            self.current += 1;
            Some(&self.entries[self.current])
        } else {
            None
        }
    }

    /// Check if can go back
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Check if can go forward
    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.entries.len()
    }

    /// Number of entries, including forward history
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a history holds at least its starting path
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for History {
    fn current_path(&self) -> &str {
        &self.entries[self.current]
    }

    fn navigate(&mut self, path: &str) {
        self.push(path.to_string());
    }
}
