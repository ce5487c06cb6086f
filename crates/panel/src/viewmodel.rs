use std::fmt::Display;
use userpanel_domain::{Contact, Entity, User, ID};

/// Field access the list filter needs from a record.
pub trait Filterable {
    /// Fields the free-text search matches against
    fn search_fields(&self) -> Vec<&str>;
    /// Exact-match status label, for record types that carry one
    fn status_text(&self) -> Option<&str>;
}

impl Filterable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.role]
    }

    fn status_text(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

impl Filterable for Contact {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.address, &self.cell_number]
    }

    fn status_text(&self) -> Option<&str> {
        None
    }
}

/// The active search term and status filter. Empty strings mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub status: String,
}

impl FilterState {
    pub fn new<S: Into<String>>(search: S, status: S) -> Self {
        Self {
            search: search.into(),
            status: status.into(),
        }
    }
}

/// Shown/total pair for the count badge. Both numbers are surfaced whenever
/// they differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count {
    pub shown: usize,
    pub total: usize,
}

impl Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.shown != self.total {
            write!(f, "{} of {}", self.shown, self.total)
        } else {
            write!(f, "{}", self.total)
        }
    }
}

/// In-memory snapshot of the remote collection plus the single "currently
/// editing" slot. The snapshot is only ever replaced wholesale, never
/// patched record by record.
#[derive(Debug)]
pub struct ViewModel<R> {
    snapshot: Vec<R>,
    editing: Option<ID>,
}

impl<R> ViewModel<R> {
    pub fn new() -> Self {
        Self {
            snapshot: Vec::new(),
            editing: None,
        }
    }

    pub fn set_snapshot(&mut self, records: Vec<R>) {
        self.snapshot = records;
    }

    pub fn clear(&mut self) {
        self.snapshot.clear();
    }

    pub fn records(&self) -> &[R] {
        &self.snapshot
    }

    pub fn total(&self) -> usize {
        self.snapshot.len()
    }

    pub fn count(&self, shown: usize) -> Count {
        Count {
            shown,
            total: self.snapshot.len(),
        }
    }

    pub fn editing(&self) -> Option<&ID> {
        self.editing.as_ref()
    }

    pub fn begin_edit(&mut self, id: ID) {
        self.editing = Some(id);
    }

    pub fn stop_edit(&mut self) {
        self.editing = None;
    }

    pub fn find(&self, id: &ID) -> Option<&R>
    where
        R: Entity<ID>,
    {
        self.snapshot.iter().find(|r| &r.id() == id)
    }

    /// Records matching the active filter, in snapshot order. The search
    /// term matches case-insensitively as a substring, the status filter
    /// matches exactly, and both predicates are ANDed.
    pub fn filter<'a>(&'a self, filter: &FilterState) -> Vec<&'a R>
    where
        R: Filterable,
    {
        let term = filter.search.trim().to_lowercase();
        self.snapshot
            .iter()
            .filter(|record| {
                let matches_term = term.is_empty()
                    || record
                        .search_fields()
                        .iter()
                        .any(|field| field.to_lowercase().contains(&term));
                let matches_status = filter.status.is_empty()
                    || record.status_text() == Some(filter.status.as_str());
                matches_term && matches_status
            })
            .collect()
    }
}

impl<R> Default for ViewModel<R> {
    fn default() -> Self {
        Self::new()
    }
}
