//! Country selection with newest-load-wins semantics.

use super::{FlagView, PlaceholderPalette};
use crate::types::FlagDocument;

/// Identifies one country selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Tracks the current country selection and the view loaded for it.
///
/// Every selection issues a new ticket. A load that finishes with anything
/// but the latest ticket is dropped, so a slow earlier load can never
/// replace a newer one.
#[derive(Debug, Default)]
pub struct ViewerSession {
    palette: PlaceholderPalette,
    latest: u64,
    selected: Option<String>,
    view: Option<FlagView>,
}

impl ViewerSession {
    pub fn new(palette: PlaceholderPalette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    /// Select a country and return the ticket its load must present.
    pub fn select(&mut self, country: impl Into<String>) -> LoadTicket {
        self.latest += 1;
        self.selected = Some(country.into());
        LoadTicket(self.latest)
    }

    /// Install a loaded document. Returns false if the ticket is stale.
    pub fn finish_load(&mut self, ticket: LoadTicket, document: FlagDocument) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        self.view = Some(FlagView::load(document, &self.palette));
        true
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn view(&self) -> Option<&FlagView> {
        self.view.as_ref()
    }
}
