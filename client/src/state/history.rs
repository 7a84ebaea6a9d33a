//! Chat history pagination.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use wire::endpoints::HISTORY_PAGE_SIZE;

/// Zero-based page cursor over the chat log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pager {
    pub page: u64,
    pub total: u64,
}

impl Pager {
    pub fn offset(self) -> u64 {
        self.page * u64::from(HISTORY_PAGE_SIZE)
    }

    pub fn has_previous(self) -> bool {
        self.page > 0
    }

    pub fn has_next(self) -> bool {
        (self.page + 1) * u64::from(HISTORY_PAGE_SIZE) < self.total
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self { page: self.page.saturating_sub(1), ..self }
    }

    #[must_use]
    pub fn next(self) -> Self {
        if self.has_next() { Self { page: self.page + 1, ..self } } else { self }
    }
}

/// Confidence column: rounded percentage, `-` when missing or zero.
pub fn confidence_cell(confidence: Option<f64>) -> String {
    match confidence {
        Some(c) if c > 0.0 => format!("{}%", wire::confidence_percent(Some(c))),
        _ => "-".to_owned(),
    }
}
