//! Filter status counter.
//!
//! Rendered into `#filter-status` when the page provides one.

use leptos::prelude::*;

/// How many thumbnails the current filter leaves visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterCounts {
    pub shown: usize,
    pub total: usize,
}

impl FilterCounts {
    pub fn all(total: usize) -> Self {
        Self { shown: total, total }
    }

    pub fn label(&self) -> String {
        let noun = if self.total == 1 { "image" } else { "images" };
        if self.shown == self.total {
            format!("{} {}", self.total, noun)
        } else {
            format!("{} of {} {}", self.shown, self.total, noun)
        }
    }
}

#[component]
pub fn FilterStatus(counts: RwSignal<FilterCounts>) -> impl IntoView {
    view! {
        <span class="filter-status-count" aria-live="polite">
            {move || counts.get().label()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(FilterCounts::all(3).label(), "3 images");
        assert_eq!(FilterCounts::all(1).label(), "1 image");
        assert_eq!(FilterCounts { shown: 2, total: 3 }.label(), "2 of 3 images");
        assert_eq!(FilterCounts { shown: 0, total: 0 }.label(), "0 images");
    }
}
