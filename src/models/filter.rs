//! Filter state.

/// Text filter over the thumbnail set.
///
/// Only holds the last applied query. The pending keystroke timer lives in
/// the [`Debouncer`](crate::core::Debouncer) that feeds the filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Raw query as typed, untrimmed.
    pub query: String,
}
