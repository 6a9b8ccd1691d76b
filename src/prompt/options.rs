//! Option list model.
//!
//! The list the user navigates is their options plus one synthetic trailing
//! entry that opens the inline editor.

/// Label of the synthetic trailing entry.
pub const OTHER_LABEL: &str = "Other...";

/// The navigable options: user entries followed by the sentinel.
///
/// The sentinel is recognized by position (last index), never by label, so a
/// user option literally named "Other..." stays a plain option.
#[derive(Debug, Clone)]
pub struct OptionList {
    labels: Vec<String>,
}

impl OptionList {
    /// Build from the user's options, appending the sentinel.
    ///
    /// Callers validate non-emptiness first; an `OptionList` always has at
    /// least two entries.
    pub fn new(user_options: Vec<String>) -> Self {
        let mut labels = user_options;
        labels.push(OTHER_LABEL.to_string());
        Self { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at `index`. Selection indices are clamped to `0..len()` by the
    /// state machine, so this never sees an out-of-range index.
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// Whether `index` is the sentinel entry.
    pub fn is_other(&self, index: usize) -> bool {
        index + 1 == self.labels.len()
    }

    pub fn last_index(&self) -> usize {
        self.labels.len() - 1
    }
}
