//! Select-all checkbox with a real third state.
//!
//! ```rust,ignore
//! <SelectAllCheckbox
//!     state=Signal::derive(move || list.with(|l| l.selection_state()))
//!     on_change=Callback::new(move |check_all: bool| list.update(|l| l.select_all(check_all)))
//! />
//! ```

use leptos::prelude::*;

/// Aggregate selection over a set of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    None,
    Some,
    All,
}

impl SelectionState {
    /// An empty set counts as nothing selected
    pub fn from_counts(checked: usize, total: usize) -> Self {
        if checked == 0 || total == 0 {
            SelectionState::None
        } else if checked >= total {
            SelectionState::All
        } else {
            SelectionState::Some
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, SelectionState::All)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, SelectionState::Some)
    }
}

#[component]
pub fn SelectAllCheckbox(
    #[prop(into)]
    state: Signal<SelectionState>,
    /// true = check every row, false = clear every row
    on_change: Callback<bool>,
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only, there is no attribute for it
    Effect::new(move |_| {
        let indeterminate = state.get().is_indeterminate();
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(indeterminate);
        }
    });

    view! {
        <label class="select-all" style="display: flex; align-items: center; gap: 6px; cursor: pointer;">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="select-all__checkbox"
                prop:checked=move || state.get().is_checked()
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
            {label}
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tri_state_over_three_rows() {
        assert_eq!(SelectionState::from_counts(0, 3), SelectionState::None);
        assert_eq!(SelectionState::from_counts(1, 3), SelectionState::Some);
        assert_eq!(SelectionState::from_counts(2, 3), SelectionState::Some);
        assert_eq!(SelectionState::from_counts(3, 3), SelectionState::All);
    }

    #[test]
    fn test_empty_list_is_unchecked() {
        let state = SelectionState::from_counts(0, 0);
        assert_eq!(state, SelectionState::None);
        assert!(!state.is_checked());
        assert!(!state.is_indeterminate());
    }
}
