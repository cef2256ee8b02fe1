use crate::shared::components::select_all_checkbox::SelectionState;
use leptos::prelude::*;
use uuid::Uuid;

pub const NO_FILE_SELECTED: &str = "Please select a file to upload.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentStatus {
    Active,
    Inactive,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Active => "active",
            DocumentStatus::Inactive => "inactive",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            DocumentStatus::Active => "#16a34a",
            DocumentStatus::Inactive => "#9ca3af",
        }
    }
}

/// One row of the file list. Lives for the page session only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileListEntry {
    pub id: Uuid,
    pub name: String,
    pub status: DocumentStatus,
    pub selected: bool,
}

impl FileListEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            status: DocumentStatus::Active,
            selected: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DocumentListState {
    pub items: Vec<FileListEntry>,
    /// The row clicked last; drives the evidence panel
    pub focused: Option<Uuid>,
    pub is_uploading: bool,
}

impl DocumentListState {
    /// One fresh unchecked row per name
    pub fn add_files<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.items.len();
        self.items.extend(names.into_iter().map(FileListEntry::new));
        self.items.len() - before
    }

    pub fn set_selected(&mut self, id: Uuid, selected: bool) {
        if let Some(entry) = self.items.iter_mut().find(|e| e.id == id) {
            entry.selected = selected;
        }
    }

    /// Bulk action, applies to every row regardless of the current mix
    pub fn select_all(&mut self, selected: bool) {
        for entry in &mut self.items {
            entry.selected = selected;
        }
    }

    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|e| e.selected).count()
    }

    pub fn selection_state(&self) -> SelectionState {
        SelectionState::from_counts(self.selected_count(), self.items.len())
    }

    /// Make `id` the sole focused row; returns its name
    pub fn focus(&mut self, id: Uuid) -> Option<String> {
        let name = self.items.iter().find(|e| e.id == id)?.name.clone();
        self.focused = Some(id);
        Some(name)
    }

    /// Rows of an upload batch go inactive when the batch fails and back to
    /// active when a later upload succeeds
    pub fn mark_batch(&mut self, names: &[String], uploaded: bool) {
        let status = if uploaded {
            DocumentStatus::Active
        } else {
            DocumentStatus::Inactive
        };
        for entry in self.items.iter_mut().filter(|e| names.contains(&e.name)) {
            entry.status = status;
        }
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|e| e.id != id);
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.items.len() != before
    }
}

/// Guard for the upload button
pub fn check_pending(count: usize) -> Result<(), String> {
    if count == 0 {
        Err(NO_FILE_SELECTED.to_string())
    } else {
        Ok(())
    }
}

pub fn create_state() -> RwSignal<DocumentListState> {
    RwSignal::new(DocumentListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rows() -> DocumentListState {
        let mut state = DocumentListState::default();
        state.add_files(["a.pdf", "b.docx", "c.txt"]);
        state
    }

    #[test]
    fn test_new_rows_are_active_and_unchecked() {
        let state = three_rows();
        assert_eq!(state.items.len(), 3);
        assert!(state
            .items
            .iter()
            .all(|e| e.status == DocumentStatus::Active && !e.selected));
        assert_eq!(state.selection_state(), SelectionState::None);
    }

    #[test]
    fn test_tri_state_follows_rows() {
        let mut state = three_rows();
        let ids: Vec<Uuid> = state.items.iter().map(|e| e.id).collect();

        state.set_selected(ids[0], true);
        assert_eq!(state.selection_state(), SelectionState::Some);
        state.set_selected(ids[1], true);
        assert_eq!(state.selection_state(), SelectionState::Some);
        state.set_selected(ids[2], true);
        assert_eq!(state.selection_state(), SelectionState::All);
        state.set_selected(ids[1], false);
        assert_eq!(state.selection_state(), SelectionState::Some);
    }

    #[test]
    fn test_select_all_overrides_mix() {
        let mut state = three_rows();
        let first = state.items[0].id;
        state.set_selected(first, true);

        state.select_all(true);
        assert_eq!(state.selected_count(), 3);
        state.select_all(false);
        assert_eq!(state.selection_state(), SelectionState::None);
    }

    #[test]
    fn test_added_rows_join_the_tri_state() {
        let mut state = three_rows();
        state.select_all(true);
        assert_eq!(state.add_files(vec!["d.md".to_string()]), 1);
        assert_eq!(state.selection_state(), SelectionState::Some);
    }

    #[test]
    fn test_focus_is_exclusive_and_cleared_on_remove() {
        let mut state = three_rows();
        let (a, b) = (state.items[0].id, state.items[1].id);

        assert_eq!(state.focus(a).as_deref(), Some("a.pdf"));
        assert_eq!(state.focus(b).as_deref(), Some("b.docx"));
        assert_eq!(state.focused, Some(b));
        assert_eq!(state.focus(Uuid::new_v4()), None);
        assert_eq!(state.focused, Some(b));

        assert!(state.remove(b));
        assert_eq!(state.focused, None);
        assert!(!state.remove(b));
    }

    #[test]
    fn test_failed_batch_goes_inactive() {
        let mut state = three_rows();
        let batch = vec!["a.pdf".to_string(), "c.txt".to_string()];

        state.mark_batch(&batch, false);
        let statuses: Vec<DocumentStatus> = state.items.iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![
                DocumentStatus::Inactive,
                DocumentStatus::Active,
                DocumentStatus::Inactive
            ]
        );

        state.mark_batch(&batch, true);
        assert!(state.items.iter().all(|e| e.status == DocumentStatus::Active));
    }

    #[test]
    fn test_upload_guard() {
        assert_eq!(check_pending(0), Err(NO_FILE_SELECTED.to_string()));
        assert_eq!(check_pending(2), Ok(()));
    }
}
