//! Upload Settings - View Model

use contracts::domain::a002_upload_settings::aggregate::{
    SettingsError, UploadSettings, CHUNK_SIZE_MAX, CHUNK_SIZE_MIN,
};
use crate::shared::notifications::Severity;
use contracts::domain::a002_upload_settings::dto::UploadSettingsPatch;
use leptos::prelude::*;

/// Raw form values, exactly as typed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsForm {
    pub selected_llm: String,
    pub prompt_text: String,
    pub chunk_size: String,
    pub chunk_overlap: String,
}

impl Default for SettingsForm {
    fn default() -> Self {
        let defaults = UploadSettings::default();
        Self {
            selected_llm: defaults.selected_llm,
            prompt_text: defaults.prompt_text,
            chunk_size: defaults.chunk_size.to_string(),
            chunk_overlap: defaults.chunk_overlap.to_string(),
        }
    }
}

impl SettingsForm {
    /// Overwrite only the fields the server sent
    pub fn apply(&mut self, patch: &UploadSettingsPatch) {
        if let Some(v) = &patch.selected_llm {
            self.selected_llm = v.clone();
        }
        if let Some(v) = &patch.prompt_text {
            self.prompt_text = v.clone();
        }
        if let Some(v) = patch.chunk_size {
            self.chunk_size = v.to_string();
        }
        if let Some(v) = patch.chunk_overlap {
            self.chunk_overlap = v.to_string();
        }
    }

    /// Ordered checks, first failure wins. A number that does not parse
    /// fails its range check, and the overlap is only looked at once the
    /// chunk size is known to be in range.
    pub fn validate(&self) -> Result<UploadSettings, SettingsError> {
        if self.selected_llm.trim().is_empty() {
            return Err(SettingsError::ModelNotSelected);
        }
        let chunk_size = self
            .chunk_size
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|size| (CHUNK_SIZE_MIN..=CHUNK_SIZE_MAX).contains(size))
            .ok_or(SettingsError::ChunkSizeOutOfRange)?;
        let chunk_overlap = self
            .chunk_overlap
            .trim()
            .parse::<i64>()
            .map_err(|_| SettingsError::ChunkOverlapOutOfRange)?;

        let settings = UploadSettings {
            selected_llm: self.selected_llm.clone(),
            prompt_text: self.prompt_text.clone(),
            chunk_size,
            chunk_overlap,
        };
        settings.validate()?;
        Ok(settings)
    }
}

/// Counts dialog opens; a load answered for an earlier open is dropped
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadGeneration(u64);

impl LoadGeneration {
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

/// What the dialog does with a finished save
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveFeedback {
    pub severity: Severity,
    pub message: String,
    pub close_dialog: bool,
}

impl SaveFeedback {
    pub fn from_outcome(outcome: Result<String, String>) -> Self {
        match outcome {
            Ok(message) => Self {
                severity: Severity::Success,
                message,
                close_dialog: true,
            },
            Err(message) => Self {
                severity: Severity::Error,
                message,
                close_dialog: false,
            },
        }
    }
}

#[derive(Clone, Copy)]
pub struct UploadSettingsVm {
    pub selected_llm: RwSignal<String>,
    pub prompt_text: RwSignal<String>,
    pub chunk_size: RwSignal<String>,
    pub chunk_overlap: RwSignal<String>,
    pub is_saving: RwSignal<bool>,
    pub load_generation: RwSignal<LoadGeneration>,
}

impl UploadSettingsVm {
    pub fn new() -> Self {
        let form = SettingsForm::default();
        Self {
            selected_llm: RwSignal::new(form.selected_llm),
            prompt_text: RwSignal::new(form.prompt_text),
            chunk_size: RwSignal::new(form.chunk_size),
            chunk_overlap: RwSignal::new(form.chunk_overlap),
            is_saving: RwSignal::new(false),
            load_generation: RwSignal::new(LoadGeneration::default()),
        }
    }

    pub fn snapshot(&self) -> SettingsForm {
        SettingsForm {
            selected_llm: self.selected_llm.get_untracked(),
            prompt_text: self.prompt_text.get_untracked(),
            chunk_size: self.chunk_size.get_untracked(),
            chunk_overlap: self.chunk_overlap.get_untracked(),
        }
    }

    pub fn load(&self, form: SettingsForm) {
        self.selected_llm.set(form.selected_llm);
        self.prompt_text.set(form.prompt_text);
        self.chunk_size.set(form.chunk_size);
        self.chunk_overlap.set(form.chunk_overlap);
    }

    /// Reset to defaults and tag the load that is about to start
    pub fn begin_load(&self) -> u64 {
        self.load(SettingsForm::default());
        self.load_generation
            .try_update(|g| g.advance())
            .unwrap_or_default()
    }

    /// Overlay the server's values unless a newer open has started since
    pub fn finish_load(&self, generation: u64, patch: &UploadSettingsPatch) -> bool {
        if !self
            .load_generation
            .with_untracked(|g| g.is_current(generation))
        {
            return false;
        }
        let mut form = self.snapshot();
        form.apply(patch);
        self.load(form);
        true
    }
}
