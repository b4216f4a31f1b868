use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    Generation,
    Review,
}

impl PromptKind {
    pub const ALL: [PromptKind; 2] = [PromptKind::Generation, PromptKind::Review];

    pub fn as_str(self) -> &'static str {
        match self {
            PromptKind::Generation => "generation",
            PromptKind::Review => "review",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PromptKind::Generation => "Generation",
            PromptKind::Review => "Review",
        }
    }
}

/// Versioned system prompt as the backend stores it. `version` and the
/// `updated_*` fields are server-assigned; a reload after save picks them up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    pub prompt_type: PromptKind,
    pub system_prompt: String,
    pub updated_at: String,
    pub updated_by: String,
    #[serde(default)]
    pub version: Option<i64>,
}

/// Payload for saving an edited prompt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PromptUpdate {
    pub prompt_type: PromptKind,
    pub system_prompt: String,
}

/// Loaded prompt plus the text being edited, so the editor can tell whether
/// anything actually changed before offering a save.
#[derive(Clone, Debug, Default)]
pub struct PromptDraft {
    loaded: Option<PromptConfig>,
    edited: String,
}

impl PromptDraft {
    pub fn load(&mut self, config: PromptConfig) {
        self.edited = config.system_prompt.clone();
        self.loaded = Some(config);
    }

    pub fn loaded(&self) -> Option<&PromptConfig> {
        self.loaded.as_ref()
    }

    pub fn edited(&self) -> &str {
        &self.edited
    }

    pub fn set_edited(&mut self, text: String) {
        self.edited = text;
    }

    pub fn has_changes(&self) -> bool {
        match &self.loaded {
            Some(config) => self.edited != config.system_prompt,
            None => false,
        }
    }

    /// Discard edits, back to the last loaded text.
    pub fn reset(&mut self) {
        if let Some(config) = &self.loaded {
            self.edited = config.system_prompt.clone();
        }
    }

    pub fn update_payload(&self, kind: PromptKind) -> Result<PromptUpdate, String> {
        if self.edited.trim().is_empty() {
            return Err("prompt cannot be empty".into());
        }
        Ok(PromptUpdate {
            prompt_type: kind,
            system_prompt: self.edited.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(text: &str) -> PromptConfig {
        PromptConfig {
            prompt_type: PromptKind::Generation,
            system_prompt: text.into(),
            updated_at: "2024-01-01T00:00:00Z".into(),
            updated_by: "admin".into(),
            version: Some(3),
        }
    }

    #[test]
    fn draft_tracks_changes_against_loaded_text() {
        let mut draft = PromptDraft::default();
        draft.load(config("analyze the bill"));
        assert!(!draft.has_changes());

        draft.set_edited("analyze the ordinance".into());
        assert!(draft.has_changes());

        draft.reset();
        assert_eq!(draft.edited(), "analyze the bill");
        assert!(!draft.has_changes());
    }

    #[test]
    fn empty_prompt_is_rejected() {
        let mut draft = PromptDraft::default();
        draft.load(config("something"));
        draft.set_edited("  \n".into());
        assert!(draft.update_payload(PromptKind::Generation).is_err());
    }

    #[test]
    fn update_payload_carries_the_edited_text() {
        let mut draft = PromptDraft::default();
        draft.load(config("v1"));
        draft.set_edited("v2".into());
        let payload = draft.update_payload(PromptKind::Review).expect("payload");
        assert_eq!(payload.system_prompt, "v2");
        assert_eq!(payload.prompt_type, PromptKind::Review);
    }

    #[test]
    fn unloaded_draft_reports_no_changes() {
        let draft = PromptDraft::default();
        assert!(!draft.has_changes());
    }
}
