use crate::models::{ModelConfig, ModelDraft};

/// Local, unsaved copy of the server-held model collection. Invariant: rows
/// are sorted ascending by priority and priority values are pairwise
/// distinct; moves only ever swap two existing values.
#[derive(Clone, Debug, Default)]
pub struct ModelStaging {
    models: Vec<ModelConfig>,
    dirty: bool,
}

impl ModelStaging {
    /// Absorb a server snapshot, replacing anything staged locally.
    pub fn load(&mut self, mut models: Vec<ModelConfig>) {
        models.sort_by_key(|m| m.priority);
        self.models = models;
        self.dirty = false;
    }

    pub fn models(&self) -> &[ModelConfig] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clone of the staged rows, in priority order, for a save request.
    pub fn snapshot(&self) -> Vec<ModelConfig> {
        self.models.clone()
    }

    /// Swap priorities with the previous row. No-op on the first row.
    pub fn move_up(&mut self, index: usize) {
        if index == 0 || index >= self.models.len() {
            return;
        }
        self.swap_priorities(index, index - 1);
    }

    /// Swap priorities with the next row. No-op on the last row.
    pub fn move_down(&mut self, index: usize) {
        if index + 1 >= self.models.len() {
            return;
        }
        self.swap_priorities(index, index + 1);
    }

    fn swap_priorities(&mut self, a: usize, b: usize) {
        let pa = self.models[a].priority;
        let pb = self.models[b].priority;
        self.models[a].priority = pb;
        self.models[b].priority = pa;
        self.models.sort_by_key(|m| m.priority);
        self.dirty = true;
    }

    pub fn toggle_enabled(&mut self, index: usize) {
        if let Some(model) = self.models.get_mut(index) {
            model.enabled = !model.enabled;
            self.dirty = true;
        }
    }

    /// Stage a new model at the end of the priority order. The backend is not
    /// contacted; the row only exists locally until the next save.
    pub fn add(&mut self, draft: ModelDraft) -> Result<(), String> {
        if draft.model_name.trim().is_empty() {
            return Err("model name is required".into());
        }
        let priority = self
            .models
            .iter()
            .map(|m| m.priority)
            .max()
            .map_or(1, |max| max + 1);
        self.models.push(ModelConfig {
            id: None,
            provider: draft.provider,
            model_name: draft.model_name.trim().to_string(),
            priority,
            enabled: draft.enabled,
            use_case: draft.use_case,
        });
        self.dirty = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Provider, UseCase};

    fn model(name: &str, priority: i64) -> ModelConfig {
        ModelConfig {
            id: Some(name.to_string()),
            provider: Provider::OpenRouter,
            model_name: name.to_string(),
            priority,
            enabled: true,
            use_case: UseCase::Generation,
        }
    }

    fn staged(priorities: &[i64]) -> ModelStaging {
        let mut staging = ModelStaging::default();
        staging.load(
            priorities
                .iter()
                .enumerate()
                .map(|(i, p)| model(&format!("m{i}"), *p))
                .collect(),
        );
        staging
    }

    fn assert_invariants(staging: &ModelStaging) {
        let priorities: Vec<i64> = staging.models().iter().map(|m| m.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(priorities, sorted, "priorities must be distinct and ascending");
    }

    #[test]
    fn load_sorts_by_priority_and_clears_dirty() {
        let mut staging = ModelStaging::default();
        staging.load(vec![model("b", 5), model("a", 1), model("c", 3)]);
        let names: Vec<&str> = staging.models().iter().map(|m| m.model_name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "b"]);
        assert!(!staging.is_dirty());
    }

    #[test]
    fn move_up_swaps_with_previous_row() {
        let mut staging = staged(&[1, 2, 3]);
        staging.move_up(1);
        let names: Vec<&str> = staging.models().iter().map(|m| m.model_name.as_str()).collect();
        assert_eq!(names, vec!["m1", "m0", "m2"]);
        assert_eq!(staging.models()[0].priority, 1);
        assert_eq!(staging.models()[1].priority, 2);
        assert!(staging.is_dirty());
        assert_invariants(&staging);
    }

    #[test]
    fn move_down_swaps_with_next_row() {
        let mut staging = staged(&[1, 2, 3]);
        staging.move_down(0);
        let names: Vec<&str> = staging.models().iter().map(|m| m.model_name.as_str()).collect();
        assert_eq!(names, vec!["m1", "m0", "m2"]);
        assert_invariants(&staging);
    }

    #[test]
    fn boundary_moves_are_no_ops() {
        let mut staging = staged(&[1, 2, 3]);
        staging.move_up(0);
        staging.move_down(2);
        staging.move_up(9);
        staging.move_down(9);
        let names: Vec<&str> = staging.models().iter().map(|m| m.model_name.as_str()).collect();
        assert_eq!(names, vec!["m0", "m1", "m2"]);
        assert!(!staging.is_dirty());
    }

    #[test]
    fn moves_preserve_distinct_priorities_with_gaps() {
        // Server-assigned priorities are not necessarily contiguous.
        let mut staging = staged(&[1, 5, 20, 21]);
        staging.move_down(1);
        staging.move_down(2);
        staging.move_up(3);
        staging.move_up(1);
        staging.move_up(1);
        assert_invariants(&staging);
        assert_eq!(staging.len(), 4);
    }

    #[test]
    fn repeated_moves_walk_a_row_through_the_order() {
        let mut staging = staged(&[1, 2, 3, 4]);
        staging.move_down(0);
        staging.move_down(1);
        staging.move_down(2);
        staging.move_down(3);
        let names: Vec<&str> = staging.models().iter().map(|m| m.model_name.as_str()).collect();
        assert_eq!(names, vec!["m1", "m2", "m3", "m0"]);
        assert_invariants(&staging);
    }

    #[test]
    fn add_rejects_blank_name_without_mutating() {
        let mut staging = staged(&[1, 2]);
        let err = staging
            .add(ModelDraft {
                model_name: "   ".into(),
                ..ModelDraft::default()
            })
            .expect_err("blank name");
        assert_eq!(err, "model name is required");
        assert_eq!(staging.len(), 2);
        assert!(!staging.is_dirty());
    }

    #[test]
    fn add_assigns_max_priority_plus_one() {
        let mut staging = staged(&[1, 7]);
        staging
            .add(ModelDraft {
                model_name: "x-ai/grok-beta".into(),
                ..ModelDraft::default()
            })
            .expect("add");
        let added = staging.models().last().expect("row");
        assert_eq!(added.priority, 8);
        assert!(added.id.is_none());
        assert!(staging.is_dirty());
        assert_invariants(&staging);
    }

    #[test]
    fn add_to_empty_buffer_starts_at_one() {
        let mut staging = ModelStaging::default();
        staging
            .add(ModelDraft {
                model_name: "glm-4".into(),
                provider: Provider::Zai,
                ..ModelDraft::default()
            })
            .expect("add");
        assert_eq!(staging.models()[0].priority, 1);
    }

    #[test]
    fn toggle_enabled_flips_one_row() {
        let mut staging = staged(&[1, 2]);
        staging.toggle_enabled(1);
        assert!(staging.models()[0].enabled);
        assert!(!staging.models()[1].enabled);
        assert!(staging.is_dirty());
    }

    #[test]
    fn reload_after_save_replaces_local_state() {
        let mut staging = staged(&[1, 2]);
        staging.toggle_enabled(0);
        assert!(staging.is_dirty());

        // Successful save: the server snapshot (with assigned ids) wins.
        let mut reloaded = staging.snapshot();
        for (i, m) in reloaded.iter_mut().enumerate() {
            m.id = Some(format!("srv-{i}"));
        }
        staging.load(reloaded);
        assert!(!staging.is_dirty());
        assert_eq!(staging.models()[0].id.as_deref(), Some("srv-0"));
    }
}
