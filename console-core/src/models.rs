use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenRouter,
    Zai,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::OpenRouter, Provider::Zai];

    pub fn as_str(self) -> &'static str {
        match self {
            Provider::OpenRouter => "openrouter",
            Provider::Zai => "zai",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Provider::OpenRouter => "OpenRouter",
            Provider::Zai => "Z.ai",
        }
    }

    pub fn parse(value: &str) -> Result<Provider, String> {
        match value {
            "openrouter" => Ok(Provider::OpenRouter),
            "zai" => Ok(Provider::Zai),
            other => Err(format!("unknown provider '{other}'")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseCase {
    Generation,
    Review,
    Both,
}

impl UseCase {
    pub const ALL: [UseCase; 3] = [UseCase::Generation, UseCase::Review, UseCase::Both];

    pub fn as_str(self) -> &'static str {
        match self {
            UseCase::Generation => "generation",
            UseCase::Review => "review",
            UseCase::Both => "both",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UseCase::Generation => "Generation",
            UseCase::Review => "Review",
            UseCase::Both => "Both",
        }
    }

    pub fn parse(value: &str) -> Result<UseCase, String> {
        match value {
            "generation" => Ok(UseCase::Generation),
            "review" => Ok(UseCase::Review),
            "both" => Ok(UseCase::Both),
            other => Err(format!("unknown use case '{other}'")),
        }
    }
}

/// One row of the model-priority configuration. `id` is assigned by the
/// backend on first save; `priority` is a total-order key where the lowest
/// value wins when the backend picks a model at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub provider: Provider,
    pub model_name: String,
    pub priority: i64,
    pub enabled: bool,
    pub use_case: UseCase,
}

/// Form state for a model that has not been staged yet.
#[derive(Clone, Debug)]
pub struct ModelDraft {
    pub provider: Provider,
    pub model_name: String,
    pub enabled: bool,
    pub use_case: UseCase,
}

impl Default for ModelDraft {
    fn default() -> Self {
        ModelDraft {
            provider: Provider::OpenRouter,
            model_name: String::new(),
            enabled: true,
            use_case: UseCase::Generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_round_trips_wire_strings() {
        for p in Provider::ALL {
            assert_eq!(Provider::parse(p.as_str()), Ok(p));
        }
        assert!(Provider::parse("anthropic").is_err());
    }

    #[test]
    fn model_config_serializes_with_lowercase_tags() {
        let model = ModelConfig {
            id: None,
            provider: Provider::OpenRouter,
            model_name: "x-ai/grok-beta".into(),
            priority: 1,
            enabled: true,
            use_case: UseCase::Both,
        };
        let json = serde_json::to_value(&model).expect("json");
        assert_eq!(json["provider"], "openrouter");
        assert_eq!(json["use_case"], "both");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn model_config_deserializes_server_ids() {
        let json = serde_json::json!({
            "id": "m-1",
            "provider": "zai",
            "model_name": "glm-4",
            "priority": 2,
            "enabled": false,
            "use_case": "review"
        });
        let model: ModelConfig = serde_json::from_value(json).expect("model");
        assert_eq!(model.id.as_deref(), Some("m-1"));
        assert_eq!(model.provider, Provider::Zai);
        assert_eq!(model.use_case, UseCase::Review);
    }
}
