use serde::{Deserialize, Serialize};

/// Backend-reported health of a jurisdiction's scrape/analysis pipeline.
/// Rendered as-is; never computed on this side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineHealth {
    Healthy,
    Degraded,
    Failed,
}

impl PipelineHealth {
    pub fn as_str(self) -> &'static str {
        match self {
            PipelineHealth::Healthy => "healthy",
            PipelineHealth::Degraded => "degraded",
            PipelineHealth::Failed => "failed",
        }
    }

    pub fn is_healthy(self) -> bool {
        matches!(self, PipelineHealth::Healthy)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JurisdictionStats {
    pub jurisdiction: String,
    pub pipeline_status: PipelineHealth,
    #[serde(default)]
    pub last_scrape: Option<String>,
    pub total_raw_scrapes: i64,
    pub processed_scrapes: i64,
    pub total_bills: i64,
    #[serde(default)]
    pub active_alerts: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Jurisdiction {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub jurisdiction: String,
    pub force: bool,
}

/// Returned when a scrape or analysis task is accepted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScrapeTask {
    pub task_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Started,
    Completed,
    Failed,
}

impl TaskState {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskState::Started => "started",
            TaskState::Completed => "completed",
            TaskState::Failed => "failed",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, TaskState::Started)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskStatus {
    pub task_id: String,
    pub state: TaskState,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStep {
    Research,
    Generate,
    Review,
}

impl AnalysisStep {
    pub const ALL: [AnalysisStep; 3] = [
        AnalysisStep::Research,
        AnalysisStep::Generate,
        AnalysisStep::Review,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisStep::Research => "research",
            AnalysisStep::Generate => "generate",
            AnalysisStep::Review => "review",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnalysisStep::Research => "Research",
            AnalysisStep::Generate => "Generate",
            AnalysisStep::Review => "Review",
        }
    }

    pub fn parse(value: &str) -> Result<AnalysisStep, String> {
        match value {
            "research" => Ok(AnalysisStep::Research),
            "generate" => Ok(AnalysisStep::Generate),
            "review" => Ok(AnalysisStep::Review),
            other => Err(format!("unknown analysis step '{other}'")),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub jurisdiction: String,
    pub bill_id: String,
    pub step: AnalysisStep,
    #[serde(default)]
    pub model_override: Option<String>,
}

impl AnalysisRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.jurisdiction.trim().is_empty() {
            return Err("jurisdiction is required".into());
        }
        if self.bill_id.trim().is_empty() {
            return Err("bill id is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_request_requires_jurisdiction_and_bill() {
        let mut req = AnalysisRequest {
            jurisdiction: "san_jose".into(),
            bill_id: "SB-423".into(),
            step: AnalysisStep::Generate,
            model_override: None,
        };
        assert!(req.validate().is_ok());

        req.bill_id = " ".into();
        assert!(req.validate().is_err());

        req.bill_id = "SB-423".into();
        req.jurisdiction = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn task_states_report_terminality() {
        assert!(!TaskState::Started.is_terminal());
        assert!(TaskState::Completed.is_terminal());
        assert!(TaskState::Failed.is_terminal());
    }

    #[test]
    fn stats_deserialize_with_missing_optionals() {
        let json = serde_json::json!({
            "jurisdiction": "saratoga",
            "pipeline_status": "degraded",
            "total_raw_scrapes": 10,
            "processed_scrapes": 8,
            "total_bills": 3
        });
        let stats: JurisdictionStats = serde_json::from_value(json).expect("stats");
        assert_eq!(stats.pipeline_status, PipelineHealth::Degraded);
        assert!(stats.last_scrape.is_none());
        assert!(stats.active_alerts.is_empty());
    }
}
