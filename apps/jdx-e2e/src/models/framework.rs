use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// POST /framework-recommendations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkRecommendationResponse {
    #[serde(default)]
    pub framework_recommendations: Vec<FrameworkRecommendation>,
}

impl FrameworkRecommendationResponse {
    /// The top-ranked framework, if the service recommended any.
    pub fn top(&self) -> Option<&FrameworkRecommendation> {
        self.framework_recommendations.first()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkRecommendation {
    pub framework_data: FrameworkData,
    pub match_percentage: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrameworkData {
    pub uuid: String,
    pub name: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// POST /framework-selections
// ────────────────────────────────────────────────────────────────────────────

/// Only a single selected framework is supported by this client, though the
/// service accepts several.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkSelectionRequest {
    #[serde(rename = "pipelineID")]
    pub pipeline_id: String,
    pub frameworks: Frameworks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frameworks {
    pub frameworks: Vec<Framework>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Framework {
    #[serde(rename = "frameworkID")]
    pub framework_id: String,
}

impl FrameworkSelectionRequest {
    pub fn single(pipeline_id: impl Into<String>, framework_id: impl Into<String>) -> Self {
        Self {
            pipeline_id: pipeline_id.into(),
            frameworks: Frameworks {
                frameworks: vec![Framework {
                    framework_id: framework_id.into(),
                }],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_picks_first_recommendation() {
        let resp: FrameworkRecommendationResponse = serde_json::from_value(json!({
            "pipelineID": "p-1",
            "frameworkRecommendations": [
                { "frameworkData": { "uuid": "f-1", "name": "Web Dev" }, "matchPercentage": 0.8 },
                { "frameworkData": { "uuid": "f-2" } }
            ]
        }))
        .unwrap();
        let top = resp.top().unwrap();
        assert_eq!(top.framework_data.uuid, "f-1");
        assert_eq!(top.framework_data.name.as_deref(), Some("Web Dev"));
        assert_eq!(top.match_percentage, Some(0.8));
        assert_eq!(resp.framework_recommendations[1].framework_data.name, None);
    }

    #[test]
    fn test_top_none_when_empty() {
        let resp: FrameworkRecommendationResponse =
            serde_json::from_value(json!({ "pipelineID": "p-1" })).unwrap();
        assert!(resp.top().is_none());
    }

    #[test]
    fn test_single_selection_wire_shape() {
        let req = FrameworkSelectionRequest::single("p-1", "f-9");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "pipelineID": "p-1",
                "frameworks": { "frameworks": [ { "frameworkID": "f-9" } ] }
            })
        );
    }
}
