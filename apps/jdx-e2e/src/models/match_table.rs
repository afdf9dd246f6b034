use serde::{Deserialize, Serialize};

/// POST /match-table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchTableRequest {
    #[serde(rename = "pipelineID")]
    pub pipeline_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTableResponse {
    #[serde(default)]
    pub match_table: Vec<MatchTableEntry>,
}

/// One substatement of the job description with its candidate competency matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTableEntry {
    #[serde(rename = "substatementID")]
    pub substatement_id: String,
    pub substatement: String,
    #[serde(default)]
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "recommendationID")]
    pub recommendation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// POST /user-actions
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserActionRequest {
    #[serde(rename = "pipelineID")]
    pub pipeline_id: String,
    #[serde(rename = "matchTableSelections")]
    pub match_table_selections: Vec<MatchTableSelection>,
}

/// Wire form of a user action. Neither `accept` nor `replace` set means reject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchTableSelection {
    #[serde(rename = "substatementID")]
    pub substatement_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<Accept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace: Option<Replace>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Accept {
    #[serde(rename = "recommendationID")]
    pub recommendation_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Replace {
    pub substatement: String,
}
