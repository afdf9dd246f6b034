//! JDX REST paths, relative to the server base URL.

pub const HEALTH: &str = "/health";
pub const UPLOAD_FILE: &str = "/upload-job-description-file";
pub const UPLOAD_CONTEXT: &str = "/upload-job-description-context";
pub const PREVIEW: &str = "/preview";
pub const GET_SCORE: &str = "/get-score";
pub const FRAMEWORK_RECOMMENDATIONS: &str = "/framework-recommendations";
pub const FRAMEWORK_SELECTIONS: &str = "/framework-selections";
pub const MATCH_TABLE: &str = "/match-table";
pub const USER_ACTIONS: &str = "/user-actions";
pub const GENERATE_JOB_SCHEMA_PLUS: &str = "/generate-job-schema-plus";
