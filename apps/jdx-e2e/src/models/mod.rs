//! Wire payloads for the JDX REST API.
//!
//! Field names on the wire are camelCase with an `ID` suffix for identifiers
//! (`pipelineID`, `substatementID`, `recommendationID`, `frameworkID`).

pub mod context;
pub mod framework;
pub mod match_table;
pub mod pipeline;
