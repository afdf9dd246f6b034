use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// POST /upload-job-description-context
///
/// All job context is sent at once rather than as partial updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionContextRequest {
    #[serde(rename = "pipelineID")]
    pub pipeline_id: String,

    // Employer
    pub employer_name: String,
    pub employer_overview: String,
    pub employer_email: String,
    pub employer_website: String,
    pub employer_address: String,
    pub employer_phone: String,
    pub employer_identifier: String,
    pub employment_unit: String,

    // Position
    pub job_title: String,
    pub job_summary: String,
    pub primary_economic_activity: String,
    pub industry_code: String,
    pub occupation_code: String,
    pub job_location: String,
    pub job_location_type: String,
    pub assessment: String,
    pub employment_agreement: String,
    pub job_term: String,
    pub job_schedule: String,
    pub work_hours: String,

    // Credential requirements
    pub requirements: String,
    pub application_location_requirement: String,
    pub citizenship_requirement: String,
    pub physical_requirement: String,
    pub sensory_requirement: String,
    pub security_clearance_requirement: String,
    pub special_commitment: String,

    // Compensation
    pub salary_currency: String,
    pub salary_minimum: String,
    pub salary_maximum: String,
    pub salary_frequency: String,
    pub incentive_compensation: String,
    pub job_benefits: Vec<String>,

    // Posting
    pub date_posted: NaiveDate,
    pub valid_through: NaiveDate,
    pub job_openings: String,
}

impl JobDescriptionContextRequest {
    /// The fixed sample context uploaded for every job description.
    pub fn sample(pipeline_id: impl Into<String>) -> Self {
        Self {
            pipeline_id: pipeline_id.into(),
            employer_name: "BrightHive".into(),
            employer_overview:
                "BrightHive is a data technology company. We work with data so you don't have to!"
                    .into(),
            employer_email: "hiring@brighthive.io".into(),
            employer_website: "https://brighthive.io".into(),
            employer_address: "Chicago, IL".into(),
            employer_phone: "1231231234".into(),
            employer_identifier: "Wordpress-Developer-526a".into(),
            employment_unit: "Product Team".into(),
            job_title: "Wordpress Developer".into(),
            job_summary: "As a BrightHive wordpress developer you will be managing, extending, and building or Wordpress extensions.".into(),
            primary_economic_activity: "Web Development".into(),
            industry_code: "811192".into(),
            occupation_code: "15-1134.00".into(),
            job_location: "Rockford, IL".into(),
            job_location_type: "This is an in-person position.".into(),
            assessment:
                "You will be required to complete the Wordpress Developer Associate Level 2 test."
                    .into(),
            employment_agreement: "Employee not eligible for overtime".into(),
            job_term: "Regular".into(),
            job_schedule: "Full-time".into(),
            work_hours: "Flexible work hours (set your own schedule)".into(),
            requirements: "You must have at least a Bachelors or relevant work experience.".into(),
            application_location_requirement: "All Locations".into(),
            citizenship_requirement: "US Citizen".into(),
            physical_requirement: "No Physical Requirement".into(),
            sensory_requirement: "No Sensory Requirements".into(),
            security_clearance_requirement: "No Security Clearance".into(),
            special_commitment: "No Special Commitments".into(),
            salary_currency: "USD".into(),
            salary_minimum: "20000".into(),
            salary_maximum: "80000".into(),
            salary_frequency: "Per Year".into(),
            incentive_compensation: "No Incentive Compensation".into(),
            job_benefits: [
                "Health Insurance",
                "Dental Insurance",
                "Vision Insurance",
                "Life Insurance",
                "PTO",
                "401(k)",
                "Workplace perks such as recreation activities, food and coffee",
            ]
            .iter()
            .map(|b| b.to_string())
            .collect(),
            date_posted: NaiveDate::from_ymd_opt(2019, 8, 1).unwrap_or(NaiveDate::MIN),
            valid_through: NaiveDate::from_ymd_opt(2019, 8, 15).unwrap_or(NaiveDate::MIN),
            job_openings: "1".into(),
        }
    }
}

/// The service echoes the stored context back; only the currency is inspected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionContextResponse {
    pub salary_currency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_serializes_camel_case_keys() {
        let json = serde_json::to_value(JobDescriptionContextRequest::sample("p-1")).unwrap();
        assert_eq!(json["pipelineID"], "p-1");
        assert_eq!(json["employerName"], "BrightHive");
        assert_eq!(json["securityClearanceRequirement"], "No Security Clearance");
        assert_eq!(json["salaryMinimum"], "20000");
        assert_eq!(json["salaryMaximum"], "80000");
        assert!(json.get("employer_name").is_none());
    }

    #[test]
    fn test_sample_dates_serialize_as_iso() {
        let json = serde_json::to_value(JobDescriptionContextRequest::sample("p-1")).unwrap();
        assert_eq!(json["datePosted"], "2019-08-01");
        assert_eq!(json["validThrough"], "2019-08-15");
    }

    #[test]
    fn test_sample_lists_all_benefits() {
        let ctx = JobDescriptionContextRequest::sample("p-1");
        assert_eq!(ctx.job_benefits.len(), 7);
        assert_eq!(ctx.job_benefits[5], "401(k)");
    }

    #[test]
    fn test_context_response_reads_salary_currency() {
        let resp: JobDescriptionContextResponse =
            serde_json::from_str(r#"{"pipelineID": "p-1", "salaryCurrency": "USD"}"#).unwrap();
        assert_eq!(resp.salary_currency.as_deref(), Some("USD"));
    }
}
