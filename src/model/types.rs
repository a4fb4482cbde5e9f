//! Core entities of the workforce dataset
//!
//! - `Worker`: a person, independent of any engagement
//! - `WorkingRelationship`: one engagement between a worker and a legal entity
//! - `WrCategory`: the closed set of relationship categories
//! - `LegalEntity` and `Activity`: supporting records

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A person tracked by the system
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: String,
    pub name: String,
    /// Date of birth, ISO 8601
    pub dob: String,
    pub nationality: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub languages: Vec<Language>,
    /// Relationship ids; the first one is the primary relationship
    pub working_relationships: Vec<String>,
}

impl Worker {
    /// Id of the relationship shown by default
    pub fn primary_relationship_id(&self) -> Option<&str> {
        self.working_relationships.first().map(String::as_str)
    }

    /// Whether `wr_id` is one of this worker's relationships
    pub fn has_relationship(&self, wr_id: &str) -> bool {
        self.working_relationships.iter().any(|id| id == wr_id)
    }

    /// Comma-separated language names
    pub fn language_names(&self) -> String {
        self.languages
            .iter()
            .map(|l| l.language.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A named skill rating, 0 to 100
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub level: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Language {
    pub language: String,
    #[serde(default)]
    pub proficiency: Option<String>,
}

/// Error for a category tag outside the supported set
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized working relationship category '{0}'")]
pub struct UnknownCategory(pub String);

/// Category of a working relationship
///
/// Selects which assignment collection the relationship points into and
/// which dashboard layout renders it.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum WrCategory {
    Employment,
    Contract,
    Internship,
    Contingent,
}

impl WrCategory {
    /// All categories, in display order
    pub fn all() -> &'static [WrCategory] {
        &[
            WrCategory::Employment,
            WrCategory::Contract,
            WrCategory::Internship,
            WrCategory::Contingent,
        ]
    }

    /// Wire tag, also used as the CSS badge class
    pub fn as_str(&self) -> &'static str {
        match self {
            WrCategory::Employment => "employment",
            WrCategory::Contract => "contract",
            WrCategory::Internship => "internship",
            WrCategory::Contingent => "contingent",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            WrCategory::Employment => "Employment",
            WrCategory::Contract => "Contract",
            WrCategory::Internship => "Internship",
            WrCategory::Contingent => "Contingent",
        }
    }

    /// Name of the assignment sub-collection holding this category's records
    pub fn assignment_collection(&self) -> &'static str {
        match self {
            WrCategory::Employment => "employees",
            WrCategory::Contract => "contractors",
            WrCategory::Internship => "interns",
            WrCategory::Contingent => "contingentWorkers",
        }
    }
}

impl fmt::Display for WrCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WrCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employment" => Ok(WrCategory::Employment),
            "contract" => Ok(WrCategory::Contract),
            "internship" => Ok(WrCategory::Internship),
            "contingent" => Ok(WrCategory::Contingent),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl TryFrom<String> for WrCategory {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One engagement between a worker and a legal entity
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkingRelationship {
    pub id: String,
    pub worker_id: String,
    #[serde(rename = "type")]
    pub category: WrCategory,
    pub sub_type: String,
    pub status: String,
    pub le_id: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub work_location: String,
    pub assignment_id: String,
    #[serde(default)]
    pub work_email: Option<String>,
    #[serde(default)]
    pub contract_type: Option<String>,
    #[serde(default)]
    pub probation_completed: Option<bool>,
    #[serde(default)]
    pub notice_period: Option<String>,
}

impl WorkingRelationship {
    /// Completed relationships are shown as history in the switcher
    pub fn is_historical(&self) -> bool {
        self.status == "completed"
    }
}

/// The contracting organization side of a relationship
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LegalEntity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// One entry in a worker's recent activity log
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Activity {
    pub icon: String,
    pub action: String,
    pub details: String,
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_tags() {
        for category in WrCategory::all() {
            let parsed: WrCategory = category.as_str().parse().unwrap();
            assert_eq!(&parsed, category);
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = "freelance".parse::<WrCategory>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized working relationship category 'freelance'"
        );

        let json = r#"{
            "id": "WR9", "workerId": "W9", "type": "volunteer", "subType": "x",
            "status": "active", "leId": "LE1", "startDate": "2024-01-01",
            "workLocation": "Remote", "assignmentId": "A1"
        }"#;
        let result: Result<WorkingRelationship, _> = serde_json::from_str(json);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("volunteer"), "{}", message);
    }

    #[test]
    fn test_worker_helpers() {
        let worker = Worker {
            id: "W1".into(),
            name: "Ada".into(),
            dob: "1990-01-01".into(),
            nationality: "British".into(),
            email: "ada@example.com".into(),
            phone: "1".into(),
            skills: vec![],
            certifications: vec![],
            languages: vec![
                Language { language: "English".into(), proficiency: None },
                Language { language: "French".into(), proficiency: None },
            ],
            working_relationships: vec!["WR2".into(), "WR1".into()],
        };

        assert_eq!(worker.primary_relationship_id(), Some("WR2"));
        assert!(worker.has_relationship("WR1"));
        assert!(!worker.has_relationship("WR3"));
        assert_eq!(worker.language_names(), "English, French");
    }
}
