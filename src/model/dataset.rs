//! The loaded dataset and its load-time validation
//!
//! The dataset is parsed once and never mutated. Required fields are enforced
//! by deserialization; cross-record references are checked by
//! [`Dataset::validate`] so that rendering never meets a dangling id.

use serde::Deserialize;

use super::assignment::{AssignmentRef, Assignments};
use super::error::{DatasetError, DatasetResult};
use super::ordered::OrderedMap;
use super::types::{Activity, LegalEntity, Worker, WorkingRelationship};

/// The complete, immutable workforce dataset
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub workers: OrderedMap<Worker>,
    pub working_relationships: OrderedMap<WorkingRelationship>,
    pub legal_entities: OrderedMap<LegalEntity>,
    pub assignments: Assignments,
    #[serde(default)]
    pub activities: OrderedMap<Vec<Activity>>,
}

impl Dataset {
    /// Parse and validate a dataset from JSON bytes
    pub fn from_slice(bytes: &[u8]) -> DatasetResult<Self> {
        let dataset: Dataset = serde_json::from_slice(bytes)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parse and validate a dataset from a JSON string
    pub fn from_json_str(json: &str) -> DatasetResult<Self> {
        Self::from_slice(json.as_bytes())
    }

    /// Check every cross-record reference, collecting all problems
    pub fn validate(&self) -> DatasetResult<()> {
        let mut problems = Vec::new();

        for (key, worker) in self.workers.iter() {
            if key != worker.id {
                problems.push(format!("worker key '{}' does not match id '{}'", key, worker.id));
            }
            if worker.working_relationships.is_empty() {
                problems.push(format!("worker '{}' has no working relationships", worker.id));
            }
            for wr_id in &worker.working_relationships {
                match self.working_relationships.get(wr_id) {
                    None => problems.push(format!(
                        "worker '{}' references unknown working relationship '{}'",
                        worker.id, wr_id
                    )),
                    Some(wr) if wr.worker_id != worker.id => problems.push(format!(
                        "working relationship '{}' listed by worker '{}' belongs to '{}'",
                        wr_id, worker.id, wr.worker_id
                    )),
                    Some(_) => {}
                }
            }
            for skill in &worker.skills {
                if !(0.0..=100.0).contains(&skill.level) {
                    problems.push(format!(
                        "worker '{}' skill '{}' has level {} outside 0-100",
                        worker.id, skill.name, skill.level
                    ));
                }
            }
        }

        for (key, wr) in self.working_relationships.iter() {
            if key != wr.id {
                problems.push(format!(
                    "working relationship key '{}' does not match id '{}'",
                    key, wr.id
                ));
            }
            if !self.workers.contains_key(&wr.worker_id) {
                problems.push(format!(
                    "working relationship '{}' references unknown worker '{}'",
                    wr.id, wr.worker_id
                ));
            }
            if !self.legal_entities.contains_key(&wr.le_id) {
                problems.push(format!(
                    "working relationship '{}' references unknown legal entity '{}'",
                    wr.id, wr.le_id
                ));
            }
            if self.assignments.lookup(wr.category, &wr.assignment_id).is_none() {
                problems.push(format!(
                    "working relationship '{}' references unknown {} assignment '{}'",
                    wr.id,
                    wr.category.assignment_collection(),
                    wr.assignment_id
                ));
            }
        }

        for worker_id in self.activities.keys() {
            if !self.workers.contains_key(worker_id) {
                tracing::warn!(worker_id = %worker_id, "Activity log for unknown worker ignored");
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(DatasetError::Validation { problems })
        }
    }

    pub fn worker(&self, id: &str) -> Option<&Worker> {
        self.workers.get(id)
    }

    pub fn relationship(&self, id: &str) -> Option<&WorkingRelationship> {
        self.working_relationships.get(id)
    }

    pub fn legal_entity(&self, id: &str) -> Option<&LegalEntity> {
        self.legal_entities.get(id)
    }

    /// Assignment record for a relationship, from its category's collection
    pub fn assignment_for(&self, wr: &WorkingRelationship) -> Option<AssignmentRef<'_>> {
        self.assignments.lookup(wr.category, &wr.assignment_id)
    }

    /// Activity log for a worker; empty when the dataset has none
    pub fn activities_for(&self, worker_id: &str) -> &[Activity] {
        self.activities
            .get(worker_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First worker in document order
    pub fn first_worker(&self) -> Option<&Worker> {
        self.workers.first().map(|(_, w)| w)
    }

    /// Primary relationship of a worker
    pub fn primary_relationship(&self, worker: &Worker) -> Option<&WorkingRelationship> {
        worker
            .primary_relationship_id()
            .and_then(|id| self.relationship(id))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Dataset;

    pub const SAMPLE_JSON: &str = include_str!("../../data/sample-dataset.json");

    pub fn sample() -> Dataset {
        Dataset::from_json_str(SAMPLE_JSON).expect("sample dataset is valid")
    }

    /// A dataset with one worker per category and no list content at all
    pub const MINIMAL_JSON: &str = r#"{
        "workers": {
            "E1": { "id": "E1", "name": "Emp", "dob": "1990-01-01", "nationality": "X",
                    "email": "e@x", "phone": "1", "workingRelationships": ["WE"] },
            "C1": { "id": "C1", "name": "Con", "dob": "1990-01-01", "nationality": "X",
                    "email": "c@x", "phone": "2", "workingRelationships": ["WC"] },
            "I1": { "id": "I1", "name": "Int", "dob": "2003-01-01", "nationality": "X",
                    "email": "i@x", "phone": "3", "workingRelationships": ["WI"] },
            "G1": { "id": "G1", "name": "Gig", "dob": "1990-01-01", "nationality": "X",
                    "email": "g@x", "phone": "4", "workingRelationships": ["WG"] }
        },
        "workingRelationships": {
            "WE": { "id": "WE", "workerId": "E1", "type": "employment", "subType": "full-time",
                    "status": "active", "leId": "L", "startDate": "2020-01-01",
                    "workLocation": "HQ", "assignmentId": "A" },
            "WC": { "id": "WC", "workerId": "C1", "type": "contract", "subType": "consultant",
                    "status": "active", "leId": "L", "startDate": "2020-01-01",
                    "workLocation": "HQ", "assignmentId": "A" },
            "WI": { "id": "WI", "workerId": "I1", "type": "internship", "subType": "student-intern",
                    "status": "active", "leId": "L", "startDate": "2020-01-01",
                    "workLocation": "HQ", "assignmentId": "A" },
            "WG": { "id": "WG", "workerId": "G1", "type": "contingent", "subType": "agency-worker",
                    "status": "active", "leId": "L", "startDate": "2020-01-01",
                    "workLocation": "HQ", "assignmentId": "A" }
        },
        "legalEntities": { "L": { "id": "L", "name": "Entity" } },
        "assignments": {
            "employees": { "A": {
                "position": { "title": "Engineer", "jobLevel": "L1", "grade": "G1" },
                "organization": { "department": "D", "team": "T" },
                "timeAndAttendance": {
                    "thisMonth": { "daysWorked": 0, "workingDays": 0, "overtime": 0 },
                    "leaveBalances": { "annual": { "remaining": 0 } }
                },
                "performance": { "currentRating": "Pending" }
            } },
            "contractors": { "A": {
                "vendorCompany": "V",
                "projectAssignment": { "projectName": "P", "role": "Dev", "startDate": "2020-01-01" },
                "billing": { "rate": { "amount": 10, "currency": "EUR" }, "rateType": "Daily" }
            } },
            "interns": { "A": {
                "university": "U", "expectedGraduation": "2026",
                "program": { "name": "P", "cohort": "C", "duration": "3 months" },
                "stipend": { "amount": 100, "currency": "VND" },
                "position": { "title": "Intern", "team": "T", "department": "D" }
            } },
            "contingentWorkers": { "A": {
                "agency": { "name": "Ag", "contactPerson": "P", "contactEmail": "p@ag" },
                "assignment": { "title": "Helper", "team": "T", "department": "D" },
                "billing": { "rate": { "amount": 5, "currency": "USD" }, "rateType": "Hourly",
                             "billedTo": "CC", "markup": "10%" }
            } }
        }
    }"#;

    pub fn minimal() -> Dataset {
        Dataset::from_json_str(MINIMAL_JSON).expect("minimal dataset is valid")
    }
}
