//! Worker 360 Data Model
//!
//! Read-only entities loaded once from the JSON dataset:
//!
//! - **types**: Worker, WorkingRelationship, LegalEntity, Activity, WrCategory
//! - **assignment**: category-specific assignment records
//! - **dataset**: the whole document plus load-time validation
//! - **ordered**: order-preserving map for id-keyed collections
//! - **error**: error types
//!
//! # Example
//!
//! ```rust,no_run
//! use worker360::model::Dataset;
//!
//! let json = std::fs::read_to_string("data/sample-dataset.json").unwrap();
//! let dataset = Dataset::from_json_str(&json).unwrap();
//!
//! for worker in dataset.workers.values() {
//!     println!("{} ({} relationships)", worker.name, worker.working_relationships.len());
//! }
//! ```

pub mod assignment;
pub mod dataset;
pub mod error;
pub mod ordered;
pub mod types;

pub use assignment::{
    Agency, AssignmentRef, Assignments, ContingentAssignment, ContingentBilling, ContingentRole,
    ContractorAssignment, ContractorBilling, Deliverable, EmployeeAssignment, Evaluation, Goal,
    HistoryEntry, InternAssignment, InternPosition, LeaveBalance, LeaveBalances, Money,
    MonthlyAttendance, Organization, Performance, PersonRef, Position, Program, ProjectAssignment,
    Task, TimeAndAttendance,
};
pub use dataset::Dataset;
pub use error::{DatasetError, DatasetResult};
pub use ordered::OrderedMap;
pub use types::{
    Activity, Certification, Language, LegalEntity, Skill, UnknownCategory, Worker,
    WorkingRelationship, WrCategory,
};
