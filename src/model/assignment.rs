//! Category-specific assignment records
//!
//! Each working relationship points at exactly one assignment, looked up in
//! the sub-collection matching its category. `AssignmentRef` is the borrowed,
//! tagged view of whichever record a relationship resolves to.

use serde::Deserialize;

use super::ordered::OrderedMap;
use super::types::WrCategory;

/// The `assignments` section of the dataset, one collection per category
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignments {
    #[serde(default)]
    pub employees: OrderedMap<EmployeeAssignment>,
    #[serde(default)]
    pub contractors: OrderedMap<ContractorAssignment>,
    #[serde(default)]
    pub interns: OrderedMap<InternAssignment>,
    #[serde(default)]
    pub contingent_workers: OrderedMap<ContingentAssignment>,
}

impl Assignments {
    /// Look up an assignment in the collection for `category`
    pub fn lookup(&self, category: WrCategory, id: &str) -> Option<AssignmentRef<'_>> {
        match category {
            WrCategory::Employment => self.employees.get(id).map(AssignmentRef::Employee),
            WrCategory::Contract => self.contractors.get(id).map(AssignmentRef::Contractor),
            WrCategory::Internship => self.interns.get(id).map(AssignmentRef::Intern),
            WrCategory::Contingent => self.contingent_workers.get(id).map(AssignmentRef::Contingent),
        }
    }
}

/// Borrowed assignment tagged by category
#[derive(Debug, Clone, Copy)]
pub enum AssignmentRef<'a> {
    Employee(&'a EmployeeAssignment),
    Contractor(&'a ContractorAssignment),
    Intern(&'a InternAssignment),
    Contingent(&'a ContingentAssignment),
}

impl<'a> AssignmentRef<'a> {
    pub fn category(&self) -> WrCategory {
        match self {
            AssignmentRef::Employee(_) => WrCategory::Employment,
            AssignmentRef::Contractor(_) => WrCategory::Contract,
            AssignmentRef::Intern(_) => WrCategory::Internship,
            AssignmentRef::Contingent(_) => WrCategory::Contingent,
        }
    }

    /// Title shown in the profile header for this engagement
    pub fn current_title(&self) -> &'a str {
        match self {
            AssignmentRef::Employee(a) => &a.position.title,
            AssignmentRef::Contractor(a) => &a.project_assignment.role,
            AssignmentRef::Intern(a) => &a.position.title,
            AssignmentRef::Contingent(a) => &a.assignment.title,
        }
    }
}

/// Reference to another person (manager, mentor, supervisor)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PersonRef {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// Amount in a given currency
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

/// A goal with progress, used for performance and learning goals
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Goal {
    pub title: String,
    pub status: String,
    pub progress: f64,
}

// ============================================
// EMPLOYMENT
// ============================================

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAssignment {
    pub position: Position,
    pub organization: Organization,
    #[serde(default)]
    pub manager: Option<PersonRef>,
    #[serde(default)]
    pub direct_reports: Vec<PersonRef>,
    pub time_and_attendance: TimeAndAttendance,
    pub performance: Performance,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub title: String,
    pub job_level: String,
    pub grade: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Organization {
    pub department: String,
    pub team: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeAndAttendance {
    pub this_month: MonthlyAttendance,
    pub leave_balances: LeaveBalances,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAttendance {
    pub days_worked: u32,
    pub working_days: u32,
    pub overtime: f64,
}

impl MonthlyAttendance {
    /// Attendance as a whole percentage, 0 when there were no working days
    pub fn percent(&self) -> u32 {
        if self.working_days == 0 {
            return 0;
        }
        (f64::from(self.days_worked) / f64::from(self.working_days) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LeaveBalances {
    pub annual: LeaveBalance,
    #[serde(default)]
    pub sick: Option<LeaveBalance>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LeaveBalance {
    pub remaining: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub current_rating: String,
    #[serde(default)]
    pub rating_score: Option<f64>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

/// One employment history event
///
/// Transitions carry `from`/`to`; other events carry a position or free text.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub event: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl HistoryEntry {
    /// Subtitle line: "from → to", else position, else details
    pub fn subtitle(&self) -> String {
        if let Some(from) = &self.from {
            return format!("{} → {}", from, self.to.as_deref().unwrap_or(""));
        }
        self.position
            .as_deref()
            .or(self.details.as_deref())
            .unwrap_or("")
            .to_string()
    }
}

// ============================================
// CONTRACT
// ============================================

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractorAssignment {
    pub vendor_company: String,
    pub project_assignment: ProjectAssignment,
    #[serde(default)]
    pub project_manager: Option<PersonRef>,
    pub billing: ContractorBilling,
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
}

impl ContractorAssignment {
    pub fn completed_deliverables(&self) -> usize {
        self.deliverables
            .iter()
            .filter(|d| d.status == "completed")
            .count()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssignment {
    pub project_name: String,
    pub role: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractorBilling {
    pub rate: Money,
    pub rate_type: String,
    #[serde(default)]
    pub total_days: Option<f64>,
    #[serde(default)]
    pub total_billed: Option<f64>,
    #[serde(default)]
    pub estimated_total: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
}

// ============================================
// INTERNSHIP
// ============================================

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InternAssignment {
    pub university: String,
    pub expected_graduation: String,
    pub program: Program,
    pub stipend: Money,
    pub position: InternPosition,
    #[serde(default)]
    pub mentor: Option<PersonRef>,
    #[serde(default)]
    pub supervisor: Option<PersonRef>,
    #[serde(default)]
    pub learning_goals: Vec<Goal>,
    #[serde(default)]
    pub evaluations: Vec<Evaluation>,
}

impl InternAssignment {
    /// Mean learning-goal progress, rounded; `None` without goals
    pub fn average_progress(&self) -> Option<u32> {
        if self.learning_goals.is_empty() {
            return None;
        }
        let total: f64 = self.learning_goals.iter().map(|g| g.progress).sum();
        Some((total / self.learning_goals.len() as f64).round() as u32)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Program {
    pub name: String,
    pub cohort: String,
    pub duration: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InternPosition {
    pub title: String,
    pub team: String,
    pub department: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Evaluation {
    pub period: String,
    pub rating: String,
    pub feedback: String,
    pub date: String,
}

// ============================================
// CONTINGENT
// ============================================

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContingentAssignment {
    pub agency: Agency,
    pub assignment: ContingentRole,
    #[serde(default)]
    pub supervisor: Option<PersonRef>,
    pub billing: ContingentBilling,
    #[serde(default)]
    pub current_tasks: Vec<Task>,
    #[serde(default)]
    pub access_systems: Vec<String>,
}

impl ContingentAssignment {
    pub fn completed_tasks(&self) -> usize {
        self.current_tasks
            .iter()
            .filter(|t| t.status == "completed")
            .count()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub name: String,
    pub contact_person: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ContingentRole {
    pub title: String,
    pub team: String,
    pub department: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContingentBilling {
    pub rate: Money,
    pub rate_type: String,
    pub billed_to: String,
    pub markup: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Task {
    pub name: String,
    pub status: String,
    pub priority: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_percent() {
        let month = MonthlyAttendance { days_worked: 18, working_days: 22, overtime: 0.0 };
        assert_eq!(month.percent(), 82);

        let empty = MonthlyAttendance { days_worked: 0, working_days: 0, overtime: 0.0 };
        assert_eq!(empty.percent(), 0);
    }

    #[test]
    fn test_history_subtitle() {
        let transition = HistoryEntry {
            event: "Promotion".into(),
            date: None,
            from: Some("Engineer".into()),
            to: Some("Senior Engineer".into()),
            position: None,
            details: None,
        };
        assert_eq!(transition.subtitle(), "Engineer → Senior Engineer");

        let hired = HistoryEntry {
            event: "Hired".into(),
            date: None,
            from: None,
            to: None,
            position: None,
            details: Some("Joined platform team".into()),
        };
        assert_eq!(hired.subtitle(), "Joined platform team");
    }

    #[test]
    fn test_minimal_contractor_defaults_empty_lists() {
        let json = r#"{
            "vendorCompany": "Acme",
            "projectAssignment": { "projectName": "P", "role": "Dev", "startDate": "2024-01-01" },
            "billing": { "rate": { "amount": 100, "currency": "USD" }, "rateType": "Daily" }
        }"#;
        let assignment: ContractorAssignment = serde_json::from_str(json).unwrap();

        assert!(assignment.deliverables.is_empty());
        assert!(assignment.project_manager.is_none());
        assert_eq!(assignment.completed_deliverables(), 0);
    }

    #[test]
    fn test_average_progress() {
        let mut intern: InternAssignment = serde_json::from_str(
            r#"{
                "university": "U", "expectedGraduation": "2025",
                "program": { "name": "P", "cohort": "C", "duration": "3 months" },
                "stipend": { "amount": 1, "currency": "VND" },
                "position": { "title": "Intern", "team": "T", "department": "D" }
            }"#,
        )
        .unwrap();
        assert_eq!(intern.average_progress(), None);

        intern.learning_goals = vec![
            Goal { title: "a".into(), status: "in-progress".into(), progress: 40.0 },
            Goal { title: "b".into(), status: "in-progress".into(), progress: 65.0 },
            Goal { title: "c".into(), status: "not-started".into(), progress: 0.0 },
        ];
        assert_eq!(intern.average_progress(), Some(35));
    }
}
