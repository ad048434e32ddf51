//! Dashboard dataset.
//!
//! Everything the dashboard draws comes from a [`DashboardData`]: the issue
//! records (mock or live) plus the project's CI pipeline and progress figures,
//! which are not tracked in JIRA and are kept here as fixed values.

use chrono::{DateTime, Local};

use crate::api::IssueRecord;
use crate::report::{self, Tally, TypeBreakdown};

/// Headline issue counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    /// All issues in the dataset.
    pub total: usize,
    /// Issues in "In Progress".
    pub in_progress: usize,
    /// Issues in "Done".
    pub done: usize,
    /// Issues in "Testing".
    pub testing: usize,
}

/// Outcome of a pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Success,
    Failed,
    Upcoming,
}

impl StageStatus {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            StageStatus::Success => "Success",
            StageStatus::Failed => "Failed",
            StageStatus::Upcoming => "Upcoming",
        }
    }

    /// Status icon.
    pub fn icon(&self) -> &'static str {
        match self {
            StageStatus::Success => "✓",
            StageStatus::Failed => "✗",
            StageStatus::Upcoming => "…",
        }
    }
}

/// A CI pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStage {
    /// Stage name.
    pub name: String,
    /// Jobs run by the stage.
    pub jobs: Vec<String>,
    /// Last run duration in seconds, `None` for stages that have not run.
    pub duration_secs: Option<u64>,
    /// Last run outcome.
    pub status: StageStatus,
}

/// Issue activity for one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyProgress {
    /// Week label.
    pub week: String,
    /// Issues created.
    pub created: u64,
    /// Issues completed.
    pub completed: u64,
    /// Tests added.
    pub tests_added: u64,
}

/// Completion percentage of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentProgress {
    /// Component name.
    pub name: String,
    /// Completion, 0 to 100.
    pub percent: u16,
}

/// Where a project phase stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseState {
    Complete,
    InProgress,
    Upcoming,
}

impl PhaseState {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            PhaseState::Complete => "Complete",
            PhaseState::InProgress => "In progress",
            PhaseState::Upcoming => "Upcoming",
        }
    }
}

/// A project phase on the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    /// Phase name.
    pub name: String,
    /// Current state.
    pub state: PhaseState,
}

/// Everything rendered by the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// The issue records.
    pub issues: Vec<IssueRecord>,
    /// Label for where the issues came from ("Demo data", a JIRA URL, ...).
    pub source: String,
    /// Stages that have run.
    pub pipeline: Vec<PipelineStage>,
    /// The next stage to be added.
    pub next_stage: PipelineStage,
    /// Weekly issue activity.
    pub weekly: Vec<WeeklyProgress>,
    /// Per-component completion.
    pub components: Vec<ComponentProgress>,
    /// Project phases.
    pub phases: Vec<Phase>,
    /// Overall completion, 0 to 100.
    pub overall_progress: u16,
    /// When the dataset was assembled.
    pub generated_at: DateTime<Local>,
}

impl DashboardData {
    /// Assemble the dataset around the given issues, timestamped now.
    pub fn new(issues: Vec<IssueRecord>, source: impl Into<String>) -> Self {
        Self::with_timestamp(issues, source, Local::now())
    }

    /// Assemble the dataset with an explicit timestamp.
    pub fn with_timestamp(
        issues: Vec<IssueRecord>,
        source: impl Into<String>,
        generated_at: DateTime<Local>,
    ) -> Self {
        Self {
            issues,
            source: source.into(),
            pipeline: vec![
                stage("Test", &["Unit tests", "Syntax validation"], Some(45), StageStatus::Success),
                stage(
                    "Build",
                    &["Install dependencies", "Verify imports"],
                    Some(30),
                    StageStatus::Success,
                ),
            ],
            next_stage: stage(
                "Deploy",
                &["Automatic deployment", "Health check"],
                None,
                StageStatus::Upcoming,
            ),
            weekly: vec![
                week("Week 1", 3, 0, 0),
                week("Week 2", 4, 1, 1),
                week("Week 3", 3, 2, 1),
                week("Week 4", 2, 1, 1),
            ],
            components: [
                ("Backend", 70),
                ("Frontend", 50),
                ("API", 60),
                ("Tests", 40),
                ("Dashboard", 65),
            ]
            .into_iter()
            .map(|(name, percent)| ComponentProgress {
                name: name.to_string(),
                percent,
            })
            .collect(),
            phases: [
                ("Planning", PhaseState::Complete),
                ("Implementation", PhaseState::InProgress),
                ("Testing", PhaseState::InProgress),
                ("Deployment", PhaseState::Upcoming),
            ]
            .into_iter()
            .map(|(name, state)| Phase {
                name: name.to_string(),
                state,
            })
            .collect(),
            overall_progress: 60,
            generated_at,
        }
    }

    /// Headline counts over the issues.
    pub fn metrics(&self) -> Metrics {
        let statuses = self.status_counts();
        Metrics {
            total: self.issues.len(),
            in_progress: statuses.get("In Progress"),
            done: statuses.get("Done"),
            testing: statuses.get("Testing"),
        }
    }

    /// Issue counts per status.
    pub fn status_counts(&self) -> Tally {
        report::count_by_status(&self.issues)
    }

    /// Issue counts per priority.
    pub fn priority_counts(&self) -> Tally {
        report::count_by_priority(&self.issues)
    }

    /// Issue counts per status within each type.
    pub fn type_breakdown(&self) -> Vec<TypeBreakdown> {
        report::count_by_type_and_status(&self.issues)
    }

    /// Footer timestamp, day first.
    pub fn last_updated(&self) -> String {
        self.generated_at.format("%d/%m/%Y %H:%M").to_string()
    }
}

fn stage(name: &str, jobs: &[&str], duration_secs: Option<u64>, status: StageStatus) -> PipelineStage {
    PipelineStage {
        name: name.to_string(),
        jobs: jobs.iter().map(|j| j.to_string()).collect(),
        duration_secs,
        status,
    }
}

fn week(label: &str, created: u64, completed: u64, tests_added: u64) -> WeeklyProgress {
    WeeklyProgress {
        week: label.to_string(),
        created,
        completed,
        tests_added,
    }
}
