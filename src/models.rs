use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two tracked users. Every shared resource is tagged with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Piyush,
    Shruti,
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Profile::Piyush => f.write_str("piyush"),
            Profile::Shruti => f.write_str("shruti"),
        }
    }
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub profile: Profile,
    pub content: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub profile: Profile,
    pub name: String,
    pub sort_order: u32,
}

/// Sparse join on (habit_id, date). At most one entry exists per pair;
/// an absent pair means "not yet marked" and scores as not completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitEntry {
    pub id: String,
    pub habit_id: String,
    pub date: NaiveDate,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiyushDailyLog {
    pub id: String,
    pub date: NaiveDate,
    pub striver: u32,
    pub leetcode: u32,
    pub codeforces: u32,
    pub codechef: u32,
    pub others: u32,
    pub total: u32,
    pub notes: Option<String>,
}

impl PiyushDailyLog {
    pub fn platform_sum(&self) -> u32 {
        self.striver + self.leetcode + self.codeforces + self.codechef + self.others
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShrutiDailyLog {
    pub id: String,
    pub date: NaiveDate,
    pub python_questions: u32,
    pub sql_questions: u32,
    pub notes: Option<String>,
}

/// Per-profile log shapes differ, so the stored record is a tagged union
/// rather than one struct with optional fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "profile", rename_all = "lowercase")]
pub enum DailyLog {
    Piyush(PiyushDailyLog),
    Shruti(ShrutiDailyLog),
}

impl DailyLog {
    pub fn id(&self) -> &str {
        match self {
            DailyLog::Piyush(log) => &log.id,
            DailyLog::Shruti(log) => &log.id,
        }
    }

    pub fn profile(&self) -> Profile {
        match self {
            DailyLog::Piyush(_) => Profile::Piyush,
            DailyLog::Shruti(_) => Profile::Shruti,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            DailyLog::Piyush(log) => log.date,
            DailyLog::Shruti(log) => log.date,
        }
    }

    /// Day total: piyush carries a stored total over the five platforms,
    /// shruti totals are the sum of the two question counters.
    pub fn total(&self) -> u32 {
        match self {
            DailyLog::Piyush(log) => log.total,
            DailyLog::Shruti(log) => log.python_questions + log.sql_questions,
        }
    }
}

/// The five countable platforms on a piyush daily log.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogPlatform {
    Striver,
    Leetcode,
    Codeforces,
    Codechef,
    Others,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpRating {
    pub id: String,
    pub platform: String,
    pub rating: u32,
    pub updated_at: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestLog {
    pub id: String,
    pub platform: String,
    pub contest_name: String,
    pub date: NaiveDate,
    pub problems_solved: u32,
    pub total_problems: u32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct A2zProgress {
    pub easy_total: u32,
    pub easy_solved: u32,
    pub medium_total: u32,
    pub medium_solved: u32,
    pub hard_total: u32,
    pub hard_solved: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blind75Question {
    pub id: String,
    pub question_name: String,
    pub solution_link: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub profile: Profile,
    pub course_name: String,
    pub platform: String,
    pub total_content: u32,
    pub completed_content: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub profile: Profile,
    pub title: String,
    pub issuer: String,
    pub date: NaiveDate,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSection {
    pub id: String,
    pub section_type: String,
    pub content: String,
    pub sort_order: u32,
}

/// The resume editor works over this fixed set of sections; there is no
/// create endpoint, so an empty store gets them seeded at load.
pub const RESUME_SECTION_TYPES: [&str; 4] =
    ["work_experience", "skills", "projects", "achievements"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub profile: Profile,
    pub skill_name: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub profile: Profile,
    pub project_name: String,
    pub description: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub notes: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guesstimate {
    pub id: String,
    pub topic: String,
    pub learnings: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseCompetition {
    pub id: String,
    pub competition_name: String,
    pub notes: String,
    pub document_url: Option<String>,
}

/// Whole datastore, persisted as one JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub habit_entries: Vec<HabitEntry>,
    #[serde(default)]
    pub daily_logs: Vec<DailyLog>,
    #[serde(default)]
    pub cp_ratings: Vec<CpRating>,
    #[serde(default)]
    pub contest_logs: Vec<ContestLog>,
    #[serde(default)]
    pub a2z_progress: A2zProgress,
    #[serde(default)]
    pub blind75: Vec<Blind75Question>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub resume_sections: Vec<ResumeSection>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub case_studies: Vec<CaseStudy>,
    #[serde(default)]
    pub guesstimates: Vec<Guesstimate>,
    #[serde(default)]
    pub case_competitions: Vec<CaseCompetition>,
}

impl AppData {
    pub fn seed_resume_sections(&mut self) {
        if self.resume_sections.is_empty() {
            self.resume_sections = RESUME_SECTION_TYPES
                .iter()
                .enumerate()
                .map(|(index, section_type)| ResumeSection {
                    id: new_id(),
                    section_type: section_type.to_string(),
                    content: String::new(),
                    sort_order: index as u32,
                })
                .collect();
        }
    }
}

/// Response envelope shared by every endpoint. Clients branch on `success`
/// only; `error` carries the message rendered in the banner.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn success() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub profile: Profile,
}

#[derive(Debug, Deserialize)]
pub struct EntryRangeQuery {
    pub profile: Profile,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct NewTodo {
    pub profile: Profile,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub content: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct NewHabit {
    pub profile: Profile,
    pub name: String,
    #[serde(default)]
    pub sort_order: u32,
}

#[derive(Debug, Deserialize)]
pub struct NewHabitEntry {
    pub habit_id: String,
    pub date: NaiveDate,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateHabitEntry {
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToggleHabitEntry {
    pub habit_id: String,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct NewPiyushLog {
    pub date: NaiveDate,
    #[serde(default)]
    pub striver: u32,
    #[serde(default)]
    pub leetcode: u32,
    #[serde(default)]
    pub codeforces: u32,
    #[serde(default)]
    pub codechef: u32,
    #[serde(default)]
    pub others: u32,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewShrutiLog {
    pub date: NaiveDate,
    #[serde(default)]
    pub python_questions: u32,
    #[serde(default)]
    pub sql_questions: u32,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IncrementLog {
    pub platform: LogPlatform,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRating {
    pub rating: u32,
}

#[derive(Debug, Deserialize)]
pub struct NewContestLog {
    pub platform: String,
    pub contest_name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub problems_solved: u32,
    #[serde(default)]
    pub total_problems: u32,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContestLog {
    pub platform: Option<String>,
    pub contest_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub problems_solved: Option<u32>,
    pub total_problems: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewBlind75 {
    pub question_name: String,
    pub solution_link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBlind75 {
    pub completed: Option<bool>,
    pub solution_link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewCourse {
    pub profile: Profile,
    pub course_name: String,
    pub platform: String,
    #[serde(default = "default_course_total")]
    pub total_content: u32,
    #[serde(default)]
    pub completed_content: u32,
}

fn default_course_total() -> u32 {
    100
}

#[derive(Debug, Deserialize)]
pub struct UpdateCourse {
    pub course_name: Option<String>,
    pub platform: Option<String>,
    pub total_content: Option<u32>,
    pub completed_content: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct NewCertificate {
    pub profile: Profile,
    pub title: String,
    pub issuer: String,
    pub date: NaiveDate,
    pub file_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateResumeSection {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct NewSkill {
    pub profile: Profile,
    pub skill_name: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSkill {
    pub skill_name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewProject {
    pub profile: Profile,
    pub project_name: String,
    pub description: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProject {
    pub project_name: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewCaseStudy {
    pub title: String,
    #[serde(default)]
    pub notes: String,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCaseStudy {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct NewGuesstimate {
    pub topic: String,
    pub learnings: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGuesstimate {
    pub topic: Option<String>,
    pub learnings: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewCaseCompetition {
    pub competition_name: String,
    #[serde(default)]
    pub notes: String,
    pub document_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCaseCompetition {
    pub competition_name: Option<String>,
    pub notes: Option<String>,
    pub document_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HabitStreak {
    pub habit_id: String,
    pub name: String,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub completion_percent: u32,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub streaks: Vec<HabitStreak>,
}

#[derive(Debug, Serialize)]
pub struct LogTotals {
    pub weekly_total: u32,
    pub overall_total: u32,
}

#[derive(Debug, Serialize)]
pub struct DsaSummary {
    pub easy_percent: u32,
    pub medium_percent: u32,
    pub hard_percent: u32,
    pub overall_percent: u32,
}
