use crate::handlers;
use crate::handlers::{
    cases, contests, courses, daily_logs, dsa, habits, portfolio, summary, todos,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/todos", get(todos::list).post(todos::create))
        .route("/api/todos/:id", put(todos::update).delete(todos::remove))
        .route("/api/habits", get(habits::list).post(habits::create))
        .route("/api/habits/:id", delete(habits::remove))
        .route(
            "/api/habit-entries",
            get(habits::list_entries).post(habits::create_entry),
        )
        .route("/api/habit-entries/:id", put(habits::update_entry))
        .route("/api/habit-entries/toggle", post(habits::toggle_entry))
        .route(
            "/api/daily-logs/:profile",
            get(daily_logs::list).post(daily_logs::create),
        )
        .route(
            "/api/daily-logs/:profile/:id",
            delete(daily_logs::remove),
        )
        .route(
            "/api/daily-logs/piyush/:id/increment",
            post(daily_logs::increment),
        )
        .route("/api/cp-ratings", get(contests::list_ratings))
        .route("/api/cp-ratings/:platform", put(contests::upsert_rating))
        .route(
            "/api/contest-logs",
            get(contests::list_logs).post(contests::create_log),
        )
        .route(
            "/api/contest-logs/:id",
            put(contests::update_log).delete(contests::remove_log),
        )
        .route("/api/a2z-progress", get(dsa::get_a2z).put(dsa::put_a2z))
        .route(
            "/api/blind75",
            get(dsa::list_blind75).post(dsa::create_blind75),
        )
        .route("/api/blind75/:id", put(dsa::update_blind75))
        .route("/api/courses", get(courses::list).post(courses::create))
        .route(
            "/api/courses/:id",
            put(courses::update).delete(courses::remove),
        )
        .route(
            "/api/certificates",
            get(portfolio::list_certificates).post(portfolio::create_certificate),
        )
        .route(
            "/api/certificates/:id",
            delete(portfolio::remove_certificate),
        )
        .route("/api/resume-sections", get(portfolio::list_resume_sections))
        .route(
            "/api/resume-sections/:id",
            put(portfolio::update_resume_section),
        )
        .route(
            "/api/skills",
            get(portfolio::list_skills).post(portfolio::create_skill),
        )
        .route(
            "/api/skills/:id",
            put(portfolio::update_skill).delete(portfolio::remove_skill),
        )
        .route(
            "/api/projects",
            get(portfolio::list_projects).post(portfolio::create_project),
        )
        .route(
            "/api/projects/:id",
            put(portfolio::update_project).delete(portfolio::remove_project),
        )
        .route(
            "/api/case-studies",
            get(cases::list_case_studies).post(cases::create_case_study),
        )
        .route(
            "/api/case-studies/:id",
            put(cases::update_case_study).delete(cases::remove_case_study),
        )
        .route(
            "/api/guesstimates",
            get(cases::list_guesstimates).post(cases::create_guesstimate),
        )
        .route(
            "/api/guesstimates/:id",
            put(cases::update_guesstimate).delete(cases::remove_guesstimate),
        )
        .route(
            "/api/case-competitions",
            get(cases::list_case_competitions).post(cases::create_case_competition),
        )
        .route(
            "/api/case-competitions/:id",
            put(cases::update_case_competition).delete(cases::remove_case_competition),
        )
        .route("/api/summary/habits", get(summary::habits))
        .route("/api/summary/daily-logs/:profile", get(summary::daily_logs))
        .route("/api/summary/dsa", get(summary::dsa))
        .with_state(state)
}
