use chrono::Local;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TodoResponse {
    id: String,
    content: String,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct HabitResponse {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct HabitStreakResponse {
    habit_id: String,
    streak: u32,
}

#[derive(Debug, Deserialize)]
struct HabitSummaryResponse {
    completion_percent: u32,
    streaks: Vec<HabitStreakResponse>,
}

#[derive(Debug, Deserialize)]
struct PiyushLogResponse {
    id: String,
    total: u32,
    codechef: u32,
}

#[derive(Debug, Deserialize)]
struct LogTotalsResponse {
    weekly_total: u32,
    overall_total: u32,
}

#[derive(Debug, Deserialize)]
struct ResumeSectionResponse {
    id: String,
    section_type: String,
    content: String,
    sort_order: u32,
}

#[derive(Debug, Deserialize)]
struct CourseResponse {
    id: String,
    total_content: u32,
    completed_content: u32,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "intern_tracker_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/cp-ratings")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_intern_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn list_todos(client: &Client, base_url: &str) -> Vec<TodoResponse> {
    let envelope: Envelope<Vec<TodoResponse>> = client
        .get(format!("{base_url}/api/todos?profile=piyush"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(envelope.success);
    envelope.data.unwrap()
}

#[tokio::test]
async fn http_todo_lifecycle() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created: Envelope<TodoResponse> = client
        .post(format!("{}/api/todos", server.base_url))
        .json(&serde_json::json!({ "profile": "piyush", "content": "revise graphs" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(created.success);
    let todo = created.data.unwrap();
    assert_eq!(todo.content, "revise graphs");
    assert!(!todo.completed);

    let todos = list_todos(&client, &server.base_url).await;
    assert!(todos.iter().any(|t| t.id == todo.id));

    let updated: Envelope<TodoResponse> = client
        .put(format!("{}/api/todos/{}", server.base_url, todo.id))
        .json(&serde_json::json!({ "completed": true }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(updated.data.unwrap().completed);

    let deleted: Envelope<serde_json::Value> = client
        .delete(format!("{}/api/todos/{}", server.base_url, todo.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(deleted.success);

    let todos = list_todos(&client, &server.base_url).await;
    assert!(!todos.iter().any(|t| t.id == todo.id));
}

#[tokio::test]
async fn http_todo_blank_content_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = list_todos(&client, &server.base_url).await.len();

    let response = client
        .post(format!("{}/api/todos", server.base_url))
        .json(&serde_json::json!({ "profile": "piyush", "content": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let envelope: Envelope<serde_json::Value> = response.json().await.unwrap();
    assert!(!envelope.success);
    assert!(!envelope.error.unwrap().is_empty());

    let after = list_todos(&client, &server.base_url).await.len();
    assert_eq!(after, before);
}

#[tokio::test]
async fn http_malformed_body_still_returns_envelope() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    // Missing required field: the decode failure must still render the
    // envelope, not a plain-text rejection.
    let response = client
        .post(format!("{}/api/todos", server.base_url))
        .json(&serde_json::json!({ "profile": "piyush" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let envelope: Envelope<serde_json::Value> = response.json().await.unwrap();
    assert!(!envelope.success);
    assert!(envelope.error.unwrap().contains("content"));

    // Same for an unknown profile in a query string.
    let response = client
        .get(format!("{}/api/todos?profile=nobody", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let envelope: Envelope<serde_json::Value> = response.json().await.unwrap();
    assert!(!envelope.success);
    assert!(!envelope.error.unwrap().is_empty());
}

#[tokio::test]
async fn http_todo_delete_unknown_id_is_noop() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = list_todos(&client, &server.base_url).await.len();

    let deleted: Envelope<serde_json::Value> = client
        .delete(format!("{}/api/todos/no-such-id", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(deleted.success);

    let after = list_todos(&client, &server.base_url).await.len();
    assert_eq!(after, before);
}

#[tokio::test]
async fn http_piyush_log_totals_and_increment() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let today = Local::now().date_naive();
    let created: Envelope<PiyushLogResponse> = client
        .post(format!("{}/api/daily-logs/piyush", server.base_url))
        .json(&serde_json::json!({
            "date": today.to_string(),
            "striver": 2,
            "leetcode": 1
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(created.success);
    let log = created.data.unwrap();
    assert_eq!(log.total, 3);

    let bumped: Envelope<PiyushLogResponse> = client
        .post(format!(
            "{}/api/daily-logs/piyush/{}/increment",
            server.base_url, log.id
        ))
        .json(&serde_json::json!({ "platform": "codechef" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let bumped = bumped.data.unwrap();
    assert_eq!(bumped.codechef, 1);
    assert_eq!(bumped.total, 4);

    let totals: Envelope<LogTotalsResponse> = client
        .get(format!(
            "{}/api/summary/daily-logs/piyush",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let totals = totals.data.unwrap();
    assert!(totals.overall_total >= 4);
    assert!(totals.weekly_total <= totals.overall_total);

    let deleted: Envelope<serde_json::Value> = client
        .delete(format!(
            "{}/api/daily-logs/piyush/{}",
            server.base_url, log.id
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(deleted.success);
}

#[tokio::test]
async fn http_habit_toggle_drives_streak() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created: Envelope<HabitResponse> = client
        .post(format!("{}/api/habits", server.base_url))
        .json(&serde_json::json!({ "profile": "shruti", "name": "SQL practice" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let habit = created.data.unwrap();
    assert_eq!(habit.name, "SQL practice");

    let today = Local::now().date_naive();
    let toggled: Envelope<serde_json::Value> = client
        .post(format!("{}/api/habit-entries/toggle", server.base_url))
        .json(&serde_json::json!({ "habit_id": habit.id, "date": today.to_string() }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(toggled.success);

    let summary: Envelope<HabitSummaryResponse> = client
        .get(format!(
            "{}/api/summary/habits?profile=shruti",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let summary = summary.data.unwrap();
    assert!(summary.completion_percent > 0);
    let streak = summary
        .streaks
        .iter()
        .find(|s| s.habit_id == habit.id)
        .expect("streak entry for created habit");
    assert_eq!(streak.streak, 1);

    // Toggling the same day again unchecks it, breaking the streak.
    let toggled: Envelope<serde_json::Value> = client
        .post(format!("{}/api/habit-entries/toggle", server.base_url))
        .json(&serde_json::json!({ "habit_id": habit.id, "date": today.to_string() }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(toggled.success);

    let summary: Envelope<HabitSummaryResponse> = client
        .get(format!(
            "{}/api/summary/habits?profile=shruti",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let streak = summary
        .data
        .unwrap()
        .streaks
        .into_iter()
        .find(|s| s.habit_id == habit.id)
        .expect("streak entry for created habit");
    assert_eq!(streak.streak, 0);

    let deleted: Envelope<serde_json::Value> = client
        .delete(format!("{}/api/habits/{}", server.base_url, habit.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(deleted.success);

    let habits: Envelope<Vec<HabitResponse>> = client
        .get(format!("{}/api/habits?profile=shruti", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!habits.data.unwrap().iter().any(|h| h.id == habit.id));
}

#[tokio::test]
async fn http_resume_sections_are_seeded_and_editable() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let sections: Envelope<Vec<ResumeSectionResponse>> = client
        .get(format!("{}/api/resume-sections", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let sections = sections.data.unwrap();
    assert_eq!(sections.len(), 4);
    assert_eq!(sections[0].section_type, "work_experience");
    assert!(sections.windows(2).all(|w| w[0].sort_order < w[1].sort_order));

    let skills = sections
        .iter()
        .find(|section| section.section_type == "skills")
        .expect("seeded skills section");

    let updated: Envelope<ResumeSectionResponse> = client
        .put(format!(
            "{}/api/resume-sections/{}",
            server.base_url, skills.id
        ))
        .json(&serde_json::json!({ "content": "Rust, SQL, Excel" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated.data.unwrap().content, "Rust, SQL, Excel");

    let response = client
        .put(format!(
            "{}/api/resume-sections/{}",
            server.base_url, skills.id
        ))
        .json(&serde_json::json!({ "content": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_course_defaults_and_progress_update() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created: Envelope<CourseResponse> = client
        .post(format!("{}/api/courses", server.base_url))
        .json(&serde_json::json!({
            "profile": "shruti",
            "course_name": "SQL Bootcamp",
            "platform": "Udemy"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let course = created.data.unwrap();
    assert_eq!(course.total_content, 100);
    assert_eq!(course.completed_content, 0);

    let updated: Envelope<CourseResponse> = client
        .put(format!("{}/api/courses/{}", server.base_url, course.id))
        .json(&serde_json::json!({ "completed_content": 37 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated.data.unwrap().completed_content, 37);

    let deleted: Envelope<serde_json::Value> = client
        .delete(format!("{}/api/courses/{}", server.base_url, course.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(deleted.success);
}
