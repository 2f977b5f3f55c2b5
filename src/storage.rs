use crate::errors::AppError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/tracker.json"))
}

pub async fn load_data(path: &Path) -> AppData {
    let mut data = match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    };
    data.seed_resume_sections();
    data
}

/// Stage to a sibling temp file and rename, so a crash mid-write cannot
/// truncate the store.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    let staging = path.with_extension("json.tmp");
    fs::write(&staging, payload).await.map_err(AppError::internal)?;
    fs::rename(&staging, path).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "tracker_{}_{}_{}.json",
            name,
            std::process::id(),
            nanos
        ));
        path
    }

    #[tokio::test]
    async fn missing_file_starts_empty_with_seeded_resume_sections() {
        let path = temp_path("missing");
        let data = load_data(&path).await;

        assert!(data.todos.is_empty());
        assert_eq!(data.resume_sections.len(), 4);
        assert_eq!(data.resume_sections[0].section_type, "work_experience");
        assert_eq!(data.resume_sections[3].section_type, "achievements");
        assert!(data.resume_sections.iter().all(|s| s.content.is_empty()));
    }

    #[tokio::test]
    async fn persist_round_trips_and_leaves_no_staging_file() {
        let path = temp_path("persist");
        let mut data = load_data(&path).await;
        data.resume_sections[1].content = "Rust, SQL".to_string();

        persist_data(&path, &data).await.expect("persist");
        assert!(!path.with_extension("json.tmp").exists());

        let loaded = load_data(&path).await;
        assert_eq!(loaded.resume_sections[1].content, "Rust, SQL");

        let _ = fs::remove_file(&path).await;
    }
}
