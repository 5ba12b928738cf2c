use std::path::PathBuf;

/// CLI configuration, loaded from environment variables.
pub struct Config {
    /// Directory holding per-identity JSON documents.
    pub details_dir: PathBuf,
    /// Directory holding per-identity profile images.
    pub image_dir: PathBuf,
    /// Path to the serialized gallery artifact.
    pub gallery_path: PathBuf,
    /// Euclidean distance threshold for a positive match.
    pub match_threshold: f32,
}

impl Config {
    /// Load configuration from `FACEVIEW_*` environment variables with
    /// defaults under the XDG data directory.
    pub fn from_env() -> Self {
        let data_dir = std::env::var("FACEVIEW_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        Self {
            details_dir: env_path("FACEVIEW_DETAILS_DIR", data_dir.join("details")),
            image_dir: env_path("FACEVIEW_IMAGE_DIR", data_dir.join("images")),
            gallery_path: env_path("FACEVIEW_GALLERY_PATH", data_dir.join("face_enc")),
            match_threshold: env_f32("FACEVIEW_MATCH_THRESHOLD", 0.6),
        }
    }
}

fn default_data_dir() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".local/share")
        })
        .join("faceview")
}

fn env_path(key: &str, default: PathBuf) -> PathBuf {
    std::env::var(key).map(PathBuf::from).unwrap_or(default)
}

fn env_f32(key: &str, default: f32) -> f32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
