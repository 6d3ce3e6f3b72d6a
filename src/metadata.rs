/// What the renderer knows about one converted post. Written by
/// `convert-posts`, read back by `update-site`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub title: String,
    pub description: String,
    pub file_name: String,
    pub output_path: std::path::PathBuf,
}
