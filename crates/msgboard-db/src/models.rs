/// Row type for the `messages` table. `created_at` is kept as the stored
/// text; the API layer parses it.
#[derive(Debug, Clone)]
pub struct MessageRow {
    pub id: i64,
    pub username: String,
    pub message: String,
    pub created_at: String,
}
