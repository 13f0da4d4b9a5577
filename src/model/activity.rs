/// Activities are seeded, never created through the API.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
}
