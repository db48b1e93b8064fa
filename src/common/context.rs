use sqlx::{Pool, Sqlite};

pub trait Context: Sync + Send {
    fn db(&self) -> &Pool<Sqlite>;
}
