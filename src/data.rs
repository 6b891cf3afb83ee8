use crate::error::GradebookResult;
use sqlx::SqliteConnection;

pub mod student;

pub trait DataType: Sized {
    type Id;
    type FormForAdding;
    type FormForUpdating;

    async fn get_from_db_by_id(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> GradebookResult<Option<Self>>;
    async fn insert_into_database(
        id: Self::Id,
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> GradebookResult<Self>;
    async fn update_in_database(
        id: Self::Id,
        changes: Self::FormForUpdating,
        conn: &mut SqliteConnection,
    ) -> GradebookResult<Option<Self>>;
    async fn remove_from_database(id: Self::Id, conn: &mut SqliteConnection)
    -> GradebookResult<bool>;
}
