use crate::{
    data::DataType,
    error::{GradebookResult, InvalidStudentFormSnafu, MakeQuerySnafu, StudentIdTakenSnafu},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use snafu::ResultExt;
use sqlx::SqliteConnection;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub major: String,
    pub gpa: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct StudentForm {
    pub name: String,
    pub major: String,
    pub gpa: i64,
}

/// `None` (or an explicit JSON `null`) leaves a field unchanged; any present
/// value is applied, including falsy ones like a gpa of 0 or an empty name.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UpdateStudentForm {
    pub name: Option<String>,
    pub major: Option<String>,
    pub gpa: Option<i64>,
}

impl StudentForm {
    pub fn from_value(value: Value) -> GradebookResult<Self> {
        serde_json::from_value(value).context(InvalidStudentFormSnafu)
    }
}

impl UpdateStudentForm {
    pub fn from_value(value: Value) -> GradebookResult<Self> {
        serde_json::from_value(value).context(InvalidStudentFormSnafu)
    }
}

impl DataType for Student {
    type Id = i64;
    type FormForAdding = StudentForm;
    type FormForUpdating = UpdateStudentForm;

    async fn get_from_db_by_id(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> GradebookResult<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT id, name, major, gpa FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn insert_into_database(
        id: Self::Id,
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> GradebookResult<Self> {
        let StudentForm { name, major, gpa } = to_be_added;

        //the primary key is the real guard against two PUTs racing on one id
        match sqlx::query("INSERT INTO students (id, name, major, gpa) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(&name)
            .bind(&major)
            .bind(gpa)
            .execute(conn)
            .await
        {
            Ok(_) => Ok(Self {
                id,
                name,
                major,
                gpa,
            }),
            Err(sqlx::Error::Database(db_error)) if db_error.is_unique_violation() => {
                StudentIdTakenSnafu { id }.fail()
            }
            Err(source) => Err(source).context(MakeQuerySnafu),
        }
    }

    async fn update_in_database(
        id: Self::Id,
        changes: Self::FormForUpdating,
        conn: &mut SqliteConnection,
    ) -> GradebookResult<Option<Self>> {
        let Some(mut student) = Self::get_from_db_by_id(id, &mut *conn).await? else {
            return Ok(None);
        };

        let UpdateStudentForm { name, major, gpa } = changes;
        if let Some(name) = name {
            student.name = name;
        }
        if let Some(major) = major {
            student.major = major;
        }
        if let Some(gpa) = gpa {
            student.gpa = gpa;
        }

        sqlx::query("UPDATE students SET name = ?, major = ?, gpa = ? WHERE id = ?")
            .bind(&student.name)
            .bind(&student.major)
            .bind(student.gpa)
            .bind(id)
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?;

        Ok(Some(student))
    }

    async fn remove_from_database(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> GradebookResult<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?;

        Ok(result.rows_affected() > 0)
    }
}
