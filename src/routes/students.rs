use crate::{
    data::{
        DataType,
        student::{Student, StudentForm, UpdateStudentForm},
    },
    error::{GradebookResult, MissingStudentSnafu, StudentIdTakenSnafu, UpdateMissingStudentSnafu},
    state::GradebookState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use snafu::{OptionExt, ensure};

pub async fn get_student(
    State(state): State<GradebookState>,
    Path(id): Path<i64>,
) -> GradebookResult<Json<Student>> {
    let mut conn = state.get_connection().await?;
    let student = Student::get_from_db_by_id(id, &mut conn)
        .await?
        .context(MissingStudentSnafu { id })?;

    Ok(Json(student))
}

pub async fn put_student(
    State(state): State<GradebookState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> GradebookResult<impl IntoResponse> {
    let form = StudentForm::from_value(body)?;

    let mut conn = state.get_connection().await?;
    ensure!(
        Student::get_from_db_by_id(id, &mut conn).await?.is_none(),
        StudentIdTakenSnafu { id }
    );

    let student = Student::insert_into_database(id, form, &mut conn).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn patch_student(
    State(state): State<GradebookState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> GradebookResult<Json<Student>> {
    let changes = UpdateStudentForm::from_value(body)?;

    let mut conn = state.get_connection().await?;
    let student = Student::update_in_database(id, changes, &mut conn)
        .await?
        .context(UpdateMissingStudentSnafu { id })?;

    Ok(Json(student))
}

pub async fn delete_student(
    State(state): State<GradebookState>,
    Path(id): Path<i64>,
) -> GradebookResult<StatusCode> {
    let mut conn = state.get_connection().await?;
    ensure!(
        Student::remove_from_database(id, &mut conn).await?,
        MissingStudentSnafu { id }
    );

    Ok(StatusCode::NO_CONTENT)
}
