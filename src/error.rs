use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use snafu::Snafu;

pub type GradebookResult<T> = Result<T, GradebookError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum GradebookError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error getting db connection"))]
    GetDatabaseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Invalid Student fields: {}", source))]
    InvalidStudentForm { source: serde_json::Error },
    #[snafu(display("Could not find Student with that id"))]
    MissingStudent { id: i64 },
    #[snafu(display("Student doesn't exist, cannot update"))]
    UpdateMissingStudent { id: i64 },
    #[snafu(display("Student id taken..."))]
    StudentIdTaken { id: i64 },
}

impl IntoResponse for GradebookError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        let status_code = match &self {
            Self::OpenDatabase { .. } | Self::GetDatabaseConnection { .. } => ISE,
            Self::MakeQuery { .. } => ISE,
            Self::MigrateError { .. } => ISE,
            Self::BadEnvVar { .. } => ISE,
            Self::InvalidStudentForm { .. } => BI,
            Self::MissingStudent { .. } | Self::UpdateMissingStudent { .. } => NF,
            Self::StudentIdTaken { .. } => StatusCode::CONFLICT,
        };

        error!(?self, "Error!");
        (status_code, Json(json!({"message": self.to_string()}))).into_response()
    }
}
