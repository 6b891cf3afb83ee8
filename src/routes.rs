use crate::{
    routes::students::{delete_student, get_student, patch_student, put_student},
    state::GradebookState,
};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub mod students;

pub fn router(state: GradebookState) -> Router {
    Router::new()
        .route(
            "/student/{id}",
            get(get_student)
                .put(put_student)
                .patch(patch_student)
                .delete(delete_student),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
