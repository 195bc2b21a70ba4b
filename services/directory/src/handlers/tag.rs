use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::error::DirectoryError;
use crate::state::AppState;
use crate::usecase::tag::ListTagsUseCase;

#[derive(Serialize)]
pub struct TagResponse {
    pub id: i32,
    pub label: String,
}

// ── GET /api/tag ─────────────────────────────────────────────────────────────

pub async fn list_tags(
    State(state): State<AppState>,
) -> Result<Json<Vec<TagResponse>>, DirectoryError> {
    let usecase = ListTagsUseCase {
        tags: state.tag_repo(),
    };
    let tags = usecase.execute().await?;
    Ok(Json(
        tags.into_iter()
            .map(|t| TagResponse {
                id: t.id,
                label: t.label,
            })
            .collect(),
    ))
}
