//! # Form Listing Service
//!
//! Backs `GET /api/forms/type/{form_type}`, the data browser's only source.
//! The count and the page are read on the same connection so the pager and
//! the rows agree.

use crate::error::ApiError;
use crate::services::auth::extractor::AuthenticatedRep;
use crate::services::forms::store;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::{Page, PageQuery};

/// Actix web handler for `GET /api/forms/type/{form_type}?page=&limit=`.
///
/// # Arguments
/// * `form_type` - Registry key such as `USForm7`, from the URL path.
/// * `query` - 1-based `page` (default 1) and `limit` (default 10, at most 100).
///
/// # Returns
/// - `200 OK` with `{data, count}`, records newest first. An unknown form
///   type is simply an empty page.
pub async fn process(
    _rep: AuthenticatedRep,
    state: web::Data<AppState>,
    form_type: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let form_type = form_type.into_inner();
    let query = query.into_inner().normalized();

    let page = state
        .db
        .call(move |conn| {
            let count = store::count_by_type(conn, &form_type)?;
            let data = store::list_by_type(conn, &form_type, query)?;
            Ok(Page { data, count })
        })
        .await?;

    Ok(HttpResponse::Ok().json(page))
}
