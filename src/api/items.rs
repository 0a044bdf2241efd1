//! `/items` routes.
//!
//! Path identifiers are taken as raw strings and validated here so that a
//! malformed id and a non-positive id each get their own localized 400.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::api::{AppState, errors};
use crate::config::{MessageKind, Messages};
use crate::models::{ItemDraft, ItemFilter, ItemPatch};

/// Why a path identifier was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    /// Not an integer at all
    Malformed,
    /// Zero or negative
    NotPositive,
}

/// Parses a path identifier, accepting only strictly positive integers.
///
/// # Errors
/// [`IdError::Malformed`] when `raw` is not an integer, [`IdError::NotPositive`] when it is `<= 0`.
pub fn parse_id(raw: &str) -> Result<i64, IdError> {
    let id: i64 = raw.parse().map_err(|_| IdError::Malformed)?;
    if id <= 0 {
        return Err(IdError::NotPositive);
    }
    Ok(id)
}

/// Which resource a path identifier names; selects the message pair.
#[derive(Debug, Clone, Copy)]
enum IdSubject {
    Item,
    Invoice,
}

fn id_or_bad_request(raw: &str, subject: IdSubject, messages: &Messages) -> Result<i64, Response> {
    let (required, invalid) = match subject {
        IdSubject::Item => (MessageKind::ItemIdRequired, MessageKind::ItemIdInvalid),
        IdSubject::Invoice => (MessageKind::InvoiceIdRequired, MessageKind::InvoiceIdInvalid),
    };
    parse_id(raw).map_err(|e| match e {
        IdError::Malformed => errors::json_error(
            StatusCode::BAD_REQUEST,
            "id_required",
            messages.get(required),
        ),
        IdError::NotPositive => {
            errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", messages.get(invalid))
        }
    })
}

/// Router for every `/items` endpoint.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(get_all_items).post(create_item))
        .route("/items/", get(get_all_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .route("/items/invoices/:id", get(get_by_invoice_id))
}

/// `GET /items/`, optionally narrowed by `invoice_id` and `product_id` query parameters.
pub async fn get_all_items(
    State(state): State<AppState>,
    Query(filter): Query<ItemFilter>,
) -> Response {
    match state.items.find_all(filter).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::internal_error(&state.messages, &e),
    }
}

/// `GET /items/:id`
pub async fn get_item(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match id_or_bad_request(&id, IdSubject::Item, &state.messages) {
        Ok(v) => v,
        Err(response) => return response,
    };

    match state.items.find_by_id(id).await {
        Ok(Some(item)) => (StatusCode::OK, Json(item)).into_response(),
        Ok(None) => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            state.messages.get(MessageKind::ItemNotFound),
        ),
        Err(e) => errors::internal_error(&state.messages, &e),
    }
}

/// `PATCH /items/:id`. Responds with the patch as received, not the stored row.
///
/// The id is checked before the body so a bad id always gets the localized 400.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ItemPatch>, JsonRejection>,
) -> Response {
    let id = match id_or_bad_request(&id, IdSubject::Item, &state.messages) {
        Ok(v) => v,
        Err(response) => return response,
    };
    let patch = match payload {
        Ok(Json(patch)) => patch,
        Err(rejection) => return rejection.into_response(),
    };

    match state.items.update(id, patch.clone()).await {
        Ok(()) => (StatusCode::OK, Json(patch)).into_response(),
        Err(e) => errors::internal_error(&state.messages, &e),
    }
}

/// `POST /items/`
pub async fn create_item(State(state): State<AppState>, Json(draft): Json<ItemDraft>) -> Response {
    match state.items.save(draft).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::internal_error(&state.messages, &e),
    }
}

/// `DELETE /items/:id`. 204 whether or not the item existed.
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match id_or_bad_request(&id, IdSubject::Item, &state.messages) {
        Ok(v) => v,
        Err(response) => return response,
    };

    match state.items.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::internal_error(&state.messages, &e),
    }
}

/// `GET /items/invoices/:id`
pub async fn get_by_invoice_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let invoice_id = match id_or_bad_request(&id, IdSubject::Invoice, &state.messages) {
        Ok(v) => v,
        Err(response) => return response,
    };

    match state.items.find_by_invoice(invoice_id).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::internal_error(&state.messages, &e),
    }
}
