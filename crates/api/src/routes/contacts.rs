//! Contact routes: CRUD and filtered search.
//!
//! Every handler takes the resolved session principal and scopes its store
//! access by `(owner, id)`, so a foreign contact and a missing contact are
//! the same 404.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use domain::models::{
    Contact, ContactResponse, CreateContactRequest, ListContactsResponse, PagingResponse,
    SearchContactsQuery, UpdateContactRequest,
};
use persistence::repositories::ContactRepository;
use shared::pagination;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::SessionUser;

/// Create a new contact owned by the caller.
///
/// POST /api/v1/contacts
pub async fn create_contact(
    State(state): State<AppState>,
    session: SessionUser,
    Json(request): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    request.validate().map_err(ApiError::from)?;

    let repo = ContactRepository::new(state.pool.clone());

    let contact = repo
        .create(
            Uuid::new_v4(),
            session.username(),
            &request.first_name,
            request.last_name.as_deref(),
            request.email.as_deref(),
            request.phone.as_deref(),
        )
        .await
        .map_err(ApiError::from)?;

    info!(
        contact_id = %contact.id,
        username = %session.username(),
        "Contact created"
    );

    Ok((
        StatusCode::CREATED,
        Json(Contact::from(contact).into()),
    ))
}

/// Get one of the caller's contacts.
///
/// GET /api/v1/contacts/:contact_id
pub async fn get_contact(
    State(state): State<AppState>,
    session: SessionUser,
    Path(contact_id): Path<String>,
) -> Result<Json<ContactResponse>, ApiError> {
    let contact_id = parse_contact_id(&contact_id)?;

    let repo = ContactRepository::new(state.pool.clone());

    let contact = repo
        .find_by_owner_and_id(session.username(), contact_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(contact_not_found)?;

    Ok(Json(Contact::from(contact).into()))
}

/// Replace all mutable fields of one of the caller's contacts.
///
/// PUT /api/v1/contacts/:contact_id
pub async fn update_contact(
    State(state): State<AppState>,
    session: SessionUser,
    Path(contact_id): Path<String>,
    Json(request): Json<UpdateContactRequest>,
) -> Result<Json<ContactResponse>, ApiError> {
    let contact_id = parse_contact_id(&contact_id)?;
    request.validate().map_err(ApiError::from)?;

    let repo = ContactRepository::new(state.pool.clone());

    let contact = repo
        .update(
            session.username(),
            contact_id,
            &request.first_name,
            request.last_name.as_deref(),
            request.email.as_deref(),
            request.phone.as_deref(),
        )
        .await
        .map_err(ApiError::from)?
        .ok_or_else(contact_not_found)?;

    info!(
        contact_id = %contact.id,
        username = %session.username(),
        "Contact updated"
    );

    Ok(Json(Contact::from(contact).into()))
}

/// Permanently delete one of the caller's contacts.
///
/// DELETE /api/v1/contacts/:contact_id
pub async fn delete_contact(
    State(state): State<AppState>,
    session: SessionUser,
    Path(contact_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let contact_id = parse_contact_id(&contact_id)?;

    let repo = ContactRepository::new(state.pool.clone());

    let deleted = repo
        .delete(session.username(), contact_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(contact_not_found());
    }

    info!(
        contact_id = %contact_id,
        username = %session.username(),
        "Contact deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Search the caller's contacts with optional filters, paged.
///
/// GET /api/v1/contacts?name=&email=&phone=&page=0&size=10
pub async fn search_contacts(
    State(state): State<AppState>,
    session: SessionUser,
    Query(query): Query<SearchContactsQuery>,
) -> Result<Json<ListContactsResponse>, ApiError> {
    query.validate().map_err(ApiError::from)?;

    let repo = ContactRepository::new(state.pool.clone());

    let filters = query.filters();
    let offset = pagination::offset(query.page, query.size);

    let (rows, total) = repo
        .search(session.username(), &filters, query.size, offset)
        .await
        .map_err(ApiError::from)?;

    let data: Vec<ContactResponse> = rows
        .into_iter()
        .map(|entity| Contact::from(entity).into())
        .collect();

    info!(
        username = %session.username(),
        total = total,
        page = query.page,
        "Contact search"
    );

    Ok(Json(ListContactsResponse {
        data,
        paging: PagingResponse {
            page: query.page,
            total_pages: pagination::total_pages(total, query.size),
            size: query.size,
        },
    }))
}

/// A path segment that is not a well-formed contact id cannot refer to any
/// contact, so it gets the same 404 as an unknown id.
fn parse_contact_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| contact_not_found())
}

fn contact_not_found() -> ApiError {
    ApiError::NotFound("Contact not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contact_id_valid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_contact_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_contact_id_garbage_is_not_found() {
        let error = parse_contact_id("98234982398").unwrap_err();
        match error {
            ApiError::NotFound(msg) => assert_eq!(msg, "Contact not found"),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_parse_contact_id_empty_is_not_found() {
        assert!(matches!(
            parse_contact_id(""),
            Err(ApiError::NotFound(_))
        ));
    }
}
