//! Domain model definitions.

pub mod contact;
pub mod user;

pub use contact::{
    Contact, ContactFilters, ContactResponse, CreateContactRequest, ListContactsResponse,
    PagingResponse, SearchContactsQuery, UpdateContactRequest,
};
pub use user::User;
