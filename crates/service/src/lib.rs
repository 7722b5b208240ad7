//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business rules (name uniqueness, product existence) from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Reports NotFound/Conflict through `ServiceError` for the HTTP layer to map.

pub mod errors;
pub mod product_service;
pub mod order_service;
#[cfg(test)]
pub mod test_support;
