//! Data Transfer Objects for REST request/response serialization.

pub mod employer_dto;

pub use employer_dto::*;
