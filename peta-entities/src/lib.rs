#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # peta-entities
//!
//! Reusable, agnostic domain entities for PetaPintar.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod category;
pub mod id;
pub mod pin;
pub mod report;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
