//! Use-case services over the store boundary.

pub mod capsule_service;
