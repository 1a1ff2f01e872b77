//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain owns its model, storage adapter, service and HTTP
//! handlers. The catalogue currently has a single context, `tools`.

pub mod tools;
