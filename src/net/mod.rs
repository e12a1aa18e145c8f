//! Networking modules for the GraphQL transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! `graphql` executes operations against the backend under an all-errors-
//! returned policy; typed operation payloads live next to their callers.

pub mod graphql;
