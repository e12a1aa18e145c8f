//! Shared UI state types provided via Leptos context.

pub mod notices;
