//! Reusable UI component modules.

pub mod notification;
