//! Reusable UI components.

pub mod notice_stack;
