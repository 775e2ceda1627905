//! Routed views. Thin collaborators: all request handling, session
//! mutation, and failure notification live in `net` and `state`.

pub mod home;
pub mod interface_form;
pub mod interfaces;
pub mod login;
pub mod videos;
