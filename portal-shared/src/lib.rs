#![cfg_attr(not(test), forbid(unsafe_code))]

//! Data models exchanged between the StudyPortal frontend and its backend.

pub mod models;
