//! Core domain models for typed point records.
//!
//! This module defines the record type that flows through the whole pipeline
//! and the sort keys a user can select.

pub mod domain;
