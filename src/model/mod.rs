//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (sections, UI state, catalogs)
//! - `filters`: Structured selections (cinemas, presets, ranges, film title)
//! - `compose`: Turning selections into a natural-language query
//! - `date_picker`: Calendar cursor and in-progress range
//! - `request`: Editable query text and the request lifecycle
//! - `kinologue_client`: HTTP client for the inference endpoint
//! - `app_model`: Main application model with state management methods

mod types;
mod filters;
mod compose;
mod date_picker;
mod request;
mod kinologue_client;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, Catalog, UiState};

pub use filters::{DateRange, FilterState};

pub use compose::{compose, format_range};

pub use date_picker::DatePicker;

pub use request::{ComposePolicy, RequestLifecycle, RequestOutcome, RequestTicket};

pub use kinologue_client::KinologueClient;

pub use app_model::AppModel;
