//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! coordinates between the model and view, and dispatches requests to the
//! Kinologue endpoint. It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `query`: Sending the query and resolving the response

mod input;
mod query;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::AppModel;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self { model }
    }

    /// Turn a request error into the inline message shown under the query.
    ///
    /// The underlying message (including any HTTP status) is always kept.
    pub(crate) fn format_error(error: &anyhow::Error) -> String {
        let error_str = format!("{:#}", error);

        if error_str.contains("HTTP 429") {
            format!("Error: {}. Rate limited, please wait a moment.", error_str)
        } else if error_str.contains("HTTP 5") {
            format!("Error: {}. Kinologue is having trouble, try again shortly.", error_str)
        } else if error_str.contains("timed out") {
            format!("Error: {}. The request took too long.", error_str)
        } else {
            format!("Error: {}", error_str)
        }
    }
}
