// ABOUTME: Fetch-specific error types for the recipe collection and page assets
// ABOUTME: Distinguishes unreachable network, non-success status, and undecodable bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fetch Error Types
//!
//! A fetch either never reached the server, reached it and got a non-success
//! status, or got a body that does not decode. None of these is retried; the
//! page surfaces the failure and a reload is the recovery path.

use thiserror::Error;

/// Failure of the one-time recipe fetch or of an offline asset request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connection, TLS)
    #[error("failed to reach {url}: {reason}")]
    Unreachable {
        /// Requested URL
        url: String,
        /// Transport-level failure description
        reason: String,
    },
    /// The server answered with a non-success HTTP status
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },
    /// The response body could not be decoded
    #[error("malformed response: {reason}")]
    Malformed {
        /// Decoder failure description
        reason: String,
    },
}

impl FetchError {
    /// Message shown in the page's error state
    #[must_use]
    pub fn user_message(&self) -> String {
        format!("Error: {self}. Please try refreshing the page.")
    }
}
