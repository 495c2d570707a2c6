// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::validation::ValidationError;

/// Application error type.
///
/// Every failure is contained at the boundary where it occurs; nothing here
/// is allowed to terminate the application. The worst outcome is an empty
/// workout list or a non-functional map.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;
