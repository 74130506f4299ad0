// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy for loading and navigation.

use thiserror::Error;

/// Errors surfaced by the story layer.
///
/// Load and parse failures are fatal to the session: no scene can render
/// without a dataset, and a dataset with an unparseable row is rejected whole
/// rather than silently skewing aggregates. Annotation failures are not
/// represented here; they are scene-local and only logged.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The data source could not be fetched.
    #[error("failed to load dataset from {uri}: {message}")]
    Load {
        /// The requested source URI.
        uri: String,
        /// Transport-level failure description.
        message: String,
    },

    /// A declared-numeric field failed coercion.
    #[error("line {line}: column {column:?} is not a finite number: {value:?}")]
    Parse {
        /// 1-based data line number (the header is line 1).
        line: usize,
        /// Column name.
        column: String,
        /// The offending raw text.
        value: String,
    },

    /// A required column is missing from the CSV header.
    #[error("missing column {column:?} in dataset header")]
    MissingColumn {
        /// Column name.
        column: String,
    },

    /// A navigation target outside the scene range.
    #[error("scene number {0} is outside 1..=5")]
    InvalidScene(i64),
}
