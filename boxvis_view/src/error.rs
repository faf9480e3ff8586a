// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced from collaborators.

use alloc::string::String;

/// A collaborator call made on behalf of the view failed.
///
/// `E` is the collaborator's own error type and is kept as the source.
#[derive(Debug, thiserror::Error)]
pub enum ViewError<E: core::error::Error + 'static> {
    /// [`Evaluator::evaluate`](crate::Evaluator::evaluate) failed.
    #[error("evaluating `{label}` failed")]
    Evaluate {
        /// Label that was clicked.
        label: String,
        /// Evaluator failure.
        source: E,
    },
    /// [`Evaluator::signal_update`](crate::Evaluator::signal_update) failed.
    #[error("signaling an update failed")]
    Signal {
        /// Evaluator failure.
        source: E,
    },
    /// [`ObjectSource::parse`](crate::ObjectSource::parse) failed.
    #[error("parsing boxes failed")]
    Parse {
        /// Source failure.
        source: E,
    },
}

impl<E: core::error::Error + 'static> ViewError<E> {
    /// The collaborator's error.
    pub fn inner(&self) -> &E {
        match self {
            Self::Evaluate { source, .. } | Self::Signal { source } | Self::Parse { source } => {
                source
            }
        }
    }
}
