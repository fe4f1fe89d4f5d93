// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! The logging collaborator of the cloud functions. Handlers record each
//! unexpected failure exactly once through this seam instead of reaching for
//! ambient global state, so tests can substitute a recording logger and
//! assert on what was captured.

use crate::error::ChirpError;
use async_trait::async_trait;
use log::error;
use std::backtrace::Backtrace;

/// The error-recording capability consumed by the function handlers.
#[async_trait]
pub trait Logger: Send + Sync {
    /// Records an unexpected failure together with the stack captured at the
    /// failure site. Never fails; handler completion does not depend on it.
    async fn error(&self, error: &ChirpError, stack: &str);
}

/// A [`Logger`] that forwards failures to the `log` facade, which the
/// function binaries wire to env_logger at startup.
#[derive(Debug, Default)]
pub struct LogFacade;

#[async_trait]
impl Logger for LogFacade {
    async fn error(&self, error: &ChirpError, stack: &str) {
        error!("{}", error);
        error!("stack: {}", stack);
    }
}

/// Captures the current stack as a string for failure records.
pub fn capture_stack() -> String {
    Backtrace::force_capture().to_string()
}
