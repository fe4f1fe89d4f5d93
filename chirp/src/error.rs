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

//! Chirp error types

use std::error;
use std::fmt::{Display, Formatter};
use std::result;

/// Result type for operations that could result in an [ChirpError]
pub type Result<T> = result::Result<T, ChirpError>;

/// Chirp error
#[derive(Debug)]
pub enum ChirpError {
    /// Error returned when the client input fails validation. The message is
    /// safe to surface to the caller verbatim with a 400 status.
    InvalidInput(String),
    /// Error returned when serde_json failed to serialize or deserialize data.
    SerdeJson(serde_json::Error),
    /// Error associated to Lambda runtime execution.
    LambdaError(Box<dyn std::error::Error + Send + Sync>),
    /// Error returned during execution of the function that does not map to
    /// any client-visible category. Surfaces as a generic 500 response.
    Execution(String),
}

impl From<serde_json::Error> for ChirpError {
    fn from(e: serde_json::Error) -> Self {
        ChirpError::SerdeJson(e)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for ChirpError {
    fn from(e: Box<dyn std::error::Error + Send + Sync>) -> Self {
        ChirpError::LambdaError(e)
    }
}

impl From<&str> for ChirpError {
    fn from(e: &str) -> Self {
        ChirpError::Execution(e.to_string())
    }
}

impl Display for ChirpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            ChirpError::InvalidInput(ref desc) => write!(f, "{}", desc),
            ChirpError::SerdeJson(ref desc) => write!(f, "serde_json error: {:?}", desc),
            ChirpError::LambdaError(ref desc) => write!(f, "Lambda error: {}", desc),
            ChirpError::Execution(ref desc) => write!(f, "Execution error: {}", desc),
        }
    }
}

impl error::Error for ChirpError {}
