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

//! Common unit test utility methods

use crate::error::ChirpError;
use crate::logger::Logger;
use async_trait::async_trait;
use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;
use std::sync::Mutex;

/// A failure captured by [`MemoryLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// The rendered failure message.
    pub message: String,
    /// The stack captured at the failure site.
    pub stack:   String,
}

/// A [`Logger`] that records failures in memory so tests can assert on the
/// exact sequence of captured errors.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<ErrorRecord>>,
}

impl MemoryLogger {
    /// Returns the failures recorded so far, in capture order.
    pub fn records(&self) -> Vec<ErrorRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl Logger for MemoryLogger {
    async fn error(&self, error: &ChirpError, stack: &str) {
        self.records.lock().unwrap().push(ErrorRecord {
            message: format!("{}", error),
            stack:   stack.to_string(),
        });
    }
}

/// Returns an API Gateway proxy request carrying `body` as its payload.
/// All other request fields are irrelevant to the functions and left at
/// their defaults.
pub fn proxy_request(body: Option<&str>) -> ApiGatewayProxyRequest {
    ApiGatewayProxyRequest {
        body: body.map(|s| s.to_string()),
        ..Default::default()
    }
}
