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

//! This module contains the [`Response`] envelope returned by every cloud
//! function in the system, and [`build_response`], the single place where
//! envelopes are constructed. All responses carry the same permissive CORS
//! headers; the body is present only when the caller supplies a payload.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

lazy_static! {
    /// The fixed CORS headers attached to every function response.
    static ref CORS_HEADERS: HashMap<String, String> = {
        let mut headers = HashMap::new();
        headers.insert(
            "Access-Control-Allow-Origin".to_string(),
            "*".to_string(),
        );
        headers.insert(
            "Access-Control-Allow-Headers".to_string(),
            "*".to_string(),
        );
        headers
    };
}

/// The HTTP-style response envelope returned by every function invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// The HTTP status code of the invocation.
    pub status_code: u16,
    /// The response headers. Always the two fixed CORS headers.
    pub headers:     HashMap<String, String>,
    /// The JSON-encoded payload. Omitted from the serialized envelope when
    /// the invocation produced no payload, never serialized as null.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body:        Option<String>,
}

/// Builds the response envelope for a function invocation.
///
/// # Arguments
/// * `status_code` - The HTTP status code of the response.
/// * `payload` - The response payload. `None` omits the body entirely;
///   any provided value, including `0`, `false` and `{}`, is JSON-encoded
///   into the body.
///
/// # Returns
/// A well-formed [`Response`] carrying the fixed CORS headers.
pub fn build_response(status_code: u16, payload: Option<Value>) -> Response {
    Response {
        status_code,
        headers: CORS_HEADERS.clone(),
        body: payload.map(|value| value.to_string()),
    }
}

/// Renders a numeric value the way JSON.stringify does: integral finite
/// values without a fractional part, non-finite values as null. Keeps the
/// wire form of `6` from turning into `6.0` on the way through f64.
pub fn json_number(value: f64) -> Value {
    if !value.is_finite() {
        Value::Null
    } else if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}
