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

//! The echo cloud function. Parses the request body as JSON and returns it
//! unchanged as the response payload.

use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;
use chirp::prelude::*;
use lambda_runtime::{service_fn, LambdaEvent};
use lazy_static::lazy_static;
use log::info;
use serde_json::{json, Value};

lazy_static! {
    static ref LOGGER: LogFacade = LogFacade;
}

/// Parses the request body as a JSON value. An absent body fails the same
/// way a malformed one does.
fn parse_body(event: &ApiGatewayProxyRequest) -> Result<Value> {
    let body = event.body.as_deref().ok_or("the request body is missing")?;
    Ok(serde_json::from_str(body)?)
}

/// The endpoint for echo function invocations.
///
/// # Arguments
/// * `event` - The API Gateway proxy request of the invocation.
/// * `logger` - The collaborator that records unexpected failures.
///
/// # Returns
/// A 200 response echoing the parsed body, or a generic 500 response when
/// the body cannot be parsed. Failures never propagate past this function.
pub async fn echo(event: &ApiGatewayProxyRequest, logger: &dyn Logger) -> Response {
    match parse_body(event) {
        Ok(input) => build_response(200, Some(input)),
        Err(err) => {
            logger.error(&err, &capture_stack()).await;
            build_response(500, Some(json!({ "message": "Something went wrong!" })))
        }
    }
}

async fn handler(event: LambdaEvent<ApiGatewayProxyRequest>) -> Result<Response> {
    info!("Receiving a request: {:?}", event.context.request_id);
    Ok(echo(&event.payload, &*LOGGER).await)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(CHIRP_LOG_LEVEL.as_str()),
    )
    .init();

    info!(
        "Starting the echo function: account {}, region {}",
        *CHIRP_AWS_ACCOUNT_ID, *CHIRP_AWS_REGION
    );
    lambda_runtime::run(service_fn(handler)).await?;
    Ok(())
}
