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

//! The calculator cloud function. Parses the request body into an operation
//! and its operands, delegates to the calculator engine, and maps validation
//! failures to 400 responses and everything else to a generic 500.

use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;
use chirp::prelude::*;
use lambda_runtime::{service_fn, LambdaEvent};
use lazy_static::lazy_static;
use log::info;
use serde_json::json;

lazy_static! {
    static ref LOGGER: LogFacade = LogFacade;
}

/// Decodes the request body and runs the calculation. The success response
/// echoes the operation and operands next to the computed result.
fn run_calculation(event: &ApiGatewayProxyRequest) -> Result<Response> {
    let body = event.body.as_deref().ok_or("the request body is missing")?;
    let request: CalculationRequest = serde_json::from_str(body)?;

    let result = calculate(&request.operation, &request.numbers)?;

    let numbers = request
        .numbers
        .iter()
        .copied()
        .map(json_number)
        .collect::<Vec<_>>();
    Ok(build_response(
        200,
        Some(json!({
            "operation": request.operation,
            "numbers": numbers,
            "result": json_number(result),
        })),
    ))
}

/// The endpoint for calculator function invocations.
///
/// # Arguments
/// * `event` - The API Gateway proxy request of the invocation.
/// * `logger` - The collaborator that records unexpected failures.
///
/// # Returns
/// A 200 response carrying the result, a 400 response carrying the exact
/// validation message for invalid input, or a generic 500 response for any
/// other failure. Failures never propagate past this function.
pub async fn calculator(event: &ApiGatewayProxyRequest, logger: &dyn Logger) -> Response {
    match run_calculation(event) {
        Ok(response) => response,
        // Validation failures are a client-error classification, not a
        // fatal fault. The message is pre-enumerated and safe to surface.
        Err(ChirpError::InvalidInput(message)) => {
            build_response(400, Some(json!({ "message": message })))
        }
        Err(err) => {
            logger.error(&err, &capture_stack()).await;
            build_response(500, Some(json!({ "message": "Something went wrong!" })))
        }
    }
}

async fn handler(event: LambdaEvent<ApiGatewayProxyRequest>) -> Result<Response> {
    info!("Receiving a request: {:?}", event.context.request_id);
    Ok(calculator(&event.payload, &*LOGGER).await)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(CHIRP_LOG_LEVEL.as_str()),
    )
    .init();

    info!(
        "Starting the calculator function: account {}, region {}",
        *CHIRP_AWS_ACCOUNT_ID, *CHIRP_AWS_REGION
    );
    lambda_runtime::run(service_fn(handler)).await?;
    Ok(())
}
