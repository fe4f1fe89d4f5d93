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

//! The calculator engine. A pure, deterministic mapping from an operation
//! name and an ordered sequence of numbers to a numeric result, or an
//! [`ChirpError::InvalidInput`] failure carrying a client-safe message.

use crate::error::{ChirpError, Result};
use serde::{Deserialize, Serialize};

/// The decoded request body of the calculator function.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CalculationRequest {
    /// One of `addition`, `subtraction`, `multiplication`, `division`.
    pub operation: String,
    /// The ordered operands.
    pub numbers:   Vec<f64>,
}

/// Add all numbers in the sequence. The empty sum is 0.
fn add(numbers: &[f64]) -> f64 {
    numbers.iter().sum()
}

/// Subtract subsequent numbers from the first number, left to right.
/// The empty difference is 0; a single number is returned unchanged.
fn subtract(numbers: &[f64]) -> f64 {
    match numbers.split_first() {
        Some((first, rest)) => rest.iter().fold(*first, |result, num| result - num),
        None => 0.0,
    }
}

/// Multiply all numbers in the sequence. The empty product is 1.
fn multiply(numbers: &[f64]) -> f64 {
    numbers.iter().product()
}

/// Divide the first number by the second number. Requires exactly two
/// numbers and a non-zero divisor.
fn divide(numbers: &[f64]) -> Result<f64> {
    if numbers.len() < 2 {
        return Err(ChirpError::InvalidInput(
            "Division operation requires exactly two numbers".to_string(),
        ));
    }
    if numbers.len() > 2 {
        return Err(ChirpError::InvalidInput(
            "Division operation supports exactly two numbers only".to_string(),
        ));
    }
    if numbers[1] == 0.0 {
        return Err(ChirpError::InvalidInput(
            "Division by zero is not allowed".to_string(),
        ));
    }
    Ok(numbers[0] / numbers[1])
}

/// Routes the calculation to the appropriate operation.
///
/// # Arguments
/// * `operation` - The operation type (addition, subtraction,
///   multiplication, division).
/// * `numbers` - The ordered sequence of operands.
///
/// # Returns
/// The numeric result, or [`ChirpError::InvalidInput`] when the operation
/// is unknown or the division preconditions are violated.
pub fn calculate(operation: &str, numbers: &[f64]) -> Result<f64> {
    match operation {
        "addition" => Ok(add(numbers)),
        "subtraction" => Ok(subtract(numbers)),
        "multiplication" => Ok(multiply(numbers)),
        "division" => divide(numbers),
        _ => Err(ChirpError::InvalidInput(
            "Invalid operation type. Supported operations are: \
             addition, subtraction, multiplication, division"
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn invalid_input_message(result: Result<f64>) -> String {
        match result.unwrap_err() {
            ChirpError::InvalidInput(msg) => msg,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn addition() {
        assert_eq!(10.0, calculate("addition", &[1.0, 2.0, 3.0, 4.0]).unwrap());
        assert_eq!(5.0, calculate("addition", &[5.0]).unwrap());
        assert_eq!(0.0, calculate("addition", &[]).unwrap());
        assert_eq!(2.0, calculate("addition", &[10.0, -5.0, -3.0]).unwrap());
    }

    #[test]
    fn subtraction() {
        assert_eq!(5.0, calculate("subtraction", &[10.0, 2.0, 3.0]).unwrap());
        assert_eq!(7.0, calculate("subtraction", &[7.0]).unwrap());
        assert_eq!(0.0, calculate("subtraction", &[]).unwrap());
    }

    #[test]
    fn multiplication() {
        assert_eq!(24.0, calculate("multiplication", &[2.0, 3.0, 4.0]).unwrap());
        assert_eq!(0.0, calculate("multiplication", &[5.0, 0.0, 3.0]).unwrap());
        assert_eq!(1.0, calculate("multiplication", &[]).unwrap());
    }

    #[test]
    fn division() {
        assert_eq!(5.0, calculate("division", &[10.0, 2.0]).unwrap());
        assert_eq!(2.5, calculate("division", &[10.0, 4.0]).unwrap());
    }

    #[test]
    fn division_arity_is_enforced() {
        assert_eq!(
            "Division operation requires exactly two numbers",
            invalid_input_message(calculate("division", &[10.0]))
        );
        assert_eq!(
            "Division operation requires exactly two numbers",
            invalid_input_message(calculate("division", &[]))
        );
        assert_eq!(
            "Division operation supports exactly two numbers only",
            invalid_input_message(calculate("division", &[10.0, 2.0, 5.0]))
        );
    }

    #[test]
    fn division_by_zero_is_rejected() {
        assert_eq!(
            "Division by zero is not allowed",
            invalid_input_message(calculate("division", &[10.0, 0.0]))
        );
        // -0.0 compares equal to 0.0 and is rejected as well.
        assert_eq!(
            "Division by zero is not allowed",
            invalid_input_message(calculate("division", &[10.0, -0.0]))
        );
    }

    #[test]
    fn unknown_operation_is_rejected() {
        for operation in ["modulo", "", "Addition", "exponentiation"] {
            assert_eq!(
                "Invalid operation type. Supported operations are: \
                 addition, subtraction, multiplication, division",
                invalid_input_message(calculate(operation, &[10.0, 3.0]))
            );
        }
    }

    #[test]
    fn addition_matches_the_arithmetic_sum() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let len = rng.gen_range(0..16);
            let numbers = (0..len)
                .map(|_| rng.gen_range(-1000.0..1000.0))
                .collect::<Vec<f64>>();
            let expected = numbers.iter().sum::<f64>();
            assert_eq!(expected, calculate("addition", &numbers).unwrap());
        }
    }

    #[test]
    fn multiplication_matches_the_arithmetic_product() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let len = rng.gen_range(0..16);
            let numbers = (0..len)
                .map(|_| rng.gen_range(-10.0..10.0))
                .collect::<Vec<f64>>();
            let expected = numbers.iter().product::<f64>();
            assert_eq!(expected, calculate("multiplication", &numbers).unwrap());
        }
    }

    #[test]
    fn subtraction_folds_left_to_right() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let len = rng.gen_range(1..16);
            let numbers = (0..len)
                .map(|_| rng.gen_range(-1000.0..1000.0))
                .collect::<Vec<f64>>();
            let expected = numbers[1..]
                .iter()
                .fold(numbers[0], |result, num| result - num);
            assert_eq!(expected, calculate("subtraction", &numbers).unwrap());
        }
    }

    #[test]
    fn division_matches_float_division() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let dividend: f64 = rng.gen_range(-1000.0..1000.0);
            let divisor: f64 = rng.gen_range(1.0..1000.0);
            assert_eq!(
                dividend / divisor,
                calculate("division", &[dividend, divisor]).unwrap()
            );
        }
    }

    #[test]
    fn calculation_request_decodes_from_json() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{"operation":"addition","numbers":[1,2,3]}"#).unwrap();
        assert_eq!("addition", request.operation);
        assert_eq!(vec![1.0, 2.0, 3.0], request.numbers);
    }

    #[test]
    fn calculation_request_requires_both_fields() {
        assert!(serde_json::from_str::<CalculationRequest>(r#"{"operation":"addition"}"#).is_err());
        assert!(serde_json::from_str::<CalculationRequest>(r#"{"numbers":[1,2]}"#).is_err());
    }
}
