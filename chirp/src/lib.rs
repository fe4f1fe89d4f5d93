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

#![warn(missing_docs, clippy::needless_borrow)]
// Clippy lints, some should be disabled incrementally
#![allow(clippy::float_cmp, clippy::module_inception)]

//! Chirp is a pair of tiny HTTP-triggered cloud functions -- an echo endpoint
//! and a four-operation calculator -- sharing one request/response core. This
//! crate holds everything the function binaries have in common: the response
//! envelope and its builder, the calculator engine, the error type, the
//! logging collaborator, and the process configuration.

pub mod calculator;
pub mod config;
pub mod error;
pub mod logger;
pub mod prelude;
pub mod response;
pub mod test_util;
