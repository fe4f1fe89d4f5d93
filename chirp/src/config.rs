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

//! Configuration settings that affect all crates in current system.

use ini::Ini;
use lazy_static::lazy_static;
use std::env;

lazy_static! {
    /// Global settings.
    pub static ref CHIRP_CONF: Ini = Ini::load_from_str(include_str!("./config.toml")).unwrap();

    /// The AWS account that owns the deployed functions. Attached to every
    /// startup banner for log correlation across accounts.
    pub static ref CHIRP_AWS_ACCOUNT_ID: String =
        env::var("AWS_ACCOUNT_ID").unwrap_or_else(|_| CHIRP_CONF["aws"]["account_id"].to_string());
    /// The AWS region the functions run in.
    pub static ref CHIRP_AWS_REGION: String =
        env::var("AWS_REGION").unwrap_or_else(|_| CHIRP_CONF["aws"]["region"].to_string());
    /// Default log filter for binaries when RUST_LOG is unset.
    pub static ref CHIRP_LOG_LEVEL: String = CHIRP_CONF["log"]["level"].to_string();
}
