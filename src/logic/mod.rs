// SPDX-License-Identifier: MIT

//! Business logic: the validation rule engine and service ports.

pub mod gateway;
pub mod validate;
