// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Magic-link request form.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Ingresa un correo válido"))]
    pub email: String,
}
