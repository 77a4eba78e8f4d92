//! Shared response envelope.
//!
//! Resource endpoints answer `{ "data": ... }`. Auth endpoints return their
//! token payload bare.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
