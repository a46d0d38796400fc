//! Response body shapes shared by the handlers.

use serde::Serialize;

/// `{"status": "..."}` — the shape every mutation endpoint replies with.
#[derive(Serialize)]
pub struct StatusBody {
    pub status: String,
}

pub fn status_body(msg: impl Into<String>) -> StatusBody {
    StatusBody { status: msg.into() }
}

/// Reply for `POST /submit-message`: confirmation text plus the generated id.
#[derive(Serialize)]
pub struct MessageCreated {
    pub message: String,
    pub id: i32,
}

/// Reply for `DELETE /delete-message`: status plus the matched email.
#[derive(Serialize)]
pub struct MessageDeleted {
    pub status: String,
    pub email: String,
}
