use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

pub fn json_response<T: Serialize>(value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|_| ServerError::InternalError)?;

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}
