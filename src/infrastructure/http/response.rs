//! GatewayResponse → axum Response

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};

use crate::application::GatewayResponse;

impl IntoResponse for GatewayResponse {
    fn into_response(self) -> Response {
        // Body 不附带默认的 Content-Type，预检响应因此没有该头
        let mut response = (self.status_code, Body::from(self.body)).into_response();
        let headers = response.headers_mut();

        for (name, value) in self.headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "Skipping invalid response header"),
            }
        }

        response
    }
}
