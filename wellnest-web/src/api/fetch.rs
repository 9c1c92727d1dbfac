use async_trait::async_trait;
use js_sys::{ArrayBuffer, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};
use wellnest::{
    HttpClientError, HttpClientResponse, HttpClientResult, HttpRequest,
    HttpTransport,
};

/// Browser `fetch` transport.
#[derive(Debug, Clone, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> HttpClientResult {
        log::debug!("{} {}", request.method(), request.url());
        let window = web_sys::window().ok_or_else(|| {
            HttpClientError::Other("No window available".to_string())
        })?;

        let request_init = RequestInit::new();
        request_init.set_method(request.method());
        request_init.set_mode(RequestMode::Cors);

        let headers = Headers::new().map_err(js_error)?;
        for (key, value) in request.headers().iter() {
            headers.set(key, value).map_err(js_error)?;
        }
        request_init.set_headers(&headers);

        if let Some(body) = request.body() {
            request_init.set_body(&JsValue::from_str(body));
        }

        let js_request =
            Request::new_with_str_and_init(request.url(), &request_init)
                .map_err(js_error)?;
        let response_js = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(|e| {
                HttpClientError::ConnectionError(js_message(&e))
            })?;
        let response: Response = response_js.dyn_into().map_err(js_error)?;

        let status = response.status();
        let body_js =
            JsFuture::from(response.array_buffer().map_err(js_error)?)
                .await
                .map_err(js_error)?;
        let body: ArrayBuffer = body_js.dyn_into().map_err(js_error)?;
        let body = Uint8Array::new(&body).to_vec();

        Ok(HttpClientResponse::new(
            status,
            if body.is_empty() { None } else { Some(body) },
        ))
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn js_error(value: impl Into<JsValue>) -> HttpClientError {
    HttpClientError::Other(js_message(&value.into()))
}
