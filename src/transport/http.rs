use crate::foundation::core::SessionId;
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::transport::{FrameStream, FrameTransport};

/// Environment variable overriding the default server base URL.
pub const SERVER_ENV: &str = "FRAMECAST_SERVER";

const DEFAULT_SERVER: &str = "http://127.0.0.1:3000";

/// Endpoint configuration for [`HttpTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransportOpts {
    /// Server base URL.
    pub base_url: String,
    /// Path of the streaming endpoint.
    pub stream_path: String,
    /// Path of the mutation endpoint.
    pub move_path: String,
    /// Path of the close endpoint.
    pub close_path: String,
}

impl Default for HttpTransportOpts {
    fn default() -> Self {
        let base_url = std::env::var(SERVER_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER.to_owned());
        Self {
            base_url,
            stream_path: "/stream".to_owned(),
            move_path: "/move".to_owned(),
            close_path: "/close".to_owned(),
        }
    }
}

#[derive(serde::Serialize)]
struct MoveRequest<'a> {
    id: &'a SessionId,
    x: f64,
    y: f64,
}

#[derive(serde::Serialize)]
struct CloseRequest<'a> {
    id: &'a SessionId,
}

/// [`FrameTransport`] over HTTP.
///
/// - `POST {stream_path}` with no body; the chunked response carries one frame per chunk.
/// - `POST {move_path}` with `{"id", "x", "y"}`; the response is one frame.
/// - `POST {close_path}` with `{"id"}`; the response is ignored.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    stream_url: reqwest::Url,
    move_url: reqwest::Url,
    close_url: reqwest::Url,
}

impl HttpTransport {
    /// Build a transport, validating the endpoint URLs.
    pub fn new(opts: HttpTransportOpts) -> FramecastResult<Self> {
        let base = reqwest::Url::parse(&opts.base_url).map_err(|e| {
            FramecastError::validation(format!("invalid server url '{}': {e}", opts.base_url))
        })?;
        let join = |path: &str| -> FramecastResult<reqwest::Url> {
            base.join(path).map_err(|e| {
                FramecastError::validation(format!("invalid endpoint path '{path}': {e}"))
            })
        };
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| FramecastError::transport(format!("build http client: {e}")))?;

        Ok(Self {
            stream_url: join(&opts.stream_path)?,
            move_url: join(&opts.move_path)?,
            close_url: join(&opts.close_path)?,
            client,
        })
    }

    /// Streaming endpoint URL.
    pub fn stream_url(&self) -> &reqwest::Url {
        &self.stream_url
    }

    /// Mutation endpoint URL.
    pub fn move_url(&self) -> &reqwest::Url {
        &self.move_url
    }

    /// Close endpoint URL.
    pub fn close_url(&self) -> &reqwest::Url {
        &self.close_url
    }
}

/// Chunked HTTP response body.
#[derive(Debug)]
pub struct HttpFrameStream {
    response: reqwest::Response,
}

impl FrameStream for HttpFrameStream {
    async fn next_chunk(&mut self) -> FramecastResult<Option<Vec<u8>>> {
        let chunk = self
            .response
            .chunk()
            .await
            .map_err(|e| FramecastError::transport(format!("read stream chunk: {e}")))?;
        Ok(chunk.map(|b| b.to_vec()))
    }
}

impl FrameTransport for HttpTransport {
    type Stream = HttpFrameStream;

    async fn open_stream(&self) -> FramecastResult<HttpFrameStream> {
        let response = self
            .client
            .post(self.stream_url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| FramecastError::transport(format!("open stream: {e}")))?;
        Ok(HttpFrameStream { response })
    }

    async fn mutate(&self, id: &SessionId, x: f64, y: f64) -> FramecastResult<Vec<u8>> {
        let response = self
            .client
            .post(self.move_url.clone())
            .json(&MoveRequest { id, x, y })
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| FramecastError::transport(format!("move request: {e}")))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| FramecastError::transport(format!("move response body: {e}")))?;
        Ok(body.to_vec())
    }

    async fn close(&self, id: &SessionId) -> FramecastResult<()> {
        self.client
            .post(self.close_url.clone())
            .json(&CloseRequest { id })
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| FramecastError::transport(format!("close request: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transport/http.rs"]
mod tests;
