//! SSE streaming parser for chat completions.
//!
//! Converts a raw `reqwest` byte stream into `StreamChunk` values.
//! Handles `data: [DONE]`, partial lines, and buffering.

use bytes::Bytes;
use futures::stream::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::error::OpenAIError;

/// A single chunk from a streaming chat completion.
#[derive(Debug, Clone)]
pub struct StreamChunk {
    /// The text delta for this chunk.
    pub delta: String,
    /// Whether the stream is done.
    pub done: bool,
}

/// Raw streaming chunk from the API.
#[derive(Debug, serde::Deserialize)]
struct StreamChunkRaw {
    choices: Vec<StreamChoiceRaw>,
}

#[derive(Debug, serde::Deserialize)]
struct StreamChoiceRaw {
    delta: DeltaRaw,
}

#[derive(Debug, serde::Deserialize)]
struct DeltaRaw {
    #[serde(default)]
    content: Option<String>,
}

/// Stream adapter that converts raw SSE bytes into `StreamChunk` values.
///
/// Lines are parsed once their trailing newline arrives; a final `data:`
/// line without one is dropped when the byte stream ends. The API always
/// newline-terminates SSE lines, so this only matters for truncated
/// responses.
pub struct CompletionStream {
    inner: Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>,
    buffer: String,
}

impl CompletionStream {
    pub(crate) fn new(
        byte_stream: impl Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
    ) -> Self {
        Self {
            inner: Box::pin(byte_stream),
            buffer: String::new(),
        }
    }
}

impl Stream for CompletionStream {
    type Item = Result<StreamChunk, OpenAIError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            // Try to parse a complete SSE line from the buffer first
            if let Some(chunk) = next_chunk(&mut this.buffer) {
                return Poll::Ready(Some(chunk));
            }

            // Need more bytes
            match Pin::new(&mut this.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => match std::str::from_utf8(&bytes) {
                    Ok(text) => this.buffer.push_str(text),
                    Err(e) => {
                        return Poll::Ready(Some(Err(OpenAIError::Parse(format!(
                            "Invalid UTF-8 in stream: {}",
                            e
                        )))));
                    }
                },
                Poll::Ready(Some(Err(e))) => {
                    return Poll::Ready(Some(Err(OpenAIError::Network(e.to_string()))));
                }
                Poll::Ready(None) => {
                    if this.buffer.trim().is_empty() {
                        return Poll::Ready(None);
                    }
                    // Drain whatever complete lines remain
                    if let Some(chunk) = next_chunk(&mut this.buffer) {
                        return Poll::Ready(Some(chunk));
                    }
                    return Poll::Ready(None);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// Extract and parse the next complete SSE data line from the buffer.
/// Returns `None` if no complete line is buffered yet.
fn next_chunk(buffer: &mut String) -> Option<Result<StreamChunk, OpenAIError>> {
    loop {
        let newline_pos = buffer.find('\n')?;
        let line = buffer[..newline_pos].trim().to_string();
        buffer.drain(..=newline_pos);

        // SSE uses blank lines as event separators
        if line.is_empty() {
            continue;
        }

        let Some(data) = line.strip_prefix("data: ") else {
            // Ignore non-data lines ("event:", "id:", "retry:")
            continue;
        };
        let data = data.trim();

        if data == "[DONE]" {
            return Some(Ok(StreamChunk {
                delta: String::new(),
                done: true,
            }));
        }

        match serde_json::from_str::<StreamChunkRaw>(data) {
            Ok(raw) => {
                let delta = raw
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|c| c.delta.content)
                    .unwrap_or_default();

                return Some(Ok(StreamChunk { delta, done: false }));
            }
            Err(e) => {
                return Some(Err(OpenAIError::Parse(format!(
                    "Failed to parse stream chunk: {} (data: {})",
                    e,
                    &data[..data.len().min(200)]
                ))));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn sse_bytes(lines: &[&str]) -> Vec<Result<Bytes, reqwest::Error>> {
        lines
            .iter()
            .map(|line| Ok(Bytes::from(format!("{}\n", line))))
            .collect()
    }

    #[tokio::test]
    async fn test_single_chunk_then_done() {
        let data = sse_bytes(&[
            r#"data: {"choices":[{"delta":{"content":"Hello"}}]}"#,
            "",
            "data: [DONE]",
        ]);

        let mut stream = CompletionStream::new(futures::stream::iter(data));

        let chunk = stream.next().await.unwrap().unwrap();
        assert_eq!(chunk.delta, "Hello");
        assert!(!chunk.done);

        let done = stream.next().await.unwrap().unwrap();
        assert!(done.done);
    }

    #[tokio::test]
    async fn test_multiple_tokens_in_order() {
        let data = sse_bytes(&[
            r#"data: {"choices":[{"delta":{"content":"Hello"}}]}"#,
            "",
            r#"data: {"choices":[{"delta":{"content":" world"}}]}"#,
            "",
            "data: [DONE]",
        ]);

        let mut stream = CompletionStream::new(futures::stream::iter(data));

        assert_eq!(stream.next().await.unwrap().unwrap().delta, "Hello");
        assert_eq!(stream.next().await.unwrap().unwrap().delta, " world");
        assert!(stream.next().await.unwrap().unwrap().done);
    }

    #[tokio::test]
    async fn test_data_line_split_across_reads() {
        let data: Vec<Result<Bytes, reqwest::Error>> = vec![
            Ok(Bytes::from(r#"data: {"choices":[{"del"#)),
            Ok(Bytes::from(
                "ta\":{\"content\":\"joined\"}}]}\n\ndata: [DONE]\n",
            )),
        ];

        let mut stream = CompletionStream::new(futures::stream::iter(data));

        let chunk = stream.next().await.unwrap().unwrap();
        assert_eq!(chunk.delta, "joined");
        assert!(stream.next().await.unwrap().unwrap().done);
    }

    #[tokio::test]
    async fn test_invalid_utf8_yields_parse_error() {
        let data: Vec<Result<Bytes, reqwest::Error>> =
            vec![Ok(Bytes::from_static(&[0xff, 0xfe, b'\n']))];

        let mut stream = CompletionStream::new(futures::stream::iter(data));

        let err = stream.next().await.unwrap().unwrap_err();
        assert!(matches!(err, OpenAIError::Parse(_)));
    }

    #[tokio::test]
    async fn test_empty_delta() {
        let data = sse_bytes(&[r#"data: {"choices":[{"delta":{}}]}"#, "", "data: [DONE]"]);

        let mut stream = CompletionStream::new(futures::stream::iter(data));

        let chunk = stream.next().await.unwrap().unwrap();
        assert_eq!(chunk.delta, "");
    }

    #[tokio::test]
    async fn test_non_data_lines_skipped() {
        let data = sse_bytes(&[
            "event: message",
            r#"data: {"choices":[{"delta":{"content":"x"}}]}"#,
            "",
            "data: [DONE]",
        ]);

        let mut stream = CompletionStream::new(futures::stream::iter(data));

        assert_eq!(stream.next().await.unwrap().unwrap().delta, "x");
    }
}
