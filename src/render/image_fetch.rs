// src/render/image_fetch.rs
//
// Background download of http(s) image sources.
// A single worker thread owns a blocking HTTP client; the frame loop queues
// requests and drains decoded images without ever waiting on the network.

use std::thread;
use std::time::Duration;

use flume::{Receiver, Sender};
use nannou::image::{self, DynamicImage};
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const USER_AGENT: &str = concat!("driftgallery/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to start the fetch worker: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered with HTTP {0}")]
    Status(u16),

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Caller-chosen key echoed back in the result.
    pub key: usize,
    pub url: String,
}

#[derive(Debug)]
pub struct FetchResult {
    pub key: usize,
    pub url: String,
    pub image: Result<DynamicImage, FetchError>,
}

pub struct ImageFetcher {
    request_tx: Sender<FetchRequest>,
    result_rx: Receiver<FetchResult>,
}

impl ImageFetcher {
    /// Builds the HTTP client and starts the worker thread.
    /// The worker exits once the fetcher is dropped and its queue is empty.
    pub fn spawn() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        let (request_tx, request_rx) = flume::unbounded();
        let (result_tx, result_rx) = flume::unbounded();

        thread::Builder::new()
            .name("image-fetch".to_string())
            .spawn(move || worker_loop(client, request_rx, result_tx))?;

        tracing::debug!("Started image fetch worker");
        Ok(Self {
            request_tx,
            result_rx,
        })
    }

    /// Queues a download. Returns false if the worker is gone.
    pub fn request(&self, key: usize, url: &str) -> bool {
        let request = FetchRequest {
            key,
            url: url.to_string(),
        };
        match self.request_tx.send(request) {
            Ok(()) => true,
            Err(_) => {
                tracing::error!("Image fetch worker disconnected, dropping {}", url);
                false
            }
        }
    }

    /// Results finished since the last call, without blocking.
    pub fn drain(&self) -> impl Iterator<Item = FetchResult> + '_ {
        self.result_rx.try_iter()
    }
}

fn worker_loop(
    client: reqwest::blocking::Client,
    requests: Receiver<FetchRequest>,
    results: Sender<FetchResult>,
) {
    for request in requests.iter() {
        let image = fetch(&client, &request.url);
        if let Err(err) = &image {
            tracing::debug!(error = %err, "Fetch failed for {}", request.url);
        }

        let result = FetchResult {
            key: request.key,
            url: request.url,
            image,
        };
        if results.send(result).is_err() {
            break;
        }
    }
    tracing::debug!("Image fetch worker stopped");
}

fn fetch(client: &reqwest::blocking::Client, url: &str) -> Result<DynamicImage, FetchError> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let bytes = response.bytes()?;
    decode_image(&bytes)
}

/// Decodes an encoded image, guessing the format from its header.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, FetchError> {
    Ok(image::load_from_memory(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::image::{GenericImageView, ImageOutputFormat, Rgba, RgbaImage};

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let pixels = RgbaImage::from_pixel(width, height, Rgba([200, 80, 40, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(pixels)
            .write_to(&mut bytes, ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_image() {
        let decoded = decode_image(&encoded_png(4, 3)).unwrap();
        assert_eq!(decoded.dimensions(), (4, 3));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let test_cases = vec![
            b"".to_vec(),
            b"<html>not an image</html>".to_vec(),
            encoded_png(4, 3)[..16].to_vec(),
        ];
        for bytes in test_cases {
            assert!(
                matches!(decode_image(&bytes), Err(FetchError::Decode(_))),
                "Failed for {} bytes",
                bytes.len()
            );
        }
    }

    #[test]
    fn test_unreachable_source_reports_failure() {
        let fetcher = ImageFetcher::spawn().unwrap();
        assert!(fetcher.request(7, "http://127.0.0.1:9/photo.jpg"));

        let result = fetcher
            .result_rx
            .recv_timeout(Duration::from_secs(30))
            .unwrap();
        assert_eq!(result.key, 7);
        assert_eq!(result.url, "http://127.0.0.1:9/photo.jpg");
        assert!(matches!(result.image, Err(FetchError::Http(_))));
        assert_eq!(fetcher.drain().count(), 0);
    }
}
