//! Document upload transports

use crate::shared::config::AppConfig;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use wasm_bindgen::JsCast;

pub type UploadFuture = Pin<Box<dyn Future<Output = Result<usize, String>>>>;

/// Moves picked files to the backend; resolves to the number sent
pub trait Uploader {
    fn upload(&self, files: Vec<web_sys::File>) -> UploadFuture;
}

/// Pretends to upload: waits, then reports success
#[derive(Clone, Debug)]
pub struct SimulatedUploader {
    pub delay_ms: u32,
}

impl Uploader for SimulatedUploader {
    fn upload(&self, files: Vec<web_sys::File>) -> UploadFuture {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            TimeoutFuture::new(delay_ms).await;
            Ok(files.len())
        })
    }
}

/// Multipart POST, one request per file
#[derive(Clone, Debug)]
pub struct HttpUploader {
    pub url: String,
}

impl Uploader for HttpUploader {
    fn upload(&self, files: Vec<web_sys::File>) -> UploadFuture {
        let url = self.url.clone();
        Box::pin(async move {
            let mut sent = 0;
            for file in files {
                upload_file(&url, file).await?;
                sent += 1;
            }
            Ok(sent)
        })
    }
}

/// Upload one file as the `file` field of a multipart form
pub async fn upload_file(url: &str, file: web_sys::File) -> Result<(), String> {
    use web_sys::{FormData, Request, RequestInit, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form_data);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {} for {}", resp.status(), file.name()));
    }
    Ok(())
}

pub fn uploader(config: &AppConfig) -> Arc<dyn Uploader + Send + Sync> {
    match config.upload_url() {
        Some(url) => {
            log::info!("uploads go to {}", url);
            Arc::new(HttpUploader { url })
        }
        None => Arc::new(SimulatedUploader {
            delay_ms: config.upload_delay_ms,
        }),
    }
}
