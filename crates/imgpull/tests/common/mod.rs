#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, Rgb32FImage, RgbImage};
use imgpull_fetch::{HttpClient, HttpResponse, Url};

pub fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 17) as u8, (y * 29) as u8, 90])
    }));
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format).unwrap();
    out.into_inner()
}

pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    encoded(width, height, ImageFormat::Jpeg)
}

/// A TIFF holding 32-bit float samples, which PNG has no color type for.
pub fn float_tiff(width: u32, height: u32) -> Vec<u8> {
    let image = DynamicImage::ImageRgb32F(Rgb32FImage::from_pixel(width, height, Rgb([0.25, 0.5, 0.75])));
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Tiff).unwrap();
    out.into_inner()
}

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
pub struct Refused;

/// In-memory HTTP client: canned responses per URL, every call recorded.
/// Unknown URLs fail like an unreachable host.
#[derive(Default)]
pub struct MockClient {
    routes: HashMap<String, HttpResponse>,
    calls: RefCell<Vec<String>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, response: HttpResponse) -> Self {
        self.routes.insert(url.to_string(), response);
        self
    }

    pub fn image(self, url: &str, width: u32, height: u32) -> Self {
        self.route(url, HttpResponse::ok(jpeg(width, height)))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl HttpClient for MockClient {
    type Error = Refused;

    fn get(&self, url: &Url, _headers: &[(String, String)]) -> Result<HttpResponse, Refused> {
        self.calls.borrow_mut().push(url.to_string());
        self.routes.get(url.as_str()).cloned().ok_or(Refused)
    }
}
