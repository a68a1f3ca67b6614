#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("payload is not a recognized image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),
}

pub type Result<T> = std::result::Result<T, CodecError>;
