use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    Base64(String),
    Decode(String),
    Tensor(formcheck_base::TensorError),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Base64(msg) => write!(f, "base64 error: {msg}"),
            ImageError::Decode(msg) => write!(f, "decode error: {msg}"),
            ImageError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<base64::DecodeError> for ImageError {
    fn from(err: base64::DecodeError) -> Self {
        ImageError::Base64(err.to_string())
    }
}

impl From<image::ImageError> for ImageError {
    fn from(err: image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

impl From<formcheck_base::TensorError> for ImageError {
    fn from(err: formcheck_base::TensorError) -> Self {
        ImageError::Tensor(err)
    }
}
