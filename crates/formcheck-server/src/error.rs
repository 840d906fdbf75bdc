use std::fmt;

/// Why an incoming request could not be read.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Peer closed the connection before sending anything.
    Closed,
    Malformed(String),
    HeadTooLarge,
    BodyTooLarge { limit: usize, got: usize },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Closed => write!(f, "connection closed"),
            RequestError::Malformed(msg) => write!(f, "malformed request: {msg}"),
            RequestError::HeadTooLarge => write!(f, "request head too large"),
            RequestError::BodyTooLarge { limit, got } => {
                write!(f, "request body too large: {got} bytes (limit {limit})")
            }
        }
    }
}

impl std::error::Error for RequestError {}

#[derive(Debug)]
pub enum ServerError {
    Io(std::io::Error),
    Config(String),
    Image(formcheck_image::ImageError),
    Pose(formcheck_pose::PoseError),
    Request(RequestError),
    Task(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Io(err) => write!(f, "io error: {err}"),
            ServerError::Config(msg) => write!(f, "config error: {msg}"),
            ServerError::Image(err) => write!(f, "image error: {err}"),
            ServerError::Pose(err) => write!(f, "pose error: {err}"),
            ServerError::Request(err) => write!(f, "request error: {err}"),
            ServerError::Task(msg) => write!(f, "task error: {msg}"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Io(err)
    }
}

impl From<formcheck_image::ImageError> for ServerError {
    fn from(err: formcheck_image::ImageError) -> Self {
        ServerError::Image(err)
    }
}

impl From<formcheck_pose::PoseError> for ServerError {
    fn from(err: formcheck_pose::PoseError) -> Self {
        ServerError::Pose(err)
    }
}

impl From<RequestError> for ServerError {
    fn from(err: RequestError) -> Self {
        ServerError::Request(err)
    }
}

impl From<toml::de::Error> for ServerError {
    fn from(err: toml::de::Error) -> Self {
        ServerError::Config(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ServerError {
    fn from(err: tokio::task::JoinError) -> Self {
        ServerError::Task(err.to_string())
    }
}
