//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading the dependency manifest
//! - ReadmeError: Issues reading or rewriting the README
//! - ServerError: Issues binding or running the HTTP server

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// README file related errors
    #[error(transparent)]
    Readme(#[from] ReadmeError),

    /// HTTP server related errors
    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Errors related to reading the dependency manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to the README file
#[derive(Error, Debug)]
pub enum ReadmeError {
    /// Failed to read README file
    #[error("failed to read README file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write README file
    #[error("failed to write README file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to the HTTP server
#[derive(Error, Debug)]
pub enum ServerError {
    /// Could not bind the listening socket
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an error
    #[error("server error: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }
}

impl ReadmeError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReadmeError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReadmeError::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl ServerError {
    /// Creates a new Bind error
    pub fn bind(addr: SocketAddr, source: std::io::Error) -> Self {
        ServerError::Bind { addr, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    fn io_error(kind: ErrorKind) -> std::io::Error {
        std::io::Error::new(kind, "boom")
    }

    #[test]
    fn test_manifest_error_read() {
        let err =
            ManifestError::read_error("/path/requirements.txt", io_error(ErrorKind::Other));
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read manifest file"));
        assert!(msg.contains("requirements.txt"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn test_readme_error_read() {
        let err = ReadmeError::read_error("/path/README.md", io_error(ErrorKind::Other));
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read README file"));
        assert!(msg.contains("README.md"));
    }

    #[test]
    fn test_readme_error_write() {
        let err =
            ReadmeError::write_error("/path/README.md", io_error(ErrorKind::PermissionDenied));
        let msg = format!("{}", err);
        assert!(msg.contains("failed to write README file"));
    }

    #[test]
    fn test_server_error_bind() {
        let addr: SocketAddr = "127.0.0.1:8000".parse().unwrap();
        let err = ServerError::bind(addr, io_error(ErrorKind::AddrInUse));
        let msg = format!("{}", err);
        assert!(msg.contains("failed to bind 127.0.0.1:8000"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let app_err: AppError =
            ManifestError::read_error("/path", io_error(ErrorKind::Other)).into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("failed to read manifest file"));
    }

    #[test]
    fn test_app_error_from_readme_error() {
        let app_err: AppError =
            ReadmeError::write_error("/path", io_error(ErrorKind::Other)).into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("failed to write README file"));
    }

    #[test]
    fn test_app_error_from_server_error() {
        let app_err: AppError = ServerError::Serve {
            source: io_error(ErrorKind::Other),
        }
        .into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("server error"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ManifestError::read_error("/test", io_error(ErrorKind::Other));
        let debug = format!("{:?}", err);
        assert!(debug.contains("ReadError"));
    }
}
