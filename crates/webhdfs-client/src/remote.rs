//! Remote exception translation.
//!
//! A fixed table keyed on the server-reported Java exception class maps to
//! portable local error kinds, so callers test error predicates instead of
//! string-matching server messages. Unrecognized classes surface the original
//! name and message verbatim.

use webhdfs_types::RemoteException;

use crate::error::{ClientError, RemoteErrorKind};

/// Classifies a remote exception by its (unqualified) class name.
pub fn classify(exception: &RemoteException) -> RemoteErrorKind {
    match exception.simple_name() {
        "FileNotFoundException" => RemoteErrorKind::NotFound,
        "AccessControlException" => RemoteErrorKind::PermissionDenied,
        "PathIsNotEmptyDirectoryException" => RemoteErrorKind::DirectoryNotEmpty,
        // Distinct from DirectoryNotEmpty: a create/rename target that is
        // already present, or a file mid-create by another writer.
        "FileAlreadyExistsException" | "AlreadyBeingCreatedException" => {
            RemoteErrorKind::AlreadyExists
        }
        _ => RemoteErrorKind::Other,
    }
}

/// Translates a remote exception into the local error value, preserving the
/// exception name and message.
pub fn translate(exception: RemoteException) -> ClientError {
    let kind = classify(&exception);
    ClientError::Remote {
        kind,
        exception: exception.class_name().to_string(),
        message: exception.message,
    }
}
