//! The I/O seam between the activation core and the network.

use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one southbound POST.
///
/// Implementations must return `Ok` for every HTTP response they receive,
/// whatever its status, and `Err(ActivationError::Transport)` only when no
/// response arrived.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).execute(request)
    }
}
