// SPDX-License-Identifier: LGPL-3.0-or-later OR MPL-2.0
// This file is a part of `gl-sketches`.
//
// `gl-sketches` is free software: you can redistribute it and/or modify it under the terms of
// either:
//
// * GNU Lesser General Public License as published by the Free Software Foundation, either
// version 3 of the License, or (at your option) any later version.
// * Mozilla Public License as published by the Mozilla Foundation, version 2.
//
// `gl-sketches` is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Lesser General Public License or the Mozilla Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License and the Mozilla
// Public License along with `gl-sketches`. If not, see <https://www.gnu.org/licenses/> or
// <https://www.mozilla.org/en-US/MPL/2.0/>.

//! Plumbing shared by a handful of standalone OpenGL starter programs.
//!
//! Each binary under `src/bin/` is one rendering variation: clearing the
//! color buffer, drawing a point or a triangle, or running a transform
//! feedback pass over directly bound vertex attributes. The window, the GL
//! context and the frame loop they all need live here. Every GL operation
//! goes through an explicit [`Frame`] handle rather than free functions over
//! the globally bound context, so a program cannot issue a call without a
//! live, current context in scope.

use std::ffi::NulError;
use std::fmt;

pub mod animate;

mod context;
mod shader;
mod sketch;

pub use context::{ContextSettings, DriverInfo};
pub use shader::{Program, VertexArray};
pub use sketch::{run, FeedbackPass, Frame, Primitive};

/// Errors that can occur while bringing up a window or loading shader text.
///
/// Everything here is fatal to the program that hits it; there is no
/// recovery path beyond reporting the message and exiting.
#[derive(Debug)]
pub enum Error {
    /// The display/window pair could not be created.
    Bootstrap(Box<dyn std::error::Error>),

    /// A platform call on the context or surface failed.
    Platform(glutin::error::Error),

    /// Shader source text contained an interior nul byte and cannot be
    /// handed across the FFI boundary.
    ShaderSource(NulError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bootstrap(err) => write!(f, "failed to set up a window: {err}"),
            Error::Platform(err) => write!(f, "gl platform error: {err}"),
            Error::ShaderSource(_) => write!(f, "shader source contains an interior nul byte"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Bootstrap(err) => Some(err.as_ref()),
            Error::Platform(err) => Some(err),
            Error::ShaderSource(err) => Some(err),
        }
    }
}

impl From<glutin::error::Error> for Error {
    fn from(err: glutin::error::Error) -> Self {
        Error::Platform(err)
    }
}

impl From<NulError> for Error {
    fn from(err: NulError) -> Self {
        Error::ShaderSource(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::ffi::CString;

    #[test]
    fn shader_source_error_reports_nul() {
        let err = Error::from(CString::new("void main() {\0}").unwrap_err());
        assert_eq!(
            err.to_string(),
            "shader source contains an interior nul byte"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn bootstrap_error_keeps_the_message() {
        let err = Error::Bootstrap("no usable config".into());
        assert!(err.to_string().contains("no usable config"));
    }
}
