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

//! Shader, program and vertex array handles.

use gl::types::{GLenum, GLuint};

use std::ffi::CString;
use std::ptr;

use crate::Error;

/// A single compiled shader stage.
///
/// Stages only live long enough to be linked; dropping one after the link
/// deletes the stage object without touching the program it was linked into.
#[derive(Debug)]
struct Shader {
    id: GLuint,
}

impl Shader {
    fn compile(stage: GLenum, source: &str) -> Result<Self, Error> {
        let source = CString::new(source)?;

        let id = unsafe { gl::CreateShader(stage) };
        unsafe {
            gl::ShaderSource(id, 1, &source.as_ptr(), ptr::null());
            gl::CompileShader(id);
        }

        Ok(Self { id })
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.id);
        }
    }
}

/// A linked vertex + fragment program.
///
/// Compilation and linking are issued without querying their status; a
/// program that failed to link simply renders nothing when used.
pub struct Program {
    id: GLuint,
}

impl Program {
    pub(crate) fn link(vertex: &str, fragment: &str) -> Result<Self, Error> {
        let vertex = Shader::compile(gl::VERTEX_SHADER, vertex)?;
        let fragment = Shader::compile(gl::FRAGMENT_SHADER, fragment)?;

        let id = unsafe { gl::CreateProgram() };
        unsafe {
            gl::AttachShader(id, vertex.id);
            gl::AttachShader(id, fragment.id);
            gl::LinkProgram(id);
        }

        // The stage objects are not needed once the program is linked.
        drop(vertex);
        drop(fragment);

        Ok(Self { id })
    }

    pub(crate) fn bind(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

/// An opaque vertex sourcing container.
///
/// None of the programs here populate it with buffers; one still has to be
/// bound for a draw call to be issued.
pub struct VertexArray {
    id: GLuint,
}

impl VertexArray {
    pub(crate) fn create() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
        }
        Self { id }
    }

    pub(crate) fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.id);
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The nul check runs before any GL call, so it needs no context.
    #[test]
    fn interior_nul_is_rejected() {
        let err = Shader::compile(gl::VERTEX_SHADER, "void main() {\0}").unwrap_err();
        assert!(matches!(err, Error::ShaderSource(_)));
    }
}
