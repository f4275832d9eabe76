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

//! The frame loop and the per-frame drawing handle.

use gl::types::GLenum;

use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;

use std::time::Instant;

use crate::context::{ContextSettings, WindowedContext};
use crate::shader::{Program, VertexArray};
use crate::Error;

/// Kinds of primitive a draw call assembles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Points,
    Triangles,
}

impl Primitive {
    fn raw(self) -> GLenum {
        match self {
            Primitive::Points => gl::POINTS,
            Primitive::Triangles => gl::TRIANGLES,
        }
    }
}

/// Handle to the context for the duration of one frame.
///
/// All drawing operations and resource creation go through this handle, so a
/// program cannot issue a GL call without a live, current context in scope.
pub struct Frame<'a> {
    elapsed: f64,
    _context: &'a WindowedContext,
}

impl Frame<'_> {
    /// Wall-clock seconds accumulated since the loop started.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Clear the color buffer to the given value.
    pub fn clear_color(&self, color: [f32; 4]) {
        unsafe {
            gl::ClearBufferfv(gl::COLOR, 0, color.as_ptr());
        }
    }

    /// Compile a vertex and a fragment stage and link them into a program.
    pub fn link_program(&self, vertex: &str, fragment: &str) -> Result<Program, Error> {
        Program::link(vertex, fragment)
    }

    /// Create an empty vertex array object.
    pub fn create_vertex_array(&self) -> VertexArray {
        VertexArray::create()
    }

    /// Make `program` the active pipeline for subsequent draw calls.
    pub fn use_program(&self, program: &Program) {
        program.bind();
    }

    pub fn bind_vertex_array(&self, vertex_array: &VertexArray) {
        vertex_array.bind();
    }

    /// Bind a constant value to a vertex attribute, in place of buffer data.
    pub fn vertex_attrib(&self, location: u32, value: [f32; 4]) {
        unsafe {
            gl::VertexAttrib4fv(location, value.as_ptr());
        }
    }

    /// Diameter rasterized points are drawn at, in pixels.
    pub fn point_size(&self, size: f32) {
        unsafe {
            gl::PointSize(size);
        }
    }

    pub fn draw_arrays(&self, primitive: Primitive, first: i32, count: i32) {
        unsafe {
            gl::DrawArrays(primitive.raw(), first, count);
        }
    }

    /// Start a transform feedback pass. The pass ends when the returned
    /// guard goes out of scope.
    pub fn begin_transform_feedback(&self, primitive: Primitive) -> FeedbackPass<'_> {
        unsafe {
            gl::BeginTransformFeedback(primitive.raw());
        }
        FeedbackPass { _frame: self }
    }
}

/// Scope of an active transform feedback pass.
pub struct FeedbackPass<'a> {
    _frame: &'a Frame<'a>,
}

impl Drop for FeedbackPass<'_> {
    fn drop(&mut self) {
        unsafe {
            gl::EndTransformFeedback();
        }
    }
}

/// Open a window per `settings`, print the driver strings, and call `draw`
/// once per frame until the window is closed.
///
/// Returns early only if setup fails. Once the loop is running the process
/// exits when the window closes; the callback and everything it owns are
/// dropped on the way out, while the context is still current, so GL handles
/// held by the callback are deleted exactly once.
pub fn run<F>(settings: ContextSettings, mut draw: F) -> Result<(), Error>
where
    F: FnMut(&mut Frame<'_>) + 'static,
{
    let event_loop = EventLoop::new();
    let context = WindowedContext::new(&event_loop, &settings)?;

    let info = context.driver_info();
    println!("OpenGL version {}", info.version);
    println!("OpenGL vendor {}", info.vendor);
    println!("OpenGL renderer {}", info.renderer);

    let mut elapsed = 0.0_f64;
    let mut last_tick = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        control_flow.set_poll();

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => control_flow.set_exit(),

            Event::RedrawEventsCleared => {
                let now = Instant::now();
                elapsed += now.duration_since(last_tick).as_secs_f64();
                last_tick = now;

                let mut frame = Frame {
                    elapsed,
                    _context: &context,
                };
                draw(&mut frame);

                if let Err(err) = context.swap_buffers() {
                    log::error!("failed to present the frame: {err}");
                    control_flow.set_exit();
                }
            }

            _ => {}
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_map_to_their_gl_modes() {
        assert_eq!(Primitive::Points.raw(), gl::POINTS);
        assert_eq!(Primitive::Triangles.raw(), gl::TRIANGLES);
    }
}
