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

//! Bind animated vertex attributes and run an empty transform feedback pass.
//!
//! The pass brackets no draw call and captures nothing, so the window stays
//! black; what this exercises is direct attribute binding against a program
//! with two declared inputs.

use gl_sketches::{ContextSettings, Primitive};

const VERTEX: &str = include_str!("shaders/feedback.v.glsl");
const FRAGMENT: &str = include_str!("shaders/feedback.f.glsl");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut program = None;
    let mut vertex_array = None;

    Ok(gl_sketches::run(
        ContextSettings {
            title: "feedback".into(),
            width: 800,
            height: 800,
            ..Default::default()
        },
        move |frame| {
            let program =
                program.get_or_insert_with(|| frame.link_program(VERTEX, FRAGMENT).unwrap());
            let vertex_array = vertex_array.get_or_insert_with(|| frame.create_vertex_array());
            frame.bind_vertex_array(vertex_array);

            frame.clear_color([0.0, 0.0, 0.0, 0.0]);
            frame.use_program(program);

            let t = frame.elapsed();

            // location = 0, a wobbling offset
            frame.vertex_attrib(0, [(t.sin() * 0.5) as f32, (t.cos() * 0.05) as f32, 0.0, 0.0]);

            // location = 1, an unbounded red ramp against a pulsing green
            frame.vertex_attrib(1, [t as f32, (t.sin() * 0.5 + 0.5) as f32, 0.0, 1.0]);

            let _pass = frame.begin_transform_feedback(Primitive::Triangles);
        },
    )?)
}
