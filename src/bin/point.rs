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

//! Draw a single fat point at a shader-supplied position.

use gl_sketches::{animate, ContextSettings, Primitive};

const VERTEX: &str = include_str!("shaders/point.v.glsl");
const FRAGMENT: &str = include_str!("shaders/point.f.glsl");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut program = None;
    let mut vertex_array = None;

    Ok(gl_sketches::run(
        ContextSettings {
            title: "point".into(),
            ..Default::default()
        },
        move |frame| {
            let program =
                program.get_or_insert_with(|| frame.link_program(VERTEX, FRAGMENT).unwrap());
            let vertex_array = vertex_array.get_or_insert_with(|| frame.create_vertex_array());
            frame.bind_vertex_array(vertex_array);

            frame.clear_color(animate::pulse(frame.elapsed()));
            frame.use_program(program);
            frame.point_size(40.0);
            frame.draw_arrays(Primitive::Points, 0, 1);
        },
    )?)
}
