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

//! Time-driven color values.

/// Map elapsed seconds onto a slowly drifting clear color.
///
/// Red rides a sine wave and green a cosine, both remapped from [-1, 1] into
/// [0, 1]; blue is off and alpha is opaque.
pub fn pulse(seconds: f64) -> [f32; 4] {
    [
        (seconds.sin() * 0.5 + 0.5) as f32,
        (seconds.cos() * 0.5 + 0.5) as f32,
        0.0,
        1.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_stay_in_range() {
        let mut t = -10.0;
        while t < 50.0 {
            for channel in pulse(t) {
                assert!((0.0..=1.0).contains(&channel), "t={t}: {channel}");
            }
            t += 0.01;
        }
    }

    #[test]
    fn starts_half_red_full_green() {
        assert_eq!(pulse(0.0), [0.5, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn opaque_for_any_input() {
        for t in [-3.0, 0.25, 7.9, 1e6] {
            assert_eq!(pulse(t)[3], 1.0);
        }
    }
}
