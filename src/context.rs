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

//! Window and GL context setup.

use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};

use glutin_winit::{DisplayBuilder, GlWindow as _};

use raw_window_handle::HasRawWindowHandle;

use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use std::ffi::{CStr, CString};
use std::num::NonZeroU32;

use crate::Error;

/// Settings the window and context are created with.
///
/// These stand in for the compile-time constants of a hand-rolled setup;
/// programs override the fields they care about and leave the rest at their
/// defaults.
#[derive(Debug, Clone)]
pub struct ContextSettings {
    /// Window title.
    pub title: String,

    /// Inner width of the window, in pixels.
    pub width: u32,

    /// Inner height of the window, in pixels.
    pub height: u32,

    /// The OpenGL version to request, as `(major, minor)`. Exactly this
    /// version is asked for; if the platform cannot provide it, setup fails.
    pub gl_version: (u8, u8),
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            title: "gl-sketches".into(),
            width: 800,
            height: 600,
            gl_version: (4, 3),
        }
    }
}

/// Strings the driver reports about itself once a context is current.
#[derive(Debug, Clone)]
pub struct DriverInfo {
    pub version: String,
    pub vendor: String,
    pub renderer: String,
}

/// A window with a current GL context and the surface it presents into.
pub(crate) struct WindowedContext {
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,

    // The surface draws into this window; keep it alive exactly as long.
    _window: Window,
}

impl WindowedContext {
    /// Open the window, create a context of the requested version, make it
    /// current and resolve the GL symbols.
    pub(crate) fn new(
        event_loop: &EventLoop<()>,
        settings: &ContextSettings,
    ) -> Result<Self, Error> {
        let window_builder = WindowBuilder::new()
            .with_title(&settings.title)
            .with_inner_size(PhysicalSize::new(settings.width, settings.height))
            .with_resizable(false);

        // Build the display together with the window, keeping whichever
        // config offers the best sample count.
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_builder(Some(window_builder))
            .build(event_loop, ConfigTemplateBuilder::new(), |configs| {
                configs.max_by_key(|config| config.num_samples()).unwrap()
            })
            .map_err(Error::Bootstrap)?;
        let window = window
            .ok_or_else(|| Error::Bootstrap("the display was built without a window".into()))?;

        let (major, minor) = settings.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(window.raw_window_handle()));

        let gl_display = gl_config.display();
        let context = unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

        let surface_attributes = window.build_surface_attributes(<_>::default());
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes)? };

        let context = context.make_current(&surface)?;

        // Resolve the GL symbols through the display.
        gl::load_with(|symbol| {
            let symbol = CString::new(symbol).unwrap();
            gl_display.get_proc_address(symbol.as_c_str())
        });

        // Try setting vsync.
        if let Err(err) =
            surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::new(1).unwrap()))
        {
            log::warn!("could not enable vsync: {err}");
        }

        Ok(Self {
            surface,
            context,
            _window: window,
        })
    }

    pub(crate) fn swap_buffers(&self) -> Result<(), Error> {
        self.surface.swap_buffers(&self.context).map_err(Error::from)
    }

    /// Version, vendor and renderer strings. A driver that hands back a null
    /// pointer yields an empty string.
    pub(crate) fn driver_info(&self) -> DriverInfo {
        DriverInfo {
            version: gl_string(gl::VERSION),
            vendor: gl_string(gl::VENDOR),
            renderer: gl_string(gl::RENDERER),
        }
    }
}

fn gl_string(name: gl::types::GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return String::new();
    }

    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_window() {
        let settings = ContextSettings::default();
        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, 600);
        assert_eq!(settings.gl_version, (4, 3));
        assert!(!settings.title.is_empty());
    }

    #[test]
    fn overrides_keep_the_rest() {
        let settings = ContextSettings {
            width: 800,
            height: 800,
            ..Default::default()
        };
        assert_eq!(settings.height, 800);
        assert_eq!(settings.gl_version, (4, 3));
    }
}
