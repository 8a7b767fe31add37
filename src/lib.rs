//! mipmap-icons: procedural Android launcher icons
//!
//! This crate draws a circular badge with a simplified camera glyph at every
//! Android screen density and writes the results to the conventional
//! `res/mipmap-<density>/` layout.
//!
//! # Example
//!
//! ```no_run
//! use mipmap_icons::{Batch, IconProfile};
//!
//! // Ten PNGs under app/src/main/res/mipmap-*/
//! let report = Batch::default().run()?;
//! assert_eq!(report.len(), 10);
//!
//! // Same layout with a custom palette, elsewhere
//! let profile = IconProfile::from_json(r##"{ "baseDir": "out", "background": "#222222" }"##)?;
//! Batch::from_profile(&profile).run()?;
//! # Ok::<(), mipmap_icons::Error>(())
//! ```
//!
//! # Rendering in memory
//!
//! ```
//! use mipmap_icons::{Density, IconRenderer};
//!
//! let icon = IconRenderer::default().render_density(Density::Xhdpi).unwrap();
//! assert_eq!(icon.dimensions().width, 96);
//! ```

mod batch;
mod color;
mod density;
mod error;
mod glyph;
mod icon;
mod profile;
mod renderer;
mod svg;

pub use batch::{Batch, BatchEvent, BatchReport, GeneratedIcon, generate_all};
pub use color::{Color, Palette};
pub use density::{Density, IconVariant};
pub use error::{Error, Result};
pub use glyph::{Bounds, CameraGlyph, stroke_width};
pub use icon::{IconImage, IconSet, SizePx};
pub use profile::{DEFAULT_BASE_DIR, IconProfile};
pub use renderer::{IconRenderer, render_icon};
pub use svg::{glyph_svg, render_svg};
