//! Generating the full set of launcher icons.
//!
//! A [`Batch`] renders every density bucket twice, once per
//! [`IconVariant`], into `<base>/mipmap-<density>/`. The run stops at the
//! first failure; icons written before it stay on disk.

use std::path::{Path, PathBuf};

use crate::density::{Density, IconVariant};
use crate::error::Result;
use crate::icon::IconSet;
use crate::profile::IconProfile;
use crate::renderer::IconRenderer;

/// A launcher icon that has been (or will be) written.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedIcon {
    pub density: Density,
    pub variant: IconVariant,
    /// Edge length in pixels.
    pub size: u32,
    pub path: PathBuf,
}

/// Icons written by a successful run, in write order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchReport {
    pub icons: Vec<GeneratedIcon>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Paths of all written files.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.icons.iter().map(|icon| icon.path.as_path())
    }
}

/// Progress notifications emitted while a batch runs.
#[derive(Debug)]
pub enum BatchEvent<'a> {
    /// Emitted once before the first icon is rendered.
    Started { base_dir: &'a Path, total: usize },
    /// Emitted after each icon file has been written.
    Wrote(&'a GeneratedIcon),
    /// Emitted once after the last icon has been written.
    Finished(&'a BatchReport),
}

/// Renders all launcher icons under a base directory.
///
/// # Example
///
/// ```no_run
/// use mipmap_icons::{Batch, BatchEvent};
///
/// let report = Batch::new("app/src/main/res").run_with(|event| {
///     if let BatchEvent::Wrote(icon) = event {
///         println!("{}", icon.path.display());
///     }
/// })?;
/// assert_eq!(report.len(), 10);
/// # Ok::<(), mipmap_icons::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Batch {
    base_dir: PathBuf,
    renderer: IconRenderer,
}

impl Batch {
    /// Creates a batch writing under `base_dir` with the default palette.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            renderer: IconRenderer::default(),
        }
    }

    /// Creates a batch from a profile's base directory, palette and edge mode.
    pub fn from_profile(profile: &IconProfile) -> Self {
        Self {
            base_dir: profile.base_dir.clone(),
            renderer: IconRenderer::from_profile(profile),
        }
    }

    pub fn with_renderer(mut self, renderer: IconRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn renderer(&self) -> &IconRenderer {
        &self.renderer
    }

    /// Lists every icon the batch writes, in write order: densities from
    /// mdpi to xxxhdpi, standard before round within each density.
    pub fn targets(&self) -> Vec<GeneratedIcon> {
        Density::ALL
            .into_iter()
            .flat_map(|density| {
                IconVariant::ALL.into_iter().map(move |variant| GeneratedIcon {
                    density,
                    variant,
                    size: density.size(),
                    path: variant.path(&self.base_dir, density),
                })
            })
            .collect()
    }

    /// Writes all icons.
    pub fn run(&self) -> Result<BatchReport> {
        self.run_with(|_| {})
    }

    /// Writes all icons, reporting progress to `on_event`.
    ///
    /// Returns the first error encountered; no further icons are rendered
    /// after it.
    pub fn run_with(&self, mut on_event: impl FnMut(BatchEvent<'_>)) -> Result<BatchReport> {
        let targets = self.targets();
        on_event(BatchEvent::Started {
            base_dir: &self.base_dir,
            total: targets.len(),
        });

        let mut report = BatchReport::default();
        for icon in targets {
            self.renderer.render_icon(icon.size, &icon.path)?;
            on_event(BatchEvent::Wrote(&icon));
            report.icons.push(icon);
        }

        tracing::debug!(
            count = report.len(),
            "generated launcher icons under {}",
            self.base_dir.display()
        );
        on_event(BatchEvent::Finished(&report));
        Ok(report)
    }

    /// Renders one icon per density in memory without touching the
    /// filesystem.
    ///
    /// Both variants share the same pixels, so a single image per density
    /// is returned.
    pub fn render_set(&self) -> Result<IconSet> {
        let images = Density::ALL
            .into_iter()
            .map(|density| self.renderer.render_density(density))
            .collect::<Result<Vec<_>>>()?;
        Ok(IconSet::from_images(images))
    }
}

impl Default for Batch {
    fn default() -> Self {
        Self::from_profile(&IconProfile::default())
    }
}

/// Writes all launcher icons under `base_dir` with the default palette.
pub fn generate_all(base_dir: impl Into<PathBuf>) -> Result<BatchReport> {
    Batch::new(base_dir).run()
}
