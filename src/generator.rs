use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::icons::{self, SIZES};
#[cfg(feature = "render")]
use crate::geometry::IconGeometry;
use crate::placeholder::write_placeholder;

/// Printed once before placeholders are written when rendering is missing
pub const FALLBACK_NOTICE: &str =
    "Image rendering not available, creating simple text files as placeholders";

/// Printed once before placeholders are written when the user asked for them
pub const FORCED_NOTICE: &str =
    "Placeholder mode requested, creating simple text files as placeholders";

/// Why a run writes placeholders instead of images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderReason {
    /// `--placeholder` or `force_placeholder` in the settings
    Forced,
    /// Built without the `render` feature
    Unavailable,
}

impl PlaceholderReason {
    pub fn notice(self) -> &'static str {
        match self {
            PlaceholderReason::Forced => FORCED_NOTICE,
            PlaceholderReason::Unavailable => FALLBACK_NOTICE,
        }
    }
}

/// How icons are produced for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Rendering,
    Placeholder(PlaceholderReason),
}

impl Capability {
    /// Rendering needs the `render` feature and no explicit opt-out.
    /// Decided once; never re-checked per size.
    pub fn detect(force_placeholder: bool) -> Self {
        if force_placeholder {
            debug!("Placeholder mode forced");
            return Capability::Placeholder(PlaceholderReason::Forced);
        }

        if cfg!(feature = "render") {
            Capability::Rendering
        } else {
            debug!("Built without the render feature");
            Capability::Placeholder(PlaceholderReason::Unavailable)
        }
    }
}

pub struct IconGenerator {
    out_dir: PathBuf,
    capability: Capability,
}

impl IconGenerator {
    pub fn new(out_dir: impl Into<PathBuf>, capability: Capability) -> Self {
        IconGenerator {
            out_dir: out_dir.into(),
            capability,
        }
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Generate every icon, reporting progress on stdout
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Generate every icon in ascending size order, writing progress lines to `out`.
    ///
    /// Returns the written paths. The first failure aborts the run and leaves
    /// already written files in place.
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.out_dir).with_context(|| {
            format!("Failed to create output directory {}", self.out_dir.display())
        })?;

        info!(
            "Generating {} icons in {} ({:?})",
            SIZES.len(),
            self.out_dir.display(),
            self.capability
        );

        if let Capability::Placeholder(reason) = self.capability {
            writeln!(out, "{}", reason.notice())?;
        }

        let mut written = Vec::with_capacity(SIZES.len());
        for size in SIZES {
            let name = icons::file_name(size);
            let path = self.out_dir.join(&name);

            match self.capability {
                Capability::Rendering => {
                    render_to_file(size, &path)?;
                    writeln!(out, "Created {}", name)?;
                }
                // No per-file confirmation on this path
                Capability::Placeholder(_) => write_placeholder(&path, size)?,
            }

            debug!("Wrote {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(feature = "render")]
fn render_to_file(size: u32, path: &Path) -> Result<()> {
    let geometry = IconGeometry::for_size(size);
    debug!(
        "icon {}: margin {}, box {:?}, {} waves",
        size,
        geometry.margin,
        geometry.speaker,
        geometry.drawn_waves().count()
    );
    let img = crate::canvas::render_icon(&geometry);
    crate::canvas::save_png(&img, path)
}

#[cfg(not(feature = "render"))]
fn render_to_file(size: u32, path: &Path) -> Result<()> {
    anyhow::bail!(
        "Cannot render {}x{} icon {}: built without the render feature",
        size,
        size,
        path.display()
    )
}
