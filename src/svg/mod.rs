//! Renders a treap as an SVG picture using only its read-only structural accessors.

mod layout;

pub use self::layout::{Layout, Placement, RenderConfig};

use crate::treap::Treap;
use log::debug;
use std::error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::result;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Writes a treap as an SVG document: one circle labelled with the key per node and one line
/// per parent-child edge.
///
/// # Examples
///
/// ```
/// use treap_layout::svg::SvgRenderer;
/// use treap_layout::treap::Treap;
///
/// let mut t = Treap::new();
/// t.insert(1, ());
/// t.insert(2, ());
///
/// let mut buffer = Vec::new();
/// SvgRenderer::default().render(&t, &mut buffer).unwrap();
/// let document = String::from_utf8(buffer).unwrap();
/// assert_eq!(document.matches("<circle").count(), 2);
/// assert_eq!(document.matches("<line").count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SvgRenderer {
    config: RenderConfig,
}

impl SvgRenderer {
    /// Constructs a renderer that lays trees out with `config`.
    pub fn new(config: RenderConfig) -> Self {
        SvgRenderer { config }
    }

    /// Returns the geometry this renderer uses.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders `treap` into `writer`.
    pub fn render<T, U, R, W>(&self, treap: &Treap<T, U, R>, writer: &mut W) -> Result<()>
    where
        T: ToString,
        W: Write,
    {
        let layout = Layout::new(treap, &self.config);
        debug!(
            "rendering {} nodes at depth {} into a {}x{} document",
            treap.size(),
            treap.depth(),
            layout.width,
            layout.height,
        );
        self.write_layout(&layout, writer)
    }

    /// Renders `treap` into a file at `path`, replacing any existing file.
    pub fn write_to_file<T, U, R, P>(&self, treap: &Treap<T, U, R>, path: P) -> Result<()>
    where
        T: ToString,
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.render(treap, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn write_layout<W: Write>(&self, layout: &Layout, writer: &mut W) -> Result<()> {
        let Layout {
            width,
            height,
            ref placements,
        } = *layout;
        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" height="{}" width="{}">"#,
            height, width,
        )?;
        writeln!(
            writer,
            r#"<rect width="{}" height="{}" x="0" y="0" fill="white"></rect>"#,
            width, height,
        )?;
        // edges first so the vertices are drawn over them
        for placement in placements {
            if let Some((parent_x, parent_y)) = placement.parent {
                self.write_edge(parent_x, parent_y, placement.x, placement.y, writer)?;
            }
        }
        for placement in placements {
            self.write_vertex(placement, writer)?;
        }
        writeln!(writer, "</svg>")?;
        Ok(())
    }

    fn write_vertex<W: Write>(&self, placement: &Placement, writer: &mut W) -> Result<()> {
        let radius = self.config.vertex_radius;
        writeln!(
            writer,
            r#"<circle cx="{}" cy="{}" r="{}" stroke="black" stroke-width="{}" fill="white" />"#,
            placement.x,
            placement.y,
            radius,
            self.config.stroke_width(),
        )?;
        writeln!(
            writer,
            r#"<text x="{}" y="{}" alignment-baseline="middle" font-weight="bold" font-family="Arial" text-anchor="middle" font-size="{}">{}</text>"#,
            placement.x,
            placement.y,
            radius,
            escape(&placement.label),
        )?;
        Ok(())
    }

    fn write_edge<W: Write>(
        &self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        writer: &mut W,
    ) -> Result<()> {
        writeln!(
            writer,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="{}" />"#,
            x1,
            y1,
            x2,
            y2,
            self.config.stroke_width(),
        )?;
        Ok(())
    }
}

fn escape(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
