//! Screen buffer for `draw` output.
//!
//! Pictures accumulate here as a side effect of forcing `draw`,
//! `multipledraw` and `interact`. The buffer belongs to one interpreter;
//! callers decide when to clear it (the REPL clears it before every line).

use std::fmt::Write;
use std::rc::Rc;

use gx_ir::{Picture, Point};

/// Glyphs for successive layers; layer 0 is drawn on top.
const LAYER_GLYPHS: &[char] = &['#', '+', '*', 'o', '%', '=', '~', '-'];
const EMPTY_CELL: char = '.';
/// Larger pictures are summarised instead of rendered.
const MAX_RENDER_SIDE: usize = 1024;

/// Ordered sequence of pictures drawn since the last clear.
#[derive(Clone, Debug, Default)]
pub struct Screen {
    pictures: Vec<Rc<Picture>>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, picture: Rc<Picture>) {
        self.pictures.push(picture);
    }

    pub fn pictures(&self) -> &[Rc<Picture>] {
        &self.pictures
    }

    pub fn len(&self) -> usize {
        self.pictures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pictures.is_empty()
    }

    pub fn clear(&mut self) {
        self.pictures.clear();
    }

    /// Remove and return everything drawn so far.
    pub fn take(&mut self) -> Vec<Rc<Picture>> {
        std::mem::take(&mut self.pictures)
    }

    /// Overlay every picture in one bounding box.
    ///
    /// Rows run top to bottom with `y` growing downward. Returns an empty
    /// string when no picture has any point.
    pub fn render_ascii(&self) -> String {
        render_layers(&self.pictures)
    }
}

fn render_layers(layers: &[Rc<Picture>]) -> String {
    let Some((lo, hi)) = bounds(layers) else {
        return String::new();
    };
    let side = |lo: i64, hi: i64| {
        hi.checked_sub(lo)
            .and_then(|d| usize::try_from(d).ok())
            .map(|d| d + 1)
            .filter(|&d| d <= MAX_RENDER_SIDE)
    };
    let (Some(width), Some(height)) = (side(lo.x, hi.x), side(lo.y, hi.y)) else {
        return format!(
            "picture spans ({}, {})..({}, {}), too large to render\n",
            lo.x, lo.y, hi.x, hi.y
        );
    };
    let mut cells = vec![EMPTY_CELL; width * height];

    for (layer, picture) in layers.iter().enumerate().rev() {
        let glyph = LAYER_GLYPHS[layer % LAYER_GLYPHS.len()];
        for p in picture.points() {
            // In range: every point lies inside the bounding box.
            let col = usize::try_from(p.x - lo.x).unwrap_or_default();
            let row = usize::try_from(p.y - lo.y).unwrap_or_default();
            cells[row * width + col] = glyph;
        }
    }

    let mut out = String::with_capacity((width + 1) * height + 32);
    let _ = writeln!(out, "origin ({}, {})", lo.x, lo.y);
    for row in cells.chunks(width) {
        out.extend(row);
        out.push('\n');
    }
    out
}

fn bounds(layers: &[Rc<Picture>]) -> Option<(Point, Point)> {
    layers
        .iter()
        .filter_map(|picture| picture.bounds())
        .reduce(|(lo, hi), (plo, phi)| {
            (
                Point::new(lo.x.min(plo.x), lo.y.min(plo.y)),
                Point::new(hi.x.max(phi.x), hi.y.max(phi.y)),
            )
        })
}

#[cfg(test)]
mod tests;
