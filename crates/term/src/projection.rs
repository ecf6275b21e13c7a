//! Projection of drawables onto the play region.
//!
//! This module is pure (no I/O). Entities are drawn in the order given, so a
//! later entity overwrites an earlier one on shared cells.

use crate::region::Region;
use crate::types::Drawable;

/// Counters for one projected frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Projection {
    pub drawn: usize,
    /// Characters that fell outside the interior and were dropped.
    pub clipped: usize,
}

/// Draw one entity, returning the number of clipped characters.
pub fn project(region: &mut Region, drawable: &Drawable) -> usize {
    let color = drawable.resolved_color();
    match drawable {
        Drawable::Texture { x, y, rows, .. } => {
            let mut clipped = 0;
            for (i, row) in rows.iter().enumerate() {
                match u16::try_from(i).ok().and_then(|i| y.checked_add(i)) {
                    Some(r) => clipped += region.write_str(r, *x, row, color),
                    None => clipped += row.chars().count(),
                }
            }
            clipped
        }
        Drawable::Glyph { x, y, ch, .. } => {
            if region.write_glyph(*y, *x, *ch, color) {
                0
            } else {
                1
            }
        }
    }
}

/// Draw every entity in iteration order.
pub fn project_all<'a, I>(region: &mut Region, drawables: I) -> Projection
where
    I: IntoIterator<Item = &'a Drawable>,
{
    let mut out = Projection::default();
    for d in drawables {
        out.clipped += project(region, d);
        out.drawn += 1;
    }
    out
}
