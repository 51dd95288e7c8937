//! Renderer seam. Painting element content belongs to the host; the engine
//! only decides what to paint and in which order.

use crate::order::RenderItem;

/// Paints one element at a time, bottom to top.
pub trait Renderer {
    /// Paint `item`. Selection chrome and resize handles are drawn only when
    /// `item.is_selected` is set.
    fn paint(&mut self, item: &RenderItem<'_>);
}

/// Collects a plain-text paint listing, one line per element.
#[derive(Debug, Default)]
pub struct TextRenderer {
    pub lines: Vec<String>,
}

impl Renderer for TextRenderer {
    fn paint(&mut self, item: &RenderItem<'_>) {
        let g = item.geometry;
        self.lines.push(format!(
            "{:>3} {}{:<6} {:>5},{:<5} {:>4}x{:<4} {}",
            item.z_rank,
            if item.is_selected { '*' } else { ' ' },
            item.kind,
            g.x,
            g.y,
            g.width,
            g.height,
            item.id,
        ));
    }
}
