use crate::foundation::error::{BenchError, BenchResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley label layout.
pub(crate) struct LabelBrush {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

/// Stateful helper for shaping overlay labels.
///
/// Labels resolve against the system monospace family; on systems without
/// usable fonts the layout simply produces no glyph runs.
pub(crate) struct LabelEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<LabelBrush>,
}

impl Default for LabelEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelEngine {
    /// Construct a new engine with fresh Parley contexts.
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out a single-line label.
    pub(crate) fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        brush: LabelBrush,
    ) -> BenchResult<parley::Layout<LabelBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(BenchError::config("label size_px must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Borrowed("monospace")),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<LabelBrush> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}
