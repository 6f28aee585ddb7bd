use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::render::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Canonical draw layers, bottom to top.
///
/// Primitives within one layer draw in push order, so the selected series is
/// brought to the front by pushing it last into `Series`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartLayer {
    Axes,
    Series,
    Legend,
    Overlay,
}

impl ChartLayer {
    pub const ORDER: [Self; 4] = [Self::Axes, Self::Series, Self::Legend, Self::Overlay];

    fn index(self) -> usize {
        match self {
            Self::Axes => 0,
            Self::Series => 1,
            Self::Legend => 2,
            Self::Overlay => 3,
        }
    }
}

/// Primitive buckets for one draw layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerPrimitives {
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.circles.is_empty()
            && self.rects.is_empty()
            && self.texts.is_empty()
    }

    fn validate(&self) -> PlotResult<()> {
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    layers: [LayerPrimitives; 4],
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: Default::default(),
        }
    }

    #[must_use]
    pub fn layer(&self, layer: ChartLayer) -> &LayerPrimitives {
        &self.layers[layer.index()]
    }

    pub fn layer_mut(&mut self, layer: ChartLayer) -> &mut LayerPrimitives {
        &mut self.layers[layer.index()]
    }

    /// Iterates layers in draw order.
    pub fn layers(&self) -> impl Iterator<Item = (ChartLayer, &LayerPrimitives)> {
        ChartLayer::ORDER
            .into_iter()
            .map(move |kind| (kind, self.layer(kind)))
    }

    pub fn push_line(&mut self, layer: ChartLayer, line: LinePrimitive) {
        self.layer_mut(layer).lines.push(line);
    }

    pub fn push_circle(&mut self, layer: ChartLayer, circle: CirclePrimitive) {
        self.layer_mut(layer).circles.push(circle);
    }

    pub fn push_rect(&mut self, layer: ChartLayer, rect: RectPrimitive) {
        self.layer_mut(layer).rects.push(rect);
    }

    pub fn push_text(&mut self, layer: ChartLayer, text: TextPrimitive) {
        self.layer_mut(layer).texts.push(text);
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|l| l.lines.len()).sum()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.layers.iter().map(|l| l.circles.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|l| l.texts.len()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.layers.iter().map(|l| l.rects.len()).sum()
    }
}
