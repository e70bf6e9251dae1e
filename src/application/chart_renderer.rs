// Renderer trait - whatever paints a chart from a specification
use crate::domain::chart::{DecadeBarSpec, ScatterSpec};

pub trait ChartRenderer {
    type Output;

    fn render_scatter(&self, spec: &ScatterSpec) -> Self::Output;

    fn render_decades(&self, spec: &DecadeBarSpec) -> Self::Output;
}
