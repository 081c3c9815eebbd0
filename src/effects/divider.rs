//! Scroll-bound vein divider between page sections.
//!
//! The vein network is generated from its seed each tick at the reveal
//! length mapped from the element's scroll fraction; opacity fades in near
//! the viewport edges and pulse nodes throb on a slow sine.

use tracing::instrument;

use crate::{
    effects::parse_config,
    foundation::core::{Circle, Rgba, Shape},
    foundation::error::BloomResult,
    scroll::mapper::{fade_profile, interpolate, ScrollBinding},
    shape::frame::{GeometryFrame, Paint, PathStyle},
    shape::vein::{VeinNetwork, VeinParams},
};

const VEIN_COLOR: Rgba = Rgba::new(70, 36, 110, 1.0);
const NODE_COLOR: Rgba = Rgba::new(140, 80, 200, 0.9);

/// Divider configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DividerConfig {
    /// Vein seed; two dividers on one page get different seeds.
    pub seed: f64,
    /// Mirror the divider vertically.
    pub flip: bool,
    /// Divider width in pixels.
    pub width: f64,
    /// Divider height in pixels.
    pub height: f64,
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self {
            seed: 3.0,
            flip: false,
            width: 1200.0,
            height: 100.0,
        }
    }
}

/// Scroll-revealed vein divider instance.
#[derive(Clone, Debug)]
pub struct DividerEffect {
    params: VeinParams,
}

impl DividerEffect {
    /// Build a divider.
    pub fn new(config: DividerConfig) -> Self {
        let mut params = VeinParams::new(config.seed);
        params.width = config.width;
        params.height = config.height;
        params.flip = config.flip;
        Self { params }
    }

    /// Build from host JSON params.
    pub fn from_params(params: &serde_json::Value) -> BloomResult<Self> {
        Ok(Self::new(parse_config(params)?))
    }

    /// Compute the divider frame for the current scroll position.
    ///
    /// The reveal front finishes growing by 60% scroll so the full network
    /// is visible while the element crosses the viewport middle.
    #[instrument(level = "trace", skip(self))]
    pub fn compute_frame(&self, binding: ScrollBinding, time: f64) -> GeometryFrame {
        let reveal = interpolate(binding.fraction, &[0.0, 0.6, 1.0], &[0.0, 1.0, 1.0]);
        let opacity = fade_profile(binding.fraction);

        let mut frame = GeometryFrame::new();
        if reveal <= 0.0 || opacity <= 0.0 {
            return frame;
        }

        let network = VeinNetwork::generate_revealed(&self.params, reveal);
        let vein = VEIN_COLOR.scaled_alpha(opacity);

        frame.push(
            network.primary.clone(),
            PathStyle::stroke(Paint::Solid(vein), 2.2),
        );
        for branch in &network.branches {
            frame.push(branch.clone(), PathStyle::stroke(Paint::Solid(vein), 1.2));
        }

        for node in &network.nodes {
            let throb = 0.5 + 0.5 * (time * 2.0 + node.phase).sin();
            let dot = Circle::new(node.position, 2.0 + throb * 2.0).to_path(0.1);
            frame.push(
                dot,
                PathStyle::fill(Paint::Solid(
                    NODE_COLOR.scaled_alpha(opacity * (0.4 + 0.6 * throb)),
                )),
            );
        }
        frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/divider.rs"]
mod tests;
