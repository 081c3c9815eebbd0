//! Canonical effect instances built on the shape, animation, and scroll
//! layers. Each effect is an advance/compute state machine: host events feed
//! in, one [`crate::shape::frame::GeometryFrame`] comes out per tick.

pub mod divider;
pub mod fabric;
pub mod hover;
pub mod idle_fx;
pub mod particles;
pub mod reveal;

use crate::foundation::error::{BloomError, BloomResult};

/// Deserialize an effect config from host-supplied JSON params.
///
/// `null` means all defaults; unknown fields are rejected so typos in host
/// config surface as validation errors instead of silently-ignored knobs.
pub(crate) fn parse_config<T>(params: &serde_json::Value) -> BloomResult<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    if params.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(params.clone())
        .map_err(|e| BloomError::validation(format!("invalid effect params: {e}")))
}
