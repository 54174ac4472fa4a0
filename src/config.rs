use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::noise::Scale;

/// Largest accepted side of a sampled field window.
pub const MAX_FIELD_SIDE: usize = 4096;

/// Parameters for sampling a window of the noise field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub seed: u32,
    pub width: usize,
    pub height: usize,

    // Window origin in noise coordinates
    pub origin_x: i32,
    pub origin_y: i32,

    // Slice through the higher dimensions; `Some` switches to 3D/4D noise
    pub z: Option<i32>,
    pub t: Option<i32>,

    pub scale: Scale,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            seed: 0,
            width: 256,
            height: 256,
            origin_x: 0,
            origin_y: 0,
            z: None,
            t: None,
            scale: Scale::ZeroToOne,
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<()> {
        let ok = |side: usize| (1..=MAX_FIELD_SIDE).contains(&side);
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(Error::InvalidSize {
                width: self.width,
                height: self.height,
                max: MAX_FIELD_SIDE,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Params::default().validate().is_ok());
    }

    #[test]
    fn rejects_empty_and_oversized_windows() {
        let p = Params { width: 0, ..Params::default() };
        assert!(matches!(p.validate(), Err(Error::InvalidSize { width: 0, .. })));
        let p = Params { height: MAX_FIELD_SIDE + 1, ..Params::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn missing_json_fields_fall_back_to_defaults() {
        let p: Params = serde_json::from_str(r#"{"seed": 9, "scale": "neg_one_to_one"}"#).unwrap();
        assert_eq!(p.seed, 9);
        assert_eq!(p.width, 256);
        assert_eq!(p.scale, Scale::NegOneToOne);
        assert_eq!(p.z, None);
    }
}
