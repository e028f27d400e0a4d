use crate::cloud::{GridSpec, SampleParams, ScatterParams, TextStyle};
use crate::constants::TARGET_TEXT;
use crate::curtain::CurtainTimeline;
use crate::ripple::RippleParams;

/// Everything the landing screen needs to build and run the field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub grid: GridSpec,
    pub text: String,
    pub style: TextStyle,
    pub sample: SampleParams,
    pub scatter: ScatterParams,
    pub ripple: RippleParams,
    pub curtains: CurtainTimeline,
    /// Fixed scatter seed; `None` draws one from the platform RNG.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            text: TARGET_TEXT.to_string(),
            style: TextStyle::default(),
            sample: SampleParams::default(),
            scatter: ScatterParams::default(),
            ripple: RippleParams::default(),
            curtains: CurtainTimeline::default(),
            seed: None,
        }
    }
}
