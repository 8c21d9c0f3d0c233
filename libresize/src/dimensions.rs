use serde::Serialize;

use crate::config::{HeightRule, ResizeConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetDimension {
    pub width: u32,
    pub height: u32,
}

/// Target widths for each configured percentage of the reference width, truncated.
pub fn target_widths(config: &ResizeConfig) -> Vec<u32> {
    config
        .percentages
        .iter()
        .map(|&pct| (config.reference_width as f64 / 100.0 * pct as f64) as u32)
        .collect()
}

/// Height proportional to `target_width`, truncated.
pub fn target_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scale = target_width as f64 / width as f64;
    (height as f64 * scale) as u32
}

pub fn target_dimension(width: u32, height: u32, target_width: u32) -> TargetDimension {
    TargetDimension {
        width: target_width,
        height: target_height(width, height, target_width),
    }
}

/// Every output size for an image of `width` x `height`, in percentage order.
pub fn plan(width: u32, height: u32, config: &ResizeConfig) -> Vec<TargetDimension> {
    let mut dims = Vec::with_capacity(config.percentages.len());
    let (mut base_w, mut base_h) = (width, height);
    for target_width in target_widths(config) {
        let dim = target_dimension(base_w, base_h, target_width);
        if config.height_rule == HeightRule::Cascade {
            base_w = dim.width;
            base_h = dim.height;
        }
        dims.push(dim);
    }
    dims
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(pairs: &[(u32, u32)]) -> Vec<TargetDimension> {
        pairs
            .iter()
            .map(|&(width, height)| TargetDimension { width, height })
            .collect()
    }

    #[test]
    fn widths_for_the_reference() {
        assert_eq!(target_widths(&ResizeConfig::default()), vec![1440, 960, 480]);
    }

    #[test]
    fn heights_truncate() {
        assert_eq!(target_height(1920, 1081, 1440), 810);
        assert_eq!(target_height(1920, 1083, 1440), 812);
        assert_eq!(target_height(1920, 1, 480), 0);
    }

    #[test]
    fn full_hd_plan() {
        let plan = plan(1920, 1080, &ResizeConfig::default());
        assert_eq!(plan, dims(&[(1440, 810), (960, 540), (480, 270)]));
    }

    #[test]
    fn from_original_scales_every_height_from_the_source() {
        let plan = plan(1920, 1002, &ResizeConfig::default());
        assert_eq!(plan, dims(&[(1440, 751), (960, 501), (480, 250)]));
    }

    #[test]
    fn cascade_scales_from_the_previous_output() {
        let config = ResizeConfig {
            height_rule: HeightRule::Cascade,
            ..ResizeConfig::default()
        };
        // 751 * 960 / 1440 = 500.67, where the source height alone gives 501
        let plan = plan(1920, 1002, &config);
        assert_eq!(plan, dims(&[(1440, 751), (960, 500), (480, 250)]));
    }

    #[test]
    fn cascade_matches_from_original_for_full_hd() {
        let config = ResizeConfig {
            height_rule: HeightRule::Cascade,
            ..ResizeConfig::default()
        };
        assert_eq!(plan(1920, 1080, &config), plan(1920, 1080, &ResizeConfig::default()));
    }

    #[test]
    fn height_of_any_value_is_accepted() {
        let plan = plan(1920, 1920, &ResizeConfig::default());
        assert_eq!(plan, dims(&[(1440, 1440), (960, 960), (480, 480)]));
    }
}
