use image::imageops::FilterType;

/// How the height of each output is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightRule {
    /// Scale the original height by `target_width / original_width`.
    FromOriginal,
    /// Scale the previous output's height by `target_width / previous_width`.
    Cascade,
}

/// What happens when decoding, encoding or writing a file fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the whole run on the first error.
    Halt,
    /// Report the failed file and continue with the next one.
    Isolate,
}

#[derive(Debug, Clone)]
pub struct ResizeConfig {
    pub reference_width: u32,
    pub percentages: Vec<u32>,
    pub valid_extensions: Vec<String>,
    pub filter: FilterType,
    pub height_rule: HeightRule,
    pub failure_policy: FailurePolicy,
}

impl ResizeConfig {
    pub fn is_valid_extension(&self, extension: &str) -> bool {
        self.valid_extensions.iter().any(|e| e == extension)
    }
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            reference_width: 1920,
            percentages: vec![75, 50, 25],
            valid_extensions: vec!["jpeg".to_string(), "jpg".to_string(), "png".to_string()],
            filter: FilterType::Lanczos3,
            height_rule: HeightRule::FromOriginal,
            failure_policy: FailurePolicy::Halt,
        }
    }
}
