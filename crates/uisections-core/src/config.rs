/// Configuration for the uisections engine.
#[derive(Debug, Clone)]
pub struct Config {
    /// Length of one keyboard resize step in pixels.
    pub keyboard_step: f32,
    /// Minimum used for panes without a caller-supplied minimum.
    pub default_min_section_size: f32,
    /// Reject invalid configurations instead of logging and carrying on.
    pub strict_validation: bool,
    pub benchmark: BenchmarkMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keyboard_step: 10.0,
            default_min_section_size: 0.0,
            strict_validation: false,
            benchmark: BenchmarkMode::Off,
        }
    }
}

impl Config {
    pub fn keyboard_step(mut self, step: f32) -> Self {
        self.keyboard_step = step.max(1.0);
        self
    }

    pub fn default_min_section_size(mut self, size: f32) -> Self {
        self.default_min_section_size = size.max(0.0);
        self
    }

    pub fn strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkMode {
    /// Profiling scopes are disabled
    Off,
    /// Profiling scopes are recorded in-process
    On,
    /// Profiling scopes are recorded and served to 'puffin_viewer' over HTTP
    WithWebserver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.keyboard_step, 10.0);
        assert_eq!(config.default_min_section_size, 0.0);
        assert!(!config.strict_validation);
        assert_eq!(config.benchmark, BenchmarkMode::Off);
    }

    #[test]
    fn test_builder_clamps() {
        let config = Config::default().keyboard_step(0.0).default_min_section_size(-5.0);
        assert_eq!(config.keyboard_step, 1.0);
        assert_eq!(config.default_min_section_size, 0.0);
    }
}
