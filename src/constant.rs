/// Application name used for the config file location
pub const APP_NAME: &str = "diff-rows";

/// Context window used when none is given, large enough to mean "show everything"
pub const DEFAULT_CONTEXT_LINES: usize = 10_000;

/// Class name of emphasized tokens
pub const INNER_DIFF_CLASS: &str = "inner-diff";
