pub struct Config {
    /// Suppresses decorative output.
    ///
    /// Level 1 keeps warnings and results, level 2 prints errors only.
    pub quiet: u8,
    /// Skips the startup banner even at quiet level 0.
    pub no_banner: bool,
}
