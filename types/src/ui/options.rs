/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Skip counter easing and progress fills.
    pub reduced_motion: bool,
}

/// Where keyboard input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Scrolling and stepper navigation.
    #[default]
    Browse,
    /// Typing into the contact form.
    Form,
}
