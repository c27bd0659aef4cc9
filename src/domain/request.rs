#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Request express (priority) delivery (`express=1`).
    pub express: bool,
    /// Ask SMS.RU to validate the request without delivering it (`test=1`).
    pub test: bool,
}

impl SendOptions {
    /// Options for a dry-run send.
    pub fn test() -> Self {
        Self {
            test: true,
            ..Self::default()
        }
    }
}
