/// Invalid layout setup. Fatal: the host must not go on with a layout that
/// produced one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealError {
    /// A second floating action button was added.
    DuplicateFab,
    /// More content surfaces than the layout can swap between.
    TooManyContents { max: usize },
    MissingFab,
    MissingContent { found: usize, required: usize },
}

impl std::fmt::Display for RevealError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RevealError::DuplicateFab => {
                write!(f, "reveal layout can only hold one floating action button")
            }
            RevealError::TooManyContents { max } => {
                write!(f, "reveal layout can only hold {max} content views")
            }
            RevealError::MissingFab => write!(f, "reveal layout has no floating action button"),
            RevealError::MissingContent { found, required } => {
                write!(f, "reveal layout needs {required} content views, found {found}")
            }
        }
    }
}

impl std::error::Error for RevealError {}
