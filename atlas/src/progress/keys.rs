use atlas_derive::ThemeKey;

/// Semantic parts of a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ThemeKey)]
#[theme(namespace = "ra_progressBar")]
pub enum ProgressKey {
    Buffer,
    Circle,
    Circular,
    #[theme(name = "circular-indeterminate-bar-dash")]
    CircularIndeterminateBarDash,
    #[theme(name = "circular-indeterminate-bar-rotate")]
    CircularIndeterminateBarRotate,
    Colors,
    /// Container class in determinate mode; unstyled unless a caller maps it.
    #[theme(no_default)]
    Determinate,
    Disabled,
    Indeterminate,
    Linear,
    #[theme(name = "linear-indeterminate-bar")]
    LinearIndeterminateBar,
    Multicolor,
    Path,
    Value,
}
