use thiserror::Error;

/// Library error type for slideshow setup and configuration.
///
/// Setup errors are terminal for the widget instance being attached: the
/// document is left untouched and no partial widget keeps running. They
/// never affect other widgets on the same document.
#[derive(Debug, Error)]
pub enum Error {
    /// The container selector matched no element in the document.
    #[error("container not found: {0}")]
    ContainerNotFound(String),

    /// The container resolved, but nothing inside it matched the slide class.
    #[error("no slides matching {class} under {container}")]
    NoSlidesFound { container: String, class: String },

    /// A slide counted via the slide class has no `{prefix}{index}` element.
    #[error("slide element {selector} is missing")]
    SlideMissing { selector: String },

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),
}
