/// Simplified error system - one taxonomy is enough for decorative widgets
#[derive(Debug, Clone)]
pub enum WidgetError {
    /// The shared external script failed to load
    ScriptLoad(String),
    /// The external widget failed to initialize against its container
    Attach(String),
    /// Browser DOM was not in the expected shape
    Dom(String),
}

impl std::fmt::Display for WidgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetError::ScriptLoad(msg) => write!(f, "Script Load Error: {}", msg),
            WidgetError::Attach(msg) => write!(f, "Widget Attach Error: {}", msg),
            WidgetError::Dom(msg) => write!(f, "DOM Error: {}", msg),
        }
    }
}

impl std::error::Error for WidgetError {}

pub type WidgetResult<T> = Result<T, WidgetError>;
