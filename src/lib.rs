pub mod ai;
pub mod app;
pub mod error;
pub mod imager;
pub mod logging;
pub mod markup;
pub mod message;
pub mod persona;
pub mod planet;
pub mod screen;
pub mod settings;
pub mod simulation;
pub mod tui;
pub mod ui;

// Re-export commonly used items for easier access
pub use ai::{ChatSession, SimulationAI};
pub use error::{AIError, AppError};
pub use markup::{MarkupSpan, SpanKind, parse_inline};
pub use message::{Message, MessageType};
pub use persona::{ChatTarget, CityRole};
pub use planet::{CustomPlanetParams, Planet};
pub use screen::{MenuTab, Screen};
pub use simulation::{LifeAnalysisData, SimulationData};
