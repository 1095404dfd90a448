pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{BriefConfig, Credentials};
pub use crate::core::{briefing::BriefingEngine, digest, mailer::Mailer};
pub use crate::domain::model::{EmailMessage, NewsItem, Task, WeatherObservation};
pub use crate::utils::error::{BriefError, Result};
