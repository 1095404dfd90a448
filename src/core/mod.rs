pub mod briefing;
pub mod digest;
pub mod mailer;
pub mod news;
pub mod tasks;
pub mod weather;

pub use crate::domain::model::{EmailMessage, NewsItem, Task, WeatherObservation};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
