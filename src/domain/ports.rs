/// Read-only view of the run configuration the briefing engine consumes.
pub trait ConfigProvider: Send + Sync {
    fn news_endpoint(&self) -> &str;
    fn weather_endpoint(&self) -> &str;
    fn tasks_endpoint(&self) -> &str;
    fn keyword(&self) -> &str;
    fn limit(&self) -> usize;
    fn city(&self) -> &str;
    fn country(&self) -> &str;
    /// Publication date filter (YYYY-MM-DD); `None` means today in local time.
    fn date(&self) -> Option<&str>;
    fn smtp_host(&self) -> &str;
    fn smtp_port(&self) -> u16;
}
