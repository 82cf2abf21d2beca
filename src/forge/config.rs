pub mod cache {
    use std::time::Duration;
    pub const TTL: Duration = Duration::from_secs(600);
}
pub mod retry {
    use std::time::Duration;
    pub const RETRY_COUNT: u32 = 3;
    pub const RETRY_DELAY: Duration = Duration::from_millis(200);
    pub const LIMIT_DELAY: Duration = Duration::from_secs(2);
}
pub mod api {
    use std::time::Duration;
    pub const BASE_URL: &str = "https://codeforces.com/api/";
    pub const BASE_URL_ENV: &str = "CFORGE_API";
    pub const TIMEOUT: Duration = Duration::from_secs(15);
    pub const SUBMISSION_COUNT: u32 = 50;
    pub const STATUS_COUNT: u32 = 10000;
}
