use validator::Validate;

#[derive(Debug, Default, Validate)]
pub struct Network {
    #[validate(range(min = 1, message = "timeout must be at least 1 second"))]
    pub timeout: Option<u64>,
    #[validate(url(message = "should be a url"))]
    pub proxy: Option<String>,
}
