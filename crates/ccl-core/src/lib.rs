pub mod cleaner;
pub mod dedupe;
pub mod name;
pub mod validator;

pub use cleaner::{CleanObserver, EMAIL_COLUMN, FIRST_NAME_COLUMN, NoopObserver, clean_table};
pub use dedupe::{INPUT_KEY_COLUMN, MASTER_KEY_COLUMN, dedupe};
pub use name::{NormalizedName, is_initials, normalize};
pub use validator::{
    AbstractApiValidator, DEFAULT_ENDPOINT, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY,
    EmailChecker, QUALITY_THRESHOLD, classify_response,
};
