pub mod file;
pub mod hackernews;

use super::error::Error;

/// Supplier of the headline corpus. The core treats whatever it returns as
/// an opaque, already-fetched list of strings.
pub trait HeadlineSource {
    fn top_headlines(&self) -> Result<Vec<String>, Error>;
}
