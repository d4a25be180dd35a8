use crate::types::FetchError;

/// Blocking-style HTTP GET as seen by the station: one request in flight,
/// body copied into a caller-owned buffer.
pub trait HttpFetch {
    fn is_link_up(&self) -> bool;

    async fn get<'a>(&mut self, url: &str, buffer: &'a mut [u8]) -> Result<&'a [u8], FetchError>;
}
