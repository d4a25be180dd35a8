/// Source of the current Unix time in seconds.
pub trait Rtc {
    type Error: core::fmt::Debug;

    async fn get_time(&self) -> Result<i64, Self::Error>;
}
