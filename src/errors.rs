/// Common result type
pub type FixtureResult<T> = anyhow::Result<T>;
