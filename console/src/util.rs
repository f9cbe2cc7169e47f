use std::fmt::Display;
use tracing::warn;

// Calls `attempt` until it produces a value. The outer error aborts the loop,
// the inner one is logged and retried without limit.
pub fn retry<T, E, S, F>(mut attempt: F) -> Result<T, S>
where
    F: FnMut() -> Result<Result<T, E>, S>,
    E: Display,
{
    loop {
        match attempt()? {
            Ok(value) => return Ok(value),
            Err(err) => warn!("Retry triggered. Error: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_until_ok() {
        let mut answers = vec![Ok(7), Err("no"), Err("nope")];
        let mut calls = 0;
        let result: Result<u32, ()> = retry(|| {
            calls += 1;
            Ok(answers.pop().unwrap())
        });
        assert_eq!(result, Ok(7));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_retry_stops_on_outer_error() {
        let result: Result<u32, &str> = retry(|| -> Result<Result<u32, String>, &str> {
            Err("closed")
        });
        assert_eq!(result, Err("closed"));
    }
}
