//! Fan-out join for pages that need several resources at once.

use std::future::Future;

use futures::future::join_all;

use crate::ApiError;

/// Await every request, collecting each result or its own error.
///
/// One failing request never cancels its siblings; there is no retry and no
/// cancellation. Dashboards that need N resources (applications per posting,
/// portfolios per applicant) fan out here and decide per result how to render.
pub async fn join_independent<T, F>(
    requests: impl IntoIterator<Item = F>,
) -> Vec<Result<T, ApiError>>
where
    F: Future<Output = Result<T, ApiError>>,
{
    join_all(requests).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    type BoxedRequest = std::pin::Pin<Box<dyn Future<Output = Result<u32, ApiError>>>>;

    #[tokio::test]
    async fn one_failure_leaves_siblings_intact() {
        let requests: Vec<BoxedRequest> = vec![
            Box::pin(async { Ok(1u32) }),
            Box::pin(async { Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)) }),
            Box::pin(async { Ok(3u32) }),
        ];
        let results = join_independent(requests).await;

        assert_eq!(results.len(), 3);
        assert_eq!(*results[0].as_ref().unwrap(), 1);
        match &results[1] {
            Err(ApiError::Status(status)) => {
                assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected status error, got {other:?}"),
        }
        assert_eq!(*results[2].as_ref().unwrap(), 3);
    }

    #[tokio::test]
    async fn order_matches_the_input_order() {
        let results: Vec<Result<u32, ApiError>> =
            join_independent((0..4).map(|i| async move { Ok(i) })).await;
        let values: Vec<u32> = results.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
    }
}
