use crate::base;
use crate::base::backend;

/// Fetches every confirmed purchase within `range`, walking all pages in
/// order. Any failed page fails the whole fetch.
pub async fn confirmed_purchases<B>(
    backend: &B,
    range: base::Range,
    per_page: u32,
) -> Result<Vec<base::Purchase>, backend::Error>
where
    B: backend::Backend,
{
    let mut purchases = Vec::new();
    let mut page = 1;
    let mut last_page = 1;
    loop {
        let query = backend::PurchaseQuery::confirmed(range, per_page, page);
        let resp = backend.purchases(&query).await?;
        if page == 1 {
            last_page = resp.last_page();
        }
        tracing::debug!(page, last_page, count = resp.data.len(), "fetched purchases");
        purchases.extend(resp.data);
        match next_page(page, last_page) {
            Some(next) => page = next,
            None => break,
        }
    }
    tracing::info!(
        count = purchases.len(),
        pages = last_page,
        "fetched purchases for {}",
        range
    );
    Ok(purchases)
}

/// Page after `page`, unless `page` is the last one.
fn next_page(page: u32, last_page: u32) -> Option<u32> {
    (page < last_page).then(|| page + 1)
}


#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::testing::FakeBackend;
    use super::*;

    fn range() -> base::Range {
        "2015-03-01:2015-03-31".parse().unwrap()
    }

    #[tokio::test]
    async fn test_walks_every_page() {
        let backend = FakeBackend::new(vec![
            Some(
                r#"{"data":[
                    {"purchaseDate":"2015-03-01","totalAmount":100},
                    {"purchaseDate":"2015-03-02","totalAmount":200}
                ],"meta":{"lastPage":3}}"#,
            ),
            Some(r#"{"data":[{"purchaseDate":"2015-03-03","totalAmount":300}],"meta":{"lastPage":3}}"#),
            Some(r#"{"data":[{"purchaseDate":"2015-03-04","totalAmount":400}],"meta":{"lastPage":3}}"#),
        ]);
        let got = confirmed_purchases(&backend, range(), 2).await.unwrap();
        assert_eq!(backend.requested_pages(), vec![1, 2, 3]);
        assert_eq!(
            got.iter().map(|p| p.total_amount().0).collect::<Vec<_>>(),
            vec![100, 200, 300, 400]
        );
    }

    #[tokio::test]
    async fn test_query_parameters() {
        let backend = FakeBackend::new(vec![Some(r#"{"data":[]}"#)]);
        confirmed_purchases(&backend, range(), 250).await.unwrap();
        let requests = backend.requests.lock().unwrap();
        assert_eq!(
            *requests,
            vec![backend::PurchaseQuery::confirmed(range(), 100, 1)]
        );
        assert_eq!(requests[0].status, "confirmed");
    }

    #[rstest]
    #[case(1, 1, None)]
    #[case(1, 3, Some(2))]
    #[case(3, 3, None)]
    #[case(u32::MAX - 1, u32::MAX, Some(u32::MAX))]
    #[case(u32::MAX, u32::MAX, None)]
    fn test_next_page(#[case] page: u32, #[case] last_page: u32, #[case] want: Option<u32>) {
        assert_eq!(next_page(page, last_page), want);
    }

    #[tokio::test]
    async fn test_huge_last_page_stops_at_first_failure() {
        let backend = FakeBackend::new(vec![
            Some(r#"{"data":[],"meta":{"lastPage":4294967295}}"#),
            Some(r#"{"data":[]}"#),
        ]);
        let got = confirmed_purchases(&backend, range(), 100).await;
        assert!(matches!(got, Err(backend::Error::Status(500))), "{:?}", got);
        assert_eq!(backend.requested_pages(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_missing_meta_is_single_page() {
        let backend = FakeBackend::new(vec![
            Some(r#"{"data":[{"purchaseDate":"2015-03-01","totalAmount":100}]}"#),
            Some(r#"{"data":[{"purchaseDate":"2015-03-02","totalAmount":200}]}"#),
        ]);
        let got = confirmed_purchases(&backend, range(), 100).await.unwrap();
        assert_eq!(backend.requested_pages(), vec![1]);
        assert_eq!(got.len(), 1);
    }

    #[tokio::test]
    async fn test_only_first_page_meta_counts() {
        let backend = FakeBackend::new(vec![
            Some(r#"{"data":[],"meta":{"lastPage":2}}"#),
            Some(r#"{"data":[],"meta":{"lastPage":5}}"#),
        ]);
        confirmed_purchases(&backend, range(), 100).await.unwrap();
        assert_eq!(backend.requested_pages(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_failed_page_aborts() {
        let backend = FakeBackend::new(vec![
            Some(r#"{"data":[{"purchaseDate":"2015-03-01","totalAmount":100}],"meta":{"lastPage":3}}"#),
            None,
            Some(r#"{"data":[],"meta":{"lastPage":3}}"#),
        ]);
        let got = confirmed_purchases(&backend, range(), 100).await;
        assert!(matches!(got, Err(backend::Error::Status(500))));
        assert_eq!(backend.requested_pages(), vec![1, 2]);
    }
}
