//! App Router

use salvo::Router;

use crate::{packs, sizes};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("correct").get(packs::correct::handler))
        .push(Router::with_path("incorrect").get(packs::incorrect::handler))
        .push(Router::with_path("sizes").get(sizes::get::handler))
        .push(Router::with_path("set-sizes").post(sizes::set::handler))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use packing::catalog::PackSizes;

    use crate::{
        packs::{correct::CorrectResponse, incorrect::IncorrectResponse},
        test_helpers::{TEST_MAX_QUANTITY, packing_service, state_with_sizes},
    };

    use super::*;

    #[tokio::test]
    async fn test_replaced_sizes_apply_to_later_requests() -> TestResult {
        let service = packing_service(
            state_with_sizes(PackSizes::default(), TEST_MAX_QUANTITY),
            app_router(),
        );

        let res = TestClient::post("http://example.com/set-sizes")
            .json(&json!({ "Sizes": [10, 40, 20] }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let correct: CorrectResponse = TestClient::get("http://example.com/correct?x=45")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(correct.data.packs, BTreeMap::from([(40, 1), (10, 1)]));

        let incorrect: IncorrectResponse = TestClient::get("http://example.com/incorrect?x=45")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(
            incorrect.data.packs,
            vec![
                BTreeMap::from([(40, 2)]),
                BTreeMap::from([(20, 3)]),
                BTreeMap::from([(10, 5)]),
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let service = packing_service(
            state_with_sizes(PackSizes::default(), TEST_MAX_QUANTITY),
            app_router(),
        );

        let res = TestClient::get("http://example.com/packs")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
