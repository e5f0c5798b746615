//! Integration tests for `OrderbookAdapter` against an in-process relayer stub.
//!
//! The stub records every request it receives so the tests can check the
//! exact query shapes and that each operation issues a single call.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use sra_liquidity::domain::asset_pair::wire::{AssetPairsRequest, AssetPairsResponse};
use sra_liquidity::domain::order::wire::{OrderbookRequest, OrderbookResponse};
use sra_liquidity::prelude::*;

const ZRX: &str = "0xf47261b0000000000000000000000000e41d2489571d322189246dafa5ebde1f4699f498";
const WETH: &str = "0xf47261b0000000000000000000000000c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
const DAI: &str = "0xf47261b000000000000000000000000089d24a6b4ccb1b6faa2625fe562bdd9a23260359";

// ─── Stub relayer ────────────────────────────────────────────────────────────

#[derive(Default)]
struct StubRelayer {
    orderbook: Option<serde_json::Value>,
    asset_pairs: Option<serde_json::Value>,
    failure: Option<fn() -> HttpError>,
    orderbook_calls: Mutex<Vec<OrderbookRequest>>,
    asset_pair_calls: Mutex<Vec<AssetPairsRequest>>,
}

#[async_trait]
impl RelayerApi for StubRelayer {
    async fn get_orderbook(
        &self,
        request: &OrderbookRequest,
    ) -> Result<OrderbookResponse, HttpError> {
        self.orderbook_calls.lock().unwrap().push(request.clone());
        if let Some(fail) = self.failure {
            return Err(fail());
        }
        let body = self.orderbook.clone().expect("orderbook body");
        Ok(serde_json::from_value(body)?)
    }

    async fn get_asset_pairs(
        &self,
        request: &AssetPairsRequest,
    ) -> Result<AssetPairsResponse, HttpError> {
        self.asset_pair_calls.lock().unwrap().push(request.clone());
        if let Some(fail) = self.failure {
            return Err(fail());
        }
        let body = self.asset_pairs.clone().expect("asset pairs body");
        Ok(serde_json::from_value(body)?)
    }
}

fn adapter_with(stub: Arc<StubRelayer>) -> OrderbookAdapter {
    OrderbookAdapter::builder()
        .endpoint_url("https://relayer.example/v2")
        .network_id(42)
        .default_per_page(20)
        .relayer(stub)
        .build()
        .expect("adapter builds")
}

fn order_json(maker_amount: &str, taker_amount: &str, salt: &str) -> serde_json::Value {
    json!({
        "makerAddress": "0x5409ed021d9299bf6814279a6a1411a7e866a631",
        "takerAddress": "0x0000000000000000000000000000000000000000",
        "feeRecipientAddress": "0x0000000000000000000000000000000000000000",
        "senderAddress": "0x0000000000000000000000000000000000000000",
        "makerAssetAmount": maker_amount,
        "takerAssetAmount": taker_amount,
        "makerFee": "0",
        "takerFee": "0",
        "expirationTimeSeconds": "1700000000",
        "salt": salt,
        "makerAssetData": ZRX,
        "takerAssetData": WETH,
        "exchangeAddress": "0x48bacb9266a570d521063ef5dd96e61686dbe788",
        "signature": "0x1b"
    })
}

fn page(records: Vec<serde_json::Value>) -> serde_json::Value {
    json!({ "total": records.len(), "page": 1, "perPage": 100, "records": records })
}

fn pair(a: &str, b: &str) -> serde_json::Value {
    json!({ "assetDataA": { "assetData": a }, "assetDataB": { "assetData": b } })
}

// ─── Construction ────────────────────────────────────────────────────────────

#[test]
fn construction_rejects_bad_config_without_touching_relayer() {
    let stub = Arc::new(StubRelayer::default());

    let bad_endpoint = OrderbookAdapter::builder()
        .endpoint_url("not a url")
        .relayer(stub.clone())
        .build();
    assert!(matches!(bad_endpoint, Err(SdkError::InvalidConfiguration(_))));

    let zero_page = OrderbookAdapter::builder()
        .endpoint_url("https://relayer.example/v2")
        .default_per_page(0)
        .relayer(stub.clone())
        .build();
    assert!(matches!(zero_page, Err(SdkError::InvalidConfiguration(_))));

    // Only the caller's handle remains: the failed builds kept no reference.
    assert_eq!(Arc::strong_count(&stub), 1);
    assert!(stub.orderbook_calls.lock().unwrap().is_empty());
    assert!(stub.asset_pair_calls.lock().unwrap().is_empty());
}

// ─── fetch_orders ────────────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_orders_annotates_asks_in_order() {
    let stub = Arc::new(StubRelayer {
        orderbook: Some(json!({
            "bids": page(vec![json!({ "order": order_json("1", "1", "99"), "metaData": {} })]),
            "asks": page(vec![
                json!({ "order": order_json("200", "100", "1"), "metaData": { "remainingTakerAssetAmount": "50" } }),
                json!({ "order": order_json("50", "100", "2"), "metaData": {} }),
                json!({ "order": order_json("300", "100", "3") }),
            ]),
        })),
        ..Default::default()
    });
    let adapter = adapter_with(stub.clone());

    let orders = adapter
        .fetch_orders(&TradingPairRequest::new(ZRX, WETH))
        .await
        .unwrap();

    let salts: Vec<String> = orders.iter().map(|o| o.salt.to_string()).collect();
    assert_eq!(salts, vec!["1", "2", "3"]);

    let remaining: Vec<String> = orders
        .iter()
        .map(|o| o.remaining_fillable_maker_asset_amount.to_string())
        .collect();
    assert_eq!(remaining, vec!["100", "50", "300"]);
}

#[tokio::test]
async fn fetch_orders_queries_maker_as_base() {
    let stub = Arc::new(StubRelayer {
        orderbook: Some(json!({ "bids": page(vec![]), "asks": page(vec![]) })),
        ..Default::default()
    });
    let adapter = adapter_with(stub.clone());

    let orders = adapter
        .orders()
        .fetch(&TradingPairRequest::new(ZRX, WETH))
        .await
        .unwrap();
    assert!(orders.is_empty());

    let calls = stub.orderbook_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].base_asset_data.as_str(), ZRX);
    assert_eq!(calls[0].quote_asset_data.as_str(), WETH);
    assert_eq!(calls[0].network_id, 42);
}

#[tokio::test]
async fn invalid_request_makes_no_call() {
    let stub = Arc::new(StubRelayer::default());
    let adapter = adapter_with(stub.clone());

    let err = adapter
        .fetch_orders(&TradingPairRequest::new("", WETH))
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::InvalidRequest(_)));
    assert!(stub.orderbook_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn transport_failures_surface_as_remote_service_error() {
    let failures: [fn() -> HttpError; 3] = [
        || HttpError::Timeout,
        || HttpError::ServerError {
            status: 500,
            body: "internal".into(),
        },
        || HttpError::Decode("expected value at line 1 column 1".into()),
    ];

    for failure in failures {
        let stub = Arc::new(StubRelayer {
            failure: Some(failure),
            ..Default::default()
        });
        let adapter = adapter_with(stub.clone());

        let orders = adapter
            .fetch_orders(&TradingPairRequest::new(ZRX, WETH))
            .await;
        assert!(matches!(orders, Err(SdkError::RemoteService)));

        let pairs = adapter.available_maker_assets(&WETH.into()).await;
        assert!(matches!(pairs, Err(SdkError::RemoteService)));

        assert_eq!(stub.orderbook_calls.lock().unwrap().len(), 1);
        assert_eq!(stub.asset_pair_calls.lock().unwrap().len(), 1);
    }
}

#[tokio::test]
async fn malformed_payload_surfaces_as_remote_service_error() {
    let stub = Arc::new(StubRelayer {
        orderbook: Some(json!({ "bids": page(vec![]), "asks": { "records": "nope" } })),
        ..Default::default()
    });
    let err = adapter_with(stub)
        .fetch_orders(&TradingPairRequest::new(ZRX, WETH))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::RemoteService));
}

#[tokio::test]
async fn malformed_remaining_amount_surfaces_as_remote_service_error() {
    let stub = Arc::new(StubRelayer {
        orderbook: Some(json!({
            "bids": page(vec![]),
            "asks": page(vec![json!({
                "order": order_json("200", "100", "1"),
                "metaData": { "remainingTakerAssetAmount": "12.5" }
            })]),
        })),
        ..Default::default()
    });
    let err = adapter_with(stub)
        .fetch_orders(&TradingPairRequest::new(ZRX, WETH))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::RemoteService));
}

#[tokio::test]
async fn custom_fill_calculator_is_used() {
    struct Halving;

    impl FillAmountCalculator for Halving {
        fn maker_fill_amount(&self, order: &SignedOrder, _taker: &Amount) -> Amount {
            Amount::new(order.maker_asset_amount.as_biguint().clone() / 2u32)
        }
    }

    let stub = Arc::new(StubRelayer {
        orderbook: Some(json!({
            "bids": page(vec![]),
            "asks": page(vec![json!({ "order": order_json("200", "100", "1") })]),
        })),
        ..Default::default()
    });
    let adapter = OrderbookAdapter::builder()
        .endpoint_url("https://relayer.example/v2")
        .relayer(stub)
        .fill_calculator(Arc::new(Halving))
        .build()
        .unwrap();

    let orders = adapter
        .fetch_orders(&TradingPairRequest::new(ZRX, WETH))
        .await
        .unwrap();
    assert_eq!(orders[0].remaining_fillable_maker_asset_amount, Amount::from(100));
}

// ─── list_paired_assets ──────────────────────────────────────────────────────

#[tokio::test]
async fn base_discovery_requests_single_max_page() {
    let stub = Arc::new(StubRelayer {
        asset_pairs: Some(page(vec![pair(WETH, ZRX), pair(DAI, WETH), pair(WETH, ZRX)])),
        ..Default::default()
    });
    let adapter = adapter_with(stub.clone());

    let makers = adapter.available_maker_assets(&WETH.into()).await.unwrap();
    assert_eq!(
        makers,
        vec![AssetData::from(ZRX), AssetData::from(DAI), AssetData::from(ZRX)]
    );

    let calls = stub.asset_pair_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].asset_data_a.as_str(), WETH);
    assert_eq!(calls[0].per_page, MAX_PER_PAGE);
    assert_eq!(calls[0].page, 1);
    assert_eq!(calls[0].network_id, 42);
}

#[tokio::test]
async fn quote_discovery_uses_configured_page_size() {
    let stub = Arc::new(StubRelayer {
        asset_pairs: Some(page(vec![pair(ZRX, WETH)])),
        ..Default::default()
    });
    let adapter = adapter_with(stub.clone());

    let takers = adapter.available_taker_assets(&ZRX.into()).await.unwrap();
    assert_eq!(takers, vec![AssetData::from(WETH)]);

    let calls = stub.asset_pair_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].per_page, 20);
}

#[tokio::test]
async fn explicit_page_size_overrides_direction() {
    let stub = Arc::new(StubRelayer {
        asset_pairs: Some(page(vec![])),
        ..Default::default()
    });
    let adapter = adapter_with(stub.clone());

    adapter
        .list_paired_assets(&WETH.into(), Direction::AsBase, Some(5))
        .await
        .unwrap();
    assert_eq!(stub.asset_pair_calls.lock().unwrap()[0].per_page, 5);
}

#[tokio::test]
async fn pair_lookup_is_symmetric() {
    let stub = Arc::new(StubRelayer {
        asset_pairs: Some(page(vec![pair(ZRX, WETH)])),
        ..Default::default()
    });
    let adapter = adapter_with(stub);

    let from_a = adapter
        .list_paired_assets(&ZRX.into(), Direction::AsQuote, None)
        .await
        .unwrap();
    let from_b = adapter
        .list_paired_assets(&WETH.into(), Direction::AsQuote, None)
        .await
        .unwrap();
    assert_eq!(from_a, vec![AssetData::from(WETH)]);
    assert_eq!(from_b, vec![AssetData::from(ZRX)]);
}

#[tokio::test]
async fn unmatched_pair_follows_policy() {
    let body = page(vec![pair(ZRX, DAI)]);

    let fallback = adapter_with(Arc::new(StubRelayer {
        asset_pairs: Some(body.clone()),
        ..Default::default()
    }));
    assert_eq!(
        fallback.available_maker_assets(&WETH.into()).await.unwrap(),
        vec![AssetData::from(ZRX)]
    );

    let strict = OrderbookAdapter::builder()
        .endpoint_url("https://relayer.example/v2")
        .unmatched_pair_policy(UnmatchedPairPolicy::Reject)
        .relayer(Arc::new(StubRelayer {
            asset_pairs: Some(body),
            ..Default::default()
        }))
        .build()
        .unwrap();
    assert!(matches!(
        strict.available_maker_assets(&WETH.into()).await,
        Err(SdkError::RemoteService)
    ));
}

#[tokio::test]
async fn discovery_rejects_bad_input_without_calling() {
    let stub = Arc::new(StubRelayer::default());
    let adapter = adapter_with(stub.clone());

    assert!(matches!(
        adapter.available_maker_assets(&"weth".into()).await,
        Err(SdkError::InvalidRequest(_))
    ));
    assert!(matches!(
        adapter
            .list_paired_assets(&WETH.into(), Direction::AsQuote, Some(0))
            .await,
        Err(SdkError::InvalidRequest(_))
    ));
    assert!(stub.asset_pair_calls.lock().unwrap().is_empty());
}
