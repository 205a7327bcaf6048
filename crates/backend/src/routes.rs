use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers;

/// Every route of the finance API
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 Commission periods
        // ========================================
        .route(
            "/api/finance/commission_period",
            get(handlers::a001_commission_period::list_all)
                .post(handlers::a001_commission_period::create),
        )
        .route(
            "/api/finance/commission_period/open",
            get(handlers::a001_commission_period::open_period),
        )
        .route(
            "/api/finance/commission_period/:id",
            put(handlers::a001_commission_period::update)
                .delete(handlers::a001_commission_period::delete),
        )
        // ========================================
        // A002 Commission structure
        // ========================================
        .route(
            "/api/finance/commission_structure",
            get(handlers::a002_commission_range::list_all)
                .post(handlers::a002_commission_range::create),
        )
        .route(
            "/api/finance/commission_structure/:id",
            put(handlers::a002_commission_range::update)
                .delete(handlers::a002_commission_range::delete),
        )
        // ========================================
        // Projections (read-only)
        // ========================================
        .route(
            "/api/finance/marketers_commission",
            get(handlers::p900_marketer_commission::list_all),
        )
        .route(
            "/api/finance/commission",
            get(handlers::p901_lead_payments::list_leads),
        )
        .route(
            "/api/finance/Commission-history",
            get(handlers::p901_lead_payments::payment_history),
        )
        .route(
            "/api/finance/refund_transaction",
            get(handlers::p902_refund_transaction::list_all),
        )
        .route(
            "/api/finance/testdata",
            post(handlers::testdata::insert_test_data),
        )
}
