//! Integration tests for availability, booking creation and the host dashboard

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use common::{bearer, book, create_listing, login, send, sign_up, TestContext};

#[actix_web::test]
async fn test_june_scenario_over_http() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;
    let host = sign_up(&app, "host_june", "host").await;
    let guest = sign_up(&app, "guest_june", "guest").await;
    let listing_id = create_listing(&app, &host, 100.0).await;

    let (status, first) = book(&app, &guest, &listing_id, "2024-06-01", "2024-06-05").await;
    assert_eq!(status, StatusCode::CREATED, "{}", first);
    assert_eq!(first["listingId"], listing_id.as_str());
    assert_eq!(first["checkIn"], "2024-06-01");
    assert_eq!(first["checkOut"], "2024-06-05");
    assert_eq!(first["totalPrice"], 400.0);
    assert_eq!(first["status"], "pending");

    let (status, body) = book(&app, &guest, &listing_id, "2024-06-03", "2024-06-07").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "DATES_UNAVAILABLE");
    assert_eq!(body["details"]["conflictingBookingId"], first["id"]);

    let (status, _) = book(&app, &guest, &listing_id, "2024-06-05", "2024-06-08").await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = book(&app, &guest, &listing_id, "2024-05-01", "2024-06-01").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[actix_web::test]
async fn test_booking_validation_errors() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;
    let host = sign_up(&app, "host_val", "host").await;
    let guest = sign_up(&app, "guest_val", "guest").await;
    let listing_id = create_listing(&app, &host, 80.0).await;

    for (check_in, check_out) in [
        ("2024-06-05", "2024-06-05"),
        ("2024-06-07", "2024-06-03"),
        ("06/01/2024", "2024-06-03"),
        ("", "2024-06-03"),
    ] {
        let (status, body) = book(&app, &guest, &listing_id, check_in, check_out).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} -> {}: {}", check_in, check_out, body);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    let unknown = uuid::Uuid::new_v4().to_string();
    let (status, body) = book(&app, &guest, &unknown, "2024-06-01", "2024-06-03").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_booking_requires_login_and_guest_role() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;
    let host = sign_up(&app, "host_role", "host").await;
    let listing_id = create_listing(&app, &host, 80.0).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(json!({ "listingId": listing_id, "checkIn": "2024-06-01", "checkOut": "2024-06-03" }))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = book(&app, &host, &listing_id, "2024-06-01", "2024-06-03").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "FORBIDDEN");
}

#[actix_web::test]
async fn test_availability_endpoint() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;
    let host = sign_up(&app, "host_avail", "host").await;
    let guest = sign_up(&app, "guest_avail", "guest").await;
    let listing_id = create_listing(&app, &host, 50.0).await;
    let (_, booking) = book(&app, &guest, &listing_id, "2024-07-10", "2024-07-12").await;

    let check = |check_in: &'static str, check_out: &'static str| {
        test::TestRequest::post()
            .uri(&format!("/api/v1/listings/{}/availability", listing_id))
            .set_json(json!({ "checkIn": check_in, "checkOut": check_out }))
            .to_request()
    };

    let (status, body) = send(&app, check("2024-07-11", "2024-07-13")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], false);
    assert_eq!(body["conflictingBookingId"], booking["id"]);

    let (status, body) = send(&app, check("2024-07-12", "2024-07-14")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "available": true }));

    let (status, _) = send(&app, check("2024-07-14", "2024-07-12")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_cancel_frees_dates_and_hides_booking() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;
    let host = sign_up(&app, "host_cancel", "host").await;
    let guest = sign_up(&app, "guest_cancel", "guest").await;
    let other = sign_up(&app, "other_cancel", "guest").await;
    let listing_id = create_listing(&app, &host, 60.0).await;
    let (_, booking) = book(&app, &guest, &listing_id, "2024-08-01", "2024-08-04").await;
    let booking_uri = format!("/api/v1/bookings/{}", booking["id"].as_str().unwrap());

    let req = test::TestRequest::get()
        .uri(&booking_uri)
        .insert_header(bearer(&other))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&booking_uri)
        .insert_header(bearer(&other))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&booking_uri)
        .insert_header(bearer(&guest))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&booking_uri)
        .insert_header(bearer(&guest))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = book(&app, &other, &listing_id, "2024-08-02", "2024-08-03").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[actix_web::test]
async fn test_host_dashboard_and_status_updates() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;
    let host = sign_up(&app, "host_dash", "host").await;
    let guest = sign_up(&app, "guest_dash", "guest").await;
    let listing_id = create_listing(&app, &host, 75.0).await;
    let (_, stay) = book(&app, &guest, &listing_id, "2024-09-01", "2024-09-05").await;
    let (_, other) = book(&app, &guest, &listing_id, "2024-09-10", "2024-09-11").await;

    let req = test::TestRequest::get()
        .uri("/api/v1/host/bookings")
        .insert_header(bearer(&host))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let status_uri = |booking: &serde_json::Value| {
        format!("/api/v1/host/bookings/{}", booking["id"].as_str().unwrap())
    };

    let req = test::TestRequest::put()
        .uri(&status_uri(&stay))
        .insert_header(bearer(&guest))
        .set_json(json!({ "status": "completed" }))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let req = test::TestRequest::put()
        .uri(&status_uri(&stay))
        .insert_header(bearer(&host))
        .set_json(json!({ "status": "completed" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "completed");

    let req = test::TestRequest::put()
        .uri(&status_uri(&stay))
        .insert_header(bearer(&host))
        .set_json(json!({ "status": "cancelled" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "INVALID_STATUS_TRANSITION");

    let req = test::TestRequest::put()
        .uri(&status_uri(&other))
        .insert_header(bearer(&host))
        .set_json(json!({ "status": "archived" }))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/v1/host/earnings")
        .insert_header(bearer(&host))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalEarnings"], 300.0);
    assert_eq!(body["completedBookings"], 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/host/earnings")
        .insert_header(bearer(&guest))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_user_bookings_visible_to_self_only() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;
    let host = sign_up(&app, "host_list", "host").await;
    let guest = sign_up(&app, "guest_list", "guest").await;
    let other = sign_up(&app, "other_list", "guest").await;
    let listing_id = create_listing(&app, &host, 20.0).await;
    let (_, booking) = book(&app, &guest, &listing_id, "2024-10-01", "2024-10-03").await;
    let uri = format!("/api/v1/users/{}/bookings", booking["userId"].as_str().unwrap());

    let req = test::TestRequest::get().uri(&uri).insert_header(bearer(&guest)).to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], booking["id"]);

    let req = test::TestRequest::get().uri(&uri).insert_header(bearer(&other)).to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_admin_lists_every_booking() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;
    let host = sign_up(&app, "host_all", "host").await;
    let guest = sign_up(&app, "guest_all", "guest").await;
    let other = sign_up(&app, "other_all", "guest").await;
    ctx.seed_admin("admin_all").await;
    let admin = login(&app, "admin_all").await;
    let listing_id = create_listing(&app, &host, 80.0).await;
    book(&app, &guest, &listing_id, "2024-09-01", "2024-09-04").await;
    book(&app, &other, &listing_id, "2024-09-10", "2024-09-12").await;

    for token in [&guest, &host] {
        let req = test::TestRequest::get()
            .uri("/api/v1/bookings")
            .insert_header(bearer(token))
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "FORBIDDEN");
    }

    let (status, _) = send(&app, test::TestRequest::get().uri("/api/v1/bookings").to_request()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&admin))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    let bookings = body.as_array().unwrap();
    assert_eq!(bookings.len(), 2);
    let mut totals: Vec<f64> = bookings.iter().map(|b| b["totalPrice"].as_f64().unwrap()).collect();
    totals.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(totals, vec![160.0, 240.0]);
}
