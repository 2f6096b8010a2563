//! API integration tests
//!
//! Require a reachable PostgreSQL named by `DATABASE_URL`; migrations are
//! applied on server start. Every test skips when it is unset.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    admin_token, assert_data, assert_error, assert_json, assert_status, check_test_env,
    client_body, donation_body, donor_name, id_of, medicine_body, member_body,
    money_distribution_body, register_body, unique_suffix, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn setup() -> Option<(TestServer, String)> {
    if !check_test_env() {
        return None;
    }
    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await.expect("Failed to register admin");
    Some((server, token))
}

// ============================================================================
// Health & Auth
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let body = assert_json(server.get("/health").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(body["status"], "healthy");

    let body = assert_json(server.get("/health/ready").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(body["database"], "healthy");
}

#[tokio::test]
async fn test_register_login_and_me() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();
    let request = register_body();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let registered = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(registered["user"]["email"], request["email"]);

    let login = json!({"email": request["email"], "password": request["password"]});
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    let logged_in = assert_data(response, StatusCode::OK).await.unwrap();
    let token = logged_in["token"].as_str().unwrap();

    let response = server.get_auth("/api/v1/auth/me", token).await.unwrap();
    let me = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(me["id"], registered["user"]["id"]);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();
    let request = register_body();

    server.post("/api/v1/auth/register", &request).await.unwrap();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let message = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(message, "User already exists");
}

#[tokio::test]
async fn test_register_email_differing_only_in_case() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();
    let request = register_body();
    let first = server.post("/api/v1/auth/register", &request).await.unwrap();
    let first = assert_data(first, StatusCode::CREATED).await.unwrap();

    let mut shouted = request.clone();
    shouted["email"] = json!(request["email"].as_str().unwrap().to_uppercase());
    let response = server.post("/api/v1/auth/register", &shouted).await.unwrap();
    let message = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(message, "User already exists");

    let login = json!({"email": shouted["email"], "password": request["password"]});
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    let data = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(data["user"]["id"], first["user"]["id"]);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();
    let login = json!({"email": "nobody@example.org", "password": "wrong"});

    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    let message = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(message, "Invalid credentials");
}

#[tokio::test]
async fn test_resources_require_token() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    for path in ["/api/v1/members", "/api/v1/clients", "/api/v1/donations"] {
        let response = server.get(path).await.unwrap();
        assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    }
}

// ============================================================================
// Life members
// ============================================================================

#[tokio::test]
async fn test_create_member_creates_active_donor() {
    let Some((server, token)) = setup().await else {
        return;
    };

    let response = server
        .post_auth("/api/v1/members", &token, &member_body())
        .await
        .unwrap();
    let created = assert_data(response, StatusCode::CREATED).await.unwrap();
    let member_id = id_of(&created, "memberId").unwrap();
    let donor_id = id_of(&created, "donorId").unwrap();

    let response = server
        .get_auth(&format!("/api/v1/members/{member_id}"), &token)
        .await
        .unwrap();
    let member = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(member["membership_status"], "Active");
    assert_eq!(member["donor_status"], "Active");
    assert!(member["aadhar_number"].is_null());

    let response = server
        .get_auth(&format!("/api/v1/donors/{donor_id}"), &token)
        .await
        .unwrap();
    let donor = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(donor["donor_type"], "Life Member");
}

#[tokio::test]
async fn test_duplicate_member_email_leaves_no_donor_behind() {
    let Some((server, token)) = setup().await else {
        return;
    };
    let first = member_body();
    server
        .post_auth("/api/v1/members", &token, &first)
        .await
        .unwrap();

    let orphan_name = format!("Orphan{}", unique_suffix());
    let second = json!({
        "name": orphan_name,
        "email": first["email"],
        "join_date": "2024-02-01",
    });
    let response = server
        .post_auth("/api/v1/members", &token, &second)
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(message, "Member with this email already exists");

    let response = server
        .get_auth(&format!("/api/v1/donors?search={orphan_name}"), &token)
        .await
        .unwrap();
    let donors = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(donors.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_member_status_update_leaves_donor_untouched() {
    let Some((server, token)) = setup().await else {
        return;
    };
    let response = server
        .post_auth("/api/v1/members", &token, &member_body())
        .await
        .unwrap();
    let created = assert_data(response, StatusCode::CREATED).await.unwrap();
    let member_id = id_of(&created, "memberId").unwrap();
    let path = format!("/api/v1/members/{member_id}");

    let response = server
        .put_auth(&path, &token, &json!({"membership_status": "Inactive"}))
        .await
        .unwrap();
    let member = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(member["membership_status"], "Inactive");
    assert_eq!(member["donor_status"], "Active");
}

#[tokio::test]
async fn test_member_update_rejections() {
    let Some((server, token)) = setup().await else {
        return;
    };
    let response = server
        .post_auth("/api/v1/members", &token, &member_body())
        .await
        .unwrap();
    let created = assert_data(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/members/{}", id_of(&created, "memberId").unwrap());

    let response = server.put_auth(&path, &token, &json!({})).await.unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "No fields to update");

    let response = server
        .put_auth(&path, &token, &json!({"aadhar_number": "123456789012"}))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Aadhar number cannot be changed after creation");

    let response = server
        .put_auth("/api/v1/members/999999999", &token, &json!({"name": "Ghost"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_member_deactivate_and_delete() {
    let Some((server, token)) = setup().await else {
        return;
    };
    let response = server
        .post_auth("/api/v1/members", &token, &member_body())
        .await
        .unwrap();
    let created = assert_data(response, StatusCode::CREATED).await.unwrap();
    let member_id = id_of(&created, "memberId").unwrap();
    let donor_id = id_of(&created, "donorId").unwrap();
    let path = format!("/api/v1/members/{member_id}");

    let response = server
        .patch_auth(&format!("{path}/deactivate"), &token, &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let member = assert_data(server.get_auth(&path, &token).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(member["membership_status"], "Inactive");
    assert_eq!(member["donor_status"], "Inactive");

    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    let response = server
        .get_auth(&format!("/api/v1/donors/{donor_id}"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Clients
// ============================================================================

#[tokio::test]
async fn test_duplicate_client_aadhaar() {
    let Some((server, token)) = setup().await else {
        return;
    };
    let first = client_body();
    let response = server.post_auth("/api/v1/clients", &token, &first).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let mut second = client_body();
    second["aadhaar"] = first["aadhaar"].clone();
    let response = server.post_auth("/api/v1/clients", &token, &second).await.unwrap();
    let message = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(message, "Client with this Aadhaar already exists");
}

#[tokio::test]
async fn test_client_partial_update_and_dead_is_terminal() {
    let Some((server, token)) = setup().await else {
        return;
    };
    let response = server
        .post_auth("/api/v1/clients", &token, &client_body())
        .await
        .unwrap();
    let client = assert_data(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/clients/{}", id_of(&client, "id").unwrap());

    let response = server
        .put_auth(&path, &token, &json!({"city": "Nashik", "notes": "Needs follow-up"}))
        .await
        .unwrap();
    let updated = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated["city"], "Nashik");
    assert_eq!(updated["name"], client["name"]);
    assert_eq!(updated["aadhaar"], client["aadhaar"]);

    let response = server
        .put_auth(&path, &token, &json!({"aadhaar": "111122223333"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .put_auth(&path, &token, &json!({"status": "Dead"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .put_auth(&path, &token, &json!({"notes": "Late edit"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Donations
// ============================================================================

#[tokio::test]
async fn test_donation_by_name_reuses_donor() {
    let Some((server, token)) = setup().await else {
        return;
    };
    let name = donor_name();

    let response = server
        .post_auth("/api/v1/donations", &token, &donation_body(&name))
        .await
        .unwrap();
    let first = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(first["status"], "Completed");
    assert_eq!(first["donor_type"], "Individual");

    let response = server
        .post_auth("/api/v1/donations", &token, &donation_body(&name.to_uppercase()))
        .await
        .unwrap();
    let second = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(second["donor_id"], first["donor_id"]);

    let donor_id = id_of(&first, "donor_id").unwrap();
    let response = server
        .get_auth(&format!("/api/v1/donations/donor/{donor_id}"), &token)
        .await
        .unwrap();
    let donations = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(donations.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_completed_donation_cannot_become_pending() {
    let Some((server, token)) = setup().await else {
        return;
    };
    let response = server
        .post_auth("/api/v1/donations", &token, &donation_body(&donor_name()))
        .await
        .unwrap();
    let donation = assert_data(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/donations/{}", id_of(&donation, "id").unwrap());

    let response = server
        .put_auth(&path, &token, &json!({"status": "Pending"}))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Cannot change status from Completed to Pending");

    let unchanged = assert_data(server.get_auth(&path, &token).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(unchanged["status"], "Completed");
}

#[tokio::test]
async fn test_donation_validation_and_lookups() {
    let Some((server, token)) = setup().await else {
        return;
    };

    let response = server
        .post_auth("/api/v1/donations", &token, &json!({"donor_name": "X"}))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Missing required fields: amount, date, payment_mode, purpose");

    let mut body = donation_body(&donor_name());
    body["amount"] = json!(0);
    let response = server.post_auth("/api/v1/donations", &token, &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get_auth("/api/v1/donations/life-member/999999999", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get_auth("/api/v1/donations/stats?month=13", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get_auth("/api/v1/donations/stats?month=3&year=2024", &token)
        .await
        .unwrap();
    let stats = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(stats.get("monthlyAmount").is_some());
}

// ============================================================================
// Medical donations
// ============================================================================

#[tokio::test]
async fn test_equipment_drops_strength_and_expiry() {
    let Some((server, token)) = setup().await else {
        return;
    };
    let body = json!({
        "donor_name": donor_name(),
        "item_name": "Wheelchair",
        "category": "Equipment",
        "strength": "n/a",
        "quantity": 1,
        "expiry_date": "2030-01-01",
    });

    let response = server
        .post_auth("/api/v1/medical-donations", &token, &body)
        .await
        .unwrap();
    let donation = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert!(donation["strength"].is_null());
    assert!(donation["expiry_date"].is_null());
    assert_eq!(donation["status"], "pending");
}

#[tokio::test]
async fn test_medicine_requires_strength() {
    let Some((server, token)) = setup().await else {
        return;
    };
    let mut body = medicine_body(&donor_name());
    body["strength"] = json!(null);

    let response = server
        .post_auth("/api/v1/medical-donations", &token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_collected_medical_donation_is_terminal() {
    let Some((server, token)) = setup().await else {
        return;
    };
    let response = server
        .post_auth("/api/v1/medical-donations", &token, &medicine_body(&donor_name()))
        .await
        .unwrap();
    let donation = assert_data(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/medical-donations/{}", id_of(&donation, "id").unwrap());

    let response = server
        .patch_auth(&format!("{path}/status"), &token, &json!({"status": "collected"}))
        .await
        .unwrap();
    let collected = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(collected["status"], "collected");

    let response = server
        .patch_auth(&format!("{path}/status"), &token, &json!({"status": "pending"}))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Cannot change status from collected to pending");
}

#[tokio::test]
async fn test_medical_listing_endpoints() {
    let Some((server, token)) = setup().await else {
        return;
    };
    server
        .post_auth("/api/v1/medical-donations", &token, &medicine_body(&donor_name()))
        .await
        .unwrap();

    for path in [
        "/api/v1/medical-donations",
        "/api/v1/medical-donations/status/pending",
        "/api/v1/medical-donations/expiring?days=30",
        "/api/v1/medical-donations/expired",
        "/api/v1/medical-donations/stats",
    ] {
        let response = server.get_auth(path, &token).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get_auth("/api/v1/medical-donations/expiring?days=400", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get_auth("/api/v1/medical-donations/status/lost", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Distributions
// ============================================================================

#[tokio::test]
async fn test_provided_distribution_is_locked() {
    let Some((server, token)) = setup().await else {
        return;
    };
    let response = server
        .post_auth("/api/v1/clients", &token, &client_body())
        .await
        .unwrap();
    let client = assert_data(response, StatusCode::CREATED).await.unwrap();
    let client_id = id_of(&client, "id").unwrap();

    let response = server
        .post_auth("/api/v1/distributions", &token, &money_distribution_body(client_id))
        .await
        .unwrap();
    let distribution = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(distribution["status"], "pending");
    assert!(distribution["quantity"].is_null());
    let path = format!("/api/v1/distributions/{}", id_of(&distribution, "id").unwrap());

    let response = server
        .patch_auth(&format!("{path}/status"), &token, &json!({"status": "provided"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .patch_auth(&format!("{path}/status"), &token, &json!({"status": "cancelled"}))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Cannot change status from provided to cancelled");

    let response = server
        .get_auth(&format!("/api/v1/distributions/client/{client_id}"), &token)
        .await
        .unwrap();
    let rows = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_distribution_for_unknown_client() {
    let Some((server, token)) = setup().await else {
        return;
    };
    let response = server
        .post_auth(
            "/api/v1/distributions",
            &token,
            &money_distribution_body(999_999_999),
        )
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(message, "Client not found");

    let response = server
        .get_auth("/api/v1/distributions/stats", &token)
        .await
        .unwrap();
    let stats = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(stats.get("total_money_distributed").is_some());
}
