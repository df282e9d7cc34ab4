//! HTTP-level integration tests for the `/exchanges` endpoints: proposal,
//! content edits, status transitions, withdrawal and the filtered listing,
//! ending with one match-to-acceptance flow across the whole surface.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get, patch_json_auth, post_json, post_json_auth, put_json_auth,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Two registered users and a skill to exchange over. Alice proposes, Bob
/// receives and owns the skill.
struct Parties {
    alice_id: i64,
    alice_token: String,
    bob_id: i64,
    bob_token: String,
    skill_id: i64,
}

/// Register a user via the API and return its id plus an access token.
async fn register_user(pool: &PgPool, username: &str) -> (i64, String) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/users",
        serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id = json["id"].as_i64().unwrap();
    (id, common::auth_token(id))
}

async fn setup_parties(pool: &PgPool) -> Parties {
    let (alice_id, alice_token) = register_user(pool, "alice").await;
    let (bob_id, bob_token) = register_user(pool, "bob").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/skills",
        serde_json::json!({
            "title": "Guitar",
            "description": "Acoustic guitar from scratch",
            "category": "music",
            "level": "advanced",
            "can_teach": true,
        }),
        &bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let skill = body_json(response).await;

    Parties {
        alice_id,
        alice_token,
        bob_id,
        bob_token,
        skill_id: skill["id"].as_i64().unwrap(),
    }
}

/// Propose a pending exchange from Alice to Bob and return its id.
async fn propose(pool: &PgPool, parties: &Parties, hours: i32) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/exchanges",
        serde_json::json!({
            "receiver_id": parties.bob_id,
            "skill_id": parties.skill_id,
            "message": "Guitar lessons for cooking lessons?",
            "hours_proposed": hours,
        }),
        &parties.alice_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["id"].as_i64().unwrap()
}

/// Settle the exchange with the given status as Bob.
async fn settle(pool: &PgPool, parties: &Parties, exchange_id: i64, status: &str) {
    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/exchanges/{exchange_id}/status"),
        serde_json::json!({ "status": status }),
        &parties.bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Proposal
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_propose_requires_auth(pool: PgPool) {
    let parties = setup_parties(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/exchanges",
        serde_json::json!({
            "receiver_id": parties.bob_id,
            "skill_id": parties.skill_id,
            "message": "Guitar lessons for cooking lessons?",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// The proposal starts out pending no matter what the client sends, and
/// unspecified hours default to 1.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_propose_returns_201_and_forces_pending(pool: PgPool) {
    let parties = setup_parties(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/exchanges",
        serde_json::json!({
            "receiver_id": parties.bob_id,
            "skill_id": parties.skill_id,
            "message": "Guitar lessons for cooking lessons?",
            "status": "completed",
        }),
        &parties.alice_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "pending");
    assert_eq!(json["hours_proposed"], 1);
    assert_eq!(json["sender_id"], parties.alice_id);
    assert_eq!(json["receiver_id"], parties.bob_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_propose_to_self_returns_400(pool: PgPool) {
    let parties = setup_parties(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/exchanges",
        serde_json::json!({
            "receiver_id": parties.alice_id,
            "skill_id": parties.skill_id,
            "message": "Teaching myself, apparently",
        }),
        &parties.alice_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "An exchange cannot be proposed to yourself");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_propose_to_missing_receiver_returns_400(pool: PgPool) {
    let parties = setup_parties(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/exchanges",
        serde_json::json!({
            "receiver_id": 999999,
            "skill_id": parties.skill_id,
            "message": "Anyone out there?",
        }),
        &parties.alice_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Receiver with id 999999 does not exist");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_propose_missing_skill_returns_400(pool: PgPool) {
    let parties = setup_parties(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/exchanges",
        serde_json::json!({
            "receiver_id": parties.bob_id,
            "skill_id": 999999,
            "message": "About that skill you never listed",
        }),
        &parties.alice_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Skill with id 999999 does not exist");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_propose_short_message_returns_400(pool: PgPool) {
    let parties = setup_parties(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/exchanges",
        serde_json::json!({
            "receiver_id": parties.bob_id,
            "skill_id": parties.skill_id,
            "message": "hey",
        }),
        &parties.alice_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_propose_hours_out_of_range_returns_400(pool: PgPool) {
    let parties = setup_parties(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/exchanges",
        serde_json::json!({
            "receiver_id": parties.bob_id,
            "skill_id": parties.skill_id,
            "message": "A whole curriculum",
            "hours_proposed": 101,
        }),
        &parties.alice_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_exchange_detail_includes_names(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    let exchange_id = propose(&pool, &parties, 3).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/exchanges/{exchange_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["sender_username"], "alice");
    assert_eq!(json["receiver_username"], "bob");
    assert_eq!(json["skill_title"], "Guitar");
    assert_eq!(json["hours_proposed"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_exchange_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/exchanges/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Exchange with id 999999 not found");
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_receiver_accepts_pending(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    let exchange_id = propose(&pool, &parties, 2).await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/exchanges/{exchange_id}/status"),
        serde_json::json!({ "status": "accepted" }),
        &parties.bob_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "accepted");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sender_cannot_transition(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    let exchange_id = propose(&pool, &parties, 2).await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/exchanges/{exchange_id}/status"),
        serde_json::json!({ "status": "accepted" }),
        &parties.alice_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stranger_cannot_transition(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    let exchange_id = propose(&pool, &parties, 2).await;
    let (_carol_id, carol_token) = register_user(&pool, "carol").await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/exchanges/{exchange_id}/status"),
        serde_json::json!({ "status": "rejected" }),
        &carol_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Settled statuses are final; a second transition conflicts.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settled_exchange_cannot_transition_again(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    let exchange_id = propose(&pool, &parties, 2).await;
    settle(&pool, &parties, exchange_id, "accepted").await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/exchanges/{exchange_id}/status"),
        serde_json::json!({ "status": "completed" }),
        &parties.bob_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_status_returns_400(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    let exchange_id = propose(&pool, &parties, 2).await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/exchanges/{exchange_id}/status"),
        serde_json::json!({ "status": "done" }),
        &parties.bob_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_return_to_pending_returns_400(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    let exchange_id = propose(&pool, &parties, 2).await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/exchanges/{exchange_id}/status"),
        serde_json::json!({ "status": "pending" }),
        &parties.bob_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Content edits
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sender_edits_pending_content(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    let exchange_id = propose(&pool, &parties, 2).await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/exchanges/{exchange_id}"),
        serde_json::json!({ "message": "Make it three lessons?", "hours_proposed": 3 }),
        &parties.alice_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Make it three lessons?");
    assert_eq!(json["hours_proposed"], 3);
    assert_eq!(json["status"], "pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_receiver_cannot_edit_content(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    let exchange_id = propose(&pool, &parties, 2).await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/exchanges/{exchange_id}"),
        serde_json::json!({ "hours_proposed": 50 }),
        &parties.bob_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Once settled, even the sender can no longer edit.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_after_settle_returns_409(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    let exchange_id = propose(&pool, &parties, 2).await;
    settle(&pool, &parties, exchange_id, "accepted").await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/exchanges/{exchange_id}"),
        serde_json::json!({ "hours_proposed": 3 }),
        &parties.alice_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Only pending exchanges can be modified");
}

// ---------------------------------------------------------------------------
// Withdrawal
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sender_withdraws_pending(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    let exchange_id = propose(&pool, &parties, 2).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/exchanges/{exchange_id}"),
        &parties.alice_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The row is gone now.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/exchanges/{exchange_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_receiver_cannot_withdraw(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    let exchange_id = propose(&pool, &parties, 2).await;

    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/exchanges/{exchange_id}"),
        &parties.bob_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_withdraw_settled_returns_409(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    let exchange_id = propose(&pool, &parties, 2).await;
    settle(&pool, &parties, exchange_id, "rejected").await;

    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/exchanges/{exchange_id}"),
        &parties.alice_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_by_status(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    propose(&pool, &parties, 2).await;
    let accepted_id = propose(&pool, &parties, 4).await;
    settle(&pool, &parties, accepted_id, "accepted").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/exchanges?status=accepted").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let exchanges = json.as_array().unwrap();
    assert_eq!(exchanges.len(), 1);
    assert_eq!(exchanges[0]["id"], accepted_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_unknown_status_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/exchanges?status=done").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Known sort fields apply; unknown ones degrade to newest-first instead
/// of erroring.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_sorting_and_fallback(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    let first = propose(&pool, &parties, 2).await;
    let second = propose(&pool, &parties, 9).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/exchanges?sort_by=hours_proposed&sort_order=asc").await;
    let json = body_json(response).await;
    assert_eq!(json[0]["id"], first);
    assert_eq!(json[1]["id"], second);

    let app = common::build_test_app(pool);
    let response = get(app, "/exchanges?sort_by=evil%3B%20DROP%20TABLE%20exchanges").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["id"], second);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_pagination(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    for hours in [2, 3, 4] {
        propose(&pool, &parties, hours).await;
    }

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/exchanges?limit=2").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool);
    let response = get(app, "/exchanges?skip=2").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Per-user listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_user_exchanges_covers_both_directions(pool: PgPool) {
    let parties = setup_parties(&pool).await;
    propose(&pool, &parties, 2).await;

    // Bob proposes one back, so Alice appears as receiver too.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/exchanges",
        serde_json::json!({
            "receiver_id": parties.alice_id,
            "skill_id": parties.skill_id,
            "message": "Counter-offer: cooking first",
        }),
        &parties.bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/exchanges/user/{}", parties.alice_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    // An uninvolved user has an empty listing.
    let (carol_id, _carol_token) = register_user(&pool, "carol").await;
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/exchanges/user/{carol_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_user_exchanges_for_nonexistent_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/exchanges/user/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// End-to-end flow
// ---------------------------------------------------------------------------

/// Two users match on a skill, one proposes, the receiver accepts, and the
/// reports pick the exchange up. Walks the whole surface in one sitting.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_match_proposal_acceptance_flow(pool: PgPool) {
    let (alice_id, alice_token) = register_user(&pool, "alice").await;
    let (_bob_id, bob_token) = register_user(&pool, "bob").await;
    let (_carol_id, carol_token) = register_user(&pool, "carol").await;

    // Alice can teach guitar; Bob wants to learn it.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/skills",
        serde_json::json!({
            "title": "Guitar",
            "description": "Fingerstyle and basic theory",
            "category": "music",
            "level": "advanced",
            "can_teach": true,
        }),
        &alice_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let alice_skill = body_json(response).await;
    let alice_skill_id = alice_skill["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/skills",
        serde_json::json!({
            "title": "guitar",
            "description": "Always wanted to pick one up",
            "category": "music",
            "level": "beginner",
            "want_learn": true,
        }),
        &bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let bob_skill = body_json(response).await;
    let bob_skill_id = bob_skill["id"].as_i64().unwrap();

    // Each side sees the other in its match report.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/skills/{alice_skill_id}/matches")).await).await;
    assert_eq!(json["matches_count"], 1);
    assert_eq!(json["matches"][0]["match_type"], "student");
    assert_eq!(json["matches"][0]["skill"]["id"], bob_skill_id);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/skills/{bob_skill_id}/matches")).await).await;
    assert_eq!(json["matches"][0]["match_type"], "teacher");
    assert_eq!(json["matches"][0]["skill"]["id"], alice_skill_id);

    // Bob proposes to Alice over her skill.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/exchanges",
        serde_json::json!({
            "receiver_id": alice_id,
            "skill_id": alice_skill_id,
            "message": "Three guitar lessons for three of anything you like?",
            "hours_proposed": 3,
        }),
        &bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let exchange = body_json(response).await;
    assert_eq!(exchange["status"], "pending");
    let exchange_id = exchange["id"].as_i64().unwrap();

    // Neither an onlooker nor the sender may settle it.
    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/exchanges/{exchange_id}/status"),
        serde_json::json!({ "status": "accepted" }),
        &carol_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/exchanges/{exchange_id}/status"),
        serde_json::json!({ "status": "accepted" }),
        &bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Alice accepts, which also freezes the content.
    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/exchanges/{exchange_id}/status"),
        serde_json::json!({ "status": "accepted" }),
        &alice_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "accepted");

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/exchanges/{exchange_id}"),
        serde_json::json!({ "hours_proposed": 5 }),
        &bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The reports see one guitar exchange; accepted still counts as
    // unfinished for the success rate.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/stats/top-skills").await).await;
    assert_eq!(json["top_skills"][0]["title"], "Guitar");
    assert_eq!(json["top_skills"][0]["exchange_count"], 1);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/stats/active-users").await).await;
    assert_eq!(json["active_users"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/stats/exchange-success-rate").await).await;
    assert_eq!(json["total_exchanges"], 1);
    assert_eq!(json["completed_exchanges"], 0);
    assert_eq!(json["success_rate"], 0.0);
}
