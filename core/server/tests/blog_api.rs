/* Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

mod common;

use common::{default_test_config, start_test_server, start_test_server_with};
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::time::Duration;

#[tokio::test]
async fn blog_lifecycle_should_keep_owner_and_set_consistent() {
    let server = start_test_server().await;

    // Register and log in; both carry a usable token.
    let register = server.register("alice", "Alice Doe", "secretpw").await;
    assert_eq!(register.status(), StatusCode::CREATED);
    let login = server.login("alice", "secretpw").await;
    assert_eq!(login.status(), StatusCode::OK);
    let login_body: Value = login.json().await.unwrap();
    let token = login_body["token"].as_str().unwrap().to_string();

    // Create.
    let created = server.create_blog(&token, "X", "http://x").await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let blog: Value = created.json().await.unwrap();
    let blog_id = blog["id"].as_str().unwrap().to_string();
    assert_eq!(blog["user"]["username"], "alice");
    assert_eq!(blog["likes"], 0);

    // The owner's set contains the new id.
    let users = server.get_users().await;
    let alice = &users.as_array().unwrap()[0];
    assert_eq!(alice["blogs"].as_array().unwrap().len(), 1);
    assert_eq!(alice["blogs"][0]["id"], blog_id.as_str());

    // Delete.
    let deleted = server
        .client
        .delete(server.url(&format!("/blogs/{blog_id}")))
        .header("Authorization", format!("Bearer {token}"))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    // Gone from both sides.
    let blogs = server.get_blogs().await;
    assert!(blogs.as_array().unwrap().is_empty());
    let users = server.get_users().await;
    let alice = &users.as_array().unwrap()[0];
    assert!(alice["blogs"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn non_owner_should_not_be_able_to_delete_a_blog() {
    let server = start_test_server().await;
    let owner_token = server.register_and_get_token("alice", "secretpw").await;
    let other_token = server.register_and_get_token("mallory", "secretpw").await;

    let created = server.create_blog(&owner_token, "X", "http://x").await;
    let blog: Value = created.json().await.unwrap();
    let blog_id = blog["id"].as_str().unwrap();

    let response = server
        .client
        .delete(server.url(&format!("/blogs/{blog_id}")))
        .header("Authorization", format!("Bearer {other_token}"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let blogs = server.get_blogs().await;
    assert_eq!(blogs.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_blog_without_token_should_fail_and_leave_no_trace() {
    let server = start_test_server().await;
    server.register("alice", "Alice Doe", "secretpw").await;

    let response = server
        .client
        .post(server.url("/blogs"))
        .json(&json!({ "title": "X", "url": "http://x" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(server.get_blogs().await.as_array().unwrap().is_empty());
    let users = server.get_users().await;
    let alice = &users.as_array().unwrap()[0];
    assert!(alice["blogs"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn tampered_token_should_be_rejected_on_every_route() {
    let server = start_test_server().await;
    let token = server.register_and_get_token("alice", "secretpw").await;
    let tampered = format!("{token}x");

    let response = server.create_blog(&tampered, "X", "http://x").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A non-bearer scheme means no token at all, which is anonymous; the
    // mutating route then rejects for lack of authentication.
    let basic = server
        .client
        .post(server.url("/blogs"))
        .header("Authorization", format!("Basic {token}"))
        .json(&json!({ "title": "X", "url": "http://x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(basic.status(), StatusCode::UNAUTHORIZED);

    assert!(server.get_blogs().await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn expired_token_should_be_rejected() {
    let mut config = default_test_config();
    config.http.jwt.token_lifetime_secs = 0;
    let server = start_test_server_with(config).await;
    let token = server.register_and_get_token("alice", "secretpw").await;

    tokio::time::sleep(Duration::from_millis(1100)).await;

    let response = server.create_blog(&token, "X", "http://x").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_blog_without_title_or_url_should_fail() {
    let server = start_test_server().await;
    let token = server.register_and_get_token("alice", "secretpw").await;

    let missing_title = server
        .client
        .post(server.url("/blogs"))
        .header("Authorization", format!("Bearer {token}"))
        .json(&json!({ "url": "http://x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_title.status(), StatusCode::BAD_REQUEST);

    let missing_url = server
        .client
        .post(server.url("/blogs"))
        .header("Authorization", format!("Bearer {token}"))
        .json(&json!({ "title": "X" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_url.status(), StatusCode::BAD_REQUEST);

    assert!(server.get_blogs().await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn owner_should_be_able_to_edit_fields_but_not_ownership() {
    let server = start_test_server().await;
    let token = server.register_and_get_token("alice", "secretpw").await;
    let created = server.create_blog(&token, "X", "http://x").await;
    let blog: Value = created.json().await.unwrap();
    let blog_id = blog["id"].as_str().unwrap();

    let response = server
        .client
        .put(server.url(&format!("/blogs/{blog_id}")))
        .header("Authorization", format!("Bearer {token}"))
        .json(&json!({ "title": "X", "url": "http://x", "likes": 7 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["likes"], 7);
    assert_eq!(updated["user"]["username"], "alice");
}

#[tokio::test]
async fn edit_should_enforce_the_same_ownership_rule_as_delete() {
    let server = start_test_server().await;
    let owner_token = server.register_and_get_token("alice", "secretpw").await;
    let other_token = server.register_and_get_token("mallory", "secretpw").await;
    let created = server.create_blog(&owner_token, "X", "http://x").await;
    let blog: Value = created.json().await.unwrap();
    let blog_id = blog["id"].as_str().unwrap();

    let response = server
        .client
        .put(server.url(&format!("/blogs/{blog_id}")))
        .header("Authorization", format!("Bearer {other_token}"))
        .json(&json!({ "title": "Hijacked", "url": "http://x", "likes": 0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let blogs = server.get_blogs().await;
    assert_eq!(blogs[0]["title"], "X");
}

#[tokio::test]
async fn unknown_and_malformed_blog_ids_should_be_reported_distinctly() {
    let server = start_test_server().await;
    let token = server.register_and_get_token("alice", "secretpw").await;
    let unknown_id = uuid::Uuid::now_v7();

    let unknown = server
        .client
        .delete(server.url(&format!("/blogs/{unknown_id}")))
        .header("Authorization", format!("Bearer {token}"))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

    let malformed = server
        .client
        .delete(server.url("/blogs/not-an-id"))
        .header("Authorization", format!("Bearer {token}"))
        .send()
        .await
        .unwrap();
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

    let put_unknown = server
        .client
        .put(server.url(&format!("/blogs/{unknown_id}")))
        .header("Authorization", format!("Bearer {token}"))
        .json(&json!({ "title": "X", "url": "http://x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(put_unknown.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_blogs_should_embed_owner_summaries() {
    let server = start_test_server().await;
    let token = server.register_and_get_token("alice", "secretpw").await;
    server.create_blog(&token, "X", "http://x").await;

    let blogs = server.get_blogs().await;

    let blog = &blogs.as_array().unwrap()[0];
    assert_eq!(blog["user"]["username"], "alice");
    assert_eq!(blog["user"]["name"], "Test User");
    let raw = blogs.to_string();
    assert!(!raw.contains("password"));
    assert!(!raw.contains("hash"));
}

#[tokio::test]
async fn stats_should_aggregate_both_collections() {
    let server = start_test_server().await;
    let token = server.register_and_get_token("alice", "secretpw").await;
    let created = server.create_blog(&token, "X", "http://x").await;
    let blog: Value = created.json().await.unwrap();
    let blog_id = blog["id"].as_str().unwrap();
    server
        .client
        .put(server.url(&format!("/blogs/{blog_id}")))
        .header("Authorization", format!("Bearer {token}"))
        .json(&json!({ "title": "X", "url": "http://x", "likes": 12 }))
        .send()
        .await
        .unwrap();

    let stats: Value = server
        .client
        .get(server.url("/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(stats["users_count"], 1);
    assert_eq!(stats["blogs_count"], 1);
    assert_eq!(stats["total_likes"], 12);
    assert_eq!(stats["favorite_blog"]["title"], "X");
}
