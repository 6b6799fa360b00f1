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

#![allow(dead_code)]

use serde_json::{Value, json};
use server::configs::server::ServerConfig;
use server::http::http_server;
use server::storage::InMemoryStore;
use server::system::System;
use std::net::SocketAddr;
use std::sync::Arc;

pub const FIXTURE_SECRET: &str = "top_secret$ecretaBc&123!@#$%";

pub struct TestServer {
    pub address: SocketAddr,
    pub client: reqwest::Client,
}

pub fn default_test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.http.address = "127.0.0.1:0".to_string();
    config.http.jwt.secret = FIXTURE_SECRET.to_string();
    config.testing.enabled = true;
    config
}

pub async fn start_test_server() -> TestServer {
    start_test_server_with(default_test_config()).await
}

pub async fn start_test_server_with(config: ServerConfig) -> TestServer {
    let system = Arc::new(System::new(Arc::new(InMemoryStore::new())));
    let address = http_server::start(&config, system)
        .await
        .expect("test server should start");
    TestServer {
        address,
        client: reqwest::Client::new(),
    }
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.address)
    }

    pub async fn register(&self, username: &str, name: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/users"))
            .json(&json!({ "username": username, "name": name, "password": password }))
            .send()
            .await
            .expect("register request should be sent")
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("login request should be sent")
    }

    /// Registers a user and returns the access token from the response.
    pub async fn register_and_get_token(&self, username: &str, password: &str) -> String {
        let response = self.register(username, "Test User", password).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        let body: Value = response.json().await.expect("register response body");
        body["token"]
            .as_str()
            .expect("register response should carry a token")
            .to_string()
    }

    pub async fn create_blog(&self, token: &str, title: &str, url: &str) -> reqwest::Response {
        self.client
            .post(self.url("/blogs"))
            .header("Authorization", format!("Bearer {token}"))
            .json(&json!({ "title": title, "url": url, "author": "Test Author" }))
            .send()
            .await
            .expect("create blog request should be sent")
    }

    pub async fn get_blogs(&self) -> Value {
        self.client
            .get(self.url("/blogs"))
            .send()
            .await
            .expect("get blogs request should be sent")
            .json()
            .await
            .expect("blogs response body")
    }

    pub async fn get_users(&self) -> Value {
        self.client
            .get(self.url("/users"))
            .send()
            .await
            .expect("get users request should be sent")
            .json()
            .await
            .expect("users response body")
    }
}
