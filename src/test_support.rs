//! 테스트 공용 도구
//!
//! `actix-web` 서버를 `127.0.0.1:0`에 띄워 Asgardeo user-info 엔드포인트를 흉내냅니다.
//! 호출 횟수와 마지막 `Authorization` 헤더를 기록합니다.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::{header, StatusCode};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};

use crate::config::strategy_config::StrategyOptions;

pub const TENANT_PATH: &str = "/t/demoorg";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Clone)]
struct UserInfoStub {
    status: StatusCode,
    body: String,
    hits: Arc<AtomicUsize>,
    authorization: Arc<Mutex<Option<String>>>,
}

pub struct StubServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    authorization: Arc<Mutex<Option<String>>>,
    handle: ServerHandle,
}

impl StubServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.authorization.lock().unwrap().clone()
    }

    pub fn options(&self) -> StrategyOptions {
        StrategyOptions::new(
            self.base_url.clone(),
            "CLIENT_ID",
            "CLIENT_SECRET",
            "https://example.app/callback",
        )
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn user_info(req: HttpRequest, stub: web::Data<UserInfoStub>) -> HttpResponse {
    stub.hits.fetch_add(1, Ordering::SeqCst);

    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    *stub.authorization.lock().unwrap() = authorization;

    HttpResponse::build(stub.status)
        .content_type("application/json")
        .body(stub.body.clone())
}

/// user-info 스텁 서버를 띄웁니다. `#[actix_web::test]` 런타임 안에서 호출해야 합니다.
pub fn spawn_user_info_server(status: StatusCode, body: impl Into<String>) -> StubServer {
    let stub = UserInfoStub {
        status,
        body: body.into(),
        hits: Arc::new(AtomicUsize::new(0)),
        authorization: Arc::new(Mutex::new(None)),
    };
    let hits = stub.hits.clone();
    let authorization = stub.authorization.clone();
    let data = web::Data::new(stub);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route(
                &format!("{}/oauth2/userinfo", TENANT_PATH),
                web::get().to(user_info),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("failed to bind stub server");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    StubServer {
        base_url: format!("http://{}{}", addr, TENANT_PATH),
        hits,
        authorization,
        handle,
    }
}

/// 아무도 듣지 않는 로컬 주소 (연결 실패 테스트용)
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let addr = listener.local_addr().expect("no local addr");
    drop(listener);
    format!("http://{}{}", addr, TENANT_PATH)
}
