//! Test doubles shared by the component tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use url::Url;

use crate::api::NewsApi;
use crate::error::ApiError;
use crate::models::{Article, Source};

#[derive(Debug, Clone)]
struct Scripted {
    delay: Duration,
    result: Result<Vec<Article>, u16>,
}

/// In-memory [`NewsApi`] that answers from a per-path script and records
/// every path it was asked for. Unscripted paths fail with status 404.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    script: RefCell<HashMap<String, Scripted>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedApi {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, path: &str, articles: Vec<Article>) {
        self.respond_after(path, Duration::ZERO, articles);
    }

    pub fn respond_after(&self, path: &str, delay: Duration, articles: Vec<Article>) {
        self.script.borrow_mut().insert(
            path.to_string(),
            Scripted {
                delay,
                result: Ok(articles),
            },
        );
    }

    pub fn fail(&self, path: &str, status: u16) {
        self.script.borrow_mut().insert(
            path.to_string(),
            Scripted {
                delay: Duration::ZERO,
                result: Err(status),
            },
        );
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl NewsApi for ScriptedApi {
    async fn get(&self, path: &str) -> Result<Vec<Article>, ApiError> {
        self.calls.borrow_mut().push(path.to_string());
        let scripted = self.script.borrow().get(path).cloned();
        let Some(scripted) = scripted else {
            return Err(ApiError::Status(404));
        };
        if !scripted.delay.is_zero() {
            sleep(scripted.delay).await;
        }
        scripted.result.map_err(ApiError::Status)
    }
}

pub fn article(title: &str) -> Article {
    Article {
        title: title.to_string(),
        description: format!("About {}", title),
        image_url: format!("https://img.example.com/{}.jpg", title),
        source: Some(Source {
            name: "Wire".to_string(),
        }),
        published_at: "2025-05-06T14:30:00Z".to_string(),
    }
}

pub fn titles(articles: &[Article]) -> Vec<String> {
    articles.iter().map(|a| a.title.clone()).collect()
}

/// Accept one connection and never answer it. Returns the base URL to point
/// a client at; abort the handle to close the socket.
pub async fn silent_server() -> (Url, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        sleep(Duration::from_secs(30)).await;
    });
    (Url::parse(&format!("http://{}/api", addr)).unwrap(), handle)
}
