#![allow(dead_code)]

use std::{collections::VecDeque, sync::Arc, time::Duration};

use async_trait::async_trait;
use parking_lot::Mutex;
use quadbeat::{
    backend::{
        normalize::RawResponse,
        request::HttpRequestSpec,
        transport::{Transport, TransportError},
    },
    config::Settings,
    controller::{InteractionController, OrderingPolicy},
    session::SessionId,
    types::Song,
};
use serde_json::Value;

type Observer = Box<dyn Fn(&HttpRequestSpec) + Send + Sync>;
type Reply = (Option<Duration>, Result<RawResponse, TransportError>);

/// Replays queued replies in order and records every request it was sent.
/// Replies are handed out in the order requests arrive, a delayed reply
/// holds only its own request.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<HttpRequestSpec>>,
    observer: Mutex<Option<Observer>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: Value) {
        self.replies
            .lock()
            .push_back((None, Ok(RawResponse::new(status, body.to_string()))));
    }

    /// Like [`reply`](Self::reply), answered only after `millis`.
    pub fn reply_after(&self, millis: u64, status: u16, body: Value) {
        self.replies.lock().push_back((
            Some(Duration::from_millis(millis)),
            Ok(RawResponse::new(status, body.to_string())),
        ));
    }

    pub fn reply_text(&self, status: u16, body: &str) {
        self.replies
            .lock()
            .push_back((None, Ok(RawResponse::new(status, body))));
    }

    pub fn fail(&self, err: TransportError) {
        self.replies.lock().push_back((None, Err(err)));
    }

    /// Runs `f` with each request before its reply is handed out.
    pub fn observe(&self, f: impl Fn(&HttpRequestSpec) + Send + Sync + 'static) {
        *self.observer.lock() = Some(Box::new(f));
    }

    pub fn requests(&self) -> Vec<HttpRequestSpec> {
        self.requests.lock().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<HttpRequestSpec> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &HttpRequestSpec) -> Result<RawResponse, TransportError> {
        self.requests.lock().push(request.clone());
        if let Some(observer) = self.observer.lock().as_ref() {
            observer(request);
        }
        let next = self.replies.lock().pop_front();
        match next {
            Some((delay, reply)) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                reply
            }
            None => Err(TransportError::Network("no scripted reply".to_string())),
        }
    }
}

pub fn settings() -> Settings {
    Settings {
        api_url: "http://backend.test".to_string(),
        request_timeout: None,
        moods: vec![
            "happy".to_string(),
            "sad".to_string(),
            "Energetic".to_string(),
        ],
        ordering: OrderingPolicy::LastResolved,
    }
}

pub fn controller(transport: &Arc<ScriptedTransport>) -> InteractionController {
    let transport: Arc<dyn Transport> = transport.clone();
    InteractionController::new(transport, SessionId::new("user_test12345"), &settings())
}

pub fn song(id: &str, title: &str) -> Song {
    Song {
        title: Some(title.to_string()),
        artist: Some("Artist".to_string()),
        ..Song::new(id)
    }
}
