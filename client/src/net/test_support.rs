//! Scripted transport and in-memory session fixtures for service tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use super::api::AuthService;
use super::gateway::{ApiGateway, ApiRequest, ApiResponse, HttpTransport, TransportError};
use crate::state::auth_bus::AuthBus;
use crate::state::token::TokenStore;
use crate::util::storage::{KeyValueStorage, MemoryStorage};

pub(crate) const TEST_API: &str = "http://api.test";

/// Replays queued replies in order and records every request it sees.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<ApiResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub(crate) fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.replies.borrow_mut().push_back(Ok(ApiResponse { status, body: body.to_string() }));
        self
    }

    pub(crate) fn reply_raw(&self, status: u16, body: &str) -> &Self {
        self.replies.borrow_mut().push_back(Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(&self, error: TransportError) -> &Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())))
    }
}

/// Token store over fresh in-memory storage and an isolated bus.
pub(crate) fn memory_store() -> TokenStore {
    let storage: Rc<dyn KeyValueStorage> = Rc::new(MemoryStorage::new());
    TokenStore::new(Some(storage), AuthBus::new())
}

/// Service over `transport` sharing `store`.
pub(crate) fn service(transport: &ScriptedTransport, store: &TokenStore) -> AuthService<ScriptedTransport> {
    AuthService::new(ApiGateway::new(TEST_API, transport.clone()), store.clone())
}

pub(crate) fn user_json(id: &str, first: &str, last: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": format!("{}@example.com", first.to_lowercase()),
        "firstName": first,
        "lastName": last,
        "createdAt": "2024-03-05T14:07:00.000Z",
        "updatedAt": "2024-03-05T14:07:00.000Z"
    })
}
