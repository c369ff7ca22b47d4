//! # Typed backend client
//!
//! [`ApiClient`] joins endpoint paths to the configured base URL, attaches
//! the stored bearer token, and decodes replies into the record types in
//! [`crate::resources`]. It is generic over the [`HttpClient`] transport so
//! tests drive it with a stub while the app uses [`crate::ReqwestHttp`].
//!
//! ## Behavior
//!
//! - Collection reads accept both wire shapes the backend is known to emit:
//!   a bare JSON array and a `{ "results": [...] }` page.
//! - The `Authorization: Bearer` header is attached whenever a credential is
//!   stored. Calls without a credential still go out; screens that should
//!   not fire them are unreachable through the route guard.
//! - A 401 reply destroys the stored session before the error is returned.
//!   A 403 is an ordinary status error; the credential stays.
//! - No retries, no panics. Every failure surfaces as an [`ApiError`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use store::SessionContext;

use crate::error::ApiError;
use crate::http::{HttpClient, HttpRequest, HttpResponse, Method};
use crate::resources::{PayloadOf, RecordId, Resource};

/// Either wire shape a collection endpoint may answer with.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Paged { results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Paged { results } => results,
            ListEnvelope::Bare(items) => items,
        }
    }
}

/// Typed client over an [`HttpClient`] transport.
///
/// Cloning is cheap; clones share the session handle.
#[derive(Clone)]
pub struct ApiClient<H: HttpClient> {
    base_url: String,
    session: SessionContext,
    http: H,
}

impl<H: HttpClient> ApiClient<H> {
    pub fn new(base_url: impl Into<String>, session: SessionContext, http: H) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            session,
            http,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn bearer(&self) -> Option<String> {
        self.session.credential().map(|c| c.access)
    }

    /// Issue one request and classify the outcome.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        bearer: Option<String>,
        body: Option<Value>,
    ) -> Result<HttpResponse, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .send(HttpRequest {
                method,
                url: url.clone(),
                bearer,
                body,
            })
            .await?;

        if response.status == 401 {
            // The backend no longer honors this credential; the next guard
            // evaluation sends the user back to login.
            tracing::warn!(%url, "credential rejected, destroying session");
            self.session.clear();
        }
        if !response.is_success() {
            tracing::warn!(?method, %url, status = response.status, "backend call failed");
            return Err(ApiError::Status {
                code: response.status,
                detail: response.body,
            });
        }
        Ok(response)
    }

    fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn encode(payload: &impl serde::Serialize) -> Result<Value, ApiError> {
        serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET a collection.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        self.list_with(R::ENDPOINT, self.bearer()).await
    }

    /// GET a collection with an explicit bearer. Login uses this for the
    /// menu fetch, before any session exists to read a token from.
    pub(crate) async fn list_with<R: Resource>(
        &self,
        path: &str,
        bearer: Option<String>,
    ) -> Result<Vec<R>, ApiError> {
        let response = self.request(Method::Get, path, bearer, None).await?;
        let envelope: ListEnvelope<R> = Self::decode(&response)?;
        Ok(envelope.into_vec())
    }

    /// POST a new record to its collection.
    pub async fn create<R: Resource>(&self, payload: &PayloadOf<R>) -> Result<(), ApiError> {
        let body = Self::encode(payload)?;
        self.request(Method::Post, R::ENDPOINT, self.bearer(), Some(body))
            .await?;
        Ok(())
    }

    /// PUT a full update to one record.
    pub async fn update<R: Resource>(
        &self,
        id: RecordId,
        payload: &PayloadOf<R>,
    ) -> Result<(), ApiError> {
        let body = Self::encode(payload)?;
        let path = format!("{}{}/", R::ENDPOINT, id);
        self.request(Method::Put, &path, self.bearer(), Some(body))
            .await?;
        Ok(())
    }

    /// DELETE one record.
    pub async fn delete<R: Resource>(&self, id: RecordId) -> Result<(), ApiError> {
        let path = format!("{}{}/", R::ENDPOINT, id);
        self.request(Method::Delete, &path, self.bearer(), None)
            .await?;
        Ok(())
    }

    /// GET a single JSON document, e.g. the dashboard aggregate.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::Get, path, self.bearer(), None).await?;
        Self::decode(&response)
    }

    /// POST a JSON body and decode a typed reply.
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Result<T, ApiError> {
        let response = self
            .request(Method::Post, path, self.bearer(), Some(body))
            .await?;
        Self::decode(&response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use store::{Credential, MemoryStore, Session, UserProfile};

    use super::*;
    use crate::resources::Category;
    use crate::testing::StubHttp;

    fn signed_in_session() -> SessionContext {
        let session = SessionContext::new(Arc::new(MemoryStore::new()));
        session.set_session(Session {
            credential: Credential {
                access: "tok".to_string(),
                refresh: None,
            },
            profile: UserProfile {
                username: "alice".to_string(),
                email: String::new(),
                role: None,
            },
            menu: vec![],
        });
        session
    }

    fn client(stub: &StubHttp, session: SessionContext) -> ApiClient<StubHttp> {
        ApiClient::new("http://backend.test/", session, stub.clone())
    }

    #[tokio::test]
    async fn test_list_accepts_bare_array() {
        let stub = StubHttp::new();
        stub.reply(200, r#"[{"id":1,"name":"Food","icon":"fa-utensils"}]"#);
        let client = client(&stub, signed_in_session());

        let categories: Vec<Category> = client.list().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Food");
    }

    #[tokio::test]
    async fn test_list_accepts_paged_envelope() {
        let stub = StubHttp::new();
        stub.reply(
            200,
            r#"{"count":1,"results":[{"id":1,"name":"Food","icon":"fa-utensils"}]}"#,
        );
        let client = client(&stub, signed_in_session());

        let categories: Vec<Category> = client.list().await.unwrap();
        assert_eq!(categories.len(), 1);
    }

    #[tokio::test]
    async fn test_bearer_attached_when_signed_in() {
        let stub = StubHttp::new();
        stub.reply(200, "[]");
        let client = client(&stub, signed_in_session());

        let _: Vec<Category> = client.list().await.unwrap();

        let requests = stub.requests();
        assert_eq!(requests[0].bearer.as_deref(), Some("tok"));
        assert_eq!(requests[0].url, "http://backend.test/api/categories/");
    }

    #[tokio::test]
    async fn test_no_bearer_when_signed_out() {
        let stub = StubHttp::new();
        stub.reply(200, "[]");
        let session = SessionContext::new(Arc::new(MemoryStore::new()));
        let client = client(&stub, session);

        let _: Vec<Category> = client.list().await.unwrap();
        assert!(stub.requests()[0].bearer.is_none());
    }

    #[tokio::test]
    async fn test_401_destroys_session() {
        let stub = StubHttp::new();
        stub.reply(401, r#"{"detail":"token expired"}"#);
        let session = signed_in_session();
        let client = client(&stub, session.clone());

        let err = client.list::<Category>().await.unwrap_err();
        assert_eq!(err.status_code(), Some(401));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_403_keeps_session() {
        let stub = StubHttp::new();
        stub.reply(403, r#"{"detail":"forbidden"}"#);
        let session = signed_in_session();
        let client = client(&stub, session.clone());

        let err = client.list::<Category>().await.unwrap_err();
        assert_eq!(err.status_code(), Some(403));
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_update_and_delete_address_the_record() {
        let stub = StubHttp::new();
        stub.reply(200, "{}");
        stub.reply(204, "");
        let client = client(&stub, signed_in_session());

        let payload = crate::resources::CategoryPayload {
            name: "Groceries".to_string(),
            icon: "fa-cart-shopping".to_string(),
        };
        client.update::<Category>(RecordId(5), &payload).await.unwrap();
        client.delete::<Category>(RecordId(5)).await.unwrap();

        let requests = stub.requests();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].url, "http://backend.test/api/categories/5/");
        assert_eq!(requests[1].method, Method::Delete);
        assert_eq!(requests[1].url, "http://backend.test/api/categories/5/");
    }

    #[tokio::test]
    async fn test_network_error_passes_through() {
        let stub = StubHttp::new();
        stub.reply_network_error("connection refused");
        let client = client(&stub, signed_in_session());

        let err = client.list::<Category>().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let stub = StubHttp::new();
        stub.reply(200, "not json");
        let client = client(&stub, signed_in_session());

        let err = client.list::<Category>().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
