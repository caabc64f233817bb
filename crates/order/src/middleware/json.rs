use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;

/// JSON body extractor that reports every decoding failure as a server error
/// carrying the decoder's message, without requiring a content type.
pub struct OrderJson<T>(pub T);

impl<S, T> FromRequest<S> for OrderJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::Internal(rejection.body_text()))?;

        let value = serde_json::from_slice::<T>(&bytes)
            .map_err(|err| HttpError::Internal(err.to_string()))?;

        Ok(Self(value))
    }
}
