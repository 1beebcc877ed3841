pub mod blog;
pub mod product;

use axum::http::StatusCode;

use crate::shared::remote_api::RemoteApiError;

/// Ошибка удалённого API -> HTTP-статус для страницы
pub(crate) fn status_for(err: &RemoteApiError) -> StatusCode {
    match err {
        RemoteApiError::NotFound => StatusCode::NOT_FOUND,
        RemoteApiError::Network(_) | RemoteApiError::Status(_) | RemoteApiError::Decode(_) => {
            tracing::error!("Remote API failure: {}", err);
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&RemoteApiError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&RemoteApiError::Status(500)),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&RemoteApiError::Network("timeout".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&RemoteApiError::Decode("eof".into())),
            StatusCode::BAD_GATEWAY
        );
    }
}
