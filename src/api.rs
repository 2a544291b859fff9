use crate::config::ClientConfig;
use crate::error::{ApiError, Endpoint};
use common::model::{ErrorBody, GameSnapshot, MoveRequest};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

#[derive(Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    Accepted(GameSnapshot),
    /// The server refused the column, optionally saying why.
    Rejected(Option<String>),
}

/// The three endpoints of the game server.
pub trait GameApi {
    fn state(&self) -> LocalBoxFuture<'_, Result<GameSnapshot, ApiError>>;
    fn play(&self, column: usize) -> LocalBoxFuture<'_, Result<MoveOutcome, ApiError>>;
    fn reset(&self) -> LocalBoxFuture<'_, Result<GameSnapshot, ApiError>>;
}

pub fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode { endpoint, source })
}

pub fn interpret_move(ok: bool, body: &str) -> Result<MoveOutcome, ApiError> {
    if ok {
        decode(Endpoint::Move, body).map(MoveOutcome::Accepted)
    } else {
        let ErrorBody { error } = decode(Endpoint::Move, body)?;
        Ok(MoveOutcome::Rejected(error))
    }
}

pub struct HttpApi {
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        HttpApi { config }
    }

    fn request(&self, endpoint: Endpoint) -> Request {
        let url = self.config.url(endpoint.path());
        let request = match endpoint {
            Endpoint::State => Request::get(&url),
            Endpoint::Move | Endpoint::Reset => Request::post(&url),
        };
        if self.config.include_credentials {
            request.credentials(RequestCredentials::Include)
        } else {
            request
        }
    }

    async fn send(&self, endpoint: Endpoint, request: Request) -> Result<(bool, String), ApiError> {
        let started = js_sys::Date::now();
        let response: Response = request
            .send()
            .await
            .map_err(|err| ApiError::transport(endpoint, err))?;
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::transport(endpoint, err))?;
        tracing::debug!(
            %endpoint,
            status = response.status(),
            elapsed_ms = js_sys::Date::now() - started,
            "response received"
        );
        Ok((response.ok(), body))
    }
}

impl GameApi for HttpApi {
    fn state(&self) -> LocalBoxFuture<'_, Result<GameSnapshot, ApiError>> {
        async move {
            let (_, body) = self.send(Endpoint::State, self.request(Endpoint::State)).await?;
            decode(Endpoint::State, &body)
        }
        .boxed_local()
    }

    fn play(&self, column: usize) -> LocalBoxFuture<'_, Result<MoveOutcome, ApiError>> {
        async move {
            let request = self
                .request(Endpoint::Move)
                .json(&MoveRequest { col: column })
                .map_err(|err| ApiError::transport(Endpoint::Move, err))?;
            let (ok, body) = self.send(Endpoint::Move, request).await?;
            interpret_move(ok, &body)
        }
        .boxed_local()
    }

    // The status code is ignored here: whatever comes back is the new board.
    fn reset(&self) -> LocalBoxFuture<'_, Result<GameSnapshot, ApiError>> {
        async move {
            let (_, body) = self.send(Endpoint::Reset, self.request(Endpoint::Reset)).await?;
            decode(Endpoint::Reset, &body)
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use common::board::{Cell, COLUMNS, ROWS};

    fn snapshot_json(winner: &str) -> String {
        let mut grid = vec![vec![" "; COLUMNS]; ROWS];
        grid[5][3] = "X";
        format!(
            r#"{{"grid": {}, "valid_moves": [0, 1, 2, 3, 4, 5, 6], "winner": {}}}"#,
            serde_json::to_string(&grid).unwrap(),
            winner
        )
    }

    #[test]
    fn test_accepted_move() {
        match interpret_move(true, &snapshot_json("null")).unwrap() {
            MoveOutcome::Accepted(snapshot) => assert_eq!(snapshot.grid[5][3], Cell::Player),
            outcome => panic!("unexpected {:?}", outcome),
        }
    }

    #[test]
    fn test_rejected_move() {
        assert_eq!(
            interpret_move(false, r#"{"error": "Column full"}"#).unwrap(),
            MoveOutcome::Rejected(Some("Column full".to_string()))
        );
        assert_eq!(interpret_move(false, "{}").unwrap(), MoveOutcome::Rejected(None));
    }

    #[test]
    fn test_malformed_bodies() {
        let err = interpret_move(false, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode { endpoint: Endpoint::Move, .. }));

        let err = interpret_move(true, r#"{"grid": []}"#).unwrap_err();
        assert_eq!(err.endpoint(), Endpoint::Move);

        let err = decode::<GameSnapshot>(Endpoint::State, "").unwrap_err();
        assert!(err.to_string().starts_with("malformed response from /api/state"));
    }
}
