use {
    crate::{ComError, decode, encode},
    futures_util::{SinkExt, StreamExt},
    serde::{Serialize, de::DeserializeOwned},
    std::{marker::PhantomData, net::SocketAddr},
    tokio_websockets::{ClientBuilder, MaybeTlsStream, WebSocketStream},
};

/// WebSocket client sending JSON requests of type `Req` and receiving JSON
/// responses of type `Resp`.
pub struct WsClient<Req, Resp> {
    stream: WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
    _marker: PhantomData<fn(&Req) -> Resp>,
}

impl<Req: Serialize, Resp: DeserializeOwned> WsClient<Req, Resp> {
    pub async fn connect(addr: SocketAddr) -> Result<Self, ComError> {
        Self::connect_uri(&format!("ws://{addr}")).await
    }

    /// Connect to a `ws://` URI, e.g. `ws://localhost:5000/pose`.
    pub async fn connect_uri(uri: &str) -> Result<Self, ComError> {
        let parsed_uri: http::Uri = uri.parse().map_err(|e| {
            ComError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid WebSocket URI: {e}"),
            ))
        })?;
        let (stream, _response) = ClientBuilder::from_uri(parsed_uri).connect().await?;
        Ok(Self {
            stream,
            _marker: PhantomData,
        })
    }

    pub async fn send(&mut self, value: &Req) -> Result<(), ComError> {
        self.stream.send(encode(value)?).await?;
        Ok(())
    }

    /// Receive the next response, skipping control frames.
    ///
    /// Returns `ComError::ConnectionClosed` once the server closes the
    /// connection.
    pub async fn recv(&mut self) -> Result<Resp, ComError> {
        loop {
            match self.stream.next().await {
                Some(Ok(msg)) => {
                    if let Some(result) = decode(msg) {
                        return result;
                    }
                }
                Some(Err(e)) => return Err(ComError::from(e)),
                None => return Err(ComError::ConnectionClosed),
            }
        }
    }

    /// Send one request and wait for its response.
    pub async fn request(&mut self, value: &Req) -> Result<Resp, ComError> {
        self.send(value).await?;
        self.recv().await
    }

    pub async fn close(mut self) -> Result<(), ComError> {
        self.stream.close().await?;
        Ok(())
    }
}
