use {
    crate::{ComError, decode, encode},
    base::log,
    futures_util::{SinkExt, StreamExt},
    serde::{Serialize, de::DeserializeOwned},
    std::{collections::HashMap, marker::PhantomData, net::SocketAddr, sync::Arc},
    tokio::{
        net::{TcpListener, TcpStream, ToSocketAddrs},
        sync::{RwLock, mpsc},
        task::JoinHandle,
    },
    tokio_websockets::{Message, ServerBuilder, WebSocketStream},
};

type WsSink = futures_util::stream::SplitSink<WebSocketStream<TcpStream>, Message>;
type Clients = Arc<RwLock<HashMap<SocketAddr, WsSink>>>;

/// Something that happened on one client connection.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent<T> {
    Connected(SocketAddr),
    Message(SocketAddr, T),
    Disconnected(SocketAddr),
}

/// WebSocket server exchanging JSON messages: requests of type `Req` come in
/// from any client, responses of type `Resp` go back to a chosen client.
pub struct WsServer<Req, Resp> {
    clients: Clients,
    rx: mpsc::Receiver<ServerEvent<Req>>,
    accept_task: JoinHandle<()>,
    local_addr: SocketAddr,
    _marker: PhantomData<fn(&Resp)>,
}

impl<Req, Resp> WsServer<Req, Resp>
where
    Req: DeserializeOwned + Send + 'static,
    Resp: Serialize,
{
    /// Bind a TCP listener and start accepting WebSocket connections.
    ///
    /// A background task performs the handshake for each connection and
    /// spawns a reader task per client. Malformed messages are logged and
    /// skipped without closing the connection.
    pub async fn bind(addr: impl ToSocketAddrs) -> Result<Self, ComError> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        let clients: Clients = Arc::new(RwLock::new(HashMap::new()));
        let (tx, rx) = mpsc::channel(256);

        let accept_task = tokio::spawn(accept_loop(listener, clients.clone(), tx));

        Ok(Self {
            clients,
            rx,
            accept_task,
            local_addr,
            _marker: PhantomData,
        })
    }

    /// Next connection event from any client.
    ///
    /// Each client has its own reader task, so a slow client never blocks the
    /// others.
    pub async fn recv(&mut self) -> Result<ServerEvent<Req>, ComError> {
        self.rx.recv().await.ok_or(ComError::ConnectionClosed)
    }

    /// Next request, skipping connect and disconnect events.
    pub async fn recv_message(&mut self) -> Result<(SocketAddr, Req), ComError> {
        loop {
            if let ServerEvent::Message(addr, value) = self.recv().await? {
                return Ok((addr, value));
            }
        }
    }

    /// Send a response to one client.
    ///
    /// A client that fails to receive is dropped from the client map.
    pub async fn reply(&self, addr: SocketAddr, value: &Resp) -> Result<(), ComError> {
        let msg = encode(value)?;
        let mut lock = self.clients.write().await;
        let writer = lock.get_mut(&addr).ok_or(ComError::UnknownClient(addr))?;
        if let Err(e) = writer.send(msg).await {
            log::warn!("failed to send to {addr}: {e}");
            lock.remove(&addr);
            return Err(e.into());
        }
        Ok(())
    }

    /// Send a response to every connected client.
    ///
    /// Clients that fail to receive are removed and logged; the call itself
    /// only fails if the value cannot be encoded.
    pub async fn broadcast(&self, value: &Resp) -> Result<(), ComError> {
        let msg = encode(value)?;
        let mut lock = self.clients.write().await;
        let mut failed_addrs = Vec::new();
        for (addr, writer) in lock.iter_mut() {
            if let Err(e) = writer.send(msg.clone()).await {
                log::warn!("failed to send to {addr}: {e}");
                failed_addrs.push(*addr);
            }
        }
        for addr in failed_addrs {
            lock.remove(&addr);
        }
        Ok(())
    }

    pub async fn client_count(&self) -> usize {
        self.clients.read().await.len()
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

impl<Req, Resp> Drop for WsServer<Req, Resp> {
    fn drop(&mut self) {
        self.accept_task.abort();
    }
}

async fn accept_loop<T>(listener: TcpListener, clients: Clients, tx: mpsc::Sender<ServerEvent<T>>)
where
    T: DeserializeOwned + Send + 'static,
{
    loop {
        let (tcp_stream, addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                log::warn!("accept error: {e}");
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
                continue;
            }
        };
        let ws_stream = match ServerBuilder::new().accept(tcp_stream).await {
            Ok((_request, ws_stream)) => ws_stream,
            Err(e) => {
                log::warn!("websocket handshake failed for {addr}: {e}");
                continue;
            }
        };

        let (write_half, read_half) = ws_stream.split();
        clients.write().await.insert(addr, write_half);
        log::info!("client {addr} connected");
        if tx.send(ServerEvent::Connected(addr)).await.is_err() {
            break;
        }
        tokio::spawn(read_loop(addr, read_half, clients.clone(), tx.clone()));
    }
}

async fn read_loop<T>(
    addr: SocketAddr,
    mut reader: futures_util::stream::SplitStream<WebSocketStream<TcpStream>>,
    clients: Clients,
    tx: mpsc::Sender<ServerEvent<T>>,
) where
    T: DeserializeOwned + Send + 'static,
{
    loop {
        match reader.next().await {
            Some(Ok(msg)) => match decode::<T>(msg) {
                Some(Ok(value)) => {
                    if tx.send(ServerEvent::Message(addr, value)).await.is_err() {
                        // server dropped
                        return;
                    }
                }
                Some(Err(e)) => log::warn!("bad message from {addr}: {e}"),
                None => {}
            },
            Some(Err(e)) => {
                log::warn!("client {addr} error: {e}");
                break;
            }
            None => {
                log::info!("client {addr} disconnected");
                break;
            }
        }
    }
    clients.write().await.remove(&addr);
    let _ = tx.send(ServerEvent::Disconnected(addr)).await;
}
