use embassy_net::Stack;
use embassy_net::dns::DnsSocket;
use embassy_net::tcp::client::{TcpClient, TcpClientState};
use reqwless::client::{HttpClient, TlsConfig, TlsVerify};
use reqwless::request::{Method, RequestBuilder};
use wx_station_common::*;

const TCP_BUFFER_SIZE: usize = 4096;
/// Large enough for a full TLS record from servers that ignore the
/// max-fragment-length extension.
const TLS_READ_BUFFER_SIZE: usize = 16_640;
const TLS_WRITE_BUFFER_SIZE: usize = 4096;

const HEADERS: [(&str, &str); 2] = [
    ("User-Agent", "wx-station/0.1"),
    ("Accept", "application/json"),
];

/// `HttpFetch` over an `embassy-net` stack. Plain `http://` and `https://`
/// URLs both work; certificates are not verified.
pub struct ReqwlessFetcher {
    stack: Stack<'static>,
    tcp_state: TcpClientState<1, TCP_BUFFER_SIZE, TCP_BUFFER_SIZE>,
    tls_read: [u8; TLS_READ_BUFFER_SIZE],
    tls_write: [u8; TLS_WRITE_BUFFER_SIZE],
    seed: u64,
}

impl ReqwlessFetcher {
    pub fn new(stack: Stack<'static>, seed: u64) -> Self {
        Self {
            stack,
            tcp_state: TcpClientState::new(),
            tls_read: [0; TLS_READ_BUFFER_SIZE],
            tls_write: [0; TLS_WRITE_BUFFER_SIZE],
            // xorshift never leaves zero
            seed: seed.max(1),
        }
    }

    fn next_seed(&mut self) -> u64 {
        let mut x = self.seed;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.seed = x;
        x
    }
}

impl HttpFetch for ReqwlessFetcher {
    fn is_link_up(&self) -> bool {
        self.stack.is_link_up() && self.stack.is_config_up()
    }

    async fn get<'a>(&mut self, url: &str, buffer: &'a mut [u8]) -> Result<&'a [u8], FetchError> {
        if !self.is_link_up() {
            return Err(FetchError::NotConnected);
        }

        let seed = self.next_seed();
        let tcp_client = TcpClient::new(self.stack, &self.tcp_state);
        let dns_socket = DnsSocket::new(self.stack);
        let config = TlsConfig::new(
            seed,
            &mut self.tls_read,
            &mut self.tls_write,
            TlsVerify::None,
        );
        let mut client = HttpClient::new_with_tls(&tcp_client, &dns_socket, config);

        debug!("GET {}", url);

        let mut request = client
            .request(Method::GET, url)
            .await
            .map_err(|e| {
                warn!("Failed to open request: {:?}", e);
                fetch_error(e)
            })?
            .headers(&HEADERS);

        let response = request.send(buffer).await.map_err(|e| {
            warn!("HTTP send failed: {:?}", e);
            fetch_error(e)
        })?;

        let status = response.status;
        if !status.is_successful() {
            warn!("HTTP request failed with status: {:?}", status);
            return Err(FetchError::Http(status.0));
        }

        let body = response.body().read_to_end().await.map_err(|e| {
            warn!("Failed to read response body: {:?}", e);
            fetch_error(e)
        })?;

        debug!("Received {} bytes", body.len());
        Ok(body)
    }
}

fn fetch_error(err: reqwless::Error) -> FetchError {
    match err {
        reqwless::Error::Dns => FetchError::Dns,
        reqwless::Error::BufferTooSmall => FetchError::BufferTooSmall,
        _ => FetchError::Transport,
    }
}
