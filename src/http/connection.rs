use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::CONTENT_TYPE_HTML;
use crate::http::content::write_content;
use crate::http::date::{Clock, SystemClock};
use crate::http::parser::read_request;
use crate::http::request::Request;
use crate::http::resource::{Resource, Site};
use crate::http::writer::write_header;

/// One accepted connection, served for exactly one request.
///
/// Generic over the stream so the same code runs on a `TcpStream` or an
/// in-memory duplex pipe.
pub struct Connection<S> {
    stream: BufReader<S>,
    site: Site,
    clock: Arc<dyn Clock>,
    state: ConnectionState,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConnectionState {
    Reading,
    Resolving(Option<Request>),
    WritingHeader(Resource),
    WritingBody(Resource),
    Done,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Site) -> Self {
        Self::with_clock(stream, site, Arc::new(SystemClock))
    }

    pub fn with_clock(stream: S, site: Site, clock: Arc<dyn Clock>) -> Self {
        Self {
            stream: BufReader::new(stream),
            site,
            clock,
            state: ConnectionState::Reading,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Runs the connection to completion and shuts the stream down.
    ///
    /// The stream is shut down whether or not a phase failed; the first
    /// failure is returned afterwards.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let result = self.process().await;

        if let Err(e) = self.stream.get_mut().shutdown().await {
            tracing::debug!(error = %e, "Shutdown after response failed");
        }

        result
    }

    async fn process(&mut self) -> anyhow::Result<()> {
        loop {
            // A failing step leaves the state at Done.
            match std::mem::replace(&mut self.state, ConnectionState::Done) {
                ConnectionState::Reading => {
                    let request = read_request(&mut self.stream).await;
                    self.state = ConnectionState::Resolving(request);
                }

                ConnectionState::Resolving(request) => {
                    let resource = Resource::resolve(request.as_ref(), &self.site).await;
                    self.state = ConnectionState::WritingHeader(resource);
                }

                ConnectionState::WritingHeader(resource) => {
                    let status = write_header(
                        self.stream.get_mut(),
                        &resource,
                        CONTENT_TYPE_HTML,
                        self.clock.as_ref(),
                    )
                    .await?;
                    tracing::info!(status = status.as_u16(), "Response header sent");
                    self.state = ConnectionState::WritingBody(resource);
                }

                ConnectionState::WritingBody(resource) => {
                    let out = self.stream.get_mut();
                    write_content(out, &resource, self.clock.as_ref()).await?;
                    out.flush().await?;
                    self.state = ConnectionState::Done;
                }

                ConnectionState::Done => {
                    break;
                }
            }
        }

        Ok(())
    }
}
