//! `ResponseWriter` over hickory-server's per-request response handle.

use async_trait::async_trait;
use gateway_dns_application::ports::ResponseWriter;
use gateway_dns_domain::DomainError;
use hickory_proto::op::Message;
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, ResponseHandler, ResponseInfo};
use tokio::sync::Mutex;

/// Sends application replies through the handle hickory-server gave us for
/// `request`. The question section always comes from the request itself.
pub struct ResponseHandleWriter<'q, R> {
    request: &'q Request,
    handle: Mutex<R>,
    info: Mutex<Option<ResponseInfo>>,
}

impl<'q, R: ResponseHandler> ResponseHandleWriter<'q, R> {
    pub fn new(request: &'q Request, handle: R) -> Self {
        Self {
            request,
            handle: Mutex::new(handle),
            info: Mutex::new(None),
        }
    }

    /// Info of the last response sent, if any write succeeded.
    pub async fn take_response_info(&self) -> Option<ResponseInfo> {
        self.info.lock().await.take()
    }
}

#[async_trait]
impl<'q, R: ResponseHandler> ResponseWriter for ResponseHandleWriter<'q, R> {
    async fn write_message(&self, message: &Message) -> Result<(), DomainError> {
        let builder = MessageResponseBuilder::from_message_request(self.request);
        let response = builder.build(
            *message.header(),
            message.answers().iter(),
            message.name_servers().iter(),
            &[] as &[Record],
            message.additionals().iter(),
        );

        let info = self
            .handle
            .lock()
            .await
            .send_response(response)
            .await
            .map_err(|e| DomainError::ResponseWrite {
                peer: self.request.src().to_string(),
                reason: e.to_string(),
            })?;

        *self.info.lock().await = Some(info);
        Ok(())
    }
}
