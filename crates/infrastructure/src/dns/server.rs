use crate::dns::response_handle::ResponseHandleWriter;
use gateway_dns_application::use_cases::HandleGatewayQueryUseCase;
use hickory_proto::op::{Header, Message, MessageType, OpCode, Query, ResponseCode};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Entry point for hickory-server.
///
/// Header checks happen here so the use case only ever sees standard
/// queries with exactly one question.
#[derive(Clone)]
pub struct GatewayRequestHandler {
    use_case: Arc<HandleGatewayQueryUseCase>,
}

impl GatewayRequestHandler {
    pub fn new(use_case: Arc<HandleGatewayQueryUseCase>) -> Self {
        Self { use_case }
    }
}

#[async_trait::async_trait]
impl RequestHandler for GatewayRequestHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let header = *request.header();
        let client = request.src();

        if header.message_type() != MessageType::Query {
            debug!(client = %client, id = header.id(), "Ignoring DNS response sent to server");
            return ResponseInfo::from(header);
        }

        if header.op_code() != OpCode::Query {
            debug!(client = %client, op_code = ?header.op_code(), "Unsupported opcode");
            return send_error_response(request, &mut response_handle, ResponseCode::NotImp).await;
        }

        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                debug!(error = %e, client = %client, "Expected exactly one question");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let message = query_message(&header, request_info.query.original());
        let writer = Arc::new(ResponseHandleWriter::new(request, response_handle));

        match self.use_case.execute(message, client, writer.clone()).await {
            Ok(kind) => debug!(client = %client, response = kind.as_str(), "Query answered"),
            Err(e) => warn!(error = %e, client = %client, "Query rejected"),
        }

        writer
            .take_response_info()
            .await
            .unwrap_or_else(|| ResponseInfo::from(header))
    }
}

/// The request as the application sees it: header flags plus the question.
fn query_message(header: &Header, query: &Query) -> Message {
    let mut message = Message::new(header.id(), MessageType::Query, header.op_code());
    message.set_recursion_desired(header.recursion_desired());
    message.set_checking_disabled(header.checking_disabled());
    message.add_query(query.clone());
    message
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
