mod handle_gateway_query;
mod response_kind;
mod serve_apex;
mod serve_sub_apex;

pub use handle_gateway_query::HandleGatewayQueryUseCase;
pub use response_kind::ResponseKind;
pub use serve_apex::ServeApexUseCase;
pub use serve_sub_apex::ServeSubApexUseCase;
