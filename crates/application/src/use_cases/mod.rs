pub mod gateway;

pub use gateway::{
    HandleGatewayQueryUseCase, ResponseKind, ServeApexUseCase, ServeSubApexUseCase,
};
