/// Use cases module containing application business logic orchestration
mod inspect_environment;

pub use inspect_environment::InspectEnvironmentUseCase;
