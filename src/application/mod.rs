/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the domain services and reaches the network
/// and console only through ports.
pub mod dto;
pub mod use_cases;
