//! # Hunting Booking Library
//!
//! This crate provides an HTTP API for managing hunting guides and booking
//! them for tours:
//! - RESTful guide CRUD and active-guide search
//! - Booking creation with one-booking-per-guide-per-day enforcement
//! - PostgreSQL or in-memory storage
//! - Prometheus metrics for every write
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core business entities and repository traits
//! - **Application Layer**: Business logic services, metrics decorators and DTOs
//! - **Infrastructure Layer**: Database, repositories and metrics registry
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! hunting_booking/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities and repository traits
//! +-- application/   Application services and DTOs
//! +-- infrastructure/ Database, repositories and metrics
//! +-- presentation/  HTTP routes and middleware
//! +-- shared/        Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
