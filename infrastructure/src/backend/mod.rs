//! Complaint backend adapters
//!
//! Provides [`HttpComplaintBackend`], a reqwest client implementing the
//! [`ComplaintBackend`](minwon_application::ComplaintBackend) port against
//! the complaint service's REST routes.

mod http;

pub use http::HttpComplaintBackend;
