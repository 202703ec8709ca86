//! Request identity for the trainee endpoints.
//!
//! There are no bearer tokens: the subject travels in the `student-id` header and
//! one-time passwords in the `otp-code` header. Device secrets are checked by the
//! `verify-device-auth` route.

pub mod extractors;
pub mod middleware;

pub use extractors::{OtpCodeHeader, PathParam, QueryParams, StudentId, ValidJson};
