//! The persistence boundary.
//!
//! Defines the trait the reordering core persists through, so the core can
//! work against any backend (REST today, local store in tests).

use crate::error::GatewayResult;
use async_trait::async_trait;
use vitae_types::{ResumeId, SectionId};

/// Durable storage for a resume's section order.
///
/// `section_ids` is the complete, final, total order of all sections
/// belonging to `resume_id` — partial lists are a caller error.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Stores the new section order for the given resume.
    async fn rearrange(&self, resume_id: &ResumeId, section_ids: &[SectionId])
    -> GatewayResult<()>;
}

/// A recording gateway for testing.
pub mod mock {
    use super::*;
    use crate::error::GatewayError;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// One recorded `rearrange` invocation.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RearrangeCall {
        pub resume_id: ResumeId,
        pub section_ids: Vec<SectionId>,
    }

    /// An in-memory gateway that records every call and can be told to fail.
    #[derive(Debug, Default)]
    pub struct RecordingGateway {
        calls: Mutex<Vec<RearrangeCall>>,
        fail_next: AtomicBool,
    }

    impl RecordingGateway {
        /// Creates a new recording gateway.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes the next `rearrange` call fail with an API error.
        pub fn fail_next(&self) {
            self.fail_next.store(true, Ordering::SeqCst);
        }

        /// Returns a copy of every recorded call, in invocation order.
        pub fn calls(&self) -> Vec<RearrangeCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Number of successful recorded calls.
        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        /// The most recent recorded call, if any.
        pub fn last_call(&self) -> Option<RearrangeCall> {
            self.calls.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl PersistenceGateway for RecordingGateway {
        async fn rearrange(
            &self,
            resume_id: &ResumeId,
            section_ids: &[SectionId],
        ) -> GatewayResult<()> {
            if self.fail_next.swap(false, Ordering::SeqCst) {
                return Err(GatewayError::Api {
                    status: 500,
                    message: "injected failure".to_string(),
                });
            }
            self.calls.lock().unwrap().push(RearrangeCall {
                resume_id: resume_id.clone(),
                section_ids: section_ids.to_vec(),
            });
            Ok(())
        }
    }
}
