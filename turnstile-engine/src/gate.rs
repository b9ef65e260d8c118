//! Coarse resource gate for content-serving collaborators.
//!
//! Document and forum services call this before performing an action; it
//! delegates to the same resolution policy as the route guards.

use serde::{Deserialize, Serialize};
use tracing::debug;

use turnstile_core::models::Principal;
use turnstile_core::traits::SubscriptionAuthority;

use crate::resolver::EntitlementResolver;

/// Gated resource classes served by the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Document,
    ForumThread,
    ForumPost,
    Attachment,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        Self::Document,
        Self::ForumThread,
        Self::ForumPost,
        Self::Attachment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::ForumThread => "forum_thread",
            Self::ForumPost => "forum_post",
            Self::Attachment => "attachment",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "document" => Some(Self::Document),
            "forum_thread" => Some(Self::ForumThread),
            "forum_post" => Some(Self::ForumPost),
            "attachment" => Some(Self::Attachment),
            _ => None,
        }
    }
}

impl<A: SubscriptionAuthority> EntitlementResolver<A> {
    /// Coarse boolean gate: does the principal currently hold access to
    /// resources of this kind?
    pub async fn check_resource_access(
        &self,
        principal: Option<&Principal>,
        resource: ResourceKind,
    ) -> bool {
        let result = self.resolve(principal).await;
        if !result.has_access {
            debug!(resource = resource.as_str(), "resource access denied");
        }
        result.has_access
    }
}
