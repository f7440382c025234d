//! Destination model.
//!
//! # Data Flow
//! ```text
//! routing::decoders (one per route template)
//!     → construct a Destination (freshly, per match)
//!     → handed to the caller, which dispatches navigation
//! ```
//!
//! # Design Decisions
//! - Closed tree of enums, one per level (Tab, Project, Pledge, ...)
//! - Pure values: no behavior beyond equality and read-only projections
//! - Equality is derived, so it is always tag-aware and structural

pub mod param;
pub mod ref_tag;

use serde::Serialize;

use crate::discovery::DiscoveryFilter;

pub use param::Param;
pub use ref_tag::RefTag;

/// Every place a deep link can send the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Checkout { id: i64, detail: CheckoutDetail },
    Signup,
    Tab(TabDetail),
    Project {
        param: Param,
        detail: ProjectDetail,
        ref_tag: Option<RefTag>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutDetail {
    Payments(PaymentDetail),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentDetail {
    New,
    Root,
    UseStoredCard,
}

/// Top-level tabs of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TabDetail {
    Discovery {
        filter: DiscoveryFilter,
        detail: DiscoveryDetail,
    },
    Search,
    Activity,
    Dashboard { project: Param },
    Login,
    Me,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryDetail {
    Root,
    Advanced,
    Category {
        category: Param,
        subcategory: Option<Param>,
    },
}

/// Screens scoped to a single project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectDetail {
    Checkout { id: i64, detail: ProjectCheckoutDetail },
    Root,
    Comments,
    CreatorBio,
    Friends,
    MessageCreator,
    Pledge(PledgeDetail),
    Updates,
    Update { id: i64, detail: UpdateDetail },
    Survey { id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCheckoutDetail {
    Thanks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PledgeDetail {
    BigPrint,
    Destroy,
    Edit,
    New,
    Root,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateDetail {
    Root,
    Comments,
}

impl Destination {
    /// Shorthand for a project-scoped destination.
    pub fn project(param: Param, detail: ProjectDetail, ref_tag: Option<RefTag>) -> Self {
        Destination::Project { param, detail, ref_tag }
    }

    /// The project param and referral tag, if this is a project's root screen.
    pub fn as_project_root(&self) -> Option<(&Param, Option<&RefTag>)> {
        match self {
            Destination::Project {
                param,
                detail: ProjectDetail::Root,
                ref_tag,
            } => Some((param, ref_tag.as_ref())),
            _ => None,
        }
    }

    /// The project param and update id, if this is an update's root screen.
    pub fn as_update_root(&self) -> Option<(&Param, i64)> {
        self.as_update(UpdateDetail::Root)
    }

    /// The project param and update id, if this is an update's comments screen.
    pub fn as_update_comments(&self) -> Option<(&Param, i64)> {
        self.as_update(UpdateDetail::Comments)
    }

    fn as_update(&self, wanted: UpdateDetail) -> Option<(&Param, i64)> {
        match self {
            Destination::Project {
                param,
                detail: ProjectDetail::Update { id, detail },
                ..
            } if *detail == wanted => Some((param, *id)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(s: &str) -> Param {
        Param::slug(s)
    }

    #[test]
    fn test_structural_equality() {
        let a = Destination::project(slug("gizmo"), ProjectDetail::Pledge(PledgeDetail::New), Some(RefTag::Category));
        let b = Destination::project(slug("gizmo"), ProjectDetail::Pledge(PledgeDetail::New), Some(RefTag::Category));
        assert_eq!(a, b);
    }

    #[test]
    fn test_any_differing_payload_is_unequal() {
        let base = Destination::project(slug("gizmo"), ProjectDetail::Update { id: 7, detail: UpdateDetail::Root }, None);

        let other_param = Destination::project(slug("widget"), ProjectDetail::Update { id: 7, detail: UpdateDetail::Root }, None);
        let other_id = Destination::project(slug("gizmo"), ProjectDetail::Update { id: 8, detail: UpdateDetail::Root }, None);
        let other_leaf = Destination::project(slug("gizmo"), ProjectDetail::Update { id: 7, detail: UpdateDetail::Comments }, None);
        let other_tag = Destination::project(slug("gizmo"), ProjectDetail::Update { id: 7, detail: UpdateDetail::Root }, Some(RefTag::Push));

        assert_ne!(base, other_param);
        assert_ne!(base, other_id);
        assert_ne!(base, other_leaf);
        assert_ne!(base, other_tag);
    }

    #[test]
    fn test_mismatched_tags_never_equal() {
        assert_ne!(Destination::Signup, Destination::Tab(TabDetail::Login));
        assert_ne!(TabDetail::Me, TabDetail::Activity);
        assert_ne!(PaymentDetail::New, PaymentDetail::Root);
        // Same payload, different variant.
        assert_ne!(
            ProjectDetail::Survey { id: 1 },
            ProjectDetail::Checkout { id: 1, detail: ProjectCheckoutDetail::Thanks }
        );
        assert_ne!(Param::Id(5), Param::slug("5"));
    }

    #[test]
    fn test_projections() {
        let root = Destination::project(slug("gizmo"), ProjectDetail::Root, Some(RefTag::Search));
        let (param, tag) = root.as_project_root().unwrap();
        assert_eq!(param, &slug("gizmo"));
        assert_eq!(tag, Some(&RefTag::Search));
        assert!(root.as_update_root().is_none());

        let update = Destination::project(slug("gizmo"), ProjectDetail::Update { id: 3, detail: UpdateDetail::Root }, None);
        assert_eq!(update.as_update_root(), Some((&slug("gizmo"), 3)));
        assert_eq!(update.as_update_comments(), None);
        assert!(update.as_project_root().is_none());

        let comments = Destination::project(slug("gizmo"), ProjectDetail::Update { id: 3, detail: UpdateDetail::Comments }, None);
        assert_eq!(comments.as_update_comments(), Some((&slug("gizmo"), 3)));

        assert!(Destination::Signup.as_project_root().is_none());
    }

    #[test]
    fn test_serializes_for_cli_output() {
        let dest = Destination::Checkout {
            id: 42,
            detail: CheckoutDetail::Payments(PaymentDetail::UseStoredCard),
        };
        let json = serde_json::to_value(&dest).unwrap();
        assert_eq!(json["checkout"]["id"], 42);
        assert_eq!(json["checkout"]["detail"]["payments"], "use_stored_card");
    }
}
