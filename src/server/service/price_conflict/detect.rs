//! Pure conflict detection for the reconciliation sweep.
//!
//! Looks at snapshots of active listings and URL claims and lists what has to change for
//! every normalized URL to satisfy the claim invariant: at most one active listing outside
//! an open conflict group, holding the URL claim. Applying the plan and detecting again
//! yields an empty plan.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::server::model::{
    price_conflict::{ClaimPlan, ClaimSnapshot, ConflictPlan, ListingSnapshot, ReconciliationPlan},
    website::WebsiteStatus,
};

/// Computes the reconciliation plan for the given listings and claims.
///
/// Rejected listings are ignored. Per normalized URL:
/// - listings of two or more owners with any member not yet in `PriceConflict` produce a
///   `ConflictPlan`, reusing the open group some members already carry
/// - a missing claim, or one held by a listing that is no longer active, produces a
///   `ClaimPlan`
///
/// The original of a URL is the original of its existing group when that listing is still
/// active, otherwise the earliest created listing with the lowest ID breaking ties.
pub fn detect_conflicts(
    listings: &[ListingSnapshot],
    claims: &[ClaimSnapshot],
) -> ReconciliationPlan {
    let mut by_url: BTreeMap<&str, Vec<&ListingSnapshot>> = BTreeMap::new();
    for listing in listings.iter().filter(|l| l.status.is_active()) {
        by_url
            .entry(listing.normalized_url.as_str())
            .or_default()
            .push(listing);
    }

    let claims_by_url: HashMap<&str, &ClaimSnapshot> = claims
        .iter()
        .map(|c| (c.normalized_url.as_str(), c))
        .collect();

    let mut plan = ReconciliationPlan::default();

    for (url, mut members) in by_url {
        members.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let existing_group_id = members
            .iter()
            .filter(|m| m.status == WebsiteStatus::PriceConflict)
            .find_map(|m| m.conflict_group_id.clone());

        let original = existing_group_id
            .as_deref()
            .and_then(|group_id| {
                members
                    .iter()
                    .find(|m| m.is_original && m.conflict_group_id.as_deref() == Some(group_id))
            })
            .unwrap_or(&members[0]);

        let owners: BTreeSet<i32> = members.iter().map(|m| m.owner_id).collect();
        if owners.len() >= 2 {
            let members_to_tag: Vec<i32> = members
                .iter()
                .filter(|m| m.status != WebsiteStatus::PriceConflict)
                .map(|m| m.id)
                .collect();

            if !members_to_tag.is_empty() {
                plan.conflicts.push(ConflictPlan {
                    normalized_url: url.to_string(),
                    existing_group_id: existing_group_id.clone(),
                    original_id: original.id,
                    members_to_tag,
                });
            }
        }

        let claim_is_valid = claims_by_url
            .get(url)
            .is_some_and(|claim| members.iter().any(|m| m.id == claim.website_id));

        if !claim_is_valid {
            plan.claims.push(ClaimPlan {
                normalized_url: url.to_string(),
                holder_id: original.id,
                conflict_group_id: existing_group_id,
            });
        }
    }

    plan
}
